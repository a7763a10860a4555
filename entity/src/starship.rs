use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "starships")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub name: String,
    pub model: Option<String>,
    pub pilot_id: Option<i32>,
    pub cost_in_credits: Option<String>,
    pub length: Option<String>,
    pub max_speed: Option<String>,
    pub crew: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::character::Entity",
        from = "Column::PilotId",
        to = "super::character::Column::Id"
    )]
    Pilot,
    #[sea_orm(has_many = "super::favorite::Entity")]
    Favorite,
}

impl Related<super::character::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Pilot.def()
    }
}

impl Related<super::favorite::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Favorite.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
