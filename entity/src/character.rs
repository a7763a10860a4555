use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "characters")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub name: String,
    pub height: Option<String>,
    pub birth_year: Option<String>,
    pub gender: Option<String>,
    pub homeworld_id: Option<i32>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::planet::Entity",
        from = "Column::HomeworldId",
        to = "super::planet::Column::Id"
    )]
    Homeworld,
    /// Starships piloted by this character
    #[sea_orm(has_many = "super::starship::Entity")]
    Starship,
    #[sea_orm(has_many = "super::favorite::Entity")]
    Favorite,
}

impl Related<super::planet::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Homeworld.def()
    }
}

impl Related<super::starship::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Starship.def()
    }
}

impl Related<super::favorite::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Favorite.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
