use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    IntoActiveModel, QueryFilter, QueryOrder,
};

use crate::model::catalog::StarshipParams;

pub struct StarshipRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> StarshipRepository<'a, C> {
    /// Creates a new instance of [`StarshipRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new starship
    ///
    /// A duplicate name results in a unique constraint error and a `pilot_id` without a
    /// matching character results in a foreign key constraint error.
    pub async fn create(&self, params: StarshipParams) -> Result<entity::starship::Model, DbErr> {
        let starship = entity::starship::ActiveModel {
            name: ActiveValue::Set(params.name),
            model: ActiveValue::Set(params.model),
            pilot_id: ActiveValue::Set(params.pilot_id),
            cost_in_credits: ActiveValue::Set(params.cost_in_credits),
            length: ActiveValue::Set(params.length),
            max_speed: ActiveValue::Set(params.max_speed),
            crew: ActiveValue::Set(params.crew),
            ..Default::default()
        };

        starship.insert(self.db).await
    }

    pub async fn get(&self, starship_id: i32) -> Result<Option<entity::starship::Model>, DbErr> {
        entity::prelude::Starship::find_by_id(starship_id)
            .one(self.db)
            .await
    }

    pub async fn get_all(&self) -> Result<Vec<entity::starship::Model>, DbErr> {
        entity::prelude::Starship::find()
            .order_by_asc(entity::starship::Column::Id)
            .all(self.db)
            .await
    }

    /// Gets every starship whose ID is in the provided list, missing IDs are skipped
    pub async fn get_many_by_ids(
        &self,
        starship_ids: &[i32],
    ) -> Result<Vec<entity::starship::Model>, DbErr> {
        if starship_ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::Starship::find()
            .filter(entity::starship::Column::Id.is_in(starship_ids.iter().copied()))
            .all(self.db)
            .await
    }

    /// Gets all starships piloted by the provided character
    pub async fn get_by_pilot(
        &self,
        character_id: i32,
    ) -> Result<Vec<entity::starship::Model>, DbErr> {
        entity::prelude::Starship::find()
            .filter(entity::starship::Column::PilotId.eq(character_id))
            .order_by_asc(entity::starship::Column::Id)
            .all(self.db)
            .await
    }

    /// Replaces every field of an existing starship
    ///
    /// # Returns
    /// - `Ok(Some(_))`: The updated starship
    /// - `Ok(None)`: No starship exists with the provided ID
    /// - `Err(DbErr)`: Database error such as a unique or foreign key constraint violation
    pub async fn update(
        &self,
        starship_id: i32,
        params: StarshipParams,
    ) -> Result<Option<entity::starship::Model>, DbErr> {
        let starship = match entity::prelude::Starship::find_by_id(starship_id)
            .one(self.db)
            .await?
        {
            Some(starship) => starship,
            None => return Ok(None),
        };

        let mut starship_am = starship.into_active_model();
        starship_am.name = ActiveValue::Set(params.name);
        starship_am.model = ActiveValue::Set(params.model);
        starship_am.pilot_id = ActiveValue::Set(params.pilot_id);
        starship_am.cost_in_credits = ActiveValue::Set(params.cost_in_credits);
        starship_am.length = ActiveValue::Set(params.length);
        starship_am.max_speed = ActiveValue::Set(params.max_speed);
        starship_am.crew = ActiveValue::Set(params.crew);

        let starship = starship_am.update(self.db).await?;

        Ok(Some(starship))
    }

    /// Deletes a starship, fails with a foreign key constraint error while favorites still
    /// reference it
    pub async fn delete(&self, starship_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Starship::delete_by_id(starship_id)
            .exec(self.db)
            .await
    }
}
