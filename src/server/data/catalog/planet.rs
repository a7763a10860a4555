use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    IntoActiveModel, QueryFilter, QueryOrder,
};

use crate::model::catalog::PlanetParams;

pub struct PlanetRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> PlanetRepository<'a, C> {
    /// Creates a new instance of [`PlanetRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new planet, a duplicate name results in a unique constraint error
    pub async fn create(&self, params: PlanetParams) -> Result<entity::planet::Model, DbErr> {
        let planet = entity::planet::ActiveModel {
            name: ActiveValue::Set(params.name),
            diameter: ActiveValue::Set(params.diameter),
            rotation_period: ActiveValue::Set(params.rotation_period),
            gravity: ActiveValue::Set(params.gravity),
            population: ActiveValue::Set(params.population),
            ..Default::default()
        };

        planet.insert(self.db).await
    }

    pub async fn get(&self, planet_id: i32) -> Result<Option<entity::planet::Model>, DbErr> {
        entity::prelude::Planet::find_by_id(planet_id)
            .one(self.db)
            .await
    }

    pub async fn get_all(&self) -> Result<Vec<entity::planet::Model>, DbErr> {
        entity::prelude::Planet::find()
            .order_by_asc(entity::planet::Column::Id)
            .all(self.db)
            .await
    }

    /// Gets every planet whose ID is in the provided list, missing IDs are skipped
    pub async fn get_many_by_ids(
        &self,
        planet_ids: &[i32],
    ) -> Result<Vec<entity::planet::Model>, DbErr> {
        if planet_ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::Planet::find()
            .filter(entity::planet::Column::Id.is_in(planet_ids.iter().copied()))
            .all(self.db)
            .await
    }

    /// Replaces every field of an existing planet
    ///
    /// # Returns
    /// - `Ok(Some(_))`: The updated planet
    /// - `Ok(None)`: No planet exists with the provided ID
    /// - `Err(DbErr)`: Database error such as a unique constraint violation on `name`
    pub async fn update(
        &self,
        planet_id: i32,
        params: PlanetParams,
    ) -> Result<Option<entity::planet::Model>, DbErr> {
        let planet = match entity::prelude::Planet::find_by_id(planet_id)
            .one(self.db)
            .await?
        {
            Some(planet) => planet,
            None => return Ok(None),
        };

        let mut planet_am = planet.into_active_model();
        planet_am.name = ActiveValue::Set(params.name);
        planet_am.diameter = ActiveValue::Set(params.diameter);
        planet_am.rotation_period = ActiveValue::Set(params.rotation_period);
        planet_am.gravity = ActiveValue::Set(params.gravity);
        planet_am.population = ActiveValue::Set(params.population);

        let planet = planet_am.update(self.db).await?;

        Ok(Some(planet))
    }

    /// Deletes a planet
    ///
    /// Fails with a foreign key constraint error while characters or favorites still
    /// reference the planet. Returns OK regardless of the planet existing, check
    /// [`DeleteResult::rows_affected`] to confirm the deletion.
    pub async fn delete(&self, planet_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Planet::delete_by_id(planet_id)
            .exec(self.db)
            .await
    }
}
