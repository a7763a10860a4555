use sea_orm::DatabaseConnection;

use crate::{
    model::catalog::{CharacterDto, PlanetDto, PlanetParams},
    server::{
        data::catalog::{character::CharacterRepository, planet::PlanetRepository},
        error::Error,
        service::retry::RetryContext,
    },
};

pub struct PlanetService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PlanetService<'a> {
    /// Creates a new instance of PlanetService.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a planet, a duplicate name fails with a unique constraint violation
    pub async fn create_planet(&self, params: PlanetParams) -> Result<PlanetDto, Error> {
        let ctx = RetryContext::new();
        let db = self.db.clone();

        ctx.execute_with_retry(&format!("create planet {}", params.name), || {
            let db = db.clone();
            let params = params.clone();

            Box::pin(async move {
                let planet = PlanetRepository::new(&db).create(params).await?;

                Ok(PlanetDto::from(planet))
            })
        })
        .await
    }

    pub async fn get_planet(&self, planet_id: i32) -> Result<Option<PlanetDto>, Error> {
        let ctx = RetryContext::new();
        let db = self.db.clone();

        ctx.execute_with_retry(&format!("get planet ID {}", planet_id), || {
            let db = db.clone();

            Box::pin(async move {
                let planet = PlanetRepository::new(&db).get(planet_id).await?;

                Ok(planet.map(PlanetDto::from))
            })
        })
        .await
    }

    pub async fn get_planets(&self) -> Result<Vec<PlanetDto>, Error> {
        let ctx = RetryContext::new();
        let db = self.db.clone();

        ctx.execute_with_retry("get all planets", || {
            let db = db.clone();

            Box::pin(async move {
                let planets = PlanetRepository::new(&db).get_all().await?;

                Ok(planets.into_iter().map(PlanetDto::from).collect())
            })
        })
        .await
    }

    /// Gets the characters whose homeworld is the provided planet
    ///
    /// # Returns
    /// - `Ok(Some(_))` - Residents of the planet, possibly empty
    /// - `Ok(None)` - No planet exists with the provided ID
    pub async fn get_planet_residents(
        &self,
        planet_id: i32,
    ) -> Result<Option<Vec<CharacterDto>>, Error> {
        let ctx = RetryContext::new();
        let db = self.db.clone();

        ctx.execute_with_retry(&format!("get residents of planet ID {}", planet_id), || {
            let db = db.clone();

            Box::pin(async move {
                if PlanetRepository::new(&db).get(planet_id).await?.is_none() {
                    return Ok(None);
                }

                let residents = CharacterRepository::new(&db)
                    .get_by_homeworld(planet_id)
                    .await?;

                Ok(Some(
                    residents.into_iter().map(CharacterDto::from).collect(),
                ))
            })
        })
        .await
    }

    /// Replaces every field of a planet, returns `None` if the planet does not exist
    pub async fn update_planet(
        &self,
        planet_id: i32,
        params: PlanetParams,
    ) -> Result<Option<PlanetDto>, Error> {
        let ctx = RetryContext::new();
        let db = self.db.clone();

        ctx.execute_with_retry(&format!("update planet ID {}", planet_id), || {
            let db = db.clone();
            let params = params.clone();

            Box::pin(async move {
                let planet = PlanetRepository::new(&db).update(planet_id, params).await?;

                Ok(planet.map(PlanetDto::from))
            })
        })
        .await
    }

    /// Deletes a planet
    ///
    /// # Returns
    /// - `Ok(true)` - Planet was deleted
    /// - `Ok(false)` - No planet exists with the provided ID
    /// - `Err(Error::DbErr)` - Characters or favorites still reference the planet
    pub async fn delete_planet(&self, planet_id: i32) -> Result<bool, Error> {
        let ctx = RetryContext::new();
        let db = self.db.clone();

        ctx.execute_with_retry(&format!("delete planet ID {}", planet_id), || {
            let db = db.clone();

            Box::pin(async move {
                let result = PlanetRepository::new(&db).delete(planet_id).await?;

                Ok(result.rows_affected > 0)
            })
        })
        .await
    }
}
