use sea_orm::{ActiveValue, EntityTrait};

use crate::{error::TestError, TestContext};

impl TestContext {
    pub fn catalog<'a>(&'a self) -> CatalogFixtures<'a> {
        CatalogFixtures { setup: self }
    }
}

pub struct CatalogFixtures<'a> {
    setup: &'a TestContext,
}

impl<'a> CatalogFixtures<'a> {
    /// Inserts a planet with only its name set
    pub async fn insert_planet(&self, name: &str) -> Result<entity::planet::Model, TestError> {
        Ok(entity::prelude::Planet::insert(entity::planet::ActiveModel {
            name: ActiveValue::Set(name.to_string()),
            diameter: ActiveValue::Set(None),
            rotation_period: ActiveValue::Set(None),
            gravity: ActiveValue::Set(None),
            population: ActiveValue::Set(None),
            ..Default::default()
        })
        .exec_with_returning(&self.setup.db)
        .await?)
    }

    /// Inserts a character, the homeworld must already exist when provided
    pub async fn insert_character(
        &self,
        name: &str,
        homeworld_id: Option<i32>,
    ) -> Result<entity::character::Model, TestError> {
        Ok(
            entity::prelude::Character::insert(entity::character::ActiveModel {
                name: ActiveValue::Set(name.to_string()),
                height: ActiveValue::Set(None),
                birth_year: ActiveValue::Set(None),
                gender: ActiveValue::Set(None),
                homeworld_id: ActiveValue::Set(homeworld_id),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    /// Inserts a starship, the pilot must already exist when provided
    pub async fn insert_starship(
        &self,
        name: &str,
        pilot_id: Option<i32>,
    ) -> Result<entity::starship::Model, TestError> {
        Ok(
            entity::prelude::Starship::insert(entity::starship::ActiveModel {
                name: ActiveValue::Set(name.to_string()),
                model: ActiveValue::Set(None),
                pilot_id: ActiveValue::Set(pilot_id),
                cost_in_credits: ActiveValue::Set(None),
                length: ActiveValue::Set(None),
                max_speed: ActiveValue::Set(None),
                crew: ActiveValue::Set(None),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }
}
