use sea_orm::{ActiveValue, EntityTrait};

use crate::{error::TestError, TestContext};

impl TestContext {
    pub fn favorite<'a>(&'a self) -> FavoriteFixtures<'a> {
        FavoriteFixtures { setup: self }
    }
}

pub struct FavoriteFixtures<'a> {
    setup: &'a TestContext,
}

impl<'a> FavoriteFixtures<'a> {
    /// Inserts a favorite with the reference columns exactly as provided
    ///
    /// Unlike the favorite repository this allows several references on one row, which is
    /// useful for exercising target resolution priority.
    pub async fn insert_favorite(
        &self,
        user_id: i32,
        planet_id: Option<i32>,
        character_id: Option<i32>,
        starship_id: Option<i32>,
    ) -> Result<entity::favorite::Model, TestError> {
        Ok(
            entity::prelude::Favorite::insert(entity::favorite::ActiveModel {
                user_id: ActiveValue::Set(user_id),
                planet_id: ActiveValue::Set(planet_id),
                character_id: ActiveValue::Set(character_id),
                starship_id: ActiveValue::Set(starship_id),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }
}
