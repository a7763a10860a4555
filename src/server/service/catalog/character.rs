use sea_orm::DatabaseConnection;

use crate::{
    model::catalog::{CharacterDto, CharacterParams, PlanetDto, StarshipDto},
    server::{
        data::catalog::{character::CharacterRepository, starship::StarshipRepository},
        error::Error,
        service::retry::RetryContext,
    },
};

pub struct CharacterService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CharacterService<'a> {
    /// Creates a new instance of CharacterService.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a character
    ///
    /// Fails with a constraint violation for a duplicate name or a homeworld that does not exist.
    pub async fn create_character(&self, params: CharacterParams) -> Result<CharacterDto, Error> {
        let ctx = RetryContext::new();
        let db = self.db.clone();

        ctx.execute_with_retry(&format!("create character {}", params.name), || {
            let db = db.clone();
            let params = params.clone();

            Box::pin(async move {
                let character = CharacterRepository::new(&db).create(params).await?;

                Ok(CharacterDto::from(character))
            })
        })
        .await
    }

    pub async fn get_character(&self, character_id: i32) -> Result<Option<CharacterDto>, Error> {
        let ctx = RetryContext::new();
        let db = self.db.clone();

        ctx.execute_with_retry(&format!("get character ID {}", character_id), || {
            let db = db.clone();

            Box::pin(async move {
                let character = CharacterRepository::new(&db).get(character_id).await?;

                Ok(character.map(CharacterDto::from))
            })
        })
        .await
    }

    pub async fn get_characters(&self) -> Result<Vec<CharacterDto>, Error> {
        let ctx = RetryContext::new();
        let db = self.db.clone();

        ctx.execute_with_retry("get all characters", || {
            let db = db.clone();

            Box::pin(async move {
                let characters = CharacterRepository::new(&db).get_all().await?;

                Ok(characters.into_iter().map(CharacterDto::from).collect())
            })
        })
        .await
    }

    /// Gets a character along with their homeworld
    ///
    /// # Returns
    /// - `Ok(Some((character, Some(planet))))` - Character with a homeworld
    /// - `Ok(Some((character, None)))` - Character without a homeworld
    /// - `Ok(None)` - No character exists with the provided ID
    pub async fn get_character_with_homeworld(
        &self,
        character_id: i32,
    ) -> Result<Option<(CharacterDto, Option<PlanetDto>)>, Error> {
        let ctx = RetryContext::new();
        let db = self.db.clone();

        ctx.execute_with_retry(
            &format!("get character ID {} with homeworld", character_id),
            || {
                let db = db.clone();

                Box::pin(async move {
                    let result = CharacterRepository::new(&db)
                        .get_with_homeworld(character_id)
                        .await?;

                    Ok(result.map(|(character, homeworld)| {
                        (
                            CharacterDto::from(character),
                            homeworld.map(PlanetDto::from),
                        )
                    }))
                })
            },
        )
        .await
    }

    /// Gets the starships piloted by a character
    ///
    /// # Returns
    /// - `Ok(Some(_))` - Starships piloted by the character, possibly empty
    /// - `Ok(None)` - No character exists with the provided ID
    pub async fn get_piloted_starships(
        &self,
        character_id: i32,
    ) -> Result<Option<Vec<StarshipDto>>, Error> {
        let ctx = RetryContext::new();
        let db = self.db.clone();

        ctx.execute_with_retry(
            &format!("get starships piloted by character ID {}", character_id),
            || {
                let db = db.clone();

                Box::pin(async move {
                    if CharacterRepository::new(&db)
                        .get(character_id)
                        .await?
                        .is_none()
                    {
                        return Ok(None);
                    }

                    let starships = StarshipRepository::new(&db)
                        .get_by_pilot(character_id)
                        .await?;

                    Ok(Some(
                        starships.into_iter().map(StarshipDto::from).collect(),
                    ))
                })
            },
        )
        .await
    }

    pub async fn update_character(
        &self,
        character_id: i32,
        params: CharacterParams,
    ) -> Result<Option<CharacterDto>, Error> {
        let ctx = RetryContext::new();
        let db = self.db.clone();

        ctx.execute_with_retry(&format!("update character ID {}", character_id), || {
            let db = db.clone();
            let params = params.clone();

            Box::pin(async move {
                let character = CharacterRepository::new(&db)
                    .update(character_id, params)
                    .await?;

                Ok(character.map(CharacterDto::from))
            })
        })
        .await
    }

    /// Deletes a character, `Ok(false)` if no character exists with the provided ID
    pub async fn delete_character(&self, character_id: i32) -> Result<bool, Error> {
        let ctx = RetryContext::new();
        let db = self.db.clone();

        ctx.execute_with_retry(&format!("delete character ID {}", character_id), || {
            let db = db.clone();

            Box::pin(async move {
                let result = CharacterRepository::new(&db).delete(character_id).await?;

                Ok(result.rows_affected > 0)
            })
        })
        .await
    }
}
