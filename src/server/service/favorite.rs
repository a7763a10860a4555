//! Favorite service.
//!
//! Favorites are returned as [`FavoriteDto`] with the referenced catalog item resolved. Reads
//! load every referenced planet, character & starship in one query per table rather than one
//! query per favorite. Writes resolve inside the transaction that stored the row, so a retried
//! attempt never leaves a duplicate favorite behind.

use std::collections::{BTreeSet, HashMap};

use sea_orm::{ConnectionTrait, DatabaseConnection, TransactionTrait};

use crate::{
    model::favorite::{FavoriteDto, FavoriteTarget},
    server::{
        data::{
            catalog::{
                character::CharacterRepository, planet::PlanetRepository,
                starship::StarshipRepository,
            },
            favorite::FavoriteRepository,
        },
        error::Error,
        model::db::{CharacterModel, FavoriteModel, PlanetModel, StarshipModel},
        service::retry::RetryContext,
    },
};

pub struct FavoriteService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FavoriteService<'a> {
    /// Creates a new instance of FavoriteService.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Adds a favorite for a user
    ///
    /// # Returns
    /// - `Ok(FavoriteDto)` - The created favorite with its target resolved
    /// - `Err(Error::DbErr)` - The user or the catalog entry does not exist
    pub async fn add_favorite(
        &self,
        user_id: i32,
        target: FavoriteTarget,
    ) -> Result<FavoriteDto, Error> {
        let ctx = RetryContext::new();
        let db = self.db.clone();

        ctx.execute_with_retry(&format!("add favorite for user ID {}", user_id), || {
            let db = db.clone();

            Box::pin(async move {
                let txn = db.begin().await?;

                let favorite = FavoriteRepository::new(&txn).create(user_id, target).await?;

                let favorite = resolve_many(&txn, vec![favorite])
                    .await?
                    .pop()
                    .ok_or_else(|| {
                        Error::InternalError(format!(
                            "Failed to resolve newly created favorite for user ID {}",
                            user_id
                        ))
                    })?;

                txn.commit().await?;

                Ok(favorite)
            })
        })
        .await
    }

    pub async fn get_favorite(&self, favorite_id: i32) -> Result<Option<FavoriteDto>, Error> {
        let ctx = RetryContext::new();
        let db = self.db.clone();

        ctx.execute_with_retry(&format!("get favorite ID {}", favorite_id), || {
            let db = db.clone();

            Box::pin(async move {
                let favorite = match FavoriteRepository::new(&db).get(favorite_id).await? {
                    Some(favorite) => favorite,
                    None => return Ok(None),
                };

                Ok(resolve_many(&db, vec![favorite]).await?.pop())
            })
        })
        .await
    }

    /// Gets all favorites of a user in creation order
    pub async fn get_user_favorites(&self, user_id: i32) -> Result<Vec<FavoriteDto>, Error> {
        let ctx = RetryContext::new();
        let db = self.db.clone();

        ctx.execute_with_retry(&format!("get favorites of user ID {}", user_id), || {
            let db = db.clone();

            Box::pin(async move {
                let favorites = FavoriteRepository::new(&db)
                    .get_many_by_user_id(user_id)
                    .await?;

                resolve_many(&db, favorites).await
            })
        })
        .await
    }

    /// Gets all favorites pointing at the provided catalog entry
    pub async fn get_target_favorites(
        &self,
        target: FavoriteTarget,
    ) -> Result<Vec<FavoriteDto>, Error> {
        let ctx = RetryContext::new();
        let db = self.db.clone();

        ctx.execute_with_retry(&format!("get favorites of {:?}", target), || {
            let db = db.clone();

            Box::pin(async move {
                let favorites = FavoriteRepository::new(&db).get_by_target(target).await?;

                resolve_many(&db, favorites).await
            })
        })
        .await
    }

    pub async fn get_favorites(&self) -> Result<Vec<FavoriteDto>, Error> {
        let ctx = RetryContext::new();
        let db = self.db.clone();

        ctx.execute_with_retry("get all favorites", || {
            let db = db.clone();

            Box::pin(async move {
                let favorites = FavoriteRepository::new(&db).get_all().await?;

                resolve_many(&db, favorites).await
            })
        })
        .await
    }

    /// Replaces the owner & target of a favorite, returns `None` if it does not exist
    pub async fn update_favorite(
        &self,
        favorite_id: i32,
        user_id: i32,
        target: FavoriteTarget,
    ) -> Result<Option<FavoriteDto>, Error> {
        let ctx = RetryContext::new();
        let db = self.db.clone();

        ctx.execute_with_retry(&format!("update favorite ID {}", favorite_id), || {
            let db = db.clone();

            Box::pin(async move {
                let txn = db.begin().await?;

                let favorite = match FavoriteRepository::new(&txn)
                    .update(favorite_id, user_id, target)
                    .await?
                {
                    Some(favorite) => favorite,
                    None => return Ok(None),
                };

                let favorite = resolve_many(&txn, vec![favorite]).await?.pop();

                txn.commit().await?;

                Ok(favorite)
            })
        })
        .await
    }

    /// Removes a favorite, `Ok(false)` if no favorite exists with the provided ID
    pub async fn remove_favorite(&self, favorite_id: i32) -> Result<bool, Error> {
        let ctx = RetryContext::new();
        let db = self.db.clone();

        ctx.execute_with_retry(&format!("remove favorite ID {}", favorite_id), || {
            let db = db.clone();

            Box::pin(async move {
                let result = FavoriteRepository::new(&db).delete(favorite_id).await?;

                Ok(result.rows_affected > 0)
            })
        })
        .await
    }
}

/// Resolves the target of each favorite, preserving their order
///
/// Every reference column is loaded, not only the winning one, so [`FavoriteDto::resolve`]
/// applies its planet, character, starship priority to what actually exists. Each catalog
/// table is queried once with the distinct IDs referenced.
async fn resolve_many<C: ConnectionTrait>(
    db: &C,
    favorites: Vec<FavoriteModel>,
) -> Result<Vec<FavoriteDto>, Error> {
    let planet_ids = distinct_ids(favorites.iter().map(|f| f.planet_id));
    let character_ids = distinct_ids(favorites.iter().map(|f| f.character_id));
    let starship_ids = distinct_ids(favorites.iter().map(|f| f.starship_id));

    let planets: HashMap<i32, PlanetModel> = PlanetRepository::new(db)
        .get_many_by_ids(&planet_ids)
        .await?
        .into_iter()
        .map(|p| (p.id, p))
        .collect();
    let characters: HashMap<i32, CharacterModel> = CharacterRepository::new(db)
        .get_many_by_ids(&character_ids)
        .await?
        .into_iter()
        .map(|c| (c.id, c))
        .collect();
    let starships: HashMap<i32, StarshipModel> = StarshipRepository::new(db)
        .get_many_by_ids(&starship_ids)
        .await?
        .into_iter()
        .map(|s| (s.id, s))
        .collect();

    Ok(favorites
        .iter()
        .map(|favorite| {
            FavoriteDto::resolve(
                favorite,
                favorite.planet_id.and_then(|id| planets.get(&id)),
                favorite.character_id.and_then(|id| characters.get(&id)),
                favorite.starship_id.and_then(|id| starships.get(&id)),
            )
        })
        .collect())
}

fn distinct_ids(ids: impl Iterator<Item = Option<i32>>) -> Vec<i32> {
    ids.flatten().collect::<BTreeSet<i32>>().into_iter().collect()
}
