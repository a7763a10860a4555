use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    IntoActiveModel, QueryFilter, QueryOrder,
};

use crate::model::favorite::FavoriteTarget;

pub struct FavoriteRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> FavoriteRepository<'a, C> {
    /// Creates a new instance of [`FavoriteRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new favorite for a user
    ///
    /// Only the column matching the target is populated, the other two references are left
    /// null. A missing user or catalog entry results in a foreign key constraint error.
    pub async fn create(
        &self,
        user_id: i32,
        target: FavoriteTarget,
    ) -> Result<entity::favorite::Model, DbErr> {
        let (planet_id, character_id, starship_id) = target.columns();

        let favorite = entity::favorite::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            planet_id: ActiveValue::Set(planet_id),
            character_id: ActiveValue::Set(character_id),
            starship_id: ActiveValue::Set(starship_id),
            ..Default::default()
        };

        favorite.insert(self.db).await
    }

    pub async fn get(&self, favorite_id: i32) -> Result<Option<entity::favorite::Model>, DbErr> {
        entity::prelude::Favorite::find_by_id(favorite_id)
            .one(self.db)
            .await
    }

    pub async fn get_all(&self) -> Result<Vec<entity::favorite::Model>, DbErr> {
        entity::prelude::Favorite::find()
            .order_by_asc(entity::favorite::Column::Id)
            .all(self.db)
            .await
    }

    pub async fn get_many_by_user_id(
        &self,
        user_id: i32,
    ) -> Result<Vec<entity::favorite::Model>, DbErr> {
        entity::prelude::Favorite::find()
            .filter(entity::favorite::Column::UserId.eq(user_id))
            .order_by_asc(entity::favorite::Column::Id)
            .all(self.db)
            .await
    }

    /// Gets every favorite pointing at the provided catalog entry
    ///
    /// [`FavoriteTarget::None`] matches favorites with all three references null.
    pub async fn get_by_target(
        &self,
        target: FavoriteTarget,
    ) -> Result<Vec<entity::favorite::Model>, DbErr> {
        let query = entity::prelude::Favorite::find();

        let query = match target {
            FavoriteTarget::Planet(id) => {
                query.filter(entity::favorite::Column::PlanetId.eq(id))
            }
            FavoriteTarget::Character(id) => {
                query.filter(entity::favorite::Column::CharacterId.eq(id))
            }
            FavoriteTarget::Starship(id) => {
                query.filter(entity::favorite::Column::StarshipId.eq(id))
            }
            FavoriteTarget::None => query
                .filter(entity::favorite::Column::PlanetId.is_null())
                .filter(entity::favorite::Column::CharacterId.is_null())
                .filter(entity::favorite::Column::StarshipId.is_null()),
        };

        query
            .order_by_asc(entity::favorite::Column::Id)
            .all(self.db)
            .await
    }

    /// Replaces the owner & target of an existing favorite
    ///
    /// Writing the target clears whichever reference columns it does not use.
    ///
    /// # Returns
    /// - `Ok(Some(_))`: The updated favorite
    /// - `Ok(None)`: No favorite exists with the provided ID
    /// - `Err(DbErr)`: Database error such as a foreign key constraint violation
    pub async fn update(
        &self,
        favorite_id: i32,
        user_id: i32,
        target: FavoriteTarget,
    ) -> Result<Option<entity::favorite::Model>, DbErr> {
        let favorite = match entity::prelude::Favorite::find_by_id(favorite_id)
            .one(self.db)
            .await?
        {
            Some(favorite) => favorite,
            None => return Ok(None),
        };

        let (planet_id, character_id, starship_id) = target.columns();

        let mut favorite_am = favorite.into_active_model();
        favorite_am.user_id = ActiveValue::Set(user_id);
        favorite_am.planet_id = ActiveValue::Set(planet_id);
        favorite_am.character_id = ActiveValue::Set(character_id);
        favorite_am.starship_id = ActiveValue::Set(starship_id);

        let favorite = favorite_am.update(self.db).await?;

        Ok(Some(favorite))
    }

    pub async fn delete(&self, favorite_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Favorite::delete_by_id(favorite_id)
            .exec(self.db)
            .await
    }
}
