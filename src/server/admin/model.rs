//! Admin registrations for each catalog table.

use async_trait::async_trait;
use sea_orm::DatabaseConnection;

use crate::{
    model::{
        catalog::{CharacterDto, CharacterParams, PlanetDto, PlanetParams, StarshipDto, StarshipParams},
        favorite::{FavoriteDto, FavoriteParams},
        user::{NewUserParams, UserChanges, UserDto},
    },
    server::{
        admin::AdminModel,
        error::Error,
        service::{
            catalog::{
                character::CharacterService, planet::PlanetService, starship::StarshipService,
            },
            favorite::FavoriteService,
            user::UserService,
        },
    },
};

/// Users are only ever rendered as [`UserDto`], the form password is hashed on write
pub struct UserAdmin;

#[async_trait]
impl AdminModel for UserAdmin {
    const NAME: &'static str = "users";

    type Dto = UserDto;
    type CreateForm = NewUserParams;
    type UpdateForm = UserChanges;

    async fn list(db: &DatabaseConnection) -> Result<Vec<UserDto>, Error> {
        UserService::new(db).get_users().await
    }

    async fn get(db: &DatabaseConnection, id: i32) -> Result<Option<UserDto>, Error> {
        UserService::new(db).get_user(id).await
    }

    async fn create(db: &DatabaseConnection, form: NewUserParams) -> Result<UserDto, Error> {
        UserService::new(db).create_user(form).await
    }

    async fn update(
        db: &DatabaseConnection,
        id: i32,
        form: UserChanges,
    ) -> Result<Option<UserDto>, Error> {
        UserService::new(db).update_user(id, form).await
    }

    async fn delete(db: &DatabaseConnection, id: i32) -> Result<bool, Error> {
        UserService::new(db).delete_user(id).await
    }
}

pub struct PlanetAdmin;

#[async_trait]
impl AdminModel for PlanetAdmin {
    const NAME: &'static str = "planets";

    type Dto = PlanetDto;
    type CreateForm = PlanetParams;
    type UpdateForm = PlanetParams;

    async fn list(db: &DatabaseConnection) -> Result<Vec<PlanetDto>, Error> {
        PlanetService::new(db).get_planets().await
    }

    async fn get(db: &DatabaseConnection, id: i32) -> Result<Option<PlanetDto>, Error> {
        PlanetService::new(db).get_planet(id).await
    }

    async fn create(db: &DatabaseConnection, form: PlanetParams) -> Result<PlanetDto, Error> {
        PlanetService::new(db).create_planet(form).await
    }

    async fn update(
        db: &DatabaseConnection,
        id: i32,
        form: PlanetParams,
    ) -> Result<Option<PlanetDto>, Error> {
        PlanetService::new(db).update_planet(id, form).await
    }

    async fn delete(db: &DatabaseConnection, id: i32) -> Result<bool, Error> {
        PlanetService::new(db).delete_planet(id).await
    }
}

pub struct CharacterAdmin;

#[async_trait]
impl AdminModel for CharacterAdmin {
    const NAME: &'static str = "characters";

    type Dto = CharacterDto;
    type CreateForm = CharacterParams;
    type UpdateForm = CharacterParams;

    async fn list(db: &DatabaseConnection) -> Result<Vec<CharacterDto>, Error> {
        CharacterService::new(db).get_characters().await
    }

    async fn get(db: &DatabaseConnection, id: i32) -> Result<Option<CharacterDto>, Error> {
        CharacterService::new(db).get_character(id).await
    }

    async fn create(db: &DatabaseConnection, form: CharacterParams) -> Result<CharacterDto, Error> {
        CharacterService::new(db).create_character(form).await
    }

    async fn update(
        db: &DatabaseConnection,
        id: i32,
        form: CharacterParams,
    ) -> Result<Option<CharacterDto>, Error> {
        CharacterService::new(db).update_character(id, form).await
    }

    async fn delete(db: &DatabaseConnection, id: i32) -> Result<bool, Error> {
        CharacterService::new(db).delete_character(id).await
    }
}

pub struct StarshipAdmin;

#[async_trait]
impl AdminModel for StarshipAdmin {
    const NAME: &'static str = "starships";

    type Dto = StarshipDto;
    type CreateForm = StarshipParams;
    type UpdateForm = StarshipParams;

    async fn list(db: &DatabaseConnection) -> Result<Vec<StarshipDto>, Error> {
        StarshipService::new(db).get_starships().await
    }

    async fn get(db: &DatabaseConnection, id: i32) -> Result<Option<StarshipDto>, Error> {
        StarshipService::new(db).get_starship(id).await
    }

    async fn create(db: &DatabaseConnection, form: StarshipParams) -> Result<StarshipDto, Error> {
        StarshipService::new(db).create_starship(form).await
    }

    async fn update(
        db: &DatabaseConnection,
        id: i32,
        form: StarshipParams,
    ) -> Result<Option<StarshipDto>, Error> {
        StarshipService::new(db).update_starship(id, form).await
    }

    async fn delete(db: &DatabaseConnection, id: i32) -> Result<bool, Error> {
        StarshipService::new(db).delete_starship(id).await
    }
}

/// Favorites render with their target resolved to a type, item ID & item name
pub struct FavoriteAdmin;

#[async_trait]
impl AdminModel for FavoriteAdmin {
    const NAME: &'static str = "favorites";

    type Dto = FavoriteDto;
    type CreateForm = FavoriteParams;
    type UpdateForm = FavoriteParams;

    async fn list(db: &DatabaseConnection) -> Result<Vec<FavoriteDto>, Error> {
        FavoriteService::new(db).get_favorites().await
    }

    async fn get(db: &DatabaseConnection, id: i32) -> Result<Option<FavoriteDto>, Error> {
        FavoriteService::new(db).get_favorite(id).await
    }

    async fn create(db: &DatabaseConnection, form: FavoriteParams) -> Result<FavoriteDto, Error> {
        FavoriteService::new(db)
            .add_favorite(form.user_id, form.target)
            .await
    }

    async fn update(
        db: &DatabaseConnection,
        id: i32,
        form: FavoriteParams,
    ) -> Result<Option<FavoriteDto>, Error> {
        FavoriteService::new(db)
            .update_favorite(id, form.user_id, form.target)
            .await
    }

    async fn delete(db: &DatabaseConnection, id: i32) -> Result<bool, Error> {
        FavoriteService::new(db).remove_favorite(id).await
    }
}
