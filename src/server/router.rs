//! HTTP routing and OpenAPI documentation configuration.
//!
//! The admin interface is the only HTTP surface. Every catalog table is registered with the
//! [`AdminSite`] here, and Swagger UI publishes the serialized DTO shapes at `/admin/docs`.

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    model::{
        api::{AdminIndexDto, ErrorDto},
        catalog::{CharacterDto, PlanetDto, StarshipDto},
        favorite::{FavoriteDto, FavoriteType},
        user::UserDto,
    },
    server::{
        admin::{
            model::{CharacterAdmin, FavoriteAdmin, PlanetAdmin, StarshipAdmin, UserAdmin},
            AdminSite,
        },
        error::Error,
        model::app::AppState,
    },
};

/// OpenAPI document listing the JSON shapes rendered by the admin views
#[derive(OpenApi)]
#[openapi(
    info(title = "Holocron", description = "Holocron admin interface"),
    components(schemas(
        AdminIndexDto,
        ErrorDto,
        UserDto,
        PlanetDto,
        CharacterDto,
        StarshipDto,
        FavoriteDto,
        FavoriteType
    ))
)]
pub struct ApiDoc;

/// Builds the admin site with every catalog table registered.
///
/// # Registered Models
/// - `users`
/// - `planets`
/// - `characters`
/// - `starships`
/// - `favorites`
pub fn admin_site() -> Result<AdminSite, Error> {
    AdminSite::new()
        .register::<UserAdmin>()?
        .register::<PlanetAdmin>()?
        .register::<CharacterAdmin>()?
        .register::<StarshipAdmin>()?
        .register::<FavoriteAdmin>()
}

/// Builds the application's HTTP router with the admin views and Swagger UI documentation.
///
/// # Returns
/// - `Ok(Router<AppState>)` - Router ready to receive its state
/// - `Err(Error::AdminError)` - Two admin models share the same name
///
/// # Example
/// ```ignore
/// let router = routes()?.with_state(AppState::from(db));
/// ```
pub fn routes() -> Result<Router<AppState>, Error> {
    let routes = admin_site()?
        .into_router()
        .merge(SwaggerUi::new("/admin/docs").url("/admin/docs/openapi.json", ApiDoc::openapi()));

    Ok(routes)
}
