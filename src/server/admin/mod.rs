//! Generic administrative interface.
//!
//! Each catalog table is exposed by implementing [`AdminModel`] and registering the type with an
//! [`AdminSite`]. A registration mounts default list, create, detail, edit & delete views under
//! `/admin/{name}` without any filtering or permission logic.

pub mod handler;
pub mod model;

use async_trait::async_trait;
use axum::{routing::get, Json, Router};
use sea_orm::DatabaseConnection;
use serde::{de::DeserializeOwned, Serialize};

use crate::{
    model::api::AdminIndexDto,
    server::{
        error::{admin::AdminError, Error},
        model::app::AppState,
    },
};

/// A table exposed through the admin interface.
///
/// Implementations delegate to the service layer, so the admin views share the same retry,
/// password hashing & favorite resolution behavior as the rest of the crate.
#[async_trait]
pub trait AdminModel: Send + Sync + 'static {
    /// Path segment the model is served under, unique per [`AdminSite`]
    const NAME: &'static str;

    /// Serialized row rendered by every view
    type Dto: Serialize + Send + 'static;
    /// JSON body accepted by the create view
    type CreateForm: DeserializeOwned + Send + 'static;
    /// JSON body accepted by the edit view
    type UpdateForm: DeserializeOwned + Send + 'static;

    async fn list(db: &DatabaseConnection) -> Result<Vec<Self::Dto>, Error>;

    async fn get(db: &DatabaseConnection, id: i32) -> Result<Option<Self::Dto>, Error>;

    async fn create(db: &DatabaseConnection, form: Self::CreateForm) -> Result<Self::Dto, Error>;

    /// Returns `Ok(None)` when no row exists with the provided ID
    async fn update(
        db: &DatabaseConnection,
        id: i32,
        form: Self::UpdateForm,
    ) -> Result<Option<Self::Dto>, Error>;

    /// Returns `Ok(false)` when no row exists with the provided ID
    async fn delete(db: &DatabaseConnection, id: i32) -> Result<bool, Error>;
}

/// Registry of admin models and the routes serving them
pub struct AdminSite {
    router: Router<AppState>,
    models: Vec<&'static str>,
}

impl AdminSite {
    pub fn new() -> Self {
        Self {
            router: Router::new(),
            models: Vec::new(),
        }
    }

    /// Registers a model, mounting its views under `/admin/{M::NAME}`
    ///
    /// # Returns
    /// - `Ok(AdminSite)` - The site with the model registered
    /// - `Err(Error::AdminError)` - A model with the same name is already registered
    pub fn register<M: AdminModel>(mut self) -> Result<Self, Error> {
        if self.models.contains(&M::NAME) {
            return Err(AdminError::AlreadyRegistered(M::NAME).into());
        }

        tracing::debug!("Registering admin model {}", M::NAME);

        self.models.push(M::NAME);
        self.router = self
            .router
            .route(
                &format!("/admin/{}", M::NAME),
                get(handler::list::<M>).post(handler::create::<M>),
            )
            .route(
                &format!("/admin/{}/{{id}}", M::NAME),
                get(handler::detail::<M>)
                    .put(handler::update::<M>)
                    .delete(handler::delete::<M>),
            );

        Ok(self)
    }

    /// Names of the registered models in registration order
    pub fn models(&self) -> &[&'static str] {
        &self.models
    }

    /// Consumes the site, adding the `/admin` index listing every registered model
    pub fn into_router(self) -> Router<AppState> {
        let index = AdminIndexDto {
            models: self.models.iter().map(|name| name.to_string()).collect(),
        };

        self.router.route(
            "/admin",
            get(move || {
                let index = index.clone();
                async move { Json(index) }
            }),
        )
    }
}

impl Default for AdminSite {
    fn default() -> Self {
        Self::new()
    }
}
