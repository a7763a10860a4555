use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{model::api::ErrorDto, server::error::InternalServerError};

#[derive(Error, Debug)]
pub enum AdminError {
    /// The same model name was registered twice with the admin site
    #[error("Admin model {0:?} is already registered")]
    AlreadyRegistered(&'static str),
    #[error("No {model} record found with ID {id}")]
    NotFound { model: &'static str, id: i32 },
}

impl IntoResponse for AdminError {
    fn into_response(self) -> Response {
        match self {
            Self::NotFound { .. } => {
                tracing::debug!("Admin error: {}", self);

                (
                    StatusCode::NOT_FOUND,
                    Json(ErrorDto {
                        error: self.to_string(),
                    }),
                )
                    .into_response()
            }
            err => InternalServerError(err).into_response(),
        }
    }
}
