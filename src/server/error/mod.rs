//! Error types for the Holocron server application.
//!
//! This module aggregates the domain-specific error types (configuration, admin interface,
//! retry classification) and external library errors into a single [`Error`]. Every error
//! implements `IntoResponse` so admin handlers can return it directly.

pub mod admin;
pub mod config;
pub mod retry;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use sea_orm::{DbErr, SqlErr};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{admin::AdminError, config::ConfigError},
};

/// Main error type for the Holocron server application.
///
/// Database errors, including constraint violations raised by the engine, are carried
/// unchanged in [`Error::DbErr`].
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing or invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Admin interface error (duplicate registration, missing record).
    #[error(transparent)]
    AdminError(#[from] AdminError),
    /// Password could not be hashed.
    #[error("Failed to hash password: {0}")]
    PasswordHashError(String),
    /// Internal error indicating a bug in Holocron's code.
    #[error("Internal error with Holocron's code, please open a GitHub issue as this indicates a bug: {0:?}")]
    InternalError(String),
    /// Database error (query failures, connection issues, constraint violations).
    #[error(transparent)]
    DbErr(#[from] DbErr),
    /// IO error (binding the server socket).
    #[error(transparent)]
    IoError(#[from] std::io::Error),
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 404 Not Found - Admin record does not exist
/// - 409 Conflict - Unique or foreign key constraint violation
/// - 500 Internal Server Error - For all other errors (with error logging)
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::AdminError(err) => err.into_response(),
            Self::DbErr(err) => match err.sql_err() {
                Some(SqlErr::UniqueConstraintViolation(detail))
                | Some(SqlErr::ForeignKeyConstraintViolation(detail)) => {
                    tracing::debug!("Constraint violation: {}", detail);

                    (
                        StatusCode::CONFLICT,
                        Json(ErrorDto {
                            error: format!("Constraint violation: {}", detail),
                        }),
                    )
                        .into_response()
                }
                _ => InternalServerError(err).into_response(),
            },
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// Logs the error message and returns a generic "Internal server error" message to the
/// client to avoid leaking implementation details.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}
