//! Error types for the Lifeline server application.
//!
//! Specialized error types per domain (authentication, configuration, status
//! review) aggregated into a single [`Error`] enum. All errors implement
//! `IntoResponse` for Axum and use `thiserror` for `Display`/`Error` impls.

pub mod auth;
pub mod config;
pub mod status;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{auth::AuthError, config::ConfigError, status::StatusError},
};

/// Main error type for the Lifeline server application.
///
/// Aggregates domain-specific error types and external library errors into a
/// single unified error type, with `#[from]` conversions so the `?` operator
/// works throughout the controller/service/data layers. The `IntoResponse`
/// implementation maps each variant to the HTTP response API consumers see.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing or invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Authentication error (missing/invalid credentials, duplicate signup).
    #[error(transparent)]
    AuthError(#[from] AuthError),
    /// Status review error (invalid target status, missing record).
    #[error(transparent)]
    StatusError(#[from] StatusError),
    /// Internal error indicating a bug in Lifeline's code.
    #[error("Internal error with Lifeline's code, this indicates a bug: {0:?}")]
    InternalError(String),
    /// Database error (query failures, connection issues, constraint violations).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
    /// Session error (session retrieval, storage, serialization).
    #[error(transparent)]
    SessionError(#[from] tower_sessions::session::Error),
    /// I/O error (binding the listener, serving connections).
    #[error(transparent)]
    IoError(#[from] std::io::Error),
}

/// Converts application errors into HTTP responses.
///
/// Domain errors carry their own response mappings; everything else is an
/// opaque 500 with the underlying message logged server-side.
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::ConfigError(err) => err.into_response(),
            Self::AuthError(err) => err.into_response(),
            Self::StatusError(err) => err.into_response(),
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 response.
///
/// Logs the error message and returns a generic "Internal server error" body
/// to the client. Used as the fallback for errors without a specific mapping.
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
