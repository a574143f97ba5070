use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// Signup attempted with a username that already exists.
    #[error("Username {0:?} is already taken")]
    UsernameTaken(String),
    /// Login attempted without a username or password in the request body.
    #[error("Login request is missing a username or password")]
    MissingCredentials,
    /// Unknown username, malformed stored hash, or password mismatch.
    ///
    /// All three collapse into one variant so the response never reveals
    /// which part of the check failed.
    #[error("Invalid credentials")]
    InvalidCredentials,
    /// No authenticated user in the current session.
    #[error("Not authenticated")]
    NotAuthenticated,
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            Self::UsernameTaken(_) => (StatusCode::BAD_REQUEST, "Username already taken"),
            Self::MissingCredentials => (StatusCode::BAD_REQUEST, "Missing credentials"),
            Self::InvalidCredentials => (StatusCode::UNAUTHORIZED, "Invalid credentials"),
            Self::NotAuthenticated => (StatusCode::UNAUTHORIZED, "Not authenticated"),
        };

        tracing::debug!("{}", self);

        (
            status,
            Json(ErrorDto {
                error: message.to_string(),
            }),
        )
            .into_response()
    }
}
