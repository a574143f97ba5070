use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum StatusError {
    /// Target status is not one of `pending`, `approved`, or `rejected`.
    #[error("Invalid status value: {0:?}")]
    InvalidStatus(String),
    /// Hospital ID not present in the database.
    #[error("Hospital ID {0} not found")]
    HospitalNotFound(i32),
    /// Blood request ID not present in the database.
    #[error("Blood request ID {0} not found")]
    BloodRequestNotFound(i32),
}

impl IntoResponse for StatusError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            Self::InvalidStatus(value) => (
                StatusCode::BAD_REQUEST,
                format!("Invalid status value: {}", value),
            ),
            Self::HospitalNotFound(_) => {
                (StatusCode::NOT_FOUND, "Hospital not found".to_string())
            }
            Self::BloodRequestNotFound(_) => {
                (StatusCode::NOT_FOUND, "Blood request not found".to_string())
            }
        };

        tracing::debug!("{}", self);

        (status, Json(ErrorDto { error: message })).into_response()
    }
}
