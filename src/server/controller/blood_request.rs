use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        blood_request::{BloodRequestDto, CreateBloodRequestDto},
        status::UpdateStatusDto,
    },
    server::{
        data::blood_request::BloodRequestRepository, error::Error, model::app::AppState,
        service::status::StatusService,
    },
};

pub static BLOOD_REQUEST_TAG: &str = "blood-request";

/// Submit a blood request
///
/// New requests start in `pending` status awaiting admin review.
#[utoipa::path(
    post,
    path = "/api/blood-requests",
    tag = BLOOD_REQUEST_TAG,
    request_body = CreateBloodRequestDto,
    responses(
        (status = 201, description = "Request submitted", body = BloodRequestDto),
        (status = 400, description = "Malformed request body", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_blood_request(
    State(state): State<AppState>,
    Json(payload): Json<CreateBloodRequestDto>,
) -> Result<impl IntoResponse, Error> {
    let request = BloodRequestRepository::new(&state.db).create(payload).await?;

    Ok((StatusCode::CREATED, Json(BloodRequestDto::from(request))))
}

/// List all blood requests
#[utoipa::path(
    get,
    path = "/api/blood-requests",
    tag = BLOOD_REQUEST_TAG,
    responses(
        (status = 200, description = "All blood requests", body = Vec<BloodRequestDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_blood_requests(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, Error> {
    let requests = BloodRequestRepository::new(&state.db).get_all().await?;

    let request_dtos: Vec<BloodRequestDto> =
        requests.into_iter().map(BloodRequestDto::from).collect();

    Ok(Json(request_dtos))
}

/// Review a blood request
///
/// Moves the request between `pending`, `approved`, and `rejected`; no
/// statistics side effect either way.
#[utoipa::path(
    patch,
    path = "/api/blood-requests/{id}/status",
    tag = BLOOD_REQUEST_TAG,
    params(
        ("id" = i32, Path, description = "Blood request ID")
    ),
    request_body = UpdateStatusDto,
    responses(
        (status = 200, description = "Status updated", body = BloodRequestDto),
        (status = 400, description = "Invalid status value", body = ErrorDto),
        (status = 404, description = "Blood request not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_blood_request_status(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateStatusDto>,
) -> Result<impl IntoResponse, Error> {
    let request = StatusService::new(&state.db)
        .update_blood_request_status(id, &payload.status)
        .await?;

    Ok(Json(BloodRequestDto::from(request)))
}
