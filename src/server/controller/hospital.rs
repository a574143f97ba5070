use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        hospital::{CreateHospitalDto, HospitalDto},
        status::UpdateStatusDto,
    },
    server::{
        data::hospital::HospitalRepository,
        error::{status::StatusError, Error},
        model::app::AppState,
        service::status::StatusService,
    },
};

pub static HOSPITAL_TAG: &str = "hospital";

/// Submit a hospital registration application
///
/// New applications start in `pending` status awaiting admin review.
#[utoipa::path(
    post,
    path = "/api/hospitals",
    tag = HOSPITAL_TAG,
    request_body = CreateHospitalDto,
    responses(
        (status = 201, description = "Application submitted", body = HospitalDto),
        (status = 400, description = "Malformed request body", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_hospital(
    State(state): State<AppState>,
    Json(payload): Json<CreateHospitalDto>,
) -> Result<impl IntoResponse, Error> {
    let hospital = HospitalRepository::new(&state.db).create(payload).await?;

    Ok((StatusCode::CREATED, Json(HospitalDto::from(hospital))))
}

/// List all hospital applications
#[utoipa::path(
    get,
    path = "/api/hospitals",
    tag = HOSPITAL_TAG,
    responses(
        (status = 200, description = "All hospitals", body = Vec<HospitalDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_hospitals(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let hospitals = HospitalRepository::new(&state.db).get_all().await?;

    let hospital_dtos: Vec<HospitalDto> = hospitals.into_iter().map(HospitalDto::from).collect();

    Ok(Json(hospital_dtos))
}

/// Get a single hospital application
#[utoipa::path(
    get,
    path = "/api/hospitals/{id}",
    tag = HOSPITAL_TAG,
    params(
        ("id" = i32, Path, description = "Hospital ID")
    ),
    responses(
        (status = 200, description = "Hospital found", body = HospitalDto),
        (status = 404, description = "Hospital not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_hospital(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let hospital = HospitalRepository::new(&state.db)
        .get_by_id(id)
        .await?
        .ok_or(StatusError::HospitalNotFound(id))?;

    Ok(Json(HospitalDto::from(hospital)))
}

/// Review a hospital application
///
/// Moves the application between `pending`, `approved`, and `rejected`.
/// Approval bumps the partner-hospital counter on every call.
#[utoipa::path(
    patch,
    path = "/api/hospitals/{id}/status",
    tag = HOSPITAL_TAG,
    params(
        ("id" = i32, Path, description = "Hospital ID")
    ),
    request_body = UpdateStatusDto,
    responses(
        (status = 200, description = "Status updated", body = HospitalDto),
        (status = 400, description = "Invalid status value", body = ErrorDto),
        (status = 404, description = "Hospital not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_hospital_status(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateStatusDto>,
) -> Result<impl IntoResponse, Error> {
    let hospital = StatusService::new(&state.db)
        .update_hospital_status(id, &payload.status)
        .await?;

    Ok(Json(HospitalDto::from(hospital)))
}
