use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{
        api::ErrorDto,
        donor::{CreateDonorDto, DonorDto},
    },
    server::{
        data::donor::DonorRepository, error::Error, model::app::AppState,
        service::donor::DonorService,
    },
};

pub static DONOR_TAG: &str = "donor";

/// Register a new blood donor
///
/// Creates the donor record and bumps the landing-page active-donor counter.
#[utoipa::path(
    post,
    path = "/api/donors",
    tag = DONOR_TAG,
    request_body = CreateDonorDto,
    responses(
        (status = 201, description = "Donor registered", body = DonorDto),
        (status = 400, description = "Malformed request body", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_donor(
    State(state): State<AppState>,
    Json(payload): Json<CreateDonorDto>,
) -> Result<impl IntoResponse, Error> {
    let donor = DonorService::new(&state.db).register_donor(payload).await?;

    Ok((StatusCode::CREATED, Json(DonorDto::from(donor))))
}

/// List all registered donors
#[utoipa::path(
    get,
    path = "/api/donors",
    tag = DONOR_TAG,
    responses(
        (status = 200, description = "All donors", body = Vec<DonorDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_donors(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let donors = DonorRepository::new(&state.db).get_all().await?;

    let donor_dtos: Vec<DonorDto> = donors.into_iter().map(DonorDto::from).collect();

    Ok(Json(donor_dtos))
}
