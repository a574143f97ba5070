use axum::{extract::State, response::IntoResponse, Json};

use crate::{
    model::{api::ErrorDto, inventory::BloodInventoryDto},
    server::{data::inventory::BloodInventoryRepository, error::Error, model::app::AppState},
};

pub static INVENTORY_TAG: &str = "inventory";

/// List reference blood stock levels per blood type
#[utoipa::path(
    get,
    path = "/api/blood-inventory",
    tag = INVENTORY_TAG,
    responses(
        (status = 200, description = "All inventory rows", body = Vec<BloodInventoryDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_blood_inventory(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, Error> {
    let inventory = BloodInventoryRepository::new(&state.db).get_all().await?;

    let inventory_dtos: Vec<BloodInventoryDto> =
        inventory.into_iter().map(BloodInventoryDto::from).collect();

    Ok(Json(inventory_dtos))
}
