use axum::{extract::State, response::IntoResponse, Json};

use crate::{
    model::{
        api::ErrorDto,
        statistics::{DashboardStatsDto, StatisticsDto},
    },
    server::{
        data::statistics::StatisticsRepository, error::Error, model::app::AppState,
        service::dashboard::DashboardService,
    },
};

pub static STATISTICS_TAG: &str = "statistics";

/// Get the landing-page counters
///
/// Returns all zeros when the statistics row has not been seeded yet.
#[utoipa::path(
    get,
    path = "/api/statistics",
    tag = STATISTICS_TAG,
    responses(
        (status = 200, description = "Global statistics", body = StatisticsDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_statistics(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let statistics = StatisticsRepository::new(&state.db)
        .get()
        .await?
        .map(StatisticsDto::from)
        .unwrap_or_default();

    Ok(Json(statistics))
}

/// Get the admin dashboard aggregates
///
/// Recomputed from the donor, hospital, and blood request collections on
/// every call.
#[utoipa::path(
    get,
    path = "/api/dashboard-stats",
    tag = STATISTICS_TAG,
    responses(
        (status = 200, description = "Dashboard view-model", body = DashboardStatsDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_dashboard_stats(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, Error> {
    let stats = DashboardService::new(&state.db).get_dashboard_stats().await?;

    Ok(Json(stats))
}
