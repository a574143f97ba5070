//! HTTP routing and OpenAPI documentation configuration.
//!
//! All API endpoints are registered here with their utoipa specifications,
//! collected into a unified OpenAPI document, and served alongside Swagger UI
//! at `/api/docs`.

use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{controller, model::app::AppState};

/// Builds the application's HTTP router with all API endpoints and Swagger UI.
///
/// Handlers sharing a path are grouped into one `routes!` call so they merge
/// into a single method router. The OpenAPI specification is served at
/// `/api/docs/openapi.json`.
///
/// # Returns
/// An Axum `Router<AppState>` with all routes registered, ready to have
/// state and the session layer attached.
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(info(title = "Lifeline", description = "Lifeline API"), tags(
        (name = controller::auth::AUTH_TAG, description = "Authentication API routes"),
        (name = controller::donor::DONOR_TAG, description = "Donor registration API routes"),
        (name = controller::hospital::HOSPITAL_TAG, description = "Hospital application API routes"),
        (name = controller::blood_request::BLOOD_REQUEST_TAG, description = "Blood request API routes"),
        (name = controller::inventory::INVENTORY_TAG, description = "Blood inventory API routes"),
        (name = controller::statistics::STATISTICS_TAG, description = "Statistics API routes"),
    ))]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(controller::statistics::get_statistics))
        .routes(routes!(controller::statistics::get_dashboard_stats))
        .routes(routes!(controller::inventory::get_blood_inventory))
        .routes(routes!(
            controller::donor::get_donors,
            controller::donor::create_donor
        ))
        .routes(routes!(
            controller::blood_request::get_blood_requests,
            controller::blood_request::create_blood_request
        ))
        .routes(routes!(controller::blood_request::update_blood_request_status))
        .routes(routes!(
            controller::hospital::get_hospitals,
            controller::hospital::create_hospital
        ))
        .routes(routes!(controller::hospital::get_hospital))
        .routes(routes!(controller::hospital::update_hospital_status))
        .routes(routes!(controller::auth::signup))
        .routes(routes!(controller::auth::login))
        .routes(routes!(controller::auth::logout))
        .routes(routes!(controller::auth::me))
        .split_for_parts();

    routes.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
}
