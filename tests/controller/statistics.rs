use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use lifeline::{
    model::status::UpdateStatusDto,
    server::{
        controller::{
            blood_request::create_blood_request,
            donor::create_donor,
            hospital::{create_hospital, update_hospital_status},
            statistics::{get_dashboard_stats, get_statistics},
        },
        data::statistics::StatisticsRepository,
        model::app::AppState,
        service::dashboard::DashboardService,
    },
};
use lifeline_test_utils::prelude::*;

use crate::util;

async fn setup() -> Result<TestSetup, TestError> {
    test_setup_with_tables!(
        entity::prelude::Donor,
        entity::prelude::Hospital,
        entity::prelude::BloodRequest,
        entity::prelude::Statistics,
    )
}

#[tokio::test]
/// Expect 200 with zeroed counters before the statistics row is seeded
async fn returns_zeros_when_unseeded() -> Result<(), TestError> {
    let test = setup().await?;
    let state: AppState = test.state();

    let result = get_statistics(State(state)).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}

#[tokio::test]
/// Expect 200 with the stored counters once seeded
async fn returns_seeded_counters() -> Result<(), TestError> {
    let test = setup().await?;
    StatisticsRepository::new(&test.state.db)
        .create(10, 204, 2)
        .await?;

    let result = get_statistics(State(test.state())).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}

#[tokio::test]
/// Expect 200 from the dashboard endpoint on an empty database
async fn dashboard_succeeds_on_empty_database() -> Result<(), TestError> {
    let test = setup().await?;

    let result = get_dashboard_stats(State(test.state())).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}

#[tokio::test]
/// Expect totalPending to combine pending hospitals and pending requests
async fn total_pending_combines_hospitals_and_requests() -> Result<(), TestError> {
    let test = setup().await?;

    // 3 hospitals, one of which gets approved: 2 stay pending
    for n in 1..=3 {
        create_hospital(State(test.state()), Json(util::create_hospital_dto(n)))
            .await
            .unwrap();
    }
    update_hospital_status(
        State(test.state()),
        axum::extract::Path(1),
        Json(UpdateStatusDto {
            status: "approved".to_string(),
        }),
    )
    .await
    .unwrap();

    // 3 requests, all pending
    for n in 1..=3 {
        create_blood_request(
            State(test.state()),
            Json(util::create_blood_request_dto(n)),
        )
        .await
        .unwrap();
    }

    let stats = DashboardService::new(&test.state.db)
        .get_dashboard_stats()
        .await
        .unwrap();

    assert_eq!(stats.total_hospitals, 1);
    assert_eq!(stats.total_pending, 5);

    Ok(())
}

#[tokio::test]
/// Expect donor totals and blood type groups to reflect registrations
async fn dashboard_reflects_registered_donors() -> Result<(), TestError> {
    let test = setup().await?;

    for n in 1..=4 {
        create_donor(State(test.state()), Json(util::create_donor_dto(n)))
            .await
            .unwrap();
    }

    let stats = DashboardService::new(&test.state.db)
        .get_dashboard_stats()
        .await
        .unwrap();

    assert_eq!(stats.total_donors, 4);
    assert_eq!(stats.donors_by_blood_type.len(), 1);
    assert_eq!(stats.donors_by_blood_type[0].name, "O+");
    assert_eq!(stats.donors_by_blood_type[0].value, 4);

    Ok(())
}
