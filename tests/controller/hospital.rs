use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use lifeline::{
    model::status::UpdateStatusDto,
    server::{
        controller::hospital::{
            create_hospital, get_hospital, get_hospitals, update_hospital_status,
        },
        data::{hospital::HospitalRepository, statistics::StatisticsRepository},
        model::app::AppState,
    },
};
use lifeline_test_utils::prelude::*;

use crate::util;

async fn setup() -> Result<TestSetup, TestError> {
    let test = test_setup_with_tables!(entity::prelude::Hospital, entity::prelude::Statistics)?;

    StatisticsRepository::new(&test.state.db)
        .create(0, 0, 0)
        .await?;

    Ok(test)
}

#[tokio::test]
/// Expect 201 created with a pending application
async fn returns_created_for_valid_hospital() -> Result<(), TestError> {
    let test = setup().await?;
    let state: AppState = test.state();

    let result = create_hospital(State(state), Json(util::create_hospital_dto(1))).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CREATED);

    Ok(())
}

#[tokio::test]
/// Expect 200 with all hospital applications
async fn lists_hospitals() -> Result<(), TestError> {
    let test = setup().await?;
    create_hospital(State(test.state()), Json(util::create_hospital_dto(1)))
        .await
        .unwrap();

    let result = get_hospitals(State(test.state())).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}

#[tokio::test]
/// Expect 200 success for an existing hospital
async fn returns_success_for_existing_hospital() -> Result<(), TestError> {
    let test = setup().await?;
    let hospital = HospitalRepository::new(&test.state.db)
        .create(util::create_hospital_dto(1))
        .await?;

    let result = get_hospital(State(test.state()), Path(hospital.id)).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}

#[tokio::test]
/// Expect 404 not found for a hospital that does not exist
async fn returns_not_found_for_missing_hospital() -> Result<(), TestError> {
    let test = setup().await?;

    let result = get_hospital(State(test.state()), Path(1)).await;

    assert!(result.is_err());
    let resp = result.into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

#[tokio::test]
/// Expect 200 and a partner counter bump when approving a hospital
async fn approval_updates_status_and_partner_count() -> Result<(), TestError> {
    let test = setup().await?;
    let hospital = HospitalRepository::new(&test.state.db)
        .create(util::create_hospital_dto(1))
        .await?;

    let result = update_hospital_status(
        State(test.state()),
        Path(hospital.id),
        Json(UpdateStatusDto {
            status: "approved".to_string(),
        }),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let stored = HospitalRepository::new(&test.state.db)
        .get_by_id(hospital.id)
        .await?
        .unwrap();
    assert_eq!(stored.status, "approved");

    let statistics = StatisticsRepository::new(&test.state.db)
        .get()
        .await?
        .unwrap();
    assert_eq!(statistics.partner_hospitals, 1);

    Ok(())
}

#[tokio::test]
/// Expect 400 bad request for an out-of-enum status, with no mutation
async fn rejects_invalid_status_value() -> Result<(), TestError> {
    let test = setup().await?;
    let hospital = HospitalRepository::new(&test.state.db)
        .create(util::create_hospital_dto(1))
        .await?;

    let result = update_hospital_status(
        State(test.state()),
        Path(hospital.id),
        Json(UpdateStatusDto {
            status: "archived".to_string(),
        }),
    )
    .await;

    assert!(result.is_err());
    let resp = result.into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let stored = HospitalRepository::new(&test.state.db)
        .get_by_id(hospital.id)
        .await?
        .unwrap();
    assert_eq!(stored.status, "pending");

    Ok(())
}

#[tokio::test]
/// Expect 404 not found when reviewing a hospital that does not exist
async fn returns_not_found_when_reviewing_missing_hospital() -> Result<(), TestError> {
    let test = setup().await?;

    let result = update_hospital_status(
        State(test.state()),
        Path(1),
        Json(UpdateStatusDto {
            status: "approved".to_string(),
        }),
    )
    .await;

    assert!(result.is_err());
    let resp = result.into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let statistics = StatisticsRepository::new(&test.state.db)
        .get()
        .await?
        .unwrap();
    assert_eq!(statistics.partner_hospitals, 0);

    Ok(())
}
