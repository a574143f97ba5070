use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use lifeline::server::{
    controller::donor::{create_donor, get_donors},
    data::statistics::StatisticsRepository,
    model::app::AppState,
};
use lifeline_test_utils::prelude::*;

use crate::util;

async fn setup() -> Result<TestSetup, TestError> {
    test_setup_with_tables!(entity::prelude::Donor, entity::prelude::Statistics)
}

#[tokio::test]
/// Expect 201 created when registering a donor
async fn returns_created_for_valid_donor() -> Result<(), TestError> {
    let test = setup().await?;
    let state: AppState = test.state();

    let result = create_donor(State(state), Json(util::create_donor_dto(1))).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CREATED);

    Ok(())
}

#[tokio::test]
/// Expect registering a donor to bump the active-donor counter by one
async fn registration_increments_active_donors() -> Result<(), TestError> {
    let test = setup().await?;
    StatisticsRepository::new(&test.state.db)
        .create(0, 0, 0)
        .await?;

    let result = create_donor(State(test.state()), Json(util::create_donor_dto(1))).await;
    assert!(result.is_ok());

    let statistics = StatisticsRepository::new(&test.state.db)
        .get()
        .await?
        .unwrap();
    assert_eq!(statistics.active_donors, 1);

    Ok(())
}

#[tokio::test]
/// Expect 200 with all registered donors
async fn lists_registered_donors() -> Result<(), TestError> {
    let test = setup().await?;

    create_donor(State(test.state()), Json(util::create_donor_dto(1)))
        .await
        .unwrap();
    create_donor(State(test.state()), Json(util::create_donor_dto(2)))
        .await
        .unwrap();

    let result = get_donors(State(test.state())).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}

#[tokio::test]
/// Expect 500 internal server error when required tables do not exist
async fn error_when_required_tables_dont_exist() -> Result<(), TestError> {
    let test = test_setup_with_tables!()?;

    let result = create_donor(State(test.state()), Json(util::create_donor_dto(1))).await;

    assert!(result.is_err());

    Ok(())
}
