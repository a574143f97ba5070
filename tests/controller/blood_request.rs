use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use lifeline::{
    model::status::UpdateStatusDto,
    server::{
        controller::blood_request::{
            create_blood_request, get_blood_requests, update_blood_request_status,
        },
        data::blood_request::BloodRequestRepository,
        model::app::AppState,
    },
};
use lifeline_test_utils::prelude::*;

use crate::util;

async fn setup() -> Result<TestSetup, TestError> {
    test_setup_with_tables!(entity::prelude::BloodRequest, entity::prelude::Statistics)
}

#[tokio::test]
/// Expect 201 created with a pending request
async fn returns_created_for_valid_request() -> Result<(), TestError> {
    let test = setup().await?;
    let state: AppState = test.state();

    let result = create_blood_request(
        State(state),
        Json(util::create_blood_request_dto(1)),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CREATED);

    Ok(())
}

#[tokio::test]
/// Expect 200 with all blood requests
async fn lists_blood_requests() -> Result<(), TestError> {
    let test = setup().await?;
    create_blood_request(
        State(test.state()),
        Json(util::create_blood_request_dto(1)),
    )
    .await
    .unwrap();

    let result = get_blood_requests(State(test.state())).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}

#[tokio::test]
/// Expect 200 when moving a request to rejected
async fn review_updates_status() -> Result<(), TestError> {
    let test = setup().await?;
    let request = BloodRequestRepository::new(&test.state.db)
        .create(util::create_blood_request_dto(1))
        .await?;

    let result = update_blood_request_status(
        State(test.state()),
        Path(request.id),
        Json(UpdateStatusDto {
            status: "rejected".to_string(),
        }),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let stored = BloodRequestRepository::new(&test.state.db)
        .get_by_id(request.id)
        .await?
        .unwrap();
    assert_eq!(stored.status, "rejected");

    Ok(())
}

#[tokio::test]
/// Expect 400 bad request for an out-of-enum status, with no mutation
async fn rejects_invalid_status_value() -> Result<(), TestError> {
    let test = setup().await?;
    let request = BloodRequestRepository::new(&test.state.db)
        .create(util::create_blood_request_dto(1))
        .await?;

    let result = update_blood_request_status(
        State(test.state()),
        Path(request.id),
        Json(UpdateStatusDto {
            status: "fulfilled".to_string(),
        }),
    )
    .await;

    assert!(result.is_err());
    let resp = result.into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let stored = BloodRequestRepository::new(&test.state.db)
        .get_by_id(request.id)
        .await?
        .unwrap();
    assert_eq!(stored.status, "pending");

    Ok(())
}

#[tokio::test]
/// Expect 404 not found when reviewing a request that does not exist
async fn returns_not_found_for_missing_request() -> Result<(), TestError> {
    let test = setup().await?;

    let result = update_blood_request_status(
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

    Ok(())
}
