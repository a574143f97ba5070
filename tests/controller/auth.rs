use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use lifeline::{
    model::user::{LoginDto, SignupDto},
    server::{
        controller::auth::{login, logout, me, signup},
        model::app::AppState,
    },
};
use lifeline_test_utils::prelude::*;

async fn setup() -> Result<TestSetup, TestError> {
    test_setup_with_tables!(entity::prelude::User)
}

fn signup_dto() -> SignupDto {
    SignupDto {
        username: "admin".to_string(),
        password: "abc123".to_string(),
    }
}

#[tokio::test]
/// Expect 201 created and a logged-in session after signup
async fn signup_creates_account_and_session() -> Result<(), TestError> {
    let test = setup().await?;
    let state: AppState = test.state();

    let result = signup(State(state), test.session.clone(), Json(signup_dto())).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CREATED);

    let result = me(State(test.state()), test.session.clone()).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}

#[tokio::test]
/// Expect 400 bad request when signing up with a taken username
async fn signup_rejects_duplicate_username() -> Result<(), TestError> {
    let test = setup().await?;
    signup(State(test.state()), test.session.clone(), Json(signup_dto()))
        .await
        .unwrap();

    let result = signup(State(test.state()), test.session.clone(), Json(signup_dto())).await;

    assert!(result.is_err());
    let resp = result.into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

#[tokio::test]
/// Expect 200 when logging in with the signup password
async fn login_succeeds_with_correct_password() -> Result<(), TestError> {
    let test = setup().await?;
    signup(State(test.state()), test.session.clone(), Json(signup_dto()))
        .await
        .unwrap();

    let result = login(
        State(test.state()),
        test.session.clone(),
        Json(LoginDto {
            username: "admin".to_string(),
            password: "abc123".to_string(),
        }),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}

#[tokio::test]
/// Expect 401 unauthorized for a near-miss password
async fn login_fails_with_wrong_password() -> Result<(), TestError> {
    let test = setup().await?;
    signup(State(test.state()), test.session.clone(), Json(signup_dto()))
        .await
        .unwrap();

    let result = login(
        State(test.state()),
        test.session.clone(),
        Json(LoginDto {
            username: "admin".to_string(),
            password: "abc124".to_string(),
        }),
    )
    .await;

    assert!(result.is_err());
    let resp = result.into_response();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    Ok(())
}

#[tokio::test]
/// Expect 400 bad request when credentials are missing from the body
async fn login_fails_with_missing_fields() -> Result<(), TestError> {
    let test = setup().await?;

    let result = login(
        State(test.state()),
        test.session.clone(),
        Json(LoginDto {
            username: "admin".to_string(),
            password: String::new(),
        }),
    )
    .await;

    assert!(result.is_err());
    let resp = result.into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

#[tokio::test]
/// Expect 200 from logout and 401 from a following me call
async fn logout_clears_the_session() -> Result<(), TestError> {
    let test = setup().await?;
    signup(State(test.state()), test.session.clone(), Json(signup_dto()))
        .await
        .unwrap();

    let result = logout(test.session.clone()).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let result = me(State(test.state()), test.session.clone()).await;

    assert!(result.is_err());
    let resp = result.into_response();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    Ok(())
}

#[tokio::test]
/// Expect 401 unauthorized from me without a session user
async fn me_requires_authentication() -> Result<(), TestError> {
    let test = setup().await?;

    let result = me(State(test.state()), test.session.clone()).await;

    assert!(result.is_err());
    let resp = result.into_response();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    Ok(())
}
