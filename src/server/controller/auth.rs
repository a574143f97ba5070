use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tower_sessions::Session;

use crate::{
    model::{
        api::{ErrorDto, OkDto},
        user::{AuthResponseDto, LoginDto, SignupDto, UserDto},
    },
    server::{
        error::{auth::AuthError, Error},
        model::{app::AppState, session::SessionUserId},
        service::auth::AuthService,
    },
};

pub static AUTH_TAG: &str = "auth";

/// Create a new admin account
///
/// Hashes the password, stores the account, and logs the new user in by
/// putting their ID in the session.
#[utoipa::path(
    post,
    path = "/api/auth/signup",
    tag = AUTH_TAG,
    request_body = SignupDto,
    responses(
        (status = 201, description = "Account created and logged in", body = AuthResponseDto),
        (status = 400, description = "Username already taken", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn signup(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<SignupDto>,
) -> Result<impl IntoResponse, Error> {
    let user = AuthService::new(&state.db)
        .signup(&payload.username, &payload.password)
        .await?;

    SessionUserId::insert(&session, user.id).await?;

    Ok((
        StatusCode::CREATED,
        Json(AuthResponseDto {
            user: UserDto::from(user),
        }),
    ))
}

/// Log in with username and password
///
/// Any failure (unknown user, wrong password, corrupted stored hash) yields
/// the same generic 401.
#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = AUTH_TAG,
    request_body = LoginDto,
    responses(
        (status = 200, description = "Logged in", body = AuthResponseDto),
        (status = 400, description = "Missing credentials", body = ErrorDto),
        (status = 401, description = "Invalid credentials", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<LoginDto>,
) -> Result<impl IntoResponse, Error> {
    let user = AuthService::new(&state.db)
        .login(&payload.username, &payload.password)
        .await?;

    SessionUserId::insert(&session, user.id).await?;

    Ok(Json(AuthResponseDto {
        user: UserDto::from(user),
    }))
}

/// Log out the current user
#[utoipa::path(
    post,
    path = "/api/auth/logout",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Logged out", body = OkDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn logout(session: Session) -> Result<impl IntoResponse, Error> {
    let maybe_user_id = SessionUserId::get(&session).await?;

    // Only clear the session when a user is actually in it; clearing a
    // session that was never created errors in the session store
    if maybe_user_id.is_some() {
        session.clear().await;
    }

    Ok(Json(OkDto { ok: true }))
}

/// Get the currently logged-in user
#[utoipa::path(
    get,
    path = "/api/auth/me",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Current user", body = AuthResponseDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn me(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    let user_id = SessionUserId::get(&session)
        .await?
        .ok_or(AuthError::NotAuthenticated)?;

    let user = match AuthService::new(&state.db).current_user(user_id).await? {
        Some(user) => user,
        None => {
            // Stale session for a user deleted from the database; clear it so
            // the client can log in again cleanly
            session.clear().await;

            tracing::warn!(
                user_id = %user_id,
                "Session user not found in database, session cleared"
            );

            return Err(AuthError::NotAuthenticated.into());
        }
    };

    Ok(Json(AuthResponseDto {
        user: UserDto::from(user),
    }))
}
