use serde::{Deserialize, Serialize};

/// Public view of a user account; never carries the password composite.
#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct UserDto {
    pub id: i32,
    pub username: String,
}

impl From<entity::user::Model> for UserDto {
    fn from(model: entity::user::Model) -> Self {
        Self {
            id: model.id,
            username: model.username,
        }
    }
}

/// Envelope for the auth endpoints' success responses.
#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct AuthResponseDto {
    pub user: UserDto,
}

#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct SignupDto {
    pub username: String,
    pub password: String,
}

/// Login payload; fields default to empty so a missing field surfaces as the
/// missing-credentials error instead of a deserialization failure.
#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct LoginDto {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}
