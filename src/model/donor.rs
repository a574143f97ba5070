use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DonorDto {
    pub id: i32,
    pub full_name: String,
    pub age: i32,
    pub gender: String,
    pub blood_type: String,
    pub location: String,
    pub phone: String,
    pub email: String,
    pub is_active: bool,
    pub created_at: NaiveDateTime,
}

impl From<entity::donor::Model> for DonorDto {
    fn from(model: entity::donor::Model) -> Self {
        Self {
            id: model.id,
            full_name: model.full_name,
            age: model.age,
            gender: model.gender,
            blood_type: model.blood_type,
            location: model.location,
            phone: model.phone,
            email: model.email,
            is_active: model.is_active,
            created_at: model.created_at,
        }
    }
}

/// Donor registration payload; `id`, `is_active`, and `created_at` are
/// assigned by the server.
#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateDonorDto {
    pub full_name: String,
    pub age: i32,
    pub gender: String,
    pub blood_type: String,
    pub location: String,
    pub phone: String,
    pub email: String,
}
