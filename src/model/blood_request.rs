use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BloodRequestDto {
    pub id: i32,
    /// Free-text hospital name; requests may name hospitals that never
    /// registered on the platform.
    pub hospital_name: String,
    pub blood_type: String,
    pub units_needed: i32,
    pub urgency_level: String,
    pub location: String,
    pub phone: String,
    pub email: String,
    pub status: String,
    pub created_at: NaiveDateTime,
}

impl From<entity::blood_request::Model> for BloodRequestDto {
    fn from(model: entity::blood_request::Model) -> Self {
        Self {
            id: model.id,
            hospital_name: model.hospital_name,
            blood_type: model.blood_type,
            units_needed: model.units_needed,
            urgency_level: model.urgency_level,
            location: model.location,
            phone: model.phone,
            email: model.email,
            status: model.status,
            created_at: model.created_at,
        }
    }
}

/// Blood request submission payload; new requests always start `pending`.
#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateBloodRequestDto {
    pub hospital_name: String,
    pub blood_type: String,
    pub units_needed: i32,
    pub urgency_level: String,
    pub location: String,
    pub phone: String,
    pub email: String,
}
