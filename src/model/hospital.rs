use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct HospitalDto {
    pub id: i32,
    pub name: String,
    pub location: String,
    pub phone: String,
    pub email: String,
    pub address: Option<String>,
    pub contact_person: Option<String>,
    pub status: String,
    pub created_at: NaiveDateTime,
}

impl From<entity::hospital::Model> for HospitalDto {
    fn from(model: entity::hospital::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            location: model.location,
            phone: model.phone,
            email: model.email,
            address: model.address,
            contact_person: model.contact_person,
            status: model.status,
            created_at: model.created_at,
        }
    }
}

/// Hospital registration payload; new applications always start `pending`.
#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateHospitalDto {
    pub name: String,
    pub location: String,
    pub phone: String,
    pub email: String,
    pub address: Option<String>,
    pub contact_person: Option<String>,
}
