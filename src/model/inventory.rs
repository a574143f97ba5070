use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BloodInventoryDto {
    pub id: i32,
    pub blood_type: String,
    pub units_available: i32,
    pub status: String,
    pub last_updated: NaiveDateTime,
}

impl From<entity::blood_inventory::Model> for BloodInventoryDto {
    fn from(model: entity::blood_inventory::Model) -> Self {
        Self {
            id: model.id,
            blood_type: model.blood_type,
            units_available: model.units_available,
            status: model.status,
            last_updated: model.last_updated,
        }
    }
}
