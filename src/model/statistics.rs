use serde::{Deserialize, Serialize};

/// Landing-page counters from the statistics singleton row.
///
/// Serves as the response of `GET /api/statistics`; defaults to all zeros
/// when the row has not been seeded yet.
#[derive(Clone, Default, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StatisticsDto {
    pub active_donors: i32,
    pub total_blood_units: i32,
    pub partner_hospitals: i32,
}

impl From<entity::statistics::Model> for StatisticsDto {
    fn from(model: entity::statistics::Model) -> Self {
        Self {
            active_donors: model.active_donors,
            total_blood_units: model.total_blood_units,
            partner_hospitals: model.partner_hospitals,
        }
    }
}

/// A single `{name, value}` pair in a grouped aggregate.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct NameValueDto {
    pub name: String,
    pub value: u64,
}

/// Donor registrations for one calendar month, current year vs. previous.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyDonorStatsDto {
    pub month: String,
    pub this_year: u64,
    pub last_year: u64,
}

/// Admin dashboard view-model, recomputed from the store on every call.
#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStatsDto {
    pub donors_by_blood_type: Vec<NameValueDto>,
    /// Top 5 donor locations by count, descending.
    pub donors_by_location: Vec<NameValueDto>,
    pub total_donors: u64,
    /// Fixed Jan-Dec series comparing this calendar year against the last.
    pub monthly_donor_stats: Vec<MonthlyDonorStatsDto>,
    /// Count of approved hospitals.
    pub total_hospitals: u64,
    /// Pending hospitals plus pending blood requests, as one scalar.
    pub total_pending: u64,
}
