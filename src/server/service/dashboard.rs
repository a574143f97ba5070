//! Dashboard statistics aggregation.
//!
//! The dashboard view-model is a pure function of the store contents at call
//! time: every call rescans the donor, hospital, and blood request
//! collections. Only the two landing-page counters (`active_donors`,
//! `partner_hospitals`) are incrementally maintained; everything here is
//! recomputed. A full scan per call is fine at the platform's scale of tens
//! to low hundreds of records.

use chrono::{Datelike, Utc};
use sea_orm::DatabaseConnection;

use crate::{
    model::{
        statistics::{DashboardStatsDto, MonthlyDonorStatsDto, NameValueDto},
        status::RecordStatus,
    },
    server::{
        data::{
            blood_request::BloodRequestRepository, donor::DonorRepository,
            hospital::HospitalRepository,
        },
        error::Error,
    },
};

/// Month labels for the registration trend, fixed calendar order.
const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Substitute for donors registered without a location.
const UNKNOWN_LOCATION: &str = "Unknown";

/// How many locations the by-location aggregate keeps.
const TOP_LOCATIONS: usize = 5;

pub struct DashboardService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> DashboardService<'a> {
    /// Creates a new instance of [`DashboardService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Computes the full dashboard view-model from the current store state.
    pub async fn get_dashboard_stats(&self) -> Result<DashboardStatsDto, Error> {
        let donors = DonorRepository::new(self.db).get_all().await?;

        let hospital_repository = HospitalRepository::new(self.db);
        let request_repository = BloodRequestRepository::new(self.db);

        let total_hospitals = hospital_repository
            .count_by_status(RecordStatus::Approved)
            .await?;
        let pending_hospitals = hospital_repository
            .count_by_status(RecordStatus::Pending)
            .await?;
        let pending_requests = request_repository
            .count_by_status(RecordStatus::Pending)
            .await?;

        Ok(DashboardStatsDto {
            donors_by_blood_type: donors_by_blood_type(&donors),
            donors_by_location: donors_by_location(&donors),
            total_donors: donors.len() as u64,
            monthly_donor_stats: monthly_donor_stats(&donors, Utc::now().year()),
            total_hospitals,
            total_pending: pending_hospitals + pending_requests,
        })
    }
}

/// Groups donors by blood type.
///
/// Pairs appear in first-encounter order; blood types with no donors get no
/// entry at all (no zero-filling across the 8 ABO/Rh types).
pub fn donors_by_blood_type(donors: &[entity::donor::Model]) -> Vec<NameValueDto> {
    let mut groups: Vec<NameValueDto> = Vec::new();

    for donor in donors {
        match groups.iter_mut().find(|g| g.name == donor.blood_type) {
            Some(group) => group.value += 1,
            None => groups.push(NameValueDto {
                name: donor.blood_type.clone(),
                value: 1,
            }),
        }
    }

    groups
}

/// Groups donors by location and keeps the top 5 by count.
///
/// Empty locations group under "Unknown". The sort is stable, so locations
/// tied on count stay in first-encounter order.
pub fn donors_by_location(donors: &[entity::donor::Model]) -> Vec<NameValueDto> {
    let mut groups: Vec<NameValueDto> = Vec::new();

    for donor in donors {
        let location = if donor.location.is_empty() {
            UNKNOWN_LOCATION
        } else {
            donor.location.as_str()
        };

        match groups.iter_mut().find(|g| g.name == location) {
            Some(group) => group.value += 1,
            None => groups.push(NameValueDto {
                name: location.to_string(),
                value: 1,
            }),
        }
    }

    groups.sort_by(|a, b| b.value.cmp(&a.value));
    groups.truncate(TOP_LOCATIONS);

    groups
}

/// Counts donor registrations per calendar month for the given year and the
/// one before it.
///
/// The comparison window is two calendar years, not a rolling 24 months;
/// registrations older than the previous year count in neither series.
pub fn monthly_donor_stats(
    donors: &[entity::donor::Model],
    current_year: i32,
) -> Vec<MonthlyDonorStatsDto> {
    MONTHS
        .iter()
        .enumerate()
        .map(|(index, month)| {
            let in_month = |year: i32| {
                donors
                    .iter()
                    .filter(|donor| {
                        donor.created_at.year() == year
                            && donor.created_at.month0() as usize == index
                    })
                    .count() as u64
            };

            MonthlyDonorStatsDto {
                month: month.to_string(),
                this_year: in_month(current_year),
                last_year: in_month(current_year - 1),
            }
        })
        .collect()
}
