//! Status review transitions for hospitals and blood requests.
//!
//! Both record kinds share the same three-state machine: `pending` at
//! creation, then `approved` or `rejected` by an administrator. The engine
//! deliberately places no structural guard on transitions; any state may move
//! to any state, and the admin UI is what restricts the offered moves.

use sea_orm::DatabaseConnection;

use crate::{
    model::status::{ParseRecordStatusError, RecordStatus},
    server::{
        data::{
            blood_request::BloodRequestRepository, hospital::HospitalRepository,
            statistics::StatisticsRepository,
        },
        error::{status::StatusError, Error},
    },
};

pub struct StatusService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> StatusService<'a> {
    /// Creates a new instance of [`StatusService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Moves a hospital application to a new review status.
    ///
    /// A transition into `approved` bumps the partner-hospital counter on
    /// every call, including re-approvals; the counter tracks approval
    /// events, not distinct approved hospitals. The bump is a second write
    /// issued only after the status update succeeds and is not rolled back
    /// with it.
    ///
    /// # Returns
    /// - `Ok(Model)` - Updated hospital row
    /// - `Err(Error::StatusError)` - Status failed the enumeration check, or
    ///   no hospital with this ID exists; nothing was written
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn update_hospital_status(
        &self,
        id: i32,
        status: &str,
    ) -> Result<entity::hospital::Model, Error> {
        let status = parse_status(status)?;

        let hospital = HospitalRepository::new(self.db)
            .update_status(id, status)
            .await?
            .ok_or(StatusError::HospitalNotFound(id))?;

        if status == RecordStatus::Approved {
            StatisticsRepository::new(self.db)
                .increment_partner_hospitals()
                .await?;

            tracing::info!(hospital_id = %id, "Hospital approved, partner count bumped");
        }

        Ok(hospital)
    }

    /// Moves a blood request to a new review status.
    ///
    /// Unlike hospital approval, blood request transitions have no statistics
    /// side effect.
    pub async fn update_blood_request_status(
        &self,
        id: i32,
        status: &str,
    ) -> Result<entity::blood_request::Model, Error> {
        let status = parse_status(status)?;

        let request = BloodRequestRepository::new(self.db)
            .update_status(id, status)
            .await?
            .ok_or(StatusError::BloodRequestNotFound(id))?;

        Ok(request)
    }
}

fn parse_status(status: &str) -> Result<RecordStatus, StatusError> {
    status
        .parse()
        .map_err(|ParseRecordStatusError(value)| StatusError::InvalidStatus(value))
}
