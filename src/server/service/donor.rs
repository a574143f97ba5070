//! Donor registration.

use sea_orm::DatabaseConnection;

use crate::{
    model::donor::CreateDonorDto,
    server::{
        data::{donor::DonorRepository, statistics::StatisticsRepository},
        error::Error,
    },
};

pub struct DonorService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> DonorService<'a> {
    /// Creates a new instance of [`DonorService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Registers a new donor and bumps the active-donor counter.
    ///
    /// The counter write follows the insert as a separate best-effort write;
    /// it silently affects zero rows when the statistics singleton has not
    /// been seeded.
    pub async fn register_donor(
        &self,
        donor: CreateDonorDto,
    ) -> Result<entity::donor::Model, Error> {
        let donor = DonorRepository::new(self.db).create(donor).await?;

        StatisticsRepository::new(self.db)
            .increment_active_donors()
            .await?;

        tracing::info!(donor_id = %donor.id, "New donor registered");

        Ok(donor)
    }
}
