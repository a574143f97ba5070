//! Initial reference and sample data.
//!
//! Runs at startup after migrations: the blood inventory reference set is
//! upserted on every boot, while sample donors, hospitals, blood requests,
//! and the statistics singleton are only inserted into empty tables. The
//! sample rows are inserted directly rather than through the registration
//! services, so seeding never bumps the incrementally-maintained counters;
//! the statistics row is seeded with values matching the sample data.

use chrono::Utc;
use sea_orm::{ActiveValue, DatabaseConnection, EntityTrait};

use crate::server::{
    data::{inventory::BloodInventoryRepository, statistics::StatisticsRepository},
    error::Error,
};

/// Reference stock per blood type: (blood type, units available, status).
const SEED_INVENTORY: [(&str, i32, &str); 8] = [
    ("A+", 32, "Available"),
    ("A-", 10, "Low"),
    ("B+", 32, "Available"),
    ("B-", 32, "Available"),
    ("AB+", 32, "Available"),
    ("AB-", 32, "Available"),
    ("O+", 32, "Available"),
    ("O-", 2, "Critical"),
];

pub struct SeedService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SeedService<'a> {
    /// Creates a new instance of [`SeedService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Seeds the database, downgrading duplicate-key failures to a log line
    /// so two racing startups cannot take the server down.
    pub async fn seed(&self) -> Result<(), Error> {
        match self.seed_all().await {
            Ok(()) => {
                tracing::info!("Database seeding completed");
                Ok(())
            }
            Err(Error::DbErr(err)) if err.to_string().contains("duplicate key") => {
                tracing::info!("Data already seeded, skipping");
                Ok(())
            }
            Err(err) => Err(err),
        }
    }

    async fn seed_all(&self) -> Result<(), Error> {
        self.seed_inventory().await?;
        self.seed_donors().await?;
        self.seed_hospitals().await?;
        self.seed_blood_requests().await?;
        self.seed_statistics().await?;

        Ok(())
    }

    async fn seed_inventory(&self) -> Result<(), Error> {
        let inventory_repository = BloodInventoryRepository::new(self.db);

        for (blood_type, units_available, status) in SEED_INVENTORY {
            inventory_repository
                .upsert(blood_type, units_available, status)
                .await?;
        }

        Ok(())
    }

    async fn seed_donors(&self) -> Result<(), Error> {
        if entity::prelude::Donor::find().one(self.db).await?.is_some() {
            return Ok(());
        }

        let rows = [
            ("Ahmed Benali", 28, "Male", "O+", "Algiers", "+213555100001", "ahmed.benali@email.dz", true),
            ("Fatima Hadj", 35, "Female", "A+", "Oran", "+213555100002", "fatima.hadj@email.dz", true),
            ("Karim Meziane", 42, "Male", "B+", "Constantine", "+213555100003", "karim.meziane@email.dz", true),
            ("Leila Boumediene", 25, "Female", "AB-", "Annaba", "+213555100004", "leila.boumediene@email.dz", true),
            ("Youssef Ammari", 31, "Male", "O-", "Blida", "+213555100005", "youssef.ammari@email.dz", true),
            ("Nadia Khelif", 29, "Female", "A-", "Tlemcen", "+213555100006", "nadia.khelif@email.dz", true),
            ("Mohamed Cherif", 38, "Male", "B-", "Setif", "+213555100007", "mohamed.cherif@email.dz", true),
            ("Amina Larbi", 26, "Female", "AB+", "Batna", "+213555100008", "amina.larbi@email.dz", true),
            ("Rachid Bouzid", 33, "Male", "O+", "Bejaia", "+213555100009", "rachid.bouzid@email.dz", false),
            ("Sara Mansouri", 27, "Female", "A+", "Mostaganem", "+213555100010", "sara.mansouri@email.dz", true),
        ];

        let donors = rows.map(
            |(full_name, age, gender, blood_type, location, phone, email, is_active)| {
                entity::donor::ActiveModel {
                    full_name: ActiveValue::Set(full_name.to_string()),
                    age: ActiveValue::Set(age),
                    gender: ActiveValue::Set(gender.to_string()),
                    blood_type: ActiveValue::Set(blood_type.to_string()),
                    location: ActiveValue::Set(location.to_string()),
                    phone: ActiveValue::Set(phone.to_string()),
                    email: ActiveValue::Set(email.to_string()),
                    is_active: ActiveValue::Set(is_active),
                    created_at: ActiveValue::Set(Utc::now().naive_utc()),
                    ..Default::default()
                }
            },
        );

        entity::prelude::Donor::insert_many(donors)
            .exec(self.db)
            .await?;

        tracing::info!("Seeded 10 donors");

        Ok(())
    }

    async fn seed_hospitals(&self) -> Result<(), Error> {
        if entity::prelude::Hospital::find()
            .one(self.db)
            .await?
            .is_some()
        {
            return Ok(());
        }

        let rows = [
            ("City General Hospital", "Downtown Algiers", "+213555123456", "contact@cityhospital.dz", "123 Main Street, Downtown, Algiers", "Dr. Ahmed Benali", "approved"),
            ("Regional Medical Center", "North District", "+213555234567", "info@regionalmed.dz", "456 Healthcare Ave, North District", "Dr. Fatima Hadj", "approved"),
            ("University Hospital", "University Campus", "+213555345678", "contact@unihospital.dz", "University of Algiers, Campus Medical Center", "Prof. Karim Meziane", "pending"),
            ("Emergency Care Center", "Central Avenue", "+213555456789", "emergency@carecentr.dz", "789 Central Avenue, Algiers", "Dr. Leila Boumediene", "pending"),
            ("Community Health Clinic", "West Side", "+213555567890", "info@communityclinic.dz", "321 West Side Blvd", "Dr. Youssef Ammari", "pending"),
            ("Mustapha Pacha Hospital", "Central Algiers", "+213555678901", "contact@mustapha.dz", "Place du 1er Mai, Central Algiers", "Dr. Nadia Khelif", "rejected"),
        ];

        let hospitals = rows.map(
            |(name, location, phone, email, address, contact_person, status)| {
                entity::hospital::ActiveModel {
                    name: ActiveValue::Set(name.to_string()),
                    location: ActiveValue::Set(location.to_string()),
                    phone: ActiveValue::Set(phone.to_string()),
                    email: ActiveValue::Set(email.to_string()),
                    address: ActiveValue::Set(Some(address.to_string())),
                    contact_person: ActiveValue::Set(Some(contact_person.to_string())),
                    status: ActiveValue::Set(status.to_string()),
                    created_at: ActiveValue::Set(Utc::now().naive_utc()),
                    ..Default::default()
                }
            },
        );

        entity::prelude::Hospital::insert_many(hospitals)
            .exec(self.db)
            .await?;

        tracing::info!("Seeded 6 hospitals");

        Ok(())
    }

    async fn seed_blood_requests(&self) -> Result<(), Error> {
        if entity::prelude::BloodRequest::find()
            .one(self.db)
            .await?
            .is_some()
        {
            return Ok(());
        }

        let rows = [
            ("City General Hospital", "O-", 5, "critical", "Downtown Algiers", "+213555123456", "blood@cityhospital.dz", "pending"),
            ("Regional Medical Center", "A+", 3, "urgent", "North District", "+213555234567", "blood@regionalmed.dz", "approved"),
            ("University Hospital", "B+", 2, "normal", "University Campus", "+213555345678", "blood@unihospital.dz", "pending"),
            ("Emergency Care Center", "AB-", 4, "critical", "Central Avenue", "+213555456789", "blood@carecentr.dz", "pending"),
            ("Community Health Clinic", "O+", 6, "urgent", "West Side", "+213555567890", "blood@communityclinic.dz", "rejected"),
        ];

        let requests = rows.map(
            |(hospital_name, blood_type, units_needed, urgency_level, location, phone, email, status)| {
                entity::blood_request::ActiveModel {
                    hospital_name: ActiveValue::Set(hospital_name.to_string()),
                    blood_type: ActiveValue::Set(blood_type.to_string()),
                    units_needed: ActiveValue::Set(units_needed),
                    urgency_level: ActiveValue::Set(urgency_level.to_string()),
                    location: ActiveValue::Set(location.to_string()),
                    phone: ActiveValue::Set(phone.to_string()),
                    email: ActiveValue::Set(email.to_string()),
                    status: ActiveValue::Set(status.to_string()),
                    created_at: ActiveValue::Set(Utc::now().naive_utc()),
                    ..Default::default()
                }
            },
        );

        entity::prelude::BloodRequest::insert_many(requests)
            .exec(self.db)
            .await?;

        tracing::info!("Seeded 5 blood requests");

        Ok(())
    }

    async fn seed_statistics(&self) -> Result<(), Error> {
        let statistics_repository = StatisticsRepository::new(self.db);

        if statistics_repository.get().await?.is_some() {
            return Ok(());
        }

        statistics_repository.create(10, 204, 2).await?;

        tracing::info!("Seeded statistics");

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use lifeline_test_utils::prelude::*;
    use sea_orm::EntityTrait;

    use crate::server::{
        data::statistics::StatisticsRepository, service::seed::SeedService,
    };

    async fn setup() -> Result<TestSetup, TestError> {
        test_setup_with_tables!(
            entity::prelude::BloodInventory,
            entity::prelude::Donor,
            entity::prelude::Hospital,
            entity::prelude::BloodRequest,
            entity::prelude::Statistics,
        )
    }

    #[tokio::test]
    /// Expect a fresh database to receive the full sample data set
    async fn test_seed_fresh_database() -> Result<(), TestError> {
        let test = setup().await?;

        SeedService::new(&test.state.db).seed().await.unwrap();

        let db = &test.state.db;
        assert_eq!(entity::prelude::BloodInventory::find().all(db).await?.len(), 8);
        assert_eq!(entity::prelude::Donor::find().all(db).await?.len(), 10);
        assert_eq!(entity::prelude::Hospital::find().all(db).await?.len(), 6);
        assert_eq!(entity::prelude::BloodRequest::find().all(db).await?.len(), 5);

        let statistics = StatisticsRepository::new(db).get().await?.unwrap();
        assert_eq!(statistics.active_donors, 10);
        assert_eq!(statistics.total_blood_units, 204);
        assert_eq!(statistics.partner_hospitals, 2);

        Ok(())
    }

    #[tokio::test]
    /// Expect a second seeding pass to leave existing sample data alone
    async fn test_seed_is_idempotent() -> Result<(), TestError> {
        let test = setup().await?;
        let seed_service = SeedService::new(&test.state.db);

        seed_service.seed().await.unwrap();
        seed_service.seed().await.unwrap();

        let db = &test.state.db;
        assert_eq!(entity::prelude::Donor::find().all(db).await?.len(), 10);
        assert_eq!(entity::prelude::Hospital::find().all(db).await?.len(), 6);

        Ok(())
    }
}
