use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait};

use crate::model::donor::CreateDonorDto;

pub struct DonorRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> DonorRepository<'a> {
    /// Creates a new instance of [`DonorRepository`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new donor; registrations always start active.
    pub async fn create(&self, donor: CreateDonorDto) -> Result<entity::donor::Model, DbErr> {
        let donor = entity::donor::ActiveModel {
            full_name: ActiveValue::Set(donor.full_name),
            age: ActiveValue::Set(donor.age),
            gender: ActiveValue::Set(donor.gender),
            blood_type: ActiveValue::Set(donor.blood_type),
            location: ActiveValue::Set(donor.location),
            phone: ActiveValue::Set(donor.phone),
            email: ActiveValue::Set(donor.email),
            is_active: ActiveValue::Set(true),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        donor.insert(self.db).await
    }

    pub async fn get_all(&self) -> Result<Vec<entity::donor::Model>, DbErr> {
        entity::prelude::Donor::find().all(self.db).await
    }
}
