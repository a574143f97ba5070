use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter,
};

use crate::model::{hospital::CreateHospitalDto, status::RecordStatus};

pub struct HospitalRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> HospitalRepository<'a> {
    /// Creates a new instance of [`HospitalRepository`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new hospital application; applications always start pending.
    pub async fn create(
        &self,
        hospital: CreateHospitalDto,
    ) -> Result<entity::hospital::Model, DbErr> {
        let hospital = entity::hospital::ActiveModel {
            name: ActiveValue::Set(hospital.name),
            location: ActiveValue::Set(hospital.location),
            phone: ActiveValue::Set(hospital.phone),
            email: ActiveValue::Set(hospital.email),
            address: ActiveValue::Set(hospital.address),
            contact_person: ActiveValue::Set(hospital.contact_person),
            status: ActiveValue::Set(RecordStatus::Pending.as_str().to_string()),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        hospital.insert(self.db).await
    }

    pub async fn get_all(&self) -> Result<Vec<entity::hospital::Model>, DbErr> {
        entity::prelude::Hospital::find().all(self.db).await
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<entity::hospital::Model>, DbErr> {
        entity::prelude::Hospital::find_by_id(id).one(self.db).await
    }

    /// Sets the status of a hospital, returning the updated row.
    ///
    /// Returns `Ok(None)` when no hospital with the given ID exists; nothing
    /// is written in that case.
    pub async fn update_status(
        &self,
        id: i32,
        status: RecordStatus,
    ) -> Result<Option<entity::hospital::Model>, DbErr> {
        let Some(hospital) = self.get_by_id(id).await? else {
            return Ok(None);
        };

        let mut hospital: entity::hospital::ActiveModel = hospital.into();
        hospital.status = ActiveValue::Set(status.as_str().to_string());

        Ok(Some(hospital.update(self.db).await?))
    }

    pub async fn count_by_status(&self, status: RecordStatus) -> Result<u64, DbErr> {
        use sea_orm::PaginatorTrait;

        entity::prelude::Hospital::find()
            .filter(entity::hospital::Column::Status.eq(status.as_str()))
            .count(self.db)
            .await
    }
}
