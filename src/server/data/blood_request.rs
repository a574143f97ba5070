use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter,
};

use crate::model::{blood_request::CreateBloodRequestDto, status::RecordStatus};

pub struct BloodRequestRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BloodRequestRepository<'a> {
    /// Creates a new instance of [`BloodRequestRepository`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new blood request; requests always start pending.
    pub async fn create(
        &self,
        request: CreateBloodRequestDto,
    ) -> Result<entity::blood_request::Model, DbErr> {
        let request = entity::blood_request::ActiveModel {
            hospital_name: ActiveValue::Set(request.hospital_name),
            blood_type: ActiveValue::Set(request.blood_type),
            units_needed: ActiveValue::Set(request.units_needed),
            urgency_level: ActiveValue::Set(request.urgency_level),
            location: ActiveValue::Set(request.location),
            phone: ActiveValue::Set(request.phone),
            email: ActiveValue::Set(request.email),
            status: ActiveValue::Set(RecordStatus::Pending.as_str().to_string()),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        request.insert(self.db).await
    }

    pub async fn get_all(&self) -> Result<Vec<entity::blood_request::Model>, DbErr> {
        entity::prelude::BloodRequest::find().all(self.db).await
    }

    pub async fn get_by_id(
        &self,
        id: i32,
    ) -> Result<Option<entity::blood_request::Model>, DbErr> {
        entity::prelude::BloodRequest::find_by_id(id)
            .one(self.db)
            .await
    }

    /// Sets the status of a blood request, returning the updated row.
    ///
    /// Returns `Ok(None)` when no request with the given ID exists; nothing
    /// is written in that case.
    pub async fn update_status(
        &self,
        id: i32,
        status: RecordStatus,
    ) -> Result<Option<entity::blood_request::Model>, DbErr> {
        let Some(request) = self.get_by_id(id).await? else {
            return Ok(None);
        };

        let mut request: entity::blood_request::ActiveModel = request.into();
        request.status = ActiveValue::Set(status.as_str().to_string());

        Ok(Some(request.update(self.db).await?))
    }

    pub async fn count_by_status(&self, status: RecordStatus) -> Result<u64, DbErr> {
        use sea_orm::PaginatorTrait;

        entity::prelude::BloodRequest::find()
            .filter(entity::blood_request::Column::Status.eq(status.as_str()))
            .count(self.db)
            .await
    }
}
