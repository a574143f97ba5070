use chrono::Utc;
use sea_orm::{
    sea_query::OnConflict, ActiveValue, DatabaseConnection, DbErr, EntityTrait,
};

pub struct BloodInventoryRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BloodInventoryRepository<'a> {
    /// Creates a new instance of [`BloodInventoryRepository`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_all(&self) -> Result<Vec<entity::blood_inventory::Model>, DbErr> {
        entity::prelude::BloodInventory::find().all(self.db).await
    }

    /// Inserts or refreshes the reference stock row for one blood type.
    ///
    /// Keyed on the unique `blood_type` column; an existing row gets its
    /// units, status, and timestamp replaced.
    pub async fn upsert(
        &self,
        blood_type: &str,
        units_available: i32,
        status: &str,
    ) -> Result<(), DbErr> {
        let row = entity::blood_inventory::ActiveModel {
            blood_type: ActiveValue::Set(blood_type.to_string()),
            units_available: ActiveValue::Set(units_available),
            status: ActiveValue::Set(status.to_string()),
            last_updated: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        entity::prelude::BloodInventory::insert(row)
            .on_conflict(
                OnConflict::column(entity::blood_inventory::Column::BloodType)
                    .update_columns([
                        entity::blood_inventory::Column::UnitsAvailable,
                        entity::blood_inventory::Column::Status,
                        entity::blood_inventory::Column::LastUpdated,
                    ])
                    .to_owned(),
            )
            .exec(self.db)
            .await?;

        Ok(())
    }
}
