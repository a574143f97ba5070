use chrono::Utc;
use sea_orm::{
    sea_query::{Expr, ExprTrait},
    ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait,
};

pub struct StatisticsRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> StatisticsRepository<'a> {
    /// Creates a new instance of [`StatisticsRepository`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Fetches the statistics singleton row, if seeded.
    pub async fn get(&self) -> Result<Option<entity::statistics::Model>, DbErr> {
        entity::prelude::Statistics::find().one(self.db).await
    }

    /// Inserts the statistics singleton with its starting counter values.
    pub async fn create(
        &self,
        active_donors: i32,
        total_blood_units: i32,
        partner_hospitals: i32,
    ) -> Result<entity::statistics::Model, DbErr> {
        let statistics = entity::statistics::ActiveModel {
            active_donors: ActiveValue::Set(active_donors),
            total_blood_units: ActiveValue::Set(total_blood_units),
            partner_hospitals: ActiveValue::Set(partner_hospitals),
            last_updated: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        statistics.insert(self.db).await
    }

    /// Bumps `active_donors` by one.
    ///
    /// The increment runs as a single `SET active_donors = active_donors + 1`
    /// expression so concurrent bumps cannot lose updates. Affects zero rows
    /// when the singleton has not been seeded; callers treat that as a no-op.
    pub async fn increment_active_donors(&self) -> Result<u64, DbErr> {
        self.increment(entity::statistics::Column::ActiveDonors).await
    }

    /// Bumps `partner_hospitals` by one. Same write semantics as
    /// [`Self::increment_active_donors`].
    pub async fn increment_partner_hospitals(&self) -> Result<u64, DbErr> {
        self.increment(entity::statistics::Column::PartnerHospitals)
            .await
    }

    async fn increment(&self, column: entity::statistics::Column) -> Result<u64, DbErr> {
        let result = entity::prelude::Statistics::update_many()
            .col_expr(column, Expr::col(column).add(1))
            .col_expr(
                entity::statistics::Column::LastUpdated,
                Expr::value(Utc::now().naive_utc()),
            )
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
