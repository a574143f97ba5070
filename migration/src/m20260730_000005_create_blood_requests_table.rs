use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(BloodRequests::Table)
                    .if_not_exists()
                    .col(pk_auto(BloodRequests::Id))
                    .col(text(BloodRequests::HospitalName))
                    .col(text(BloodRequests::BloodType))
                    .col(integer(BloodRequests::UnitsNeeded))
                    .col(text(BloodRequests::UrgencyLevel))
                    .col(text(BloodRequests::Location))
                    .col(text(BloodRequests::Phone))
                    .col(text(BloodRequests::Email))
                    .col(text(BloodRequests::Status).default("pending"))
                    .col(timestamp(BloodRequests::CreatedAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(BloodRequests::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum BloodRequests {
    Table,
    Id,
    HospitalName,
    BloodType,
    UnitsNeeded,
    UrgencyLevel,
    Location,
    Phone,
    Email,
    Status,
    CreatedAt,
}
