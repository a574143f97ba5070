use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(BloodInventory::Table)
                    .if_not_exists()
                    .col(pk_auto(BloodInventory::Id))
                    .col(text(BloodInventory::BloodType).unique_key())
                    .col(integer(BloodInventory::UnitsAvailable).default(0))
                    .col(text(BloodInventory::Status).default("Available"))
                    .col(timestamp(BloodInventory::LastUpdated))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(BloodInventory::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum BloodInventory {
    Table,
    Id,
    BloodType,
    UnitsAvailable,
    Status,
    LastUpdated,
}
