use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Statistics::Table)
                    .if_not_exists()
                    .col(pk_auto(Statistics::Id))
                    .col(integer(Statistics::ActiveDonors).default(0))
                    .col(integer(Statistics::TotalBloodUnits).default(0))
                    .col(integer(Statistics::PartnerHospitals).default(0))
                    .col(timestamp(Statistics::LastUpdated))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Statistics::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Statistics {
    Table,
    Id,
    ActiveDonors,
    TotalBloodUnits,
    PartnerHospitals,
    LastUpdated,
}
