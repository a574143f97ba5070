use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Donors::Table)
                    .if_not_exists()
                    .col(pk_auto(Donors::Id))
                    .col(text(Donors::FullName))
                    .col(integer(Donors::Age))
                    .col(text(Donors::Gender))
                    .col(text(Donors::BloodType))
                    .col(text(Donors::Location))
                    .col(text(Donors::Phone))
                    .col(text(Donors::Email))
                    .col(boolean(Donors::IsActive).default(true))
                    .col(timestamp(Donors::CreatedAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Donors::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Donors {
    Table,
    Id,
    FullName,
    Age,
    Gender,
    BloodType,
    Location,
    Phone,
    Email,
    IsActive,
    CreatedAt,
}
