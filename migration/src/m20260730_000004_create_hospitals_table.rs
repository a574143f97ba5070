use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Hospitals::Table)
                    .if_not_exists()
                    .col(pk_auto(Hospitals::Id))
                    .col(text(Hospitals::Name))
                    .col(text(Hospitals::Location))
                    .col(text(Hospitals::Phone))
                    .col(text(Hospitals::Email))
                    .col(text_null(Hospitals::Address))
                    .col(text_null(Hospitals::ContactPerson))
                    .col(text(Hospitals::Status).default("pending"))
                    .col(timestamp(Hospitals::CreatedAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Hospitals::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Hospitals {
    Table,
    Id,
    Name,
    Location,
    Phone,
    Email,
    Address,
    ContactPerson,
    Status,
    CreatedAt,
}
