pub use sea_orm_migration::prelude::*;

mod m20260730_000001_create_users_table;
mod m20260730_000002_create_donors_table;
mod m20260730_000003_create_blood_inventory_table;
mod m20260730_000004_create_hospitals_table;
mod m20260730_000005_create_blood_requests_table;
mod m20260730_000006_create_statistics_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260730_000001_create_users_table::Migration),
            Box::new(m20260730_000002_create_donors_table::Migration),
            Box::new(m20260730_000003_create_blood_inventory_table::Migration),
            Box::new(m20260730_000004_create_hospitals_table::Migration),
            Box::new(m20260730_000005_create_blood_requests_table::Migration),
            Box::new(m20260730_000006_create_statistics_table::Migration),
        ]
    }
}
