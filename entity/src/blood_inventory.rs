//! Blood inventory reference stock entity.

use chrono::NaiveDateTime;
use sea_orm::entity::prelude::*;

/// Blood inventory database model, one row per blood type.
///
/// `status` (`Available`/`Low`/`Critical`) is informational seed data; it is
/// not recomputed from `units_available` by the server.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "blood_inventory")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub blood_type: String,
    pub units_available: i32,
    pub status: String,
    pub last_updated: NaiveDateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
