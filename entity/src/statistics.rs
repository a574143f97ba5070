//! Landing-page statistics entity.

use chrono::NaiveDateTime;
use sea_orm::entity::prelude::*;

/// Statistics database model.
///
/// A single-row aggregate: `active_donors` and `partner_hospitals` are
/// incrementally maintained counters, bumped by donor registration and
/// hospital approval respectively.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "statistics")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub active_donors: i32,
    pub total_blood_units: i32,
    pub partner_hospitals: i32,
    pub last_updated: NaiveDateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
