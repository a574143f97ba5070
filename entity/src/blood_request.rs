//! Blood request entity.

use chrono::NaiveDateTime;
use sea_orm::entity::prelude::*;

/// Blood request database model.
///
/// `hospital_name` is free text, not a foreign key into `hospitals`: requests
/// may reference hospitals that never registered on the platform.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "blood_requests")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub hospital_name: String,
    pub blood_type: String,
    pub units_needed: i32,
    /// One of `critical`, `urgent`, or `normal`.
    pub urgency_level: String,
    pub location: String,
    pub phone: String,
    pub email: String,
    pub status: String,
    pub created_at: NaiveDateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
