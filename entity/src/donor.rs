//! Registered blood donor entity.

use chrono::NaiveDateTime;
use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "donors")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub full_name: String,
    pub age: i32,
    pub gender: String,
    /// One of the 8 ABO/Rh types, e.g. "O+" or "AB-".
    pub blood_type: String,
    pub location: String,
    pub phone: String,
    pub email: String,
    pub is_active: bool,
    pub created_at: NaiveDateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
