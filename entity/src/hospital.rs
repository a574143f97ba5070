//! Hospital registration application entity.

use chrono::NaiveDateTime;
use sea_orm::entity::prelude::*;

/// Hospital database model.
///
/// `status` is one of `pending`, `approved`, or `rejected`; new applications
/// start as `pending` and are moved by the status service.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "hospitals")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub location: String,
    pub phone: String,
    pub email: String,
    pub address: Option<String>,
    pub contact_person: Option<String>,
    pub status: String,
    pub created_at: NaiveDateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
