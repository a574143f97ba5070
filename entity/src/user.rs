//! User account entity.

use chrono::NaiveDateTime;
use sea_orm::entity::prelude::*;

/// Admin user database model.
///
/// The `password` column holds a `salt:hash` composite produced by the
/// credential service, never a plaintext password.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub username: String,
    pub password: String,
    pub created_at: NaiveDateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
