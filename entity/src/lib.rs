//! SeaORM entity definitions for the Lifeline database schema.

pub mod blood_inventory;
pub mod blood_request;
pub mod donor;
pub mod hospital;
pub mod statistics;
pub mod user;

pub mod prelude;
