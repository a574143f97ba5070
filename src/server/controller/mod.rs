//! HTTP controller endpoints for the Lifeline web API.
//!
//! Axum handlers for donor registration, hospital applications, blood
//! requests, statistics, and authentication. Controllers validate inputs,
//! call into the service layer, and map results to HTTP responses. Session
//! state goes through tower-sessions; OpenAPI documentation through utoipa.

pub mod auth;
pub mod blood_request;
pub mod donor;
pub mod hospital;
pub mod inventory;
pub mod statistics;
