//! Lifeline - blood donation coordination platform.
//!
//! Connects blood donors with hospitals: donors register their availability,
//! hospitals apply for platform access and submit blood requests, and
//! administrators review both through a dashboard backed by aggregated
//! statistics.

pub mod model;
pub mod server;
