//! Shared test harness for the Lifeline workspace.
//!
//! Provides an in-memory SQLite database with per-test table creation and a
//! memory-backed session, so repository, service, and controller tests run
//! without external infrastructure.

pub mod error;
pub mod setup;

pub use error::TestError;
pub use setup::{TestAppState, TestSetup};

pub mod prelude {
    pub use crate::{test_setup_with_tables, TestError, TestSetup};
}
