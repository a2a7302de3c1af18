//! Test Utilities Crate
//!
//! Provides shared test infrastructure, fixtures, and helpers for the payout
//! system test suite.
//!
//! # Modules
//!
//! - `fixtures`: Pre-built test data for payees and expenses
//! - `builders`: Builder patterns for test data construction
//! - `database`: A migrated, truncated PostgreSQL handle for integration tests

pub mod fixtures;
pub mod builders;
pub mod database;

pub use fixtures::*;
pub use builders::*;
pub use database::*;
