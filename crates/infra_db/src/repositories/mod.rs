//! Repository implementations for domain entities
//!
//! This module provides concrete repository implementations that handle
//! database access for each domain aggregate. Repositories encapsulate
//! SQL queries and map between database rows and domain types.
//!
//! # Architecture
//!
//! Each repository follows these principles:
//! - One statement per call, on a connection borrowed from the shared pool
//! - Writes classify constraint violations by name
//! - Reads of missing (or soft-deleted) rows are `NotFound`

pub mod payee;
pub mod expense;
pub mod payout;

pub use payee::{PayeeFilter, PayeeRepository, PayeeRow};
pub use expense::{ExpenseFilter, ExpenseRepository, ExpenseRow};
pub use payout::{PayoutLineRow, PayoutRepository};
