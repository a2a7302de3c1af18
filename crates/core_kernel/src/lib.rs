//! Core Kernel - Foundational types for the payout system
//!
//! This crate provides the building blocks shared by the payee and expense domains:
//! - Strongly-typed identifiers for store-assigned identities
//! - The `Entity` wrapper that pairs an identity with its validated record

pub mod identifiers;
pub mod entity;

pub use identifiers::{PayeeId, ExpenseId, IdParseError};
pub use entity::Entity;
