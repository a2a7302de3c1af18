//! Infrastructure Database Layer
//!
//! This crate provides PostgreSQL persistence for payees and expenses using SQLx.
//!
//! # Architecture
//!
//! The crate follows the repository pattern. Each repository owns a clone of the
//! connection pool and maps between database rows and domain types:
//!
//! - [`PayeeRepository`]: payees, with soft delete
//! - [`ExpenseRepository`]: expenses, with hard delete
//! - [`PayoutRepository`]: the read-only payout preview
//!
//! List operations accept a [`ListQuery`], which the [`query`] module compiles
//! into a parameterized statement. Sort keys are resolved through a fixed
//! allow-list and every user-supplied value is bound, never interpolated.
//!
//! Write failures caused by uniqueness and foreign-key constraints are
//! classified by constraint name into specific [`DatabaseError`] variants.
//!
//! # Example
//!
//! ```rust,ignore
//! use infra_db::{create_pool, run_migrations, DatabaseConfig, PayeeRepository};
//!
//! let pool = create_pool(DatabaseConfig::new("postgres://localhost/payouts")).await?;
//! run_migrations(&pool).await?;
//! let payees = PayeeRepository::new(pool);
//! ```

pub mod pool;
pub mod error;
pub mod constraint;
pub mod query;
pub mod repositories;

pub use pool::{create_pool, run_migrations, DatabaseConfig, DatabasePool};
pub use error::DatabaseError;
pub use query::{ListFilter, ListQuery, SortDirection, WhereClause, MAX_LIMIT};
pub use repositories::{
    ExpenseFilter, ExpenseRepository, PayeeFilter, PayeeRepository, PayoutRepository,
};
