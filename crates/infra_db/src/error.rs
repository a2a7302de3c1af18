//! Database error types
//!
//! This module defines the error types that can occur during database operations.
//! Constraint violations the domain cares about are classified into dedicated
//! variants (see [`crate::constraint`]); everything else is carried unclassified
//! as [`DatabaseError::SqlError`].

use core_kernel::PayeeId;
use thiserror::Error;

/// Errors that can occur during database operations
#[derive(Debug, Error)]
pub enum DatabaseError {
    /// Failed to establish a database connection
    #[error("Failed to connect to database: {0}")]
    ConnectionFailed(String),

    /// Migration error
    #[error("Migration failed: {0}")]
    MigrationFailed(String),

    /// Entity not found in database, or soft-deleted
    #[error("{entity} with id '{id}' not found")]
    NotFound { entity: &'static str, id: String },

    /// Another payee already uses this beneficiary code
    #[error("beneficiary code already exists")]
    DuplicateCode,

    /// Another payee already uses this account number
    #[error("account number already exists")]
    DuplicateAccount,

    /// Another payee already uses this email
    #[error("email already exists")]
    DuplicateEmail,

    /// Another payee already uses this mobile number
    #[error("mobile number already exists")]
    DuplicateMobile,

    /// An expense references a payee that does not exist
    #[error("payee {0} does not exist")]
    UnknownPayee(PayeeId),

    /// Limit or offset outside the accepted range
    #[error("invalid pagination parameters: {0}")]
    InvalidPagination(String),

    /// A stored row could not be mapped back into a domain type
    #[error("invalid stored data: {0}")]
    InvalidData(String),

    /// Generic SQL error
    #[error("SQL error: {0}")]
    SqlError(#[from] sqlx::Error),
}

impl DatabaseError {
    /// Creates a not found error for a specific entity type and identifier
    ///
    /// # Arguments
    ///
    /// * `entity` - The type of entity (e.g., "Payee", "Expense")
    /// * `id` - The identifier that was not found
    ///
    /// # Example
    ///
    /// ```rust
    /// use infra_db::DatabaseError;
    ///
    /// let error = DatabaseError::not_found("Payee", "PAYEE-7");
    /// assert!(error.to_string().contains("Payee"));
    /// assert!(error.is_not_found());
    /// ```
    pub fn not_found(entity: &'static str, id: impl std::fmt::Display) -> Self {
        DatabaseError::NotFound {
            entity,
            id: id.to_string(),
        }
    }

    /// Creates an invalid pagination error with a short reason
    pub fn invalid_pagination(reason: impl Into<String>) -> Self {
        DatabaseError::InvalidPagination(reason.into())
    }

    /// Checks if this error indicates a record was not found
    pub fn is_not_found(&self) -> bool {
        matches!(self, DatabaseError::NotFound { .. })
    }
}

impl From<sqlx::migrate::MigrateError> for DatabaseError {
    fn from(error: sqlx::migrate::MigrateError) -> Self {
        DatabaseError::MigrationFailed(error.to_string())
    }
}
