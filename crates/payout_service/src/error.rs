//! Service error handling
//!
//! Every failure surfaces as a [`ServiceError`]. Callers that need to pick a
//! response (an HTTP status, an exit code) use [`ServiceError::class`] instead of
//! matching on messages.

use thiserror::Error;

use domain_expense::ExpenseError;
use domain_payee::PayeeError;
use infra_db::DatabaseError;

/// Service error types
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("invalid payee: {0}")]
    InvalidPayee(#[from] PayeeError),

    #[error("invalid expense: {0}")]
    InvalidExpense(#[from] ExpenseError),

    #[error("invalid {name} parameter: '{value}'")]
    InvalidParameter { name: &'static str, value: String },

    #[error(transparent)]
    Database(#[from] DatabaseError),
}

/// Coarse category of a [`ServiceError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorClass {
    /// The caller sent something that can never succeed as is
    InvalidInput,
    /// The request clashes with existing data
    Conflict,
    /// The addressed record does not exist
    NotFound,
    /// Anything the caller cannot fix
    Internal,
}

impl ErrorClass {
    /// HTTP status code conventionally used for this class
    pub fn status_code(&self) -> u16 {
        match self {
            ErrorClass::InvalidInput => 400,
            ErrorClass::Conflict => 409,
            ErrorClass::NotFound => 404,
            ErrorClass::Internal => 500,
        }
    }
}

impl ServiceError {
    pub fn class(&self) -> ErrorClass {
        match self {
            ServiceError::InvalidPayee(_)
            | ServiceError::InvalidExpense(_)
            | ServiceError::InvalidParameter { .. } => ErrorClass::InvalidInput,
            ServiceError::Database(err) => match err {
                DatabaseError::InvalidPagination(_) => ErrorClass::InvalidInput,
                DatabaseError::DuplicateCode
                | DatabaseError::DuplicateAccount
                | DatabaseError::DuplicateEmail
                | DatabaseError::DuplicateMobile => ErrorClass::Conflict,
                DatabaseError::NotFound { .. } | DatabaseError::UnknownPayee(_) => ErrorClass::NotFound,
                DatabaseError::ConnectionFailed(_)
                | DatabaseError::MigrationFailed(_)
                | DatabaseError::InvalidData(_)
                | DatabaseError::SqlError(_) => ErrorClass::Internal,
            },
        }
    }
}
