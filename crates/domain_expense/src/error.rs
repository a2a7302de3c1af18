//! Expense domain errors

use thiserror::Error;

/// Reasons an expense is rejected by [`crate::Expense::new`]
///
/// Variants are listed in the order the rules are checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ExpenseError {
    #[error("title should not be empty")]
    InvalidTitle,

    #[error("amount must be greater than 0 with at most 2 decimal places and below 10000000000")]
    InvalidAmount,

    #[error("invalid date values or format (YYYY-MM-DD)")]
    InvalidDate,

    #[error("category should not be empty")]
    InvalidCategory,

    #[error("payee id must be positive")]
    InvalidPayeeId,

    #[error("invalid receipt URI - must be a file path")]
    InvalidReceiptUri,
}

/// Error returned when an expense status cannot be parsed
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown expense status: '{0}'")]
pub struct ParseStatusError(pub String);
