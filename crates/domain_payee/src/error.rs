//! Payee domain errors
//!
//! Validation errors are unit variants so callers can match on them directly.
//! They never carry storage failures; those live in the database layer.

use thiserror::Error;

/// Reasons a payee record is rejected by [`crate::Payee::new`]
///
/// Variants are listed in the order the rules are checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PayeeError {
    #[error("invalid name: beneficiary name is empty")]
    EmptyName,

    #[error("invalid code: beneficiary code is empty")]
    EmptyCode,

    #[error("invalid account number: must be exactly 16 digits")]
    InvalidAccountNumber,

    #[error("invalid mobile number: must be exactly 10 digits")]
    InvalidMobileNumber,

    #[error("invalid email: missing '@'")]
    InvalidEmail,

    #[error("invalid IFSC code: expected 4 uppercase letters, '0', then 6 uppercase letters or digits")]
    InvalidIfsc,

    #[error("invalid bank name: exceeds 50 characters")]
    InvalidBankName,

    #[error("invalid payee category: must be Employee or Vendor")]
    InvalidCategory,
}
