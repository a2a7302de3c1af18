//! Payee validation rules
//!
//! Each rule is a small predicate. [`PayeeValidator::validate`] runs them in a
//! fixed order and stops at the first failure, so a record that breaks several
//! rules always reports the same error.
//!
//! # Validation Rules
//!
//! 1. Beneficiary name must not be empty
//! 2. Beneficiary code must not be empty
//! 3. Account number must be exactly 16 digits
//! 4. Mobile number must be exactly 10 digits
//! 5. Email must contain `@`
//! 6. IFSC code must match `^[A-Z]{4}0[A-Z0-9]{6}$`
//! 7. Bank name must be at most 50 characters
//! 8. Category must be one of the known payee categories

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::PayeeError;
use crate::payee::{PayeeCategory, PayeeDetails};

/// Number of digits in a bank account number
pub const ACCOUNT_NUMBER_DIGITS: usize = 16;

/// Number of digits in a mobile number
pub const MOBILE_DIGITS: usize = 10;

/// Maximum bank name length, in characters
pub const MAX_BANK_NAME_LEN: usize = 50;

static IFSC_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Z]{4}0[A-Z0-9]{6}$").expect("IFSC pattern is a valid regex"));

/// Validator for payee details
pub struct PayeeValidator;

impl PayeeValidator {
    /// Checks every rule in order and returns the parsed category on success
    ///
    /// # Errors
    ///
    /// Returns the [`PayeeError`] of the first rule that fails.
    pub fn validate(details: &PayeeDetails) -> Result<PayeeCategory, PayeeError> {
        if details.beneficiary_name.is_empty() {
            return Err(PayeeError::EmptyName);
        }
        if details.beneficiary_code.is_empty() {
            return Err(PayeeError::EmptyCode);
        }
        if !is_valid_account_number(&details.account_number) {
            return Err(PayeeError::InvalidAccountNumber);
        }
        if !is_valid_mobile(&details.mobile) {
            return Err(PayeeError::InvalidMobileNumber);
        }
        if !is_valid_email(&details.email) {
            return Err(PayeeError::InvalidEmail);
        }
        if !is_valid_ifsc(&details.ifsc_code) {
            return Err(PayeeError::InvalidIfsc);
        }
        if !is_valid_bank_name(&details.bank_name) {
            return Err(PayeeError::InvalidBankName);
        }
        details
            .category
            .parse::<PayeeCategory>()
            .map_err(|_| PayeeError::InvalidCategory)
    }
}

fn is_all_digits(value: &str, count: usize) -> bool {
    value.len() == count && value.bytes().all(|b| b.is_ascii_digit())
}

/// Returns true if the account number has exactly 16 decimal digits
pub fn is_valid_account_number(value: &str) -> bool {
    is_all_digits(value, ACCOUNT_NUMBER_DIGITS)
}

/// Returns true if the mobile number has exactly 10 decimal digits
pub fn is_valid_mobile(value: &str) -> bool {
    is_all_digits(value, MOBILE_DIGITS)
}

/// Returns true if the email contains an `@`
pub fn is_valid_email(value: &str) -> bool {
    value.contains('@')
}

/// Returns true if the value is a well-formed IFSC code
///
/// Lowercase letters are rejected anywhere in the code.
pub fn is_valid_ifsc(value: &str) -> bool {
    IFSC_PATTERN.is_match(value)
}

/// Returns true if the bank name fits in 50 characters
pub fn is_valid_bank_name(value: &str) -> bool {
    value.chars().count() <= MAX_BANK_NAME_LEN
}
