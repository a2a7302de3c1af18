//! Payee Domain
//!
//! This crate holds the payee (beneficiary) record used by the payout workflow:
//! who gets paid, and into which bank account.
//!
//! A `Payee` can only be obtained through [`Payee::new`], which runs every
//! validation rule in a fixed order and reports the first one that fails.
//! Once built, a payee is immutable; updates replace the whole record.
//!
//! # Examples
//!
//! ```rust
//! use domain_payee::{Payee, PayeeDetails, PayeeCategory};
//!
//! let payee = Payee::new(PayeeDetails {
//!     beneficiary_name: "Asha Rao".to_string(),
//!     beneficiary_code: "EMP-001".to_string(),
//!     account_number: "1234567890123456".to_string(),
//!     ifsc_code: "CBIN0123456".to_string(),
//!     bank_name: "Central Bank".to_string(),
//!     email: "asha@example.com".to_string(),
//!     mobile: "9876543210".to_string(),
//!     category: "Employee".to_string(),
//! }).unwrap();
//!
//! assert_eq!(payee.category(), PayeeCategory::Employee);
//! ```

pub mod payee;
pub mod error;
pub mod validation;

pub use payee::{Payee, PayeeCategory, PayeeDetails, PayeeEntity};
pub use error::PayeeError;
pub use validation::PayeeValidator;
