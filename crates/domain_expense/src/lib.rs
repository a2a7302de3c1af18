//! Expense Domain
//!
//! This crate manages expenses recorded against payees and the payout preview
//! built from them.
//!
//! An `Expense` is created through [`Expense::new`], which checks the title,
//! amount, date, category, payee reference, and receipt path in that order.
//! New expenses start out `Pending`; the payout preview gathers every pending
//! expense together with its payee's bank details and an exact total.
//!
//! # Examples
//!
//! ```rust
//! use domain_expense::{Expense, ExpenseDetails, ExpenseStatus};
//! use chrono::NaiveDate;
//! use rust_decimal_macros::dec;
//!
//! let today = NaiveDate::from_ymd_opt(2025, 9, 1).unwrap();
//! let expense = Expense::new_as_of(ExpenseDetails {
//!     title: "Lunch".to_string(),
//!     amount: dec!(450.00),
//!     date_incurred: "2025-09-02".to_string(),
//!     category: "Food".to_string(),
//!     notes: "Team lunch".to_string(),
//!     payee_id: 1,
//!     receipt_uri: "/receipts/lunch.jpg".to_string(),
//! }, today).unwrap();
//!
//! assert_eq!(expense.status(), ExpenseStatus::Pending);
//! ```

pub mod expense;
pub mod error;
pub mod payout;

pub use expense::{Expense, ExpenseDetails, ExpenseEntity, ExpenseParts, ExpenseStatus};
pub use error::{ExpenseError, ParseStatusError};
pub use payout::{PayoutLine, PayoutPreview};
