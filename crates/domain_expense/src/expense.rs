//! Expense entity and its validation
//!
//! # Validation Rules
//!
//! Checked in this order; the first failure is returned:
//!
//! 1. Title must not be empty
//! 2. Amount must be greater than zero, have at most two decimal places, and
//!    stay below 10^10 (the range of a `NUMERIC(12,2)` column)
//! 3. Date must be `YYYY-MM-DD`, fall within 2025..=2050, and not be before today
//! 4. Category must not be empty
//! 5. Payee id must be positive
//! 6. Receipt URI must be an absolute path (start with `/`)
//!
//! Notes are free text and never checked.

use chrono::{Datelike, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use core_kernel::{Entity, ExpenseId, PayeeId};
use crate::error::{ExpenseError, ParseStatusError};

/// A persisted expense with its store-assigned identity
pub type ExpenseEntity = Entity<ExpenseId, Expense>;

/// Earliest accepted year for an expense date
pub const MIN_YEAR: i32 = 2025;

/// Latest accepted year for an expense date
pub const MAX_YEAR: i32 = 2050;

/// Expected format of the incurred date
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Decimal places an amount may carry
pub const AMOUNT_SCALE: u32 = 2;

/// Digits allowed before the decimal point
pub const AMOUNT_INTEGER_DIGITS: u32 = 10;

/// Payment status of an expense
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ExpenseStatus {
    /// Waiting to be included in a payout
    #[default]
    Pending,
    /// Already paid out
    Paid,
}

impl ExpenseStatus {
    /// Returns the canonical spelling used in the store
    pub fn as_str(&self) -> &'static str {
        match self {
            ExpenseStatus::Pending => "Pending",
            ExpenseStatus::Paid => "Paid",
        }
    }
}

impl fmt::Display for ExpenseStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExpenseStatus {
    type Err = ParseStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Pending" => Ok(ExpenseStatus::Pending),
            "Paid" => Ok(ExpenseStatus::Paid),
            other => Err(ParseStatusError(other.to_string())),
        }
    }
}

/// Raw expense fields as supplied by a caller, before validation
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpenseDetails {
    pub title: String,
    pub amount: Decimal,
    /// Calendar date in `YYYY-MM-DD` form
    pub date_incurred: String,
    pub category: String,
    pub notes: String,
    pub payee_id: i64,
    pub receipt_uri: String,
}

/// Already-typed expense fields, used to rebuild an expense from storage
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpenseParts {
    pub title: String,
    pub amount: Decimal,
    pub date_incurred: NaiveDate,
    pub category: String,
    pub notes: String,
    pub payee_id: PayeeId,
    pub receipt_uri: String,
    pub status: ExpenseStatus,
}

/// A validated, immutable expense
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expense {
    title: String,
    amount: Decimal,
    date_incurred: NaiveDate,
    category: String,
    notes: String,
    payee_id: PayeeId,
    receipt_uri: String,
    status: ExpenseStatus,
}

impl Expense {
    /// Validates the details against today's UTC date and builds a pending expense
    ///
    /// # Errors
    ///
    /// Returns the [`ExpenseError`] for the first rule the details violate.
    pub fn new(details: ExpenseDetails) -> Result<Self, ExpenseError> {
        Self::new_as_of(details, Utc::now().date_naive())
    }

    /// Validates the details against an explicit reference day
    ///
    /// # Arguments
    ///
    /// * `details` - Raw expense fields
    /// * `today` - The day treated as "now" when rejecting past dates
    ///
    /// # Errors
    ///
    /// Returns the [`ExpenseError`] for the first rule the details violate.
    pub fn new_as_of(details: ExpenseDetails, today: NaiveDate) -> Result<Self, ExpenseError> {
        if details.title.is_empty() {
            return Err(ExpenseError::InvalidTitle);
        }
        if !is_storable_amount(details.amount) {
            return Err(ExpenseError::InvalidAmount);
        }
        let date_incurred =
            parse_incurred_date(&details.date_incurred, today).ok_or(ExpenseError::InvalidDate)?;
        if details.category.is_empty() {
            return Err(ExpenseError::InvalidCategory);
        }
        if details.payee_id <= 0 {
            return Err(ExpenseError::InvalidPayeeId);
        }
        if !details.receipt_uri.starts_with('/') {
            return Err(ExpenseError::InvalidReceiptUri);
        }

        Ok(Self {
            title: details.title,
            amount: details.amount,
            date_incurred,
            category: details.category,
            notes: details.notes,
            payee_id: PayeeId::new(details.payee_id),
            receipt_uri: details.receipt_uri,
            status: ExpenseStatus::Pending,
        })
    }

    /// Rebuilds an expense from persisted state without re-running validation
    ///
    /// A stored expense may legitimately be dated in the past.
    pub fn restore(parts: ExpenseParts) -> Self {
        Self {
            title: parts.title,
            amount: parts.amount,
            date_incurred: parts.date_incurred,
            category: parts.category,
            notes: parts.notes,
            payee_id: parts.payee_id,
            receipt_uri: parts.receipt_uri,
            status: parts.status,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn amount(&self) -> Decimal {
        self.amount
    }

    pub fn date_incurred(&self) -> NaiveDate {
        self.date_incurred
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn notes(&self) -> &str {
        &self.notes
    }

    pub fn payee_id(&self) -> PayeeId {
        self.payee_id
    }

    pub fn receipt_uri(&self) -> &str {
        &self.receipt_uri
    }

    pub fn status(&self) -> ExpenseStatus {
        self.status
    }

    /// Returns true while the expense still awaits payout
    pub fn is_pending(&self) -> bool {
        self.status == ExpenseStatus::Pending
    }
}

/// Positive, whole cents, and within the stored precision
fn is_storable_amount(amount: Decimal) -> bool {
    let limit = Decimal::from(10_i64.pow(AMOUNT_INTEGER_DIGITS));
    amount > Decimal::ZERO && amount < limit && amount.round_dp(AMOUNT_SCALE) == amount
}

/// Parses a `YYYY-MM-DD` date and applies the year window and the no-past-dates rule
fn parse_incurred_date(raw: &str, today: NaiveDate) -> Option<NaiveDate> {
    // chrono accepts unpadded fields; the wire format does not
    if raw.len() != 10 {
        return None;
    }
    let date = NaiveDate::parse_from_str(raw, DATE_FORMAT).ok()?;
    if !(MIN_YEAR..=MAX_YEAR).contains(&date.year()) || date < today {
        return None;
    }
    Some(date)
}
