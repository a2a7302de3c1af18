//! Payout preview
//!
//! A preview lists every pending expense next to the bank details of the payee
//! it is owed to, and the exact sum of those amounts. It is read-only: building
//! a preview never changes an expense's status.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use core_kernel::{ExpenseId, PayeeId};

/// One pending expense joined with its payee's transfer details
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayoutLine {
    pub expense_id: ExpenseId,
    pub title: String,
    pub amount: Decimal,
    pub date_incurred: NaiveDate,
    pub payee_id: PayeeId,
    pub beneficiary_name: String,
    pub beneficiary_code: String,
    pub account_number: String,
    pub ifsc_code: String,
    pub bank_name: String,
    pub email: String,
}

/// The full set of pending payout lines with their total
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayoutPreview {
    lines: Vec<PayoutLine>,
    total: Decimal,
}

impl PayoutPreview {
    /// Builds a preview, keeping the line order and summing the amounts exactly
    pub fn new(lines: Vec<PayoutLine>) -> Self {
        let total = lines.iter().map(|line| line.amount).sum();
        Self { lines, total }
    }

    pub fn lines(&self) -> &[PayoutLine] {
        &self.lines
    }

    pub fn total(&self) -> Decimal {
        self.total
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Amount owed to a single payee within this preview
    pub fn total_for(&self, payee_id: PayeeId) -> Decimal {
        self.lines
            .iter()
            .filter(|line| line.payee_id == payee_id)
            .map(|line| line.amount)
            .sum()
    }

    pub fn into_lines(self) -> Vec<PayoutLine> {
        self.lines
    }
}

impl Default for PayoutPreview {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}
