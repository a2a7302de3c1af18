//! Test Data Builders
//!
//! Provides builder patterns for constructing test data with sensible defaults.
//! These builders allow tests to specify only the relevant fields while using
//! defaults for everything else.

use domain_expense::{Expense, ExpenseDetails};
use domain_payee::{Payee, PayeeDetails};
use rust_decimal::Decimal;

use crate::fixtures::{DateFixtures, ExpenseFixtures, PayeeFixtures};

/// Builder for constructing payee details
pub struct PayeeDetailsBuilder {
    details: PayeeDetails,
}

impl Default for PayeeDetailsBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl PayeeDetailsBuilder {
    /// Creates a new builder from the standard employee fixture
    pub fn new() -> Self {
        Self {
            details: PayeeFixtures::employee(),
        }
    }

    /// Creates a builder whose unique fields are derived from `n`
    pub fn numbered(n: u32) -> Self {
        Self {
            details: PayeeFixtures::numbered(n),
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.details.beneficiary_name = name.into();
        self
    }

    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.details.beneficiary_code = code.into();
        self
    }

    pub fn with_account_number(mut self, account_number: impl Into<String>) -> Self {
        self.details.account_number = account_number.into();
        self
    }

    pub fn with_ifsc(mut self, ifsc: impl Into<String>) -> Self {
        self.details.ifsc_code = ifsc.into();
        self
    }

    pub fn with_bank(mut self, bank: impl Into<String>) -> Self {
        self.details.bank_name = bank.into();
        self
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.details.email = email.into();
        self
    }

    pub fn with_mobile(mut self, mobile: impl Into<String>) -> Self {
        self.details.mobile = mobile.into();
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.details.category = category.into();
        self
    }

    /// Returns the raw details
    pub fn build(self) -> PayeeDetails {
        self.details
    }

    /// Validates the details into a payee
    ///
    /// # Panics
    ///
    /// Panics if the configured details are invalid
    pub fn build_payee(self) -> Payee {
        Payee::new(self.details).expect("builder produced an invalid payee")
    }
}

/// Builder for constructing expense details
pub struct ExpenseDetailsBuilder {
    details: ExpenseDetails,
}

impl ExpenseDetailsBuilder {
    /// Creates a new builder for an expense owed to `payee_id`
    pub fn new(payee_id: i64) -> Self {
        Self {
            details: ExpenseFixtures::lunch(payee_id),
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.details.title = title.into();
        self
    }

    pub fn with_amount(mut self, amount: Decimal) -> Self {
        self.details.amount = amount;
        self
    }

    /// Sets the date as a raw `YYYY-MM-DD` string
    pub fn with_date(mut self, date: impl Into<String>) -> Self {
        self.details.date_incurred = date.into();
        self
    }

    /// Sets the date to `days` after today
    pub fn days_ahead(mut self, days: u64) -> Self {
        self.details.date_incurred = DateFixtures::days_ahead(days);
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.details.category = category.into();
        self
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.details.notes = notes.into();
        self
    }

    pub fn with_payee_id(mut self, payee_id: i64) -> Self {
        self.details.payee_id = payee_id;
        self
    }

    pub fn with_receipt_uri(mut self, receipt_uri: impl Into<String>) -> Self {
        self.details.receipt_uri = receipt_uri.into();
        self
    }

    /// Returns the raw details
    pub fn build(self) -> ExpenseDetails {
        self.details
    }

    /// Validates the details into an expense
    ///
    /// # Panics
    ///
    /// Panics if the configured details are invalid
    pub fn build_expense(self) -> Expense {
        Expense::new(self.details).expect("builder produced an invalid expense")
    }
}
