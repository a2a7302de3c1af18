//! Pre-built Test Fixtures
//!
//! Provides ready-to-use test data for payees and expenses. Fixtures are
//! deterministic; numbered variants differ in every uniquely-constrained
//! payee field so several can be stored side by side.

use chrono::{Days, NaiveDate, Utc};
use domain_expense::ExpenseDetails;
use domain_payee::PayeeDetails;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Fixture for payee test data
pub struct PayeeFixtures;

impl PayeeFixtures {
    /// A valid employee payee
    pub fn employee() -> PayeeDetails {
        PayeeDetails {
            beneficiary_name: "abc".to_string(),
            beneficiary_code: "123".to_string(),
            account_number: "1234567890123456".to_string(),
            ifsc_code: "CBIN0123456".to_string(),
            bank_name: "cbi".to_string(),
            email: "abc@gmail.com".to_string(),
            mobile: "9876543210".to_string(),
            category: "Employee".to_string(),
        }
    }

    /// A valid vendor payee
    pub fn vendor() -> PayeeDetails {
        PayeeDetails {
            beneficiary_name: "Acme Supplies".to_string(),
            beneficiary_code: "V-001".to_string(),
            account_number: "6780002345765432".to_string(),
            ifsc_code: "HDFC0AB12C3".to_string(),
            bank_name: "hdfc".to_string(),
            email: "billing@acme.example".to_string(),
            mobile: "9123456789".to_string(),
            category: "Vendor".to_string(),
        }
    }

    /// The n-th of a family of distinct, valid employee payees
    pub fn numbered(n: u32) -> PayeeDetails {
        PayeeDetails {
            beneficiary_name: format!("payee {n}"),
            beneficiary_code: format!("P{n:04}"),
            account_number: format!("{:016}", 5_000_000_000_000_000u64 + u64::from(n)),
            ifsc_code: "SBIN0001234".to_string(),
            bank_name: "sbi".to_string(),
            email: format!("payee{n}@example.com"),
            mobile: format!("{:010}", 8_000_000_000u64 + u64::from(n)),
            category: "Employee".to_string(),
        }
    }
}

/// Fixture for expense test data
pub struct ExpenseFixtures;

impl ExpenseFixtures {
    /// A valid pending lunch expense dated in the near future
    pub fn lunch(payee_id: i64) -> ExpenseDetails {
        ExpenseDetails {
            title: "Lunch".to_string(),
            amount: Self::standard_amount(),
            date_incurred: DateFixtures::days_ahead(7),
            category: "Food".to_string(),
            notes: "Team lunch".to_string(),
            payee_id,
            receipt_uri: "/receipts/lunch.jpg".to_string(),
        }
    }

    /// Standard expense amount
    pub fn standard_amount() -> Decimal {
        dec!(450.00)
    }
}

/// Fixture for date test data
pub struct DateFixtures;

impl DateFixtures {
    /// Today's UTC date
    pub fn today() -> NaiveDate {
        Utc::now().date_naive()
    }

    /// The date `days` from today, as `YYYY-MM-DD`
    pub fn days_ahead(days: u64) -> String {
        (Self::today() + Days::new(days)).format("%Y-%m-%d").to_string()
    }
}
