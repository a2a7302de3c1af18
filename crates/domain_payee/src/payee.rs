//! Payee entity
//!
//! A payee is the beneficiary of a payout: a named person or vendor together
//! with the bank account money is sent to. The beneficiary code, account number,
//! email, and mobile number each identify a payee uniquely; that uniqueness is
//! enforced by the store, not here.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use core_kernel::{Entity, PayeeId};
use crate::error::PayeeError;
use crate::validation::PayeeValidator;

/// A persisted payee with its store-assigned identity
pub type PayeeEntity = Entity<PayeeId, Payee>;

/// The kind of beneficiary being paid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PayeeCategory {
    /// An employee claiming reimbursement
    Employee,
    /// An external supplier
    Vendor,
}

impl PayeeCategory {
    /// Returns the canonical spelling used on the wire and in the store
    pub fn as_str(&self) -> &'static str {
        match self {
            PayeeCategory::Employee => "Employee",
            PayeeCategory::Vendor => "Vendor",
        }
    }
}

impl fmt::Display for PayeeCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PayeeCategory {
    type Err = PayeeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Employee" => Ok(PayeeCategory::Employee),
            "Vendor" => Ok(PayeeCategory::Vendor),
            _ => Err(PayeeError::InvalidCategory),
        }
    }
}

/// Raw payee fields as supplied by a caller, before validation
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayeeDetails {
    pub beneficiary_name: String,
    pub beneficiary_code: String,
    pub account_number: String,
    pub ifsc_code: String,
    pub bank_name: String,
    pub email: String,
    pub mobile: String,
    pub category: String,
}

/// A validated, immutable payee record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Payee {
    beneficiary_name: String,
    beneficiary_code: String,
    account_number: String,
    ifsc_code: String,
    bank_name: String,
    email: String,
    mobile: String,
    category: PayeeCategory,
}

impl Payee {
    /// Validates the details and builds a payee
    ///
    /// Rules are checked in a fixed order (see [`crate::validation`]) and the
    /// first failure is returned.
    ///
    /// # Errors
    ///
    /// Returns the [`PayeeError`] for the first rule the details violate.
    pub fn new(details: PayeeDetails) -> Result<Self, PayeeError> {
        let category = PayeeValidator::validate(&details)?;
        Ok(Self::assemble(details, category))
    }

    /// Rebuilds a payee from persisted state
    ///
    /// Stored rows passed every rule when they were written, so only the category
    /// is parsed again.
    ///
    /// # Errors
    ///
    /// Returns [`PayeeError::InvalidCategory`] if the stored category is unknown.
    pub fn restore(details: PayeeDetails) -> Result<Self, PayeeError> {
        let category = details.category.parse()?;
        Ok(Self::assemble(details, category))
    }

    fn assemble(details: PayeeDetails, category: PayeeCategory) -> Self {
        Self {
            beneficiary_name: details.beneficiary_name,
            beneficiary_code: details.beneficiary_code,
            account_number: details.account_number,
            ifsc_code: details.ifsc_code,
            bank_name: details.bank_name,
            email: details.email,
            mobile: details.mobile,
            category,
        }
    }

    pub fn beneficiary_name(&self) -> &str {
        &self.beneficiary_name
    }

    pub fn beneficiary_code(&self) -> &str {
        &self.beneficiary_code
    }

    pub fn account_number(&self) -> &str {
        &self.account_number
    }

    pub fn ifsc_code(&self) -> &str {
        &self.ifsc_code
    }

    pub fn bank_name(&self) -> &str {
        &self.bank_name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn mobile(&self) -> &str {
        &self.mobile
    }

    pub fn category(&self) -> PayeeCategory {
        self.category
    }
}
