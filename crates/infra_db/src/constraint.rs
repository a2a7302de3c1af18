//! Constraint violation classification
//!
//! Uniqueness of payee codes, accounts, emails, and mobiles is enforced only by
//! the store. When a write trips one of those constraints, the violated
//! constraint's name decides which [`DatabaseError`] the caller sees. Names not
//! listed here stay unclassified.

use core_kernel::PayeeId;
use sqlx::error::ErrorKind;
use tracing::warn;

use crate::error::DatabaseError;

/// Foreign key from `expenses.payee_id` to `payees.id`
pub const EXPENSE_PAYEE_FKEY: &str = "expenses_payee_id_fkey";

/// The payee uniqueness constraints, by their store names
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UniqueConstraint {
    BeneficiaryCode,
    AccountNumber,
    Email,
    Mobile,
}

impl UniqueConstraint {
    pub const ALL: [UniqueConstraint; 4] = [
        UniqueConstraint::BeneficiaryCode,
        UniqueConstraint::AccountNumber,
        UniqueConstraint::Email,
        UniqueConstraint::Mobile,
    ];

    /// Constraint name as created by the migrations
    pub fn name(&self) -> &'static str {
        match self {
            UniqueConstraint::BeneficiaryCode => "payees_beneficiary_code_key",
            UniqueConstraint::AccountNumber => "payees_account_number_key",
            UniqueConstraint::Email => "payees_email_key",
            UniqueConstraint::Mobile => "payees_mobile_key",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|constraint| constraint.name() == name)
    }

    /// The conflict error reported for this constraint
    pub fn to_error(self) -> DatabaseError {
        match self {
            UniqueConstraint::BeneficiaryCode => DatabaseError::DuplicateCode,
            UniqueConstraint::AccountNumber => DatabaseError::DuplicateAccount,
            UniqueConstraint::Email => DatabaseError::DuplicateEmail,
            UniqueConstraint::Mobile => DatabaseError::DuplicateMobile,
        }
    }
}

/// Maps a violation's kind and constraint name to a classified error
///
/// `payee_id` is the payee an expense write referenced, if any; it is what an
/// [`DatabaseError::UnknownPayee`] reports.
pub fn classify_violation(
    kind: ErrorKind,
    constraint: Option<&str>,
    payee_id: Option<PayeeId>,
) -> Option<DatabaseError> {
    let constraint = constraint?;
    match kind {
        ErrorKind::UniqueViolation => UniqueConstraint::from_name(constraint).map(UniqueConstraint::to_error),
        ErrorKind::ForeignKeyViolation if constraint == EXPENSE_PAYEE_FKEY => {
            payee_id.map(DatabaseError::UnknownPayee)
        }
        _ => None,
    }
}

/// Converts a failed write into a classified error where one applies
///
/// Errors that are not a recognised constraint violation are returned as
/// [`DatabaseError::SqlError`].
pub fn classify_write_error(error: sqlx::Error, payee_id: Option<PayeeId>) -> DatabaseError {
    let classified = match &error {
        sqlx::Error::Database(db_err) => {
            classify_violation(db_err.kind(), db_err.constraint(), payee_id)
        }
        _ => None,
    };

    match classified {
        Some(classified) => {
            warn!(error = %classified, "write rejected by constraint");
            classified
        }
        None => DatabaseError::SqlError(error),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_beneficiary_code_key() {
        let err = classify_violation(ErrorKind::UniqueViolation, Some("payees_beneficiary_code_key"), None);
        assert!(matches!(err, Some(DatabaseError::DuplicateCode)));
    }

    #[test]
    fn test_account_number_key() {
        let err = classify_violation(ErrorKind::UniqueViolation, Some("payees_account_number_key"), None);
        assert!(matches!(err, Some(DatabaseError::DuplicateAccount)));
    }

    #[test]
    fn test_email_key() {
        let err = classify_violation(ErrorKind::UniqueViolation, Some("payees_email_key"), None);
        assert!(matches!(err, Some(DatabaseError::DuplicateEmail)));
    }

    #[test]
    fn test_mobile_key() {
        let err = classify_violation(ErrorKind::UniqueViolation, Some("payees_mobile_key"), None);
        assert!(matches!(err, Some(DatabaseError::DuplicateMobile)));
    }

    #[test]
    fn test_payee_foreign_key() {
        let err = classify_violation(
            ErrorKind::ForeignKeyViolation,
            Some(EXPENSE_PAYEE_FKEY),
            Some(PayeeId::new(42)),
        );
        assert!(matches!(err, Some(DatabaseError::UnknownPayee(id)) if id == PayeeId::new(42)));
    }

    #[test]
    fn test_unknown_constraint_stays_unclassified() {
        assert!(classify_violation(ErrorKind::UniqueViolation, Some("payees_pkey"), None).is_none());
        assert!(classify_violation(ErrorKind::UniqueViolation, None, None).is_none());
        assert!(classify_violation(ErrorKind::CheckViolation, Some("payees_email_key"), None).is_none());
    }

    #[test]
    fn test_non_database_error_is_passed_through() {
        let err = classify_write_error(sqlx::Error::RowNotFound, None);
        assert!(matches!(err, DatabaseError::SqlError(sqlx::Error::RowNotFound)));
    }

    #[test]
    fn test_names_round_trip() {
        for constraint in UniqueConstraint::ALL {
            assert_eq!(UniqueConstraint::from_name(constraint.name()), Some(constraint));
        }
    }
}
