//! Tests for payee construction and validation order

use domain_payee::{Payee, PayeeCategory, PayeeDetails, PayeeError};
use proptest::prelude::*;

fn valid_details() -> PayeeDetails {
    PayeeDetails {
        beneficiary_name: "abc".to_string(),
        beneficiary_code: "123".to_string(),
        account_number: "6780002345765432".to_string(),
        ifsc_code: "CBIN0564891".to_string(),
        bank_name: "cbi".to_string(),
        email: "abc@gmail.com".to_string(),
        mobile: "9123456789".to_string(),
        category: "Employee".to_string(),
    }
}

// ============================================================================
// Valid payees
// ============================================================================

mod valid_payee_tests {
    use super::*;

    #[test]
    fn test_valid_payee_keeps_every_field() {
        let details = PayeeDetails {
            beneficiary_name: "abc".to_string(),
            beneficiary_code: "123".to_string(),
            account_number: "1234567890123456".to_string(),
            ifsc_code: "CBIN0123456".to_string(),
            bank_name: "cbi".to_string(),
            email: "abc@gmail.com".to_string(),
            mobile: "9876543210".to_string(),
            category: "Employee".to_string(),
        };

        let payee = Payee::new(details).expect("payee should be created");

        assert_eq!(payee.beneficiary_name(), "abc");
        assert_eq!(payee.beneficiary_code(), "123");
        assert_eq!(payee.account_number(), "1234567890123456");
        assert_eq!(payee.ifsc_code(), "CBIN0123456");
        assert_eq!(payee.bank_name(), "cbi");
        assert_eq!(payee.email(), "abc@gmail.com");
        assert_eq!(payee.mobile(), "9876543210");
        assert_eq!(payee.category(), PayeeCategory::Employee);
    }

    #[test]
    fn test_vendor_category() {
        let mut details = valid_details();
        details.category = "Vendor".to_string();

        let payee = Payee::new(details).unwrap();
        assert_eq!(payee.category(), PayeeCategory::Vendor);
    }

    #[test]
    fn test_bank_name_of_exactly_50_characters() {
        let mut details = valid_details();
        details.bank_name = "b".repeat(50);

        assert!(Payee::new(details).is_ok());
    }

    #[test]
    fn test_ifsc_with_alphanumeric_branch_code() {
        let mut details = valid_details();
        details.ifsc_code = "HDFC0AB12C3".to_string();

        assert!(Payee::new(details).is_ok());
    }
}

// ============================================================================
// Invalid payees: one broken rule each
// ============================================================================

mod invalid_payee_tests {
    use super::*;

    struct Case {
        name: &'static str,
        mutate: fn(&mut PayeeDetails),
        expected: PayeeError,
    }

    fn cases() -> Vec<Case> {
        vec![
            Case { name: "account number with 9 digits", mutate: |d| d.account_number = "678000234".into(), expected: PayeeError::InvalidAccountNumber },
            Case { name: "account number with 11 digits", mutate: |d| d.account_number = "67800023445".into(), expected: PayeeError::InvalidAccountNumber },
            Case { name: "account number with 15 digits", mutate: |d| d.account_number = "678000234576543".into(), expected: PayeeError::InvalidAccountNumber },
            Case { name: "account number with 17 digits", mutate: |d| d.account_number = "67800023457654324".into(), expected: PayeeError::InvalidAccountNumber },
            Case { name: "mobile number with 9 digits", mutate: |d| d.mobile = "912345678".into(), expected: PayeeError::InvalidMobileNumber },
            Case { name: "mobile number with 11 digits", mutate: |d| d.mobile = "91234567891".into(), expected: PayeeError::InvalidMobileNumber },
            Case { name: "email without @", mutate: |d| d.email = "abc.com".into(), expected: PayeeError::InvalidEmail },
            Case { name: "empty name", mutate: |d| d.beneficiary_name = String::new(), expected: PayeeError::EmptyName },
            Case { name: "empty code", mutate: |d| d.beneficiary_code = String::new(), expected: PayeeError::EmptyCode },
            Case { name: "ifsc missing numerals", mutate: |d| d.ifsc_code = "CBIN0789".into(), expected: PayeeError::InvalidIfsc },
            Case { name: "ifsc with lowercase letters", mutate: |d| d.ifsc_code = "cbin0456671".into(), expected: PayeeError::InvalidIfsc },
            Case { name: "ifsc branch code with lowercase letters", mutate: |d| d.ifsc_code = "CBIN0456ab1".into(), expected: PayeeError::InvalidIfsc },
            Case { name: "ifsc without the literal zero", mutate: |d| d.ifsc_code = "CBIN1234567".into(), expected: PayeeError::InvalidIfsc },
            Case { name: "bank name longer than 50 characters", mutate: |d| d.bank_name = "cbi".repeat(25), expected: PayeeError::InvalidBankName },
            Case { name: "unknown category", mutate: |d| d.category = "Student".into(), expected: PayeeError::InvalidCategory },
            Case { name: "category in the wrong case", mutate: |d| d.category = "employee".into(), expected: PayeeError::InvalidCategory },
        ]
    }

    #[test]
    fn test_each_rule_reports_its_own_error() {
        for case in cases() {
            let mut details = valid_details();
            (case.mutate)(&mut details);

            let err = Payee::new(details).unwrap_err();
            assert_eq!(err, case.expected, "case: {}", case.name);
        }
    }
}

// ============================================================================
// Validation order
// ============================================================================

mod validation_order_tests {
    use super::*;

    #[test]
    fn test_empty_name_wins_over_everything() {
        let details = PayeeDetails {
            category: "Student".to_string(),
            ..PayeeDetails::default()
        };

        assert_eq!(Payee::new(details).unwrap_err(), PayeeError::EmptyName);
    }

    #[test]
    fn test_account_number_checked_before_mobile() {
        let mut details = valid_details();
        details.account_number = "1".to_string();
        details.mobile = "2".to_string();

        assert_eq!(Payee::new(details).unwrap_err(), PayeeError::InvalidAccountNumber);
    }

    #[test]
    fn test_email_checked_before_ifsc() {
        let mut details = valid_details();
        details.email = "nope".to_string();
        details.ifsc_code = "bad".to_string();

        assert_eq!(Payee::new(details).unwrap_err(), PayeeError::InvalidEmail);
    }

    #[test]
    fn test_bank_name_checked_before_category() {
        let mut details = valid_details();
        details.bank_name = "x".repeat(51);
        details.category = "Student".to_string();

        assert_eq!(Payee::new(details).unwrap_err(), PayeeError::InvalidBankName);
    }
}

// ============================================================================
// Category and restore
// ============================================================================

mod category_tests {
    use super::*;

    #[test]
    fn test_category_round_trips_through_str() {
        for category in [PayeeCategory::Employee, PayeeCategory::Vendor] {
            assert_eq!(category.as_str().parse::<PayeeCategory>().unwrap(), category);
        }
    }

    #[test]
    fn test_restore_skips_field_rules() {
        let mut details = valid_details();
        details.account_number = "123".to_string();

        let payee = Payee::restore(details).unwrap();
        assert_eq!(payee.account_number(), "123");
    }

    #[test]
    fn test_restore_rejects_unknown_category() {
        let mut details = valid_details();
        details.category = "Contractor".to_string();

        assert_eq!(Payee::restore(details).unwrap_err(), PayeeError::InvalidCategory);
    }

    #[test]
    fn test_payee_serializes() {
        let payee = Payee::new(valid_details()).unwrap();
        let json = serde_json::to_value(&payee).unwrap();
        assert_eq!(json["category"], "Employee");
        assert_eq!(json["account_number"], "6780002345765432");
    }
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #[test]
    fn prop_sixteen_digit_accounts_are_accepted(account in "[0-9]{16}") {
        let mut details = valid_details();
        details.account_number = account;
        prop_assert!(Payee::new(details).is_ok());
    }

    #[test]
    fn prop_other_digit_counts_are_rejected(len in 1usize..24) {
        prop_assume!(len != 16);
        let mut details = valid_details();
        details.account_number = "7".repeat(len);
        prop_assert_eq!(Payee::new(details).unwrap_err(), PayeeError::InvalidAccountNumber);
    }

    #[test]
    fn prop_ten_digit_mobiles_are_accepted(mobile in "[0-9]{10}") {
        let mut details = valid_details();
        details.mobile = mobile;
        prop_assert!(Payee::new(details).is_ok());
    }

    #[test]
    fn prop_well_formed_ifsc_is_accepted(ifsc in "[A-Z]{4}0[A-Z0-9]{6}") {
        let mut details = valid_details();
        details.ifsc_code = ifsc;
        prop_assert!(Payee::new(details).is_ok());
    }

    #[test]
    fn prop_ifsc_with_lowercase_is_rejected(bank in "[a-z]{4}", branch in "[0-9]{6}") {
        let mut details = valid_details();
        details.ifsc_code = format!("{bank}0{branch}");
        prop_assert_eq!(Payee::new(details).unwrap_err(), PayeeError::InvalidIfsc);
    }
}
