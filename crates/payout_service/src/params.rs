//! Raw list parameters as they arrive in a query string
//!
//! Transport-level input is forgiving: a missing, unparsable, or out-of-range
//! limit falls back to a page of [`DEFAULT_PAGE_SIZE`] or is clamped to
//! [`MAX_PAGE_SIZE`], and a negative offset becomes 0. The strict checks in
//! [`infra_db::ListQuery::validate_pagination`] still apply to queries built
//! directly.

use serde::Deserialize;
use std::str::FromStr;

use core_kernel::PayeeId;
use domain_expense::ExpenseStatus;
use infra_db::{ExpenseFilter, ListQuery, PayeeFilter, SortDirection};

use crate::error::ServiceError;

/// Page size used when the caller gives none or an invalid one
pub const DEFAULT_PAGE_SIZE: i64 = 10;

/// Largest page size a caller may request through parameters
pub const MAX_PAGE_SIZE: i64 = 100;

/// Sort and pagination parameters shared by every list endpoint
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ListParams {
    pub sort_by: Option<String>,
    pub sort_order: Option<String>,
    pub limit: Option<String>,
    pub offset: Option<String>,
}

impl ListParams {
    /// Page size after defaulting and clamping
    pub fn limit(&self) -> i64 {
        match self.limit.as_deref().and_then(|l| l.parse::<i64>().ok()) {
            Some(limit) if limit < 1 => DEFAULT_PAGE_SIZE,
            Some(limit) => limit.min(MAX_PAGE_SIZE),
            None => DEFAULT_PAGE_SIZE,
        }
    }

    /// Offset after defaulting; negative values become 0
    pub fn offset(&self) -> i64 {
        self.offset
            .as_deref()
            .and_then(|o| o.parse::<i64>().ok())
            .unwrap_or(0)
            .max(0)
    }

    pub fn sort_direction(&self) -> SortDirection {
        self.sort_order
            .as_deref()
            .map(SortDirection::parse)
            .unwrap_or_default()
    }

    /// Combines these parameters with an entity filter
    pub fn into_query<F>(self, filter: F) -> ListQuery<F> {
        let limit = self.limit();
        let offset = self.offset();
        let sort_direction = self.sort_direction();

        ListQuery {
            filter,
            sort_by: self.sort_by.filter(|key| !key.is_empty()),
            sort_direction,
            limit,
            offset,
        }
    }
}

/// Payee filter parameters as raw strings
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PayeeFilterParams {
    pub name: String,
    pub code: String,
    pub bank: String,
    pub category: String,
}

impl PayeeFilterParams {
    /// Converts to a typed filter; an empty category means "any"
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::InvalidParameter`] for an unknown category.
    pub fn into_filter(self) -> Result<PayeeFilter, ServiceError> {
        Ok(PayeeFilter {
            category: parse_optional("category", &self.category)?,
            name: self.name,
            code: self.code,
            bank: self.bank,
        })
    }
}

/// Expense filter parameters as raw strings
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ExpenseFilterParams {
    pub title: String,
    pub category: String,
    pub payee_id: String,
    pub status: String,
}

impl ExpenseFilterParams {
    /// Converts to a typed filter; empty id and status mean "any"
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::InvalidParameter`] for a non-numeric payee id or
    /// an unknown status.
    pub fn into_filter(self) -> Result<ExpenseFilter, ServiceError> {
        Ok(ExpenseFilter {
            payee_id: parse_optional::<i64>("payee_id", &self.payee_id)?.map(PayeeId::new),
            status: parse_optional::<ExpenseStatus>("status", &self.status)?,
            title: self.title,
            category: self.category,
        })
    }
}

fn parse_optional<T: FromStr>(name: &'static str, raw: &str) -> Result<Option<T>, ServiceError> {
    if raw.is_empty() {
        return Ok(None);
    }
    raw.parse::<T>()
        .map(Some)
        .map_err(|_| ServiceError::InvalidParameter {
            name,
            value: raw.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain_payee::PayeeCategory;
    use proptest::prelude::*;

    fn params(limit: Option<&str>, offset: Option<&str>) -> ListParams {
        ListParams {
            limit: limit.map(str::to_string),
            offset: offset.map(str::to_string),
            ..ListParams::default()
        }
    }

    #[test]
    fn test_limit_defaults_and_clamps() {
        assert_eq!(params(None, None).limit(), 10);
        assert_eq!(params(Some("0"), None).limit(), 10);
        assert_eq!(params(Some("-5"), None).limit(), 10);
        assert_eq!(params(Some("abc"), None).limit(), 10);
        assert_eq!(params(Some("25"), None).limit(), 25);
        assert_eq!(params(Some("500"), None).limit(), 100);
    }

    #[test]
    fn test_offset_defaults_and_floors() {
        assert_eq!(params(None, None).offset(), 0);
        assert_eq!(params(None, Some("-3")).offset(), 0);
        assert_eq!(params(None, Some("x")).offset(), 0);
        assert_eq!(params(None, Some("20")).offset(), 20);
    }

    #[test]
    fn test_padded_numbers_are_not_numbers() {
        assert_eq!(params(Some(" 7 "), None).limit(), 10);
        assert_eq!(params(Some("7 "), None).limit(), 10);
        assert_eq!(params(None, Some(" 20")).offset(), 0);
    }

    #[test]
    fn test_sort_order_is_case_sensitive() {
        let order = |raw: &str| ListParams {
            sort_order: Some(raw.to_string()),
            ..ListParams::default()
        };
        assert_eq!(order("DESC").sort_direction(), SortDirection::Descending);
        assert_eq!(order("desc").sort_direction(), SortDirection::Ascending);
        assert_eq!(ListParams::default().sort_direction(), SortDirection::Ascending);
    }

    #[test]
    fn test_into_query() {
        let query = ListParams {
            sort_by: Some("bank".to_string()),
            sort_order: Some("DESC".to_string()),
            limit: Some("5".to_string()),
            offset: Some("10".to_string()),
        }
        .into_query(PayeeFilter::default());

        assert_eq!(query.sort_by.as_deref(), Some("bank"));
        assert_eq!(query.sort_direction, SortDirection::Descending);
        assert_eq!((query.limit, query.offset), (5, 10));
        assert!(query.validate_pagination().is_ok());
    }

    #[test]
    fn test_payee_filter_params() {
        let filter = PayeeFilterParams {
            category: "Vendor".to_string(),
            bank: "cbi".to_string(),
            ..PayeeFilterParams::default()
        }
        .into_filter()
        .unwrap();
        assert_eq!(filter.category, Some(PayeeCategory::Vendor));
        assert_eq!(filter.bank, "cbi");

        let any = PayeeFilterParams::default().into_filter().unwrap();
        assert_eq!(any, PayeeFilter::default());
    }

    #[test]
    fn test_unknown_category_is_rejected() {
        let err = PayeeFilterParams {
            category: "Student".to_string(),
            ..PayeeFilterParams::default()
        }
        .into_filter()
        .unwrap_err();
        assert!(matches!(err, ServiceError::InvalidParameter { name: "category", .. }));
    }

    #[test]
    fn test_expense_filter_params() {
        let filter = ExpenseFilterParams {
            payee_id: "7".to_string(),
            status: "Paid".to_string(),
            ..ExpenseFilterParams::default()
        }
        .into_filter()
        .unwrap();
        assert_eq!(filter.payee_id, Some(PayeeId::new(7)));
        assert_eq!(filter.status, Some(ExpenseStatus::Paid));

        let err = ExpenseFilterParams {
            payee_id: "seven".to_string(),
            ..ExpenseFilterParams::default()
        }
        .into_filter()
        .unwrap_err();
        assert!(matches!(err, ServiceError::InvalidParameter { name: "payee_id", .. }));

        let err = ExpenseFilterParams {
            payee_id: " 7 ".to_string(),
            ..ExpenseFilterParams::default()
        }
        .into_filter()
        .unwrap_err();
        assert!(matches!(err, ServiceError::InvalidParameter { name: "payee_id", .. }));
    }

    proptest! {
        #[test]
        fn prop_any_raw_pagination_compiles(limit in any::<i64>(), offset in any::<i64>()) {
            let query = ListParams {
                limit: Some(limit.to_string()),
                offset: Some(offset.to_string()),
                ..ListParams::default()
            }
            .into_query(PayeeFilter::default());

            prop_assert!(query.validate_pagination().is_ok());
            prop_assert!((1..=MAX_PAGE_SIZE).contains(&query.limit));
        }
    }
}
