//! Payout preview queries

use chrono::NaiveDate;
use rust_decimal::Decimal;
use sqlx::PgPool;
use tracing::{debug, instrument};

use core_kernel::{ExpenseId, PayeeId};
use domain_expense::{ExpenseStatus, PayoutLine, PayoutPreview};

use crate::error::DatabaseError;

/// Read-only access to what is currently owed
#[derive(Debug, Clone)]
pub struct PayoutRepository {
    pool: PgPool,
}

impl PayoutRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Joins every pending expense to its active payee
    ///
    /// Lines are ordered newest expense first, ties broken by expense id. Paid
    /// expenses and expenses of soft-deleted payees are left out of both the
    /// lines and the total.
    #[instrument(skip(self))]
    pub async fn preview(&self) -> Result<PayoutPreview, DatabaseError> {
        let rows = sqlx::query_as::<_, PayoutLineRow>(
            r#"
            SELECT
                e.id AS expense_id,
                e.title,
                e.amount,
                e.date_incurred,
                p.id AS payee_id,
                p.beneficiary_name,
                p.beneficiary_code,
                p.account_number,
                p.ifsc_code,
                p.bank_name,
                p.email
            FROM expenses e
            JOIN payees p ON p.id = e.payee_id
            WHERE e.status = $1 AND p.is_deleted = FALSE
            ORDER BY e.date_incurred DESC, e.id ASC
            "#,
        )
        .bind(ExpenseStatus::Pending.as_str())
        .fetch_all(&self.pool)
        .await?;

        let preview = PayoutPreview::new(rows.into_iter().map(PayoutLine::from).collect());
        debug!(lines = preview.len(), total = %preview.total(), "payout preview built");
        Ok(preview)
    }
}

/// Database row for one payout line
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct PayoutLineRow {
    pub expense_id: i64,
    pub title: String,
    pub amount: Decimal,
    pub date_incurred: NaiveDate,
    pub payee_id: i64,
    pub beneficiary_name: String,
    pub beneficiary_code: String,
    pub account_number: String,
    pub ifsc_code: String,
    pub bank_name: String,
    pub email: String,
}

impl From<PayoutLineRow> for PayoutLine {
    fn from(row: PayoutLineRow) -> Self {
        PayoutLine {
            expense_id: ExpenseId::new(row.expense_id),
            title: row.title,
            amount: row.amount,
            date_incurred: row.date_incurred,
            payee_id: PayeeId::new(row.payee_id),
            beneficiary_name: row.beneficiary_name,
            beneficiary_code: row.beneficiary_code,
            account_number: row.account_number,
            ifsc_code: row.ifsc_code,
            bank_name: row.bank_name,
            email: row.email,
        }
    }
}
