//! Expense repository implementation
//!
//! Expenses are hard-deleted. An update replaces the validated fields only; the
//! payment status is never written by this repository.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use sqlx::PgPool;
use tracing::{debug, instrument};

use core_kernel::{ExpenseId, PayeeId};
use domain_expense::{Expense, ExpenseEntity, ExpenseParts, ExpenseStatus};

use crate::constraint::classify_write_error;
use crate::error::DatabaseError;
use crate::query::{compile, ListFilter, ListQuery, WhereClause};

const EXPENSE_COLUMNS: &str = "id, title, amount, date_incurred, category, notes, payee_id, \
     receipt_uri, status, created_at, updated_at";

/// Repository for managing expense data
#[derive(Debug, Clone)]
pub struct ExpenseRepository {
    pool: PgPool,
}

impl ExpenseRepository {
    /// Creates a new ExpenseRepository with the given connection pool
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Inserts a validated expense and returns its new identifier
    ///
    /// # Errors
    ///
    /// * `UnknownPayee` if the referenced payee does not exist
    /// * `SqlError` for any other storage failure
    #[instrument(skip(self, expense), fields(payee_id = %expense.payee_id()))]
    pub async fn insert(&self, expense: &Expense) -> Result<ExpenseId, DatabaseError> {
        debug!("inserting expense");

        let id: i64 = sqlx::query_scalar(
            r#"
            INSERT INTO expenses (
                title, amount, date_incurred, category, notes, payee_id, receipt_uri, status
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING id
            "#,
        )
        .bind(expense.title())
        .bind(expense.amount())
        .bind(expense.date_incurred())
        .bind(expense.category())
        .bind(expense.notes())
        .bind(expense.payee_id().get())
        .bind(expense.receipt_uri())
        .bind(expense.status().as_str())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| classify_write_error(e, Some(expense.payee_id())))?;

        Ok(ExpenseId::new(id))
    }

    /// Retrieves an expense by its identifier
    #[instrument(skip(self), fields(expense_id = %id))]
    pub async fn get_by_id(&self, id: ExpenseId) -> Result<ExpenseEntity, DatabaseError> {
        let row = sqlx::query_as::<_, ExpenseRow>(&format!(
            "SELECT {EXPENSE_COLUMNS} FROM expenses WHERE id = $1"
        ))
        .bind(id.get())
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| DatabaseError::not_found("Expense", id))?;

        row.try_into()
    }

    /// Lists expenses matching the query's filters, in the query's order
    #[instrument(skip(self, query), fields(limit = query.limit, offset = query.offset))]
    pub async fn list(&self, query: &ListQuery<ExpenseFilter>) -> Result<Vec<ExpenseEntity>, DatabaseError> {
        let mut builder = compile(query)?;
        debug!(sql = builder.sql(), "listing expenses");

        let rows = builder
            .build_query_as::<ExpenseRow>()
            .fetch_all(&self.pool)
            .await?;

        rows.into_iter().map(ExpenseEntity::try_from).collect()
    }

    /// Replaces the validated fields of an existing expense
    ///
    /// The stored status is kept as it is.
    ///
    /// # Errors
    ///
    /// * `NotFound` if the expense does not exist
    /// * `UnknownPayee` if the new payee reference does not exist
    #[instrument(skip(self, expense), fields(expense_id = %id))]
    pub async fn update(&self, id: ExpenseId, expense: &Expense) -> Result<ExpenseEntity, DatabaseError> {
        debug!("updating expense");

        let row = sqlx::query_as::<_, ExpenseRow>(&format!(
            r#"
            UPDATE expenses
            SET title = $1,
                amount = $2,
                date_incurred = $3,
                category = $4,
                notes = $5,
                payee_id = $6,
                receipt_uri = $7,
                updated_at = now()
            WHERE id = $8
            RETURNING {EXPENSE_COLUMNS}
            "#
        ))
        .bind(expense.title())
        .bind(expense.amount())
        .bind(expense.date_incurred())
        .bind(expense.category())
        .bind(expense.notes())
        .bind(expense.payee_id().get())
        .bind(expense.receipt_uri())
        .bind(id.get())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| classify_write_error(e, Some(expense.payee_id())))?
        .ok_or_else(|| DatabaseError::not_found("Expense", id))?;

        row.try_into()
    }

    /// Permanently deletes an expense
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if the expense does not exist.
    #[instrument(skip(self), fields(expense_id = %id))]
    pub async fn delete(&self, id: ExpenseId) -> Result<(), DatabaseError> {
        let result = sqlx::query("DELETE FROM expenses WHERE id = $1")
            .bind(id.get())
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DatabaseError::not_found("Expense", id));
        }

        debug!("expense deleted");
        Ok(())
    }
}

/// Equality filters for expense lists
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpenseFilter {
    pub title: String,
    pub category: String,
    pub payee_id: Option<PayeeId>,
    pub status: Option<ExpenseStatus>,
}

impl ListFilter for ExpenseFilter {
    const SELECT: &'static str = "SELECT id, title, amount, date_incurred, category, notes, \
         payee_id, receipt_uri, status, created_at, updated_at FROM expenses";

    const SORT_COLUMNS: &'static [(&'static str, &'static str)] = &[
        ("id", "id"),
        ("title", "title"),
        ("amount", "amount"),
        ("date", "date_incurred"),
        ("category", "category"),
        ("payee", "payee_id"),
        ("status", "status"),
    ];

    fn push_conditions(&self, clause: &mut WhereClause<'_>) {
        clause
            .text_eq("title", &self.title)
            .text_eq("category", &self.category)
            .eq("payee_id", self.payee_id.map(|id| id.get()))
            .eq("status", self.status.map(|s| s.as_str()));
    }
}

/// Database row for an expense
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct ExpenseRow {
    pub id: i64,
    pub title: String,
    pub amount: Decimal,
    pub date_incurred: NaiveDate,
    pub category: String,
    pub notes: String,
    pub payee_id: i64,
    pub receipt_uri: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl TryFrom<ExpenseRow> for ExpenseEntity {
    type Error = DatabaseError;

    fn try_from(row: ExpenseRow) -> Result<Self, Self::Error> {
        let id = ExpenseId::new(row.id);
        let status = row
            .status
            .parse::<ExpenseStatus>()
            .map_err(|e| DatabaseError::InvalidData(format!("expense {id}: {e}")))?;

        let expense = Expense::restore(ExpenseParts {
            title: row.title,
            amount: row.amount,
            date_incurred: row.date_incurred,
            category: row.category,
            notes: row.notes,
            payee_id: PayeeId::new(row.payee_id),
            receipt_uri: row.receipt_uri,
            status,
        });

        Ok(ExpenseEntity::new(id, expense))
    }
}
