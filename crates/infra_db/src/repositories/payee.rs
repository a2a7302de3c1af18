//! Payee repository implementation
//!
//! Payees are soft-deleted: a delete flags the row and stamps `deleted_at`, and
//! every read, update, and list skips flagged rows. The unique constraints still
//! cover soft-deleted rows, so a deleted payee's code, account, email, and
//! mobile stay reserved.

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use tracing::{debug, instrument};

use core_kernel::PayeeId;
use domain_payee::{Payee, PayeeCategory, PayeeDetails, PayeeEntity};

use crate::constraint::classify_write_error;
use crate::error::DatabaseError;
use crate::query::{compile, ListFilter, ListQuery, WhereClause};

const PAYEE_COLUMNS: &str = "id, beneficiary_name, beneficiary_code, account_number, ifsc_code, \
     bank_name, email, mobile, payee_category, created_at, updated_at";

/// Repository for managing payee data
#[derive(Debug, Clone)]
pub struct PayeeRepository {
    pool: PgPool,
}

impl PayeeRepository {
    /// Creates a new PayeeRepository with the given connection pool
    ///
    /// # Arguments
    ///
    /// * `pool` - The PostgreSQL connection pool
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Inserts a validated payee and returns its new identifier
    ///
    /// # Errors
    ///
    /// * `DuplicateCode`, `DuplicateAccount`, `DuplicateEmail`, `DuplicateMobile`
    ///   when another payee (including a soft-deleted one) holds the value
    /// * `SqlError` for any other storage failure
    #[instrument(skip(self, payee), fields(code = %payee.beneficiary_code()))]
    pub async fn insert(&self, payee: &Payee) -> Result<PayeeId, DatabaseError> {
        debug!("inserting payee");

        let id: i64 = sqlx::query_scalar(
            r#"
            INSERT INTO payees (
                beneficiary_name, beneficiary_code, account_number, ifsc_code,
                bank_name, email, mobile, payee_category
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING id
            "#,
        )
        .bind(payee.beneficiary_name())
        .bind(payee.beneficiary_code())
        .bind(payee.account_number())
        .bind(payee.ifsc_code())
        .bind(payee.bank_name())
        .bind(payee.email())
        .bind(payee.mobile())
        .bind(payee.category().as_str())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| classify_write_error(e, None))?;

        Ok(PayeeId::new(id))
    }

    /// Retrieves a payee by its identifier
    ///
    /// # Returns
    ///
    /// The payee or NotFound error; soft-deleted payees are not found
    #[instrument(skip(self), fields(payee_id = %id))]
    pub async fn get_by_id(&self, id: PayeeId) -> Result<PayeeEntity, DatabaseError> {
        let row = sqlx::query_as::<_, PayeeRow>(&format!(
            "SELECT {PAYEE_COLUMNS} FROM payees WHERE id = $1 AND is_deleted = FALSE"
        ))
        .bind(id.get())
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| DatabaseError::not_found("Payee", id))?;

        row.try_into()
    }

    /// Lists payees matching the query's filters, in the query's order
    ///
    /// # Errors
    ///
    /// Returns `InvalidPagination` for an out-of-range limit or offset.
    #[instrument(skip(self, query), fields(limit = query.limit, offset = query.offset))]
    pub async fn list(&self, query: &ListQuery<PayeeFilter>) -> Result<Vec<PayeeEntity>, DatabaseError> {
        let mut builder = compile(query)?;
        debug!(sql = builder.sql(), "listing payees");

        let rows = builder
            .build_query_as::<PayeeRow>()
            .fetch_all(&self.pool)
            .await?;

        rows.into_iter().map(PayeeEntity::try_from).collect()
    }

    /// Replaces every field of an existing payee
    ///
    /// # Returns
    ///
    /// The payee as stored after the update
    ///
    /// # Errors
    ///
    /// * `NotFound` if the payee does not exist or was deleted
    /// * the same duplicate errors as [`PayeeRepository::insert`]
    #[instrument(skip(self, payee), fields(payee_id = %id))]
    pub async fn update(&self, id: PayeeId, payee: &Payee) -> Result<PayeeEntity, DatabaseError> {
        debug!("updating payee");

        let row = sqlx::query_as::<_, PayeeRow>(&format!(
            r#"
            UPDATE payees
            SET beneficiary_name = $1,
                beneficiary_code = $2,
                account_number = $3,
                ifsc_code = $4,
                bank_name = $5,
                email = $6,
                mobile = $7,
                payee_category = $8,
                updated_at = now()
            WHERE id = $9 AND is_deleted = FALSE
            RETURNING {PAYEE_COLUMNS}
            "#
        ))
        .bind(payee.beneficiary_name())
        .bind(payee.beneficiary_code())
        .bind(payee.account_number())
        .bind(payee.ifsc_code())
        .bind(payee.bank_name())
        .bind(payee.email())
        .bind(payee.mobile())
        .bind(payee.category().as_str())
        .bind(id.get())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| classify_write_error(e, None))?
        .ok_or_else(|| DatabaseError::not_found("Payee", id))?;

        row.try_into()
    }

    /// Soft-deletes a payee
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if the payee does not exist or is already deleted.
    #[instrument(skip(self), fields(payee_id = %id))]
    pub async fn delete(&self, id: PayeeId) -> Result<(), DatabaseError> {
        let result = sqlx::query(
            r#"
            UPDATE payees
            SET is_deleted = TRUE, deleted_at = now(), updated_at = now()
            WHERE id = $1 AND is_deleted = FALSE
            "#,
        )
        .bind(id.get())
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(DatabaseError::not_found("Payee", id));
        }

        debug!("payee soft-deleted");
        Ok(())
    }
}

/// Equality filters for payee lists
///
/// Empty strings and `None` mean "no filter on this field".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PayeeFilter {
    pub name: String,
    pub code: String,
    pub bank: String,
    pub category: Option<PayeeCategory>,
}

impl ListFilter for PayeeFilter {
    const SELECT: &'static str = "SELECT id, beneficiary_name, beneficiary_code, account_number, \
         ifsc_code, bank_name, email, mobile, payee_category, created_at, updated_at FROM payees";

    const SORT_COLUMNS: &'static [(&'static str, &'static str)] = &[
        ("id", "id"),
        ("name", "beneficiary_name"),
        ("code", "beneficiary_code"),
        ("bank", "bank_name"),
        ("category", "payee_category"),
    ];

    fn push_conditions(&self, clause: &mut WhereClause<'_>) {
        clause
            .raw("is_deleted = FALSE")
            .text_eq("beneficiary_name", &self.name)
            .text_eq("beneficiary_code", &self.code)
            .text_eq("bank_name", &self.bank)
            .eq("payee_category", self.category.map(|c| c.as_str()));
    }
}

/// Database row for a payee
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct PayeeRow {
    pub id: i64,
    pub beneficiary_name: String,
    pub beneficiary_code: String,
    pub account_number: String,
    pub ifsc_code: String,
    pub bank_name: String,
    pub email: String,
    pub mobile: String,
    pub payee_category: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl TryFrom<PayeeRow> for PayeeEntity {
    type Error = DatabaseError;

    fn try_from(row: PayeeRow) -> Result<Self, Self::Error> {
        let id = PayeeId::new(row.id);
        let payee = Payee::restore(PayeeDetails {
            beneficiary_name: row.beneficiary_name,
            beneficiary_code: row.beneficiary_code,
            account_number: row.account_number,
            ifsc_code: row.ifsc_code,
            bank_name: row.bank_name,
            email: row.email,
            mobile: row.mobile,
            category: row.payee_category,
        })
        .map_err(|e| DatabaseError::InvalidData(format!("payee {id}: {e}")))?;

        Ok(PayeeEntity::new(id, payee))
    }
}
