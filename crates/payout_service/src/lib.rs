//! Payout Service
//!
//! The entry point a transport layer calls into. [`PayoutService`] validates
//! raw input with the domain constructors, persists through the repositories,
//! and reports every failure as a [`ServiceError`] with an [`ErrorClass`].
//!
//! # Example
//!
//! ```rust,ignore
//! use payout_service::{PayoutService, ServiceConfig};
//!
//! let config = ServiceConfig::from_env()?;
//! let pool = infra_db::create_pool(config.database_config()).await?;
//! let service = PayoutService::new(pool);
//! let preview = service.payout_preview().await?;
//! ```

pub mod config;
pub mod error;
pub mod params;
pub mod telemetry;

pub use config::{DatabaseSettings, LogFormat, ServiceConfig};
pub use error::{ErrorClass, ServiceError};
pub use params::{ExpenseFilterParams, ListParams, PayeeFilterParams};

use sqlx::PgPool;
use tracing::{info, instrument};

use core_kernel::{ExpenseId, PayeeId};
use domain_expense::{Expense, ExpenseDetails, ExpenseEntity, PayoutPreview};
use domain_payee::{Payee, PayeeDetails, PayeeEntity};
use infra_db::{
    ExpenseFilter, ExpenseRepository, ListQuery, PayeeFilter, PayeeRepository, PayoutRepository,
};

/// Payee, expense, and payout operations over one connection pool
#[derive(Debug, Clone)]
pub struct PayoutService {
    payees: PayeeRepository,
    expenses: ExpenseRepository,
    payouts: PayoutRepository,
}

impl PayoutService {
    /// Creates the service and its repositories over a shared pool
    pub fn new(pool: PgPool) -> Self {
        Self {
            payees: PayeeRepository::new(pool.clone()),
            expenses: ExpenseRepository::new(pool.clone()),
            payouts: PayoutRepository::new(pool),
        }
    }

    // ------------------------------------------------------------------
    // Payees
    // ------------------------------------------------------------------

    /// Validates and stores a new payee
    ///
    /// # Errors
    ///
    /// * `InvalidPayee` when validation fails (nothing is written)
    /// * a duplicate `Database` error when a unique field is taken
    #[instrument(skip(self, details), fields(code = %details.beneficiary_code))]
    pub async fn register_payee(&self, details: PayeeDetails) -> Result<PayeeEntity, ServiceError> {
        let payee = Payee::new(details)?;
        let id = self.payees.insert(&payee).await?;
        info!(payee_id = %id, "payee registered");
        Ok(PayeeEntity::new(id, payee))
    }

    pub async fn payee(&self, id: PayeeId) -> Result<PayeeEntity, ServiceError> {
        Ok(self.payees.get_by_id(id).await?)
    }

    pub async fn list_payees(&self, query: &ListQuery<PayeeFilter>) -> Result<Vec<PayeeEntity>, ServiceError> {
        Ok(self.payees.list(query).await?)
    }

    /// Validates the new details and replaces the stored payee
    #[instrument(skip(self, details), fields(payee_id = %id))]
    pub async fn update_payee(&self, id: PayeeId, details: PayeeDetails) -> Result<PayeeEntity, ServiceError> {
        let payee = Payee::new(details)?;
        Ok(self.payees.update(id, &payee).await?)
    }

    /// Soft-deletes a payee
    #[instrument(skip(self), fields(payee_id = %id))]
    pub async fn remove_payee(&self, id: PayeeId) -> Result<(), ServiceError> {
        self.payees.delete(id).await?;
        info!("payee removed");
        Ok(())
    }

    // ------------------------------------------------------------------
    // Expenses
    // ------------------------------------------------------------------

    /// Validates and stores a new pending expense
    ///
    /// # Errors
    ///
    /// * `InvalidExpense` when validation fails (nothing is written)
    /// * `Database(UnknownPayee)` when the payee does not exist
    #[instrument(skip(self, details), fields(payee_id = details.payee_id))]
    pub async fn record_expense(&self, details: ExpenseDetails) -> Result<ExpenseEntity, ServiceError> {
        let expense = Expense::new(details)?;
        let id = self.expenses.insert(&expense).await?;
        info!(expense_id = %id, "expense recorded");
        Ok(ExpenseEntity::new(id, expense))
    }

    pub async fn expense(&self, id: ExpenseId) -> Result<ExpenseEntity, ServiceError> {
        Ok(self.expenses.get_by_id(id).await?)
    }

    pub async fn list_expenses(&self, query: &ListQuery<ExpenseFilter>) -> Result<Vec<ExpenseEntity>, ServiceError> {
        Ok(self.expenses.list(query).await?)
    }

    /// Validates the new details and replaces the stored expense, keeping its status
    #[instrument(skip(self, details), fields(expense_id = %id))]
    pub async fn update_expense(&self, id: ExpenseId, details: ExpenseDetails) -> Result<ExpenseEntity, ServiceError> {
        let expense = Expense::new(details)?;
        Ok(self.expenses.update(id, &expense).await?)
    }

    #[instrument(skip(self), fields(expense_id = %id))]
    pub async fn delete_expense(&self, id: ExpenseId) -> Result<(), ServiceError> {
        self.expenses.delete(id).await?;
        info!("expense deleted");
        Ok(())
    }

    // ------------------------------------------------------------------
    // Payouts
    // ------------------------------------------------------------------

    /// Everything currently owed, with its exact total
    pub async fn payout_preview(&self) -> Result<PayoutPreview, ServiceError> {
        Ok(self.payouts.preview().await?)
    }
}
