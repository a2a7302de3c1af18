//! Database Test Utilities
//!
//! Integration tests run against the PostgreSQL instance named by
//! `TEST_DATABASE_URL`. When the variable is unset, one PostgreSQL container
//! is started per test binary through testcontainers and shared by every test
//! in it.
//!
//! Every [`TestDatabase`] holds a process-wide lock for its lifetime; tests in
//! one binary therefore run one at a time against freshly truncated tables.

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use std::time::Duration;
use testcontainers::{
    core::{IntoContainerPort, WaitFor},
    runners::AsyncRunner,
    ContainerAsync, GenericImage, ImageExt,
};
use tokio::sync::{Mutex, MutexGuard, OnceCell};

/// Environment variable holding the test database URL
pub const TEST_DATABASE_URL_VAR: &str = "TEST_DATABASE_URL";

/// PostgreSQL image used when no database URL is configured
const POSTGRES_IMAGE: &str = "postgres";
const POSTGRES_TAG: &str = "16-alpine";
const POSTGRES_USER: &str = "payout_test";
const POSTGRES_PASSWORD: &str = "payout_test";
const POSTGRES_DB: &str = "payout_test";
const POSTGRES_READY: &str = "database system is ready to accept connections";

static DATABASE_LOCK: Lazy<Mutex<()>> = Lazy::new(|| Mutex::new(()));

/// The server every test in this binary connects to
static TEST_SERVER: OnceCell<TestServer> = OnceCell::const_new();

type BoxError = Box<dyn std::error::Error + Send + Sync>;

struct TestServer {
    url: String,
    // Kept alive for the whole test binary
    _container: Option<ContainerAsync<GenericImage>>,
}

impl TestServer {
    async fn start() -> Result<Self, BoxError> {
        if let Ok(url) = std::env::var(TEST_DATABASE_URL_VAR) {
            if !url.trim().is_empty() {
                return Ok(Self {
                    url,
                    _container: None,
                });
            }
        }

        let container = GenericImage::new(POSTGRES_IMAGE, POSTGRES_TAG)
            .with_exposed_port(5432.tcp())
            .with_wait_for(WaitFor::message_on_stderr(POSTGRES_READY))
            .with_wait_for(WaitFor::message_on_stdout(POSTGRES_READY))
            .with_env_var("POSTGRES_USER", POSTGRES_USER)
            .with_env_var("POSTGRES_PASSWORD", POSTGRES_PASSWORD)
            .with_env_var("POSTGRES_DB", POSTGRES_DB)
            .start()
            .await?;

        let host = container.get_host().await?.to_string();
        let port = container.get_host_port_ipv4(5432.tcp()).await?;

        Ok(Self {
            url: container_url(&host, port),
            _container: Some(container),
        })
    }
}

fn container_url(host: &str, port: u16) -> String {
    format!("postgres://{POSTGRES_USER}:{POSTGRES_PASSWORD}@{host}:{port}/{POSTGRES_DB}")
}

/// URL of the shared test server, starting a container on first use
///
/// # Panics
///
/// Panics if no URL is configured and the container cannot be started.
pub async fn test_database_url() -> &'static str {
    let server = TEST_SERVER
        .get_or_init(|| async {
            TestServer::start()
                .await
                .expect("Failed to start PostgreSQL test container")
        })
        .await;
    &server.url
}

/// Exclusive handle on a migrated, empty test database
pub struct TestDatabase {
    pool: PgPool,
    _guard: MutexGuard<'static, ()>,
}

impl TestDatabase {
    /// Connects to the shared test server and prepares a clean database
    ///
    /// # Panics
    ///
    /// Panics if the server is unreachable or the database cannot be prepared.
    pub async fn acquire() -> Self {
        let url = test_database_url().await;
        Self::connect(url)
            .await
            .expect("Failed to prepare test database")
    }

    /// Connects to the given URL, applies migrations, and clears all rows
    ///
    /// # Errors
    ///
    /// Returns an error if connecting, migrating, or truncating fails
    pub async fn connect(url: &str) -> Result<Self, BoxError> {
        let guard = DATABASE_LOCK.lock().await;

        let pool = PgPoolOptions::new()
            .max_connections(5)
            .acquire_timeout(Duration::from_secs(30))
            .connect(url)
            .await?;

        sqlx::migrate!("../../migrations").run(&pool).await?;

        let db = Self {
            pool,
            _guard: guard,
        };
        db.clear_data().await?;
        Ok(db)
    }

    /// Returns a reference to the connection pool
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Clears all data from the database while preserving the schema
    pub async fn clear_data(&self) -> Result<(), BoxError> {
        sqlx::query("TRUNCATE TABLE expenses, payees RESTART IDENTITY CASCADE")
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    /// Sets an expense's status directly; there is no domain operation for this
    pub async fn set_expense_status(&self, expense_id: i64, status: &str) -> Result<(), BoxError> {
        sqlx::query("UPDATE expenses SET status = $1 WHERE id = $2")
            .bind(status)
            .bind(expense_id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    /// Moves an expense's date, bypassing the no-past-dates rule
    pub async fn set_expense_date(&self, expense_id: i64, date: NaiveDate) -> Result<(), BoxError> {
        sqlx::query("UPDATE expenses SET date_incurred = $1 WHERE id = $2")
            .bind(date)
            .bind(expense_id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}

/// Helper macro for running database tests
///
/// Expands to a `#[tokio::test]` that binds a freshly acquired
/// [`TestDatabase`] to the given name.
#[macro_export]
macro_rules! db_test {
    ($name:ident, |$db:ident| $body:block) => {
        #[tokio::test]
        async fn $name() {
            let $db = $crate::database::TestDatabase::acquire().await;
            $body
        }
    };
}
