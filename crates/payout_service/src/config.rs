//! Service configuration
//!
//! Settings come from `PAYOUT__`-prefixed environment variables with `__` as
//! the nesting separator, e.g. `PAYOUT__DATABASE__MAX_CONNECTIONS=40`. A plain
//! `DATABASE_URL` takes precedence over `PAYOUT__DATABASE__URL`.

use config::{Config, ConfigError, Environment};
use serde::Deserialize;
use std::time::Duration;

use infra_db::DatabaseConfig;

/// Prefix of every service environment variable
pub const ENV_PREFIX: &str = "PAYOUT";

/// Connection pool settings
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DatabaseSettings {
    /// PostgreSQL connection string
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
    pub acquire_timeout_secs: u64,
    pub max_lifetime_secs: u64,
    pub idle_timeout_secs: u64,
}

impl Default for DatabaseSettings {
    fn default() -> Self {
        Self {
            url: "postgres://localhost/payouts".to_string(),
            max_connections: 25,
            min_connections: 5,
            acquire_timeout_secs: 30,
            max_lifetime_secs: 5 * 60,
            idle_timeout_secs: 60,
        }
    }
}

impl From<&DatabaseSettings> for DatabaseConfig {
    fn from(settings: &DatabaseSettings) -> Self {
        DatabaseConfig::new(settings.url.clone())
            .max_connections(settings.max_connections)
            .min_connections(settings.min_connections)
            .acquire_timeout(Duration::from_secs(settings.acquire_timeout_secs))
            .max_lifetime(Duration::from_secs(settings.max_lifetime_secs))
            .idle_timeout(Duration::from_secs(settings.idle_timeout_secs))
    }
}

/// Output format of the log subscriber
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// Top-level service configuration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    pub database: DatabaseSettings,
    /// Log level: trace, debug, info, warn, error
    pub log_level: String,
    pub log_format: LogFormat,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            database: DatabaseSettings::default(),
            log_level: "info".to_string(),
            log_format: LogFormat::default(),
        }
    }
}

impl ServiceConfig {
    /// Loads configuration from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        let database_url = std::env::var("DATABASE_URL").ok();
        Self::load(Self::environment(), database_url)
    }

    /// The environment source used by [`ServiceConfig::from_env`]
    pub fn environment() -> Environment {
        Environment::with_prefix(ENV_PREFIX)
            .prefix_separator("__")
            .separator("__")
            .try_parsing(true)
    }

    /// Loads configuration from an environment source plus an optional URL override
    pub fn load(environment: Environment, database_url: Option<String>) -> Result<Self, ConfigError> {
        let mut config: ServiceConfig = Config::builder()
            .add_source(environment)
            .build()?
            .try_deserialize()?;

        if let Some(url) = database_url.filter(|url| !url.trim().is_empty()) {
            config.database.url = url;
        }

        Ok(config)
    }

    /// Pool configuration for [`infra_db::create_pool`]
    pub fn database_config(&self) -> DatabaseConfig {
        DatabaseConfig::from(&self.database)
    }
}
