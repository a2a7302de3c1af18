//! Payout Preview Binary
//!
//! Connects to the configured database, applies migrations, and prints the
//! current payout preview as JSON on stdout.
//!
//! # Usage
//!
//! ```bash
//! DATABASE_URL=postgres://localhost/payouts cargo run --bin payout-preview
//! ```
//!
//! # Environment Variables
//!
//! * `DATABASE_URL` - PostgreSQL connection string (overrides `PAYOUT__DATABASE__URL`)
//! * `PAYOUT__DATABASE__MAX_CONNECTIONS` - Pool size (default: 25)
//! * `PAYOUT__LOG_LEVEL` - Log level: trace, debug, info, warn, error (default: info)
//! * `PAYOUT__LOG_FORMAT` - `pretty` or `json` (default: pretty)

use anyhow::Context;

use payout_service::{telemetry, PayoutService, ServiceConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if present (useful for local development)
    dotenvy::dotenv().ok();

    let config = ServiceConfig::from_env().context("failed to load configuration")?;
    telemetry::init_tracing(&config.log_level, config.log_format)
        .context("failed to initialize tracing")?;

    tracing::info!("Starting payout preview");

    let pool = infra_db::create_pool(config.database_config()).await?;
    infra_db::run_migrations(&pool).await?;

    let service = PayoutService::new(pool.clone());
    let preview = service.payout_preview().await?;

    tracing::info!(lines = preview.len(), total = %preview.total(), "Payout preview ready");
    println!("{}", serde_json::to_string_pretty(&preview)?);

    pool.close().await;
    Ok(())
}
