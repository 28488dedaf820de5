//! Database migration command.
//!
//! # Usage
//!
//! ```bash
//! ccom-cli migrate
//! ```
//!
//! # Environment Variables
//!
//! - `CONFIG_STORE_DATABASE_URL` - `PostgreSQL` connection string for the
//!   config store (falls back to `DATABASE_URL`)

use ccom_config_store::PgBackend;

use super::{CliError, database_url};

/// Run config store database migrations.
pub async fn run() -> Result<(), CliError> {
    let database_url = database_url()?;

    tracing::info!("Connecting to config store database...");
    let backend = PgBackend::connect(&database_url).await?;

    tracing::info!("Running config store migrations...");
    backend.migrate().await?;

    tracing::info!("Config store migrations complete!");
    Ok(())
}
