//! CLI command implementations.

pub mod admin;
pub mod config;
pub mod migrate;

use secrecy::SecretString;
use thiserror::Error;

/// Errors from CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(&'static str),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error("Store error: {0}")]
    Store(#[from] ccom_config_store::StoreError),

    #[error("Backend error: {0}")]
    Backend(#[from] ccom_config_store::BackendError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Config store database URL from the environment.
pub fn database_url() -> Result<SecretString, CliError> {
    let _ = dotenvy::dotenv();
    if let Ok(value) = std::env::var("CONFIG_STORE_DATABASE_URL") {
        return Ok(SecretString::from(value));
    }
    if let Ok(value) = std::env::var("DATABASE_URL") {
        return Ok(SecretString::from(value));
    }
    Err(CliError::MissingEnvVar("CONFIG_STORE_DATABASE_URL"))
}
