//! Config store service configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Required
//! - `CONFIG_STORE_DATABASE_URL` - `PostgreSQL` connection string (falls back
//!   to the generic `DATABASE_URL`)
//!
//! ## Optional
//! - `CONFIG_STORE_HOST` - Bind address (default: 127.0.0.1)
//! - `CONFIG_STORE_PORT` - Listen port (default: 3002)
//! - `ADMIN_PASSWORD` - Bootstrap admin secret used only when no password
//!   hash is stored yet (default: "admin", local development only)
//! - `SENTRY_DSN` - Sentry error tracking DSN

use std::net::{IpAddr, SocketAddr};

use secrecy::SecretString;
use thiserror::Error;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Config store service configuration.
#[derive(Debug, Clone)]
pub struct StoreServiceConfig {
    /// `PostgreSQL` database connection URL (contains password)
    pub database_url: SecretString,
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Bootstrap admin secret (hashed on first use when no hash is stored)
    pub admin_password: SecretString,
    /// Sentry DSN for error tracking
    pub sentry_dsn: Option<String>,
}

impl StoreServiceConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if required variables are missing or invalid.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let database_url = get_database_url("CONFIG_STORE_DATABASE_URL")?;
        let host = get_env_or_default("CONFIG_STORE_HOST", "127.0.0.1")
            .parse::<IpAddr>()
            .map_err(|e| {
                ConfigError::InvalidEnvVar("CONFIG_STORE_HOST".to_string(), e.to_string())
            })?;
        let port = get_env_or_default("CONFIG_STORE_PORT", "3002")
            .parse::<u16>()
            .map_err(|e| {
                ConfigError::InvalidEnvVar("CONFIG_STORE_PORT".to_string(), e.to_string())
            })?;
        let admin_password = admin_password_from_env();
        let sentry_dsn = std::env::var("SENTRY_DSN").ok();

        Ok(Self {
            database_url,
            host,
            port,
            admin_password,
            sentry_dsn,
        })
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

/// Bootstrap admin secret, defaulting to "admin" for local development.
fn admin_password_from_env() -> SecretString {
    match std::env::var("ADMIN_PASSWORD") {
        Ok(value) if !value.trim().is_empty() => SecretString::from(value),
        _ => {
            tracing::warn!(
                "ADMIN_PASSWORD is not set; using fallback password \"admin\". \
                 Set ADMIN_PASSWORD before deploying."
            );
            SecretString::from("admin".to_string())
        }
    }
}

/// Get database URL with fallback to generic `DATABASE_URL`.
fn get_database_url(primary_key: &str) -> Result<SecretString, ConfigError> {
    if let Ok(value) = std::env::var(primary_key) {
        return Ok(SecretString::from(value));
    }
    if let Ok(value) = std::env::var("DATABASE_URL") {
        return Ok(SecretString::from(value));
    }
    Err(ConfigError::MissingEnvVar(primary_key.to_string()))
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
