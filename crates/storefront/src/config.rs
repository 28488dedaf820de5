//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `STOREFRONT_HOST` - Bind address (default: 127.0.0.1)
//! - `STOREFRONT_PORT` - Listen port (default: 3000)
//! - `STOREFRONT_BASE_URL` - Public URL, used to decide cookie security
//!   attributes (default: <http://localhost:3000>)
//! - `CONFIG_STORE_URL` - Base URL of the config store service. When unset
//!   the storefront serves the compiled-in defaults and admin saves fail
//!   with a descriptive error; this is the expected local-development state.
//! - `ADMIN_PASSWORD` - Fallback admin secret used when the config store is
//!   unreachable (default: "admin", local development only)
//! - `SENTRY_DSN` - Sentry error tracking DSN

use std::net::{IpAddr, SocketAddr};

use secrecy::SecretString;
use thiserror::Error;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Storefront application configuration.
#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Public base URL for the storefront
    pub base_url: String,
    /// Base URL of the config store service, if deployed
    pub config_store_url: Option<String>,
    /// Fallback admin secret for when the store is unreachable
    pub admin_password: SecretString,
    /// Sentry DSN for error tracking
    pub sentry_dsn: Option<String>,
}

impl StorefrontConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is present but invalid.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let host = get_env_or_default("STOREFRONT_HOST", "127.0.0.1")
            .parse::<IpAddr>()
            .map_err(|e| {
                ConfigError::InvalidEnvVar("STOREFRONT_HOST".to_string(), e.to_string())
            })?;
        let port = get_env_or_default("STOREFRONT_PORT", "3000")
            .parse::<u16>()
            .map_err(|e| {
                ConfigError::InvalidEnvVar("STOREFRONT_PORT".to_string(), e.to_string())
            })?;
        let base_url = get_env_or_default("STOREFRONT_BASE_URL", "http://localhost:3000");
        let config_store_url = std::env::var("CONFIG_STORE_URL")
            .ok()
            .filter(|value| !value.trim().is_empty());
        let admin_password = admin_password_from_env();
        let sentry_dsn = std::env::var("SENTRY_DSN").ok();

        Ok(Self {
            host,
            port,
            base_url,
            config_store_url,
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

/// Fallback admin secret, defaulting to "admin" for local development.
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

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn socket_addr_combines_host_and_port() {
        let config = StorefrontConfig {
            host: "127.0.0.1".parse().unwrap(),
            port: 3000,
            base_url: "http://localhost:3000".to_string(),
            config_store_url: None,
            admin_password: SecretString::from("admin"),
            sentry_dsn: None,
        };
        let addr = config.socket_addr();
        assert_eq!(addr.ip().to_string(), "127.0.0.1");
        assert_eq!(addr.port(), 3000);
    }
}
