//! `PostgreSQL` key-value backend.
//!
//! # Table
//!
//! `config_kv(key TEXT PRIMARY KEY, value TEXT NOT NULL, updated_at TIMESTAMPTZ)`
//!
//! # Migrations
//!
//! Migrations are stored in `crates/config-store/migrations/` and run via:
//! ```bash
//! cargo run -p ccom-cli -- migrate
//! ```

use std::time::Duration;

use async_trait::async_trait;
use secrecy::ExposeSecret;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;

use super::KvBackend;
use crate::error::BackendError;

/// Key-value backend on a `PostgreSQL` connection pool.
#[derive(Clone)]
pub struct PgBackend {
    pool: PgPool,
}

impl PgBackend {
    /// Connect with sensible pool defaults.
    ///
    /// # Errors
    ///
    /// Returns `sqlx::Error` if the connection cannot be established.
    pub async fn connect(database_url: &secrecy::SecretString) -> Result<Self, sqlx::Error> {
        let pool = PgPoolOptions::new()
            .max_connections(10)
            .min_connections(2)
            .acquire_timeout(Duration::from_secs(10))
            .connect(database_url.expose_secret())
            .await?;
        Ok(Self { pool })
    }

    /// Wrap an existing pool (used by the CLI).
    #[must_use]
    pub const fn from_pool(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Run pending migrations.
    ///
    /// # Errors
    ///
    /// Returns `MigrateError` if a migration fails.
    pub async fn migrate(&self) -> Result<(), sqlx::migrate::MigrateError> {
        sqlx::migrate!().run(&self.pool).await
    }
}

#[async_trait]
impl KvBackend for PgBackend {
    async fn get(&self, key: &str) -> Result<Option<String>, BackendError> {
        let value = sqlx::query_scalar::<_, String>("SELECT value FROM config_kv WHERE key = $1")
            .bind(key)
            .fetch_optional(&self.pool)
            .await?;
        Ok(value)
    }

    async fn put(&self, key: &str, value: &str) -> Result<(), BackendError> {
        sqlx::query(
            "INSERT INTO config_kv (key, value, updated_at) VALUES ($1, $2, now()) \
             ON CONFLICT (key) DO UPDATE SET value = EXCLUDED.value, updated_at = now()",
        )
        .bind(key)
        .bind(value)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn ping(&self) -> Result<(), BackendError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
