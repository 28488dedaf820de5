//! Key-value backend seam for the config store.
//!
//! The store persists exactly two keys. The backend trait keeps the store
//! logic independent of where those keys live: `PostgreSQL` in production,
//! process memory in tests.

pub mod memory;
pub mod postgres;

use async_trait::async_trait;

use crate::error::BackendError;

/// Key holding the serialized configuration document.
pub const CONFIG_KEY: &str = "config";

/// Key holding the lowercase hex admin password hash.
pub const PASSWORD_KEY: &str = "adminPasswordHash";

/// A durable string-to-string key-value backend.
#[async_trait]
pub trait KvBackend: Send + Sync {
    /// Read a value.
    ///
    /// # Errors
    ///
    /// Returns [`BackendError`] when storage I/O fails.
    async fn get(&self, key: &str) -> Result<Option<String>, BackendError>;

    /// Write a value, replacing any previous one.
    ///
    /// # Errors
    ///
    /// Returns [`BackendError`] when storage I/O fails.
    async fn put(&self, key: &str, value: &str) -> Result<(), BackendError>;

    /// Readiness probe.
    ///
    /// # Errors
    ///
    /// Returns [`BackendError`] when the backend is unreachable.
    async fn ping(&self) -> Result<(), BackendError> {
        Ok(())
    }
}
