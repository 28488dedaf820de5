//! The serialized config store actor.
//!
//! One `ConfigStore` instance exists per deployment. Every operation takes
//! the instance mutex for its whole duration, so reads, writes and the lazy
//! first-use bootstrap are mutually exclusive. Writes are last-writer-wins:
//! two racing admin saves may clobber each other, which is accepted for
//! single-operator usage.

use ccom_core::{AppConfig, PasswordHash};
use secrecy::{ExposeSecret, SecretString};
use tokio::sync::Mutex;

use crate::backend::{CONFIG_KEY, KvBackend, PASSWORD_KEY};
use crate::error::StoreError;

/// Durable, serialized holder of the configuration document and the admin
/// password hash.
pub struct ConfigStore {
    inner: Mutex<Inner>,
}

struct Inner {
    backend: Box<dyn KvBackend>,
    fallback_secret: SecretString,
    bootstrapped: bool,
    password_hash: Option<PasswordHash>,
}

impl ConfigStore {
    /// Create a store over a backend.
    ///
    /// `fallback_secret` seeds the password hash the first time no hash is
    /// stored (the `ADMIN_PASSWORD` environment default).
    pub fn new(backend: impl KvBackend + 'static, fallback_secret: SecretString) -> Self {
        Self {
            inner: Mutex::new(Inner {
                backend: Box::new(backend),
                fallback_secret,
                bootstrapped: false,
                password_hash: None,
            }),
        }
    }

    /// Current configuration document, initializing the default if absent.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] on storage failure or if the stored document
    /// no longer parses.
    pub async fn config(&self) -> Result<AppConfig, StoreError> {
        let mut inner = self.inner.lock().await;
        inner.ensure_bootstrapped().await?;
        match inner.backend.get(CONFIG_KEY).await? {
            Some(raw) => serde_json::from_str(&raw).map_err(StoreError::Corrupt),
            None => {
                let default = AppConfig::default();
                inner.put_config(&default).await?;
                Ok(default)
            }
        }
    }

    /// Replace the whole configuration document.
    ///
    /// The body is parsed and validated before anything is written; a
    /// rejected payload leaves stored state untouched. A valid document is
    /// persisted unconditionally (no version check) and echoed back.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::InvalidPayload`] when the body is not a valid
    /// document, or a storage error.
    pub async fn replace_config(&self, raw: &str) -> Result<AppConfig, StoreError> {
        let document: AppConfig =
            serde_json::from_str(raw).map_err(|e| StoreError::InvalidPayload(e.to_string()))?;
        document
            .validate()
            .map_err(|e| StoreError::InvalidPayload(e.to_string()))?;

        let mut inner = self.inner.lock().await;
        inner.ensure_bootstrapped().await?;
        inner.put_config(&document).await?;
        Ok(document)
    }

    /// Current password verification hash, bootstrapping from the fallback
    /// secret if none is stored yet.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] on storage failure.
    pub async fn password_hash(&self) -> Result<PasswordHash, StoreError> {
        let mut inner = self.inner.lock().await;
        inner.ensure_bootstrapped().await?;
        inner.current_password_hash().await
    }

    /// Compare-and-swap password change.
    ///
    /// `current_hex` must match the stored hash (constant-time); `new_hex`
    /// must be a well-formed 64-character hex digest. A failed attempt
    /// leaves the stored hash unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Unauthorized`] on mismatch,
    /// [`StoreError::InvalidNewHash`] on a malformed new hash, or a storage
    /// error.
    pub async fn change_password(&self, current_hex: &str, new_hex: &str) -> Result<(), StoreError> {
        let new_hash = PasswordHash::parse(new_hex).map_err(|_| StoreError::InvalidNewHash)?;

        let mut inner = self.inner.lock().await;
        inner.ensure_bootstrapped().await?;
        let stored = inner.current_password_hash().await?;

        // A presented hash that is not even well-formed hex cannot match
        let presented =
            PasswordHash::parse(current_hex).map_err(|_| StoreError::Unauthorized)?;
        if !stored.matches(&presented) {
            return Err(StoreError::Unauthorized);
        }

        inner.backend.put(PASSWORD_KEY, new_hash.as_str()).await?;
        inner.password_hash = Some(new_hash);
        Ok(())
    }

    /// Readiness probe against the backend.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] when the backend is unreachable.
    pub async fn ping(&self) -> Result<(), StoreError> {
        let inner = self.inner.lock().await;
        inner.backend.ping().await?;
        Ok(())
    }
}

impl Inner {
    /// First-use initialization, mutually exclusive with request handling
    /// because the caller already holds the instance mutex.
    async fn ensure_bootstrapped(&mut self) -> Result<(), StoreError> {
        if self.bootstrapped {
            return Ok(());
        }

        if self.backend.get(CONFIG_KEY).await?.is_none() {
            let default = AppConfig::default();
            self.put_config(&default).await?;
        }

        match self.backend.get(PASSWORD_KEY).await? {
            Some(stored) => {
                let hash = PasswordHash::parse(&stored).map_err(StoreError::CorruptHash)?;
                self.password_hash = Some(hash);
            }
            None => {
                let hash = PasswordHash::digest(self.fallback_secret.expose_secret());
                self.backend.put(PASSWORD_KEY, hash.as_str()).await?;
                self.password_hash = Some(hash);
            }
        }

        self.bootstrapped = true;
        Ok(())
    }

    /// Cached hash, re-reading storage if the cache is cold.
    async fn current_password_hash(&mut self) -> Result<PasswordHash, StoreError> {
        if let Some(hash) = &self.password_hash {
            return Ok(hash.clone());
        }
        match self.backend.get(PASSWORD_KEY).await? {
            Some(stored) => {
                let hash = PasswordHash::parse(&stored).map_err(StoreError::CorruptHash)?;
                self.password_hash = Some(hash.clone());
                Ok(hash)
            }
            None => {
                let hash = PasswordHash::digest(self.fallback_secret.expose_secret());
                self.backend.put(PASSWORD_KEY, hash.as_str()).await?;
                self.password_hash = Some(hash.clone());
                Ok(hash)
            }
        }
    }

    async fn put_config(&mut self, document: &AppConfig) -> Result<(), StoreError> {
        let raw = serde_json::to_string(document).map_err(StoreError::Corrupt)?;
        self.backend.put(CONFIG_KEY, &raw).await?;
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::backend::memory::MemoryBackend;

    fn store_with(backend: &MemoryBackend) -> ConfigStore {
        ConfigStore::new(backend.clone(), SecretString::from("admin".to_string()))
    }

    #[tokio::test]
    async fn first_read_initializes_default_exactly_once() {
        let backend = MemoryBackend::new();
        let store = store_with(&backend);

        let config = store.config().await.unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.product.price, 4_990_000);
        assert_eq!(config.product.discount_percent, 17);

        // Bootstrap wrote the document and the password hash, nothing else
        assert_eq!(backend.put_count(), 2);

        // A second read does not write again
        store.config().await.unwrap();
        assert_eq!(backend.put_count(), 2);
    }

    #[tokio::test]
    async fn bootstrap_respects_preexisting_state() {
        let backend = MemoryBackend::new();
        let mut seeded = AppConfig::default();
        seeded.store.name = "CCoM Demo".to_string();
        backend.seed(CONFIG_KEY, &serde_json::to_string(&seeded).unwrap());
        backend.seed(PASSWORD_KEY, PasswordHash::digest("đã-đổi").as_str());

        let store = store_with(&backend);
        assert_eq!(store.config().await.unwrap().store.name, "CCoM Demo");
        assert_eq!(
            store.password_hash().await.unwrap(),
            PasswordHash::digest("đã-đổi")
        );
        assert_eq!(backend.put_count(), 0);
    }

    #[tokio::test]
    async fn replace_then_read_round_trips() {
        let backend = MemoryBackend::new();
        let store = store_with(&backend);

        let mut replacement = AppConfig::default();
        replacement.product.price = 5_500_000;
        replacement.product.discount_percent = 10;
        replacement.store.tagline = "Phiên bản 2026".to_string();

        let echoed = store
            .replace_config(&serde_json::to_string(&replacement).unwrap())
            .await
            .unwrap();
        assert_eq!(echoed, replacement);

        // The read observes the replacement wholesale, not merged
        let read = store.config().await.unwrap();
        assert_eq!(read, replacement);
        assert_eq!(read.product.price, 5_500_000);
        assert_eq!(read.product.discount_percent, 10);
    }

    #[tokio::test]
    async fn malformed_payload_is_rejected_without_mutation() {
        let backend = MemoryBackend::new();
        let store = store_with(&backend);
        store.config().await.unwrap();
        let before = backend.raw(CONFIG_KEY).unwrap();

        let err = store.replace_config("{ not json").await.unwrap_err();
        assert!(matches!(err, StoreError::InvalidPayload(_)));
        assert_eq!(backend.raw(CONFIG_KEY).unwrap(), before);
    }

    #[tokio::test]
    async fn invalid_document_is_rejected_without_mutation() {
        let backend = MemoryBackend::new();
        let store = store_with(&backend);
        store.config().await.unwrap();
        let before = backend.raw(CONFIG_KEY).unwrap();

        let mut invalid = AppConfig::default();
        invalid.product.discount_percent = 100;
        let err = store
            .replace_config(&serde_json::to_string(&invalid).unwrap())
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::InvalidPayload(_)));
        assert_eq!(backend.raw(CONFIG_KEY).unwrap(), before);
    }

    #[tokio::test]
    async fn password_hash_bootstraps_from_fallback_secret() {
        let backend = MemoryBackend::new();
        let store = store_with(&backend);

        let hash = store.password_hash().await.unwrap();
        assert_eq!(hash, PasswordHash::digest("admin"));
        assert_eq!(
            backend.raw(PASSWORD_KEY).unwrap(),
            PasswordHash::digest("admin").as_str()
        );
    }

    #[tokio::test]
    async fn change_password_swaps_the_stored_hash() {
        let backend = MemoryBackend::new();
        let store = store_with(&backend);

        let current = PasswordHash::digest("admin");
        let new = PasswordHash::digest("mật-khẩu-mới");
        store
            .change_password(current.as_str(), new.as_str())
            .await
            .unwrap();

        let stored = store.password_hash().await.unwrap();
        assert_eq!(stored, new);
        // The old password no longer verifies
        assert!(!stored.matches(&current));
    }

    #[tokio::test]
    async fn change_password_rejects_wrong_current_hash() {
        let backend = MemoryBackend::new();
        let store = store_with(&backend);
        let before = store.password_hash().await.unwrap();

        let err = store
            .change_password(
                PasswordHash::digest("sai").as_str(),
                PasswordHash::digest("mới").as_str(),
            )
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::Unauthorized));

        // Stored hash unchanged after the failed attempt
        assert_eq!(store.password_hash().await.unwrap(), before);
        assert_eq!(backend.raw(PASSWORD_KEY).unwrap(), before.as_str());
    }

    #[tokio::test]
    async fn change_password_rejects_malformed_current_hash() {
        let backend = MemoryBackend::new();
        let store = store_with(&backend);

        let err = store
            .change_password("không-phải-hex", PasswordHash::digest("mới").as_str())
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::Unauthorized));
    }

    #[tokio::test]
    async fn change_password_rejects_malformed_new_hash() {
        let backend = MemoryBackend::new();
        let store = store_with(&backend);
        let before = store.password_hash().await.unwrap();

        let err = store
            .change_password(PasswordHash::digest("admin").as_str(), "abc123")
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::InvalidNewHash));
        assert_eq!(store.password_hash().await.unwrap(), before);
    }

    #[tokio::test]
    async fn new_hash_is_normalized_to_lowercase() {
        let backend = MemoryBackend::new();
        let store = store_with(&backend);

        let new = PasswordHash::digest("mới");
        let uppercase = new.as_str().to_uppercase();
        store
            .change_password(PasswordHash::digest("admin").as_str(), &uppercase)
            .await
            .unwrap();
        assert_eq!(backend.raw(PASSWORD_KEY).unwrap(), new.as_str());
    }
}
