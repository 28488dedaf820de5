//! Client for the config store service.
//!
//! Reads fall back to the compiled-in default document whenever the store is
//! not configured or not reachable; writes require a reachable store and
//! surface failures to the caller. The client performs no merging (every
//! write is a full-document replacement) and never retries.

use std::sync::Arc;

use ccom_core::{AppConfig, PasswordHash};
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use serde_json::json;
use thiserror::Error;
use url::Url;

/// Errors from config store interactions.
#[derive(Debug, Error)]
pub enum ClientError {
    /// No store is configured. The expected state in local development;
    /// reads fall back silently, writes fail with this error.
    #[error("config store is not configured (CONFIG_STORE_URL unset)")]
    StoreUnavailable,

    /// The configured store URL does not parse.
    #[error("invalid config store URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// Transport-level failure talking to the store.
    #[error("config store request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The store rejected the request.
    #[error("config store rejected the request ({status}): {message}")]
    Rejected { status: u16, message: String },

    /// Password change rejected: wrong current password.
    #[error("current password is incorrect")]
    WrongCurrentPassword,

    /// Password change rejected: malformed new password hash.
    #[error("new password was rejected by the store")]
    InvalidNewPassword,
}

/// Client for the config store service.
///
/// Cheaply cloneable via `Arc`.
#[derive(Clone)]
pub struct ConfigClient {
    inner: Arc<ClientInner>,
}

struct ClientInner {
    http: reqwest::Client,
    base_url: Option<Url>,
    fallback_secret: SecretString,
}

#[derive(Deserialize)]
struct HashResponse {
    hash: PasswordHash,
}

impl ConfigClient {
    /// Create a client.
    ///
    /// `store_url` is the optional base URL of the config store service;
    /// `fallback_secret` is the environment admin secret used for password
    /// verification when no store is reachable.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidUrl`] if `store_url` does not parse.
    pub fn new(
        store_url: Option<&str>,
        fallback_secret: SecretString,
    ) -> Result<Self, ClientError> {
        let base_url = store_url.map(Url::parse).transpose()?;
        Ok(Self {
            inner: Arc::new(ClientInner {
                http: reqwest::Client::new(),
                base_url,
                fallback_secret,
            }),
        })
    }

    /// Whether a store is configured for this deployment.
    #[must_use]
    pub fn is_available(&self) -> bool {
        self.inner.base_url.is_some()
    }

    /// Current configuration document.
    ///
    /// Falls back to the compiled-in default when the store is unavailable
    /// or the read fails; end users never see the difference.
    pub async fn fetch_config(&self) -> AppConfig {
        match self.try_fetch_config().await {
            Ok(Some(config)) => config,
            Ok(None) => AppConfig::default(),
            Err(error) => {
                tracing::warn!(%error, "Falling back to default configuration");
                AppConfig::default()
            }
        }
    }

    /// Replace the whole configuration document.
    ///
    /// On success the caller is responsible for invalidating any cached
    /// renders of pages that embed the document.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::StoreUnavailable`] when no store is
    /// configured, or the store's rejection / transport failure otherwise.
    pub async fn write_config(&self, document: &AppConfig) -> Result<AppConfig, ClientError> {
        let url = self.endpoint("/config").ok_or(ClientError::StoreUnavailable)?;
        let response = self.inner.http.put(url).json(document).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::Rejected {
                status: status.as_u16(),
                message: store_message(response).await,
            });
        }
        Ok(response.json().await?)
    }

    /// Current password verification hash.
    ///
    /// The store's hash when reachable, otherwise the hash of the
    /// environment fallback secret.
    pub async fn fetch_password_hash(&self) -> PasswordHash {
        match self.try_fetch_hash().await {
            Ok(Some(hash)) => hash,
            Ok(None) => self.fallback_hash(),
            Err(error) => {
                tracing::warn!(%error, "Falling back to environment admin password hash");
                self.fallback_hash()
            }
        }
    }

    /// Constant-time check of a password candidate against the current hash.
    pub async fn verify_password(&self, candidate: &str) -> bool {
        let stored = self.fetch_password_hash().await;
        stored.matches(&PasswordHash::digest(candidate))
    }

    /// Change the admin password via the store's compare-and-swap endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::WrongCurrentPassword`] when the store rejects
    /// the current password, [`ClientError::InvalidNewPassword`] when it
    /// rejects the new hash, [`ClientError::StoreUnavailable`] when no store
    /// is configured.
    pub async fn change_password(&self, current: &str, new: &str) -> Result<(), ClientError> {
        let url = self
            .endpoint("/auth/password")
            .ok_or(ClientError::StoreUnavailable)?;
        let payload = json!({
            "currentHash": PasswordHash::digest(current).as_str(),
            "newHash": PasswordHash::digest(new).as_str(),
        });
        let response = self.inner.http.put(url).json(&payload).send().await?;
        let status = response.status();
        match status.as_u16() {
            200..=299 => Ok(()),
            401 => Err(ClientError::WrongCurrentPassword),
            400 => Err(ClientError::InvalidNewPassword),
            code => Err(ClientError::Rejected {
                status: code,
                message: store_message(response).await,
            }),
        }
    }

    async fn try_fetch_config(&self) -> Result<Option<AppConfig>, ClientError> {
        let Some(url) = self.endpoint("/config") else {
            return Ok(None);
        };
        let response = self.inner.http.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::Rejected {
                status: status.as_u16(),
                message: store_message(response).await,
            });
        }
        Ok(Some(response.json().await?))
    }

    async fn try_fetch_hash(&self) -> Result<Option<PasswordHash>, ClientError> {
        let Some(url) = self.endpoint("/auth/hash") else {
            return Ok(None);
        };
        let response = self.inner.http.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::Rejected {
                status: status.as_u16(),
                message: store_message(response).await,
            });
        }
        let payload: HashResponse = response.json().await?;
        Ok(Some(payload.hash))
    }

    fn fallback_hash(&self) -> PasswordHash {
        PasswordHash::digest(self.inner.fallback_secret.expose_secret())
    }

    fn endpoint(&self, path: &str) -> Option<Url> {
        let base = self.inner.base_url.as_ref()?;
        base.join(path).ok()
    }
}

/// Extract the store's diagnostic message from an error response body.
async fn store_message(response: reqwest::Response) -> String {
    let body = response.text().await.unwrap_or_default();
    serde_json::from_str::<serde_json::Value>(&body)
        .ok()
        .and_then(|value| value.get("message")?.as_str().map(String::from))
        .unwrap_or(body)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn unavailable_client() -> ConfigClient {
        ConfigClient::new(None, SecretString::from("admin")).unwrap()
    }

    #[test]
    fn rejects_malformed_store_url() {
        let result = ConfigClient::new(Some("not a url"), SecretString::from("admin"));
        assert!(matches!(result, Err(ClientError::InvalidUrl(_))));
    }

    #[tokio::test]
    async fn unavailable_store_reads_fall_back_to_default() {
        let client = unavailable_client();
        assert!(!client.is_available());
        assert_eq!(client.fetch_config().await, AppConfig::default());
    }

    #[tokio::test]
    async fn unavailable_store_writes_fail() {
        let client = unavailable_client();
        let err = client.write_config(&AppConfig::default()).await.unwrap_err();
        assert!(matches!(err, ClientError::StoreUnavailable));
    }

    #[tokio::test]
    async fn unavailable_store_verifies_against_fallback_secret() {
        let client = unavailable_client();
        assert!(client.verify_password("admin").await);
        assert!(!client.verify_password("khác").await);
    }

    #[tokio::test]
    async fn unavailable_store_cannot_change_password() {
        let client = unavailable_client();
        let err = client.change_password("admin", "mới").await.unwrap_err();
        assert!(matches!(err, ClientError::StoreUnavailable));
    }
}
