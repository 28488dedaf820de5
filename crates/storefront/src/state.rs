//! Application state shared across handlers.

use std::sync::Arc;
use std::time::Duration;

use moka::future::Cache;

use crate::client::{ClientError, ConfigClient};
use crate::config::StorefrontConfig;

/// Upper bound on cached page staleness when an external writer bypasses
/// this instance's invalidation (e.g. the CLI resetting the document).
const PAGE_CACHE_TTL_SECS: u64 = 300;

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc` and provides access to the
/// config client and the rendered-page cache.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: StorefrontConfig,
    client: ConfigClient,
    pages: Cache<&'static str, String>,
}

impl AppState {
    /// Create a new application state.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured store URL does not parse.
    pub fn new(config: StorefrontConfig) -> Result<Self, ClientError> {
        let client = ConfigClient::new(
            config.config_store_url.as_deref(),
            config.admin_password.clone(),
        )?;
        let pages = Cache::builder()
            .max_capacity(16)
            .time_to_live(Duration::from_secs(PAGE_CACHE_TTL_SECS))
            .build();

        Ok(Self {
            inner: Arc::new(AppStateInner {
                config,
                client,
                pages,
            }),
        })
    }

    /// Get a reference to the storefront configuration.
    #[must_use]
    pub fn config(&self) -> &StorefrontConfig {
        &self.inner.config
    }

    /// Get a reference to the config store client.
    #[must_use]
    pub fn client(&self) -> &ConfigClient {
        &self.inner.client
    }

    /// Get a reference to the rendered-page cache.
    #[must_use]
    pub fn pages(&self) -> &Cache<&'static str, String> {
        &self.inner.pages
    }

    /// Drop all cached page renders.
    ///
    /// Called after every successful configuration write so the public pages
    /// observe the new document immediately.
    pub fn invalidate_pages(&self) {
        self.inner.pages.invalidate_all();
    }
}
