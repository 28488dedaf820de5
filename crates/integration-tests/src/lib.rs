//! Integration tests for CCoM.
//!
//! # Running Tests
//!
//! ```bash
//! # Start the database and run migrations
//! cargo run -p ccom-cli -- migrate
//!
//! # Start the services
//! cargo run -p ccom-config-store
//! CONFIG_STORE_URL=http://localhost:3002 cargo run -p ccom-storefront
//!
//! # Run integration tests
//! cargo test -p ccom-integration-tests -- --ignored
//! ```
//!
//! # Test Categories
//!
//! - `config_store` - Config store HTTP contract tests
//! - `storefront` - Storefront page and admin tests
//!
//! Tests are `#[ignore]`d by default because they need running services;
//! hermetic coverage of the same behavior lives in each crate's unit tests.

/// Base URL for the config store service (configurable via environment).
#[must_use]
pub fn config_store_base_url() -> String {
    std::env::var("CONFIG_STORE_BASE_URL").unwrap_or_else(|_| "http://localhost:3002".to_string())
}

/// Base URL for the storefront (configurable via environment).
#[must_use]
pub fn storefront_base_url() -> String {
    std::env::var("STOREFRONT_BASE_URL").unwrap_or_else(|_| "http://localhost:3000".to_string())
}
