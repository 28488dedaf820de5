//! CCoM Storefront - public marketing site and admin panel.
//!
//! This binary serves the public pages and the admin panel on port 3000.
//!
//! # Architecture
//!
//! - Axum web framework with Askama templates for server-side rendering
//! - All editable content lives in one configuration document held by the
//!   config store service; each request reads one snapshot of it
//! - Rendered public pages are cached in-process and invalidated on every
//!   admin save
//! - Admin auth is a single shared password verified against the store's
//!   hash; the session records the hash it logged in with
//!
//! The storefront holds no database. When `CONFIG_STORE_URL` is unset it
//! serves the compiled-in default content, which is the expected state in
//! local development.

#![cfg_attr(not(test), forbid(unsafe_code))]
// Allow dead code for error variants and helpers kept for API symmetry
#![allow(dead_code)]

use axum::{Router, routing::get};
use tower_http::services::ServeDir;

mod client;
mod config;
mod error;
mod filters;
mod forms;
mod middleware;
mod routes;
mod state;

use config::StorefrontConfig;
use sentry::integrations::tracing as sentry_tracing;
use state::AppState;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize Sentry error tracking and return guard that must be kept alive.
fn init_sentry(config: &StorefrontConfig) -> Option<sentry::ClientInitGuard> {
    let dsn = config.sentry_dsn.as_ref()?;

    let guard = sentry::init((
        dsn.as_str(),
        sentry::ClientOptions {
            release: sentry::release_name!(),
            attach_stacktrace: true,
            ..Default::default()
        },
    ));

    tracing::info!("Sentry initialized");
    Some(guard)
}

/// Filter tracing events to Sentry event types.
fn sentry_event_filter(metadata: &tracing::Metadata<'_>) -> sentry_tracing::EventFilter {
    match *metadata.level() {
        tracing::Level::ERROR | tracing::Level::WARN => sentry_tracing::EventFilter::Event,
        tracing::Level::INFO | tracing::Level::DEBUG => sentry_tracing::EventFilter::Breadcrumb,
        _ => sentry_tracing::EventFilter::Ignore,
    }
}

#[tokio::main]
async fn main() {
    // Load configuration from environment (needed for Sentry init)
    let config = StorefrontConfig::from_env().expect("Failed to load configuration");

    // Initialize Sentry (must be done before tracing subscriber)
    let _sentry_guard = init_sentry(&config);

    // Initialize tracing with EnvFilter and Sentry integration
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "ccom_storefront=info,tower_http=debug".into());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .with(sentry_tracing::layer().event_filter(sentry_event_filter))
        .init();

    if config.config_store_url.is_none() {
        tracing::warn!(
            "CONFIG_STORE_URL is not set; serving compiled-in defaults and admin saves will fail"
        );
    }

    // Build application state
    let state = AppState::new(config.clone()).expect("Failed to initialize application state");

    // Create session layer
    let session_layer = middleware::create_session_layer(&config);

    // Build router
    let app = Router::new()
        .route("/health", get(health))
        .merge(routes::routes(state.clone()))
        .nest_service("/static", ServeDir::new("crates/storefront/static"))
        .layer(session_layer)
        .layer(axum::middleware::from_fn(
            middleware::request_id_middleware,
        ))
        .with_state(state)
        // Sentry layers (outermost for full request coverage)
        .layer(sentry_tower::NewSentryLayer::new_from_top())
        .layer(sentry_tower::SentryHttpLayer::new().enable_transaction());

    // Start server
    let addr = config.socket_addr();
    tracing::info!("storefront listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");
}

/// Liveness health check endpoint.
///
/// Returns "ok" if the server is running. Does not check the config store;
/// the storefront is designed to serve defaults without it.
async fn health() -> &'static str {
    "ok"
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}
