//! HTTP surface of the config store.
//!
//! # Route Structure
//!
//! ```text
//! GET  /config         - Current document (initializes default if absent)
//! PUT  /config         - Full-document replacement, echoes the document
//! GET  /auth/hash      - Current password verification hash
//! PUT  /auth/password  - Compare-and-swap password change
//! OPTIONS *            - CORS preflight (empty 200)
//! GET  /health         - Liveness
//! GET  /health/ready   - Backend readiness
//! ```

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::State,
    http::{Method, StatusCode, header},
    routing::get,
};
use ccom_core::{AppConfig, PasswordHash};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use tower_http::cors::{Any, CorsLayer};

use crate::error::StoreError;
use crate::store::ConfigStore;

/// Build the service router.
pub fn router(store: Arc<ConfigStore>) -> Router {
    // The store is fronted by browser-originated admin calls; preflights get
    // an empty 200 and every response carries permissive CORS headers.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::PUT, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE]);

    Router::new()
        .route("/config", get(get_config).put(put_config))
        .route("/auth/hash", get(get_password_hash))
        .route("/auth/password", axum::routing::put(put_password))
        .route("/health", get(health))
        .route("/health/ready", get(readiness))
        .layer(cors)
        .with_state(store)
}

/// `GET /config`
async fn get_config(
    State(store): State<Arc<ConfigStore>>,
) -> Result<Json<AppConfig>, StoreError> {
    Ok(Json(store.config().await?))
}

/// `PUT /config`
///
/// The body is taken raw so unparseable JSON maps to the store's own 400
/// diagnostic rather than an extractor rejection.
async fn put_config(
    State(store): State<Arc<ConfigStore>>,
    body: String,
) -> Result<Json<AppConfig>, StoreError> {
    Ok(Json(store.replace_config(&body).await?))
}

#[derive(Serialize)]
struct HashResponse {
    hash: PasswordHash,
}

/// `GET /auth/hash`
async fn get_password_hash(
    State(store): State<Arc<ConfigStore>>,
) -> Result<Json<HashResponse>, StoreError> {
    let hash = store.password_hash().await?;
    Ok(Json(HashResponse { hash }))
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ChangePasswordRequest {
    current_hash: Option<String>,
    new_hash: Option<String>,
}

/// `PUT /auth/password`
async fn put_password(
    State(store): State<Arc<ConfigStore>>,
    Json(request): Json<ChangePasswordRequest>,
) -> Result<Json<Value>, StoreError> {
    let (Some(current), Some(new)) = (request.current_hash, request.new_hash) else {
        return Err(StoreError::MissingPasswordFields);
    };
    store.change_password(&current, &new).await?;
    Ok(Json(json!({ "ok": true })))
}

/// Liveness health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Readiness health check endpoint.
///
/// Returns 503 Service Unavailable if the backend is not reachable.
async fn readiness(State(store): State<Arc<ConfigStore>>) -> StatusCode {
    match store.ping().await {
        Ok(()) => StatusCode::OK,
        Err(_) => StatusCode::SERVICE_UNAVAILABLE,
    }
}
