//! HTTP route handlers for storefront.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                  - Home page
//! GET  /product           - Product detail
//! GET  /health            - Health check
//!
//! # Admin (session-gated except login)
//! GET  /admin             - Dashboard with the editing forms
//! GET  /admin/login       - Login page
//! POST /admin/login       - Login action (rate limited)
//! POST /admin/logout      - Logout action
//! POST /admin/store       - Save store copy
//! POST /admin/product     - Save product copy
//! POST /admin/password    - Change the admin password
//! POST /admin/reset       - Restore the compiled-in defaults
//! ```

pub mod admin;
pub mod home;
pub mod product;

use axum::{
    Router,
    routing::{get, post},
};

use crate::middleware::{auth_rate_limiter, config_snapshot_middleware};
use crate::state::AppState;

/// Create the admin routes router.
pub fn admin_routes() -> Router<AppState> {
    let login = Router::new()
        .route("/login", get(admin::login_page).post(admin::login))
        .layer(auth_rate_limiter());

    Router::new()
        .route("/", get(admin::dashboard))
        .route("/store", post(admin::update_store))
        .route("/product", post(admin::update_product))
        .route("/password", post(admin::change_password))
        .route("/reset", post(admin::reset_config))
        .route("/logout", post(admin::logout))
        .merge(login)
}

/// Create all routes for the storefront.
///
/// Every route sits behind the config snapshot middleware, so one request
/// issues at most one document read against the store.
pub fn routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/", get(home::home))
        .route("/product", get(product::show))
        .nest("/admin", admin_routes())
        .layer(axum::middleware::from_fn_with_state(
            state,
            config_snapshot_middleware,
        ))
}
