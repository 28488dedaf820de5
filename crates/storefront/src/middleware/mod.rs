//! HTTP middleware stack for storefront.
//!
//! # Middleware Order (bottom to top in Router)
//!
//! 1. Sentry layer (capture errors)
//! 2. `TraceLayer` (request tracing)
//! 3. Request ID (add unique ID to each request)
//! 4. Session layer (tower-sessions, in-memory store)
//! 5. Config snapshot (one document fetch per request)
//! 6. Rate limiting (governor, login route only)

pub mod admin;
pub mod config_snapshot;
pub mod rate_limit;
pub mod request_id;
pub mod session;

pub use admin::{RequireAdmin, clear_admin_session, set_admin_session};
pub use config_snapshot::{ConfigSnapshot, config_snapshot_middleware};
pub use rate_limit::auth_rate_limiter;
pub use request_id::request_id_middleware;
pub use session::create_session_layer;
