//! Admin authentication extractor and session helpers.
//!
//! The session stores the password verification hash that was current at
//! login, the same contract the admin cookie has always had: a request is
//! authenticated when the session hash still matches the live hash, so a
//! password change elsewhere invalidates every existing session immediately.

use axum::{
    extract::FromRequestParts,
    http::request::Parts,
    response::{IntoResponse, Redirect, Response},
};
use ccom_core::PasswordHash;
use tower_sessions::Session;

use crate::state::AppState;

/// Session key holding the admin password hash.
pub const ADMIN_HASH_KEY: &str = "admin_hash";

/// Extractor that requires an authenticated admin session.
///
/// Unauthenticated requests are redirected to the login page.
///
/// # Example
///
/// ```rust,ignore
/// async fn protected_handler(_admin: RequireAdmin) -> impl IntoResponse {
///     "chỉ dành cho quản trị viên"
/// }
/// ```
pub struct RequireAdmin;

/// Rejection returned when the admin session is missing or stale.
pub struct AdminRejection;

impl IntoResponse for AdminRejection {
    fn into_response(self) -> Response {
        Redirect::to("/admin/login").into_response()
    }
}

impl FromRequestParts<AppState> for RequireAdmin {
    type Rejection = AdminRejection;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        // Get the session from extensions (set by SessionManagerLayer)
        let session = parts
            .extensions
            .get::<Session>()
            .cloned()
            .ok_or(AdminRejection)?;

        let stored: Option<String> = session.get(ADMIN_HASH_KEY).await.ok().flatten();
        let Some(stored) = stored else {
            return Err(AdminRejection);
        };
        let Ok(session_hash) = PasswordHash::parse(&stored) else {
            return Err(AdminRejection);
        };

        let current = state.client().fetch_password_hash().await;
        if session_hash.matches(&current) {
            Ok(Self)
        } else {
            Err(AdminRejection)
        }
    }
}

/// Record the admin session after a successful login or password change.
///
/// # Errors
///
/// Returns an error if the session cannot be modified.
pub async fn set_admin_session(
    session: &Session,
    hash: &PasswordHash,
) -> Result<(), tower_sessions::session::Error> {
    session
        .insert(ADMIN_HASH_KEY, hash.as_str().to_string())
        .await
}

/// Clear the admin session (logout).
///
/// # Errors
///
/// Returns an error if the session cannot be modified.
pub async fn clear_admin_session(session: &Session) -> Result<(), tower_sessions::session::Error> {
    session.remove::<String>(ADMIN_HASH_KEY).await?;
    Ok(())
}
