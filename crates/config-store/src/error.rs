//! Error types for the config store service.
//!
//! Storage failures are fatal to the request and surface as a generic 500;
//! malformed payloads are rejected at the boundary without mutating stored
//! state. Rejection bodies carry the operator-facing (Vietnamese) messages
//! the admin panel shows inline.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

/// Errors from the key-value backend.
#[derive(Debug, Error)]
pub enum BackendError {
    /// Database operation failed.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Backend cannot serve requests (e.g. poisoned in-memory state).
    #[error("storage unavailable: {0}")]
    Unavailable(String),
}

/// Errors from store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Storage I/O failed. Fatal to the request, never retried here.
    #[error("storage error: {0}")]
    Backend(#[from] BackendError),

    /// The stored document no longer parses.
    #[error("stored document is corrupt: {0}")]
    Corrupt(#[source] serde_json::Error),

    /// The stored password hash no longer parses.
    #[error("stored password hash is corrupt: {0}")]
    CorruptHash(ccom_core::CredentialError),

    /// A write body that is not a valid configuration document.
    #[error("invalid configuration payload: {0}")]
    InvalidPayload(String),

    /// Password change request without both hash fields.
    #[error("password change request is missing fields")]
    MissingPasswordFields,

    /// The presented current-password hash does not match the stored one.
    #[error("current password does not match")]
    Unauthorized,

    /// The new password hash is not a well-formed hex digest.
    #[error("new password hash is malformed")]
    InvalidNewHash,
}

impl IntoResponse for StoreError {
    fn into_response(self) -> Response {
        // Capture storage failures; client errors are expected traffic
        if matches!(self, Self::Backend(_) | Self::Corrupt(_) | Self::CorruptHash(_)) {
            let event_id = sentry::capture_error(&self);
            tracing::error!(error = %self, sentry_event_id = %event_id, "Store request failed");
        }

        let (status, body) = match &self {
            Self::Backend(_) | Self::Corrupt(_) | Self::CorruptHash(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                json!({ "message": "Internal storage error" }),
            ),
            Self::InvalidPayload(detail) => (
                StatusCode::BAD_REQUEST,
                json!({ "message": "Invalid configuration payload", "detail": detail }),
            ),
            Self::MissingPasswordFields => (
                StatusCode::BAD_REQUEST,
                json!({ "message": "Thiếu thông tin mật khẩu." }),
            ),
            Self::InvalidNewHash => (
                StatusCode::BAD_REQUEST,
                json!({ "message": "Mật khẩu mới không hợp lệ." }),
            ),
            Self::Unauthorized => (
                StatusCode::UNAUTHORIZED,
                json!({ "message": "Mật khẩu hiện tại không đúng." }),
            ),
        };

        (status, Json(body)).into_response()
    }
}
