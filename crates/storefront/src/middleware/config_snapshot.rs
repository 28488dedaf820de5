//! Per-request configuration snapshot.
//!
//! The document is fetched once when a request enters the router and stored
//! in request extensions; every handler and template in that request reads
//! the same snapshot and no further store round trips are issued. The
//! snapshot dies with the request, so concurrent requests never share a
//! stale value.

use std::ops::Deref;
use std::sync::Arc;

use axum::{
    extract::{FromRequestParts, Request, State},
    http::{StatusCode, request::Parts},
    middleware::Next,
    response::Response,
};
use ccom_core::AppConfig;

use crate::state::AppState;

/// The configuration document observed by the current request.
#[derive(Clone)]
pub struct ConfigSnapshot(pub Arc<AppConfig>);

impl Deref for ConfigSnapshot {
    type Target = AppConfig;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// Middleware that attaches a [`ConfigSnapshot`] to the request.
pub async fn config_snapshot_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Response {
    let config = state.client().fetch_config().await;
    request
        .extensions_mut()
        .insert(ConfigSnapshot(Arc::new(config)));
    next.run(request).await
}

impl<S> FromRequestParts<S> for ConfigSnapshot
where
    S: Send + Sync,
{
    type Rejection = StatusCode;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        // Missing snapshot means the route is not behind the middleware
        parts
            .extensions
            .get::<Self>()
            .cloned()
            .ok_or(StatusCode::INTERNAL_SERVER_ERROR)
    }
}
