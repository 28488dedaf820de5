//! Home page route handler.

use askama::Template;
use axum::{extract::State, response::Html};

use ccom_core::{ProductConfig, StoreConfig};

use crate::error::Result;
use crate::filters;
use crate::middleware::ConfigSnapshot;
use crate::state::AppState;

const HOME_CACHE_KEY: &str = "home";

/// Home page template.
#[derive(Template)]
#[template(path = "home.html")]
struct HomeTemplate<'a> {
    store: &'a StoreConfig,
    product: &'a ProductConfig,
    discounted_display: String,
}

/// `GET /`
///
/// Rendered pages are cached until the next config write (or the cache
/// TTL); the cache key carries no request data because the page is
/// identical for every visitor.
pub async fn home(
    State(state): State<AppState>,
    snapshot: ConfigSnapshot,
) -> Result<Html<String>> {
    if let Some(html) = state.pages().get(HOME_CACHE_KEY).await {
        return Ok(Html(html));
    }

    let template = HomeTemplate {
        store: &snapshot.store,
        product: &snapshot.product,
        discounted_display: filters::format_vnd(filters::discounted_price(
            snapshot.product.price,
            snapshot.product.discount_percent,
        )),
    };
    let html = template.render()?;
    state.pages().insert(HOME_CACHE_KEY, html.clone()).await;
    Ok(Html(html))
}
