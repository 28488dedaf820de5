//! Product detail page route handler.

use askama::Template;
use axum::{extract::State, response::Html};

use ccom_core::{ProductConfig, StoreConfig};

use crate::error::Result;
use crate::filters;
use crate::middleware::ConfigSnapshot;
use crate::state::AppState;

const PRODUCT_CACHE_KEY: &str = "product";

/// Product detail page template.
#[derive(Template)]
#[template(path = "product.html")]
struct ProductTemplate<'a> {
    store: &'a StoreConfig,
    product: &'a ProductConfig,
    discounted_display: String,
}

/// `GET /product`
pub async fn show(
    State(state): State<AppState>,
    snapshot: ConfigSnapshot,
) -> Result<Html<String>> {
    if let Some(html) = state.pages().get(PRODUCT_CACHE_KEY).await {
        return Ok(Html(html));
    }

    let template = ProductTemplate {
        store: &snapshot.store,
        product: &snapshot.product,
        discounted_display: filters::format_vnd(filters::discounted_price(
            snapshot.product.price,
            snapshot.product.discount_percent,
        )),
    };
    let html = template.render()?;
    state.pages().insert(PRODUCT_CACHE_KEY, html.clone()).await;
    Ok(Html(html))
}
