//! Admin panel route handlers.
//!
//! Saves are full-document writes through the config client: the request's
//! snapshot supplies the halves of the document a form does not edit, the
//! form supplies the rest, and the assembled document replaces the stored
//! one wholesale. A failed save re-renders the dashboard with the attempted
//! document and an inline error so the operator can correct and resubmit;
//! a successful save invalidates the rendered-page cache and redirects.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Query, State},
    response::{Html, IntoResponse, Redirect, Response},
};
use serde::Deserialize;
use tower_sessions::Session;

use ccom_core::AppConfig;

use crate::client::ClientError;
use crate::error::Result;
use crate::forms::{self, FormPairs};
use crate::middleware::{ConfigSnapshot, RequireAdmin, clear_admin_session, set_admin_session};
use crate::state::AppState;

/// Minimum length for a new admin password.
const MIN_PASSWORD_LENGTH: usize = 6;

// =============================================================================
// Templates
// =============================================================================

/// Login page template.
#[derive(Template, WebTemplate)]
#[template(path = "admin/login.html")]
pub struct LoginTemplate {
    pub error: Option<String>,
}

/// Dashboard template with the editing forms.
#[derive(Template)]
#[template(path = "admin/dashboard.html")]
pub struct DashboardTemplate {
    pub config: AppConfig,
    pub notice: Option<String>,
    pub error: Option<String>,
}

impl DashboardTemplate {
    fn with_error(config: AppConfig, message: String) -> Self {
        Self {
            config,
            notice: None,
            error: Some(message),
        }
    }

    fn render_response(self) -> Result<Response> {
        Ok(Html(self.render()?).into_response())
    }
}

// =============================================================================
// Forms & queries
// =============================================================================

#[derive(Deserialize)]
pub struct LoginForm {
    password: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PasswordForm {
    current_password: String,
    new_password: String,
    confirm_password: String,
}

#[derive(Deserialize)]
pub struct DashboardQuery {
    notice: Option<String>,
}

// =============================================================================
// Auth handlers
// =============================================================================

/// `GET /admin/login`
pub async fn login_page() -> LoginTemplate {
    LoginTemplate { error: None }
}

/// `POST /admin/login`
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    axum::Form(form): axum::Form<LoginForm>,
) -> Result<Response> {
    let password = form.password.trim();
    if password.is_empty() {
        return Ok(LoginTemplate {
            error: Some("Vui lòng nhập mật khẩu.".to_string()),
        }
        .into_response());
    }

    if !state.client().verify_password(password).await {
        return Ok(LoginTemplate {
            error: Some("Mật khẩu không chính xác.".to_string()),
        }
        .into_response());
    }

    let hash = state.client().fetch_password_hash().await;
    set_admin_session(&session, &hash).await?;
    Ok(Redirect::to("/admin").into_response())
}

/// `POST /admin/logout`
pub async fn logout(session: Session) -> Result<Redirect> {
    clear_admin_session(&session).await?;
    Ok(Redirect::to("/admin/login"))
}

// =============================================================================
// Dashboard
// =============================================================================

/// `GET /admin`
pub async fn dashboard(
    _admin: RequireAdmin,
    snapshot: ConfigSnapshot,
    Query(query): Query<DashboardQuery>,
) -> Result<Response> {
    let notice = query.notice.as_deref().map(|code| {
        match code {
            "saved" => "Đã lưu cấu hình.",
            "password" => "Đã cập nhật mật khẩu.",
            "reset" => "Đã khôi phục cấu hình mặc định.",
            _ => "Đã lưu.",
        }
        .to_string()
    });

    DashboardTemplate {
        config: snapshot.0.as_ref().clone(),
        notice,
        error: None,
    }
    .render_response()
}

// =============================================================================
// Save handlers
// =============================================================================

/// `POST /admin/store`
pub async fn update_store(
    _admin: RequireAdmin,
    State(state): State<AppState>,
    snapshot: ConfigSnapshot,
    axum::Form(pairs): axum::Form<FormPairs>,
) -> Result<Response> {
    let store = forms::parse_store_form(&pairs, &snapshot.store);
    let document = AppConfig {
        store,
        product: snapshot.product.clone(),
    };
    save_document(&state, document, "/admin?notice=saved").await
}

/// `POST /admin/product`
pub async fn update_product(
    _admin: RequireAdmin,
    State(state): State<AppState>,
    snapshot: ConfigSnapshot,
    axum::Form(pairs): axum::Form<FormPairs>,
) -> Result<Response> {
    let product = match forms::parse_product_form(&pairs, &snapshot.product) {
        Ok(product) => product,
        Err(error) => {
            let message = match error {
                forms::FormError::InvalidPrice(_) => "Giá sản phẩm không hợp lệ.",
                forms::FormError::InvalidDiscount(_) => "Phần trăm giảm giá không hợp lệ.",
            };
            return DashboardTemplate::with_error(
                snapshot.0.as_ref().clone(),
                message.to_string(),
            )
            .render_response();
        }
    };

    let document = AppConfig {
        store: snapshot.store.clone(),
        product,
    };
    save_document(&state, document, "/admin?notice=saved").await
}

/// `POST /admin/reset`
pub async fn reset_config(
    _admin: RequireAdmin,
    State(state): State<AppState>,
) -> Result<Response> {
    save_document(&state, AppConfig::default(), "/admin?notice=reset").await
}

/// Write a document through the client; redirect on success, re-render the
/// dashboard with the attempted document on failure.
async fn save_document(
    state: &AppState,
    document: AppConfig,
    success_location: &str,
) -> Result<Response> {
    match state.client().write_config(&document).await {
        Ok(_) => {
            state.invalidate_pages();
            Ok(Redirect::to(success_location).into_response())
        }
        Err(error) => {
            tracing::warn!(%error, "Failed to save configuration");
            let message = match &error {
                ClientError::StoreUnavailable => {
                    "Không thể lưu cấu hình: kho cấu hình chưa được triển khai.".to_string()
                }
                ClientError::Rejected { message, .. } => {
                    format!("Không thể lưu cấu hình: {message}")
                }
                _ => "Không thể lưu cấu hình.".to_string(),
            };
            DashboardTemplate::with_error(document, message).render_response()
        }
    }
}

// =============================================================================
// Password change
// =============================================================================

/// `POST /admin/password`
pub async fn change_password(
    _admin: RequireAdmin,
    State(state): State<AppState>,
    snapshot: ConfigSnapshot,
    session: Session,
    axum::Form(form): axum::Form<PasswordForm>,
) -> Result<Response> {
    let current = form.current_password.trim();
    let new = form.new_password.trim();
    let confirm = form.confirm_password.trim();

    let validation_error = if current.is_empty() || new.is_empty() || confirm.is_empty() {
        Some("Vui lòng nhập đầy đủ thông tin.")
    } else if new != confirm {
        Some("Mật khẩu mới và xác nhận không khớp.")
    } else if new.len() < MIN_PASSWORD_LENGTH {
        Some("Mật khẩu mới cần tối thiểu 6 ký tự.")
    } else {
        None
    };
    if let Some(message) = validation_error {
        return DashboardTemplate::with_error(snapshot.0.as_ref().clone(), message.to_string())
            .render_response();
    }

    match state.client().change_password(current, new).await {
        Ok(()) => {
            // Re-record the session against the new hash so this operator
            // stays logged in while other sessions become stale
            let hash = state.client().fetch_password_hash().await;
            set_admin_session(&session, &hash).await?;
            Ok(Redirect::to("/admin?notice=password").into_response())
        }
        Err(error) => {
            let message = match &error {
                ClientError::WrongCurrentPassword => "Mật khẩu hiện tại không chính xác.".to_string(),
                ClientError::InvalidNewPassword => "Mật khẩu mới không hợp lệ.".to_string(),
                ClientError::StoreUnavailable => {
                    "Không thể cập nhật mật khẩu: kho cấu hình chưa được triển khai.".to_string()
                }
                other => format!("Không thể cập nhật mật khẩu. ({other})"),
            };
            DashboardTemplate::with_error(snapshot.0.as_ref().clone(), message).render_response()
        }
    }
}
