use axum::extract::State;
use axum::http::header::CONTENT_TYPE;
use axum::http::HeaderMap;
use axum::response::{Html, IntoResponse, Response};

use crate::error::AppError;
use crate::middleware::csrf;
use crate::render;
use crate::state::AppState;
use crate::views::FormPage;

const MAIN_JS: &str = include_str!("../../static/js/main.js");

/// Render the check-in form. A still-valid CSRF cookie is reused so that
/// earlier copies of the form (other tabs, history) keep working.
pub(crate) fn form_response(
    state: &AppState,
    headers: &HeaderMap,
    page_for: impl FnOnce(String) -> FormPage,
) -> Result<Response, AppError> {
    let secret = &state.config.secret_key;
    let token = csrf::cookie_token(headers)
        .filter(|token| csrf::is_authentic(secret, token))
        .unwrap_or_else(|| csrf::issue(secret));
    let page = page_for(token.clone());
    let body = render::render("index.html", &page)?;
    let cookie = csrf::set_cookie_header(&token, state.config.environment.is_production());
    Ok(([cookie], Html(body)).into_response())
}

pub async fn index(State(state): State<AppState>, headers: HeaderMap) -> Result<Response, AppError> {
    let ai_available = state.config.ai.is_some();
    form_response(&state, &headers, |token| FormPage::blank(token, ai_available))
}

pub async fn test() -> &'static str {
    "App is working!"
}

pub async fn privacy() -> Result<Html<String>, AppError> {
    Ok(Html(render::render("privacy.html", &serde_json::json!({}))?))
}

pub async fn terms() -> Result<Html<String>, AppError> {
    Ok(Html(render::render("terms.html", &serde_json::json!({}))?))
}

pub async fn main_js() -> impl IntoResponse {
    ([(CONTENT_TYPE, "application/javascript; charset=utf-8")], MAIN_JS)
}

pub async fn not_found() -> AppError {
    AppError::NotFound
}
