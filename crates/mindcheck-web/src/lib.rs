//! mindcheck-web
//!
//! HTTP boundary for the well-being check-in: HTML form and result pages,
//! a small JSON API, health checks, and the request-level safeguards
//! (rate limiting, CSRF, security headers, request logging).

pub mod config;
pub mod error;
pub mod forms;
pub mod middleware;
pub mod render;
pub mod routes;
pub mod state;
pub mod views;

use axum::middleware as axum_mw;
use axum::routing::{get, post};
use axum::Router;

use state::AppState;

/// Assemble the full application router.
pub fn build_router(state: AppState) -> Router {
    let hsts = state.config.environment.is_production();

    let app = Router::new()
        // Pages
        .route("/", get(routes::pages::index))
        .route("/analyze", post(routes::analyze::analyze))
        .route("/test", get(routes::pages::test))
        .route("/privacy", get(routes::pages::privacy))
        .route("/terms", get(routes::pages::terms))
        .route("/static/js/main.js", get(routes::pages::main_js))
        // JSON API
        .route("/api/instruments", get(routes::instruments::list_instruments))
        .route(
            "/api/instruments/{id}",
            get(routes::instruments::get_instrument_detail),
        )
        .route("/api/assessments", post(routes::assessments::create_assessment))
        .layer(axum_mw::from_fn_with_state(
            state.clone(),
            middleware::rate_limit::rate_limit,
        ))
        // Health (not rate limited)
        .route("/healthz", get(routes::health::health_check))
        .fallback(routes::pages::not_found)
        .layer(axum_mw::from_fn(middleware::audit::audit_log))
        .with_state(state);

    middleware::security::apply(app, hsts)
}
