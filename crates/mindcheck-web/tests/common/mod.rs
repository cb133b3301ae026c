#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::header::CONTENT_TYPE;
use axum::http::{Request, Response, StatusCode};
use axum::Router;
use tower::ServiceExt;

use mindcheck_bedrock::feedback::{DisabledFeedback, FeedbackProvider};
use mindcheck_core::models::summary::AssessmentSummary;
use mindcheck_web::build_router;
use mindcheck_web::config::{AppConfig, RateLimit};
use mindcheck_web::state::AppState;

/// Provider that always answers with fixed text.
pub struct FixedFeedback(pub &'static str);

#[async_trait]
impl FeedbackProvider for FixedFeedback {
    async fn feedback(&self, _summary: &AssessmentSummary) -> Option<String> {
        Some(self.0.to_string())
    }
}

pub fn test_config() -> AppConfig {
    AppConfig {
        csrf_enabled: false,
        rate_limit: RateLimit {
            max_requests: 10_000,
            window: Duration::from_secs(60),
        },
        ..AppConfig::default()
    }
}

pub fn app() -> Router {
    app_with(test_config(), Arc::new(DisabledFeedback))
}

pub fn app_with(config: AppConfig, feedback: Arc<dyn FeedbackProvider>) -> Router {
    build_router(AppState::new(config, feedback))
}

pub async fn send(app: Router, req: Request<Body>) -> (StatusCode, String) {
    let (status, _, body) = send_full(app, req).await;
    (status, body)
}

pub async fn send_full(app: Router, req: Request<Body>) -> (StatusCode, axum::http::HeaderMap, String) {
    let res: Response<Body> = app.oneshot(req).await.unwrap();
    let status = res.status();
    let headers = res.headers().clone();
    let bytes = axum::body::to_bytes(res.into_body(), usize::MAX).await.unwrap();
    (status, headers, String::from_utf8(bytes.to_vec()).unwrap())
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

pub fn post_form(uri: &str, fields: &[(String, String)]) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(encode_form(fields)))
        .unwrap()
}

pub fn encode_form(fields: &[(String, String)]) -> String {
    fields
        .iter()
        .map(|(k, v)| format!("{}={}", encode(k), encode(v)))
        .collect::<Vec<_>>()
        .join("&")
}

fn encode(value: &str) -> String {
    let mut out = String::new();
    for byte in value.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                out.push(byte as char)
            }
            b' ' => out.push('+'),
            other => out.push_str(&format!("%{other:02X}")),
        }
    }
    out
}

/// A complete, valid submission with all questionnaire answers at `answer`.
pub fn submission(pairs: &[(&str, &str)], answer: &str) -> Vec<(String, String)> {
    let mut fields: Vec<(String, String)> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    for i in 1..=9 {
        fields.push((format!("phq9_{i}"), answer.to_string()));
    }
    for i in 1..=7 {
        fields.push((format!("gad7_{i}"), answer.to_string()));
    }
    fields
}

pub fn set_field(fields: &mut Vec<(String, String)>, name: &str, value: &str) {
    fields.retain(|(k, _)| k != name);
    fields.push((name.to_string(), value.to_string()));
}

pub fn remove_field(fields: &mut Vec<(String, String)>, name: &str) {
    fields.retain(|(k, _)| k != name);
}

pub fn baseline() -> Vec<(String, String)> {
    submission(
        &[
            ("name", "Test"),
            ("age", "25"),
            ("mood", "neutral"),
            ("sleep", "7"),
            ("stress", "3"),
            ("thoughts", "normal"),
            ("exercise_days", "2"),
            ("caffeine_cups", "1"),
            ("screen_hours", "3"),
            ("support_level", "3"),
        ],
        "0",
    )
}
