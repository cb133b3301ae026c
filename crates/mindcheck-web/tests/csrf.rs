mod common;

use std::sync::Arc;

use axum::body::Body;
use axum::http::header::{CONTENT_TYPE, COOKIE, SET_COOKIE};
use axum::http::{HeaderMap, HeaderValue, Request, StatusCode};

use mindcheck_bedrock::feedback::DisabledFeedback;
use mindcheck_web::config::AppConfig;
use mindcheck_web::middleware::csrf;

use common::*;

const SECRET: &str = "test-secret";

fn csrf_app() -> axum::Router {
    let config = AppConfig {
        csrf_enabled: true,
        secret_key: SECRET.to_string(),
        ..test_config()
    };
    app_with(config, Arc::new(DisabledFeedback))
}

fn cookie_value(headers: &HeaderMap) -> String {
    headers[SET_COOKIE]
        .to_str()
        .unwrap()
        .split(';')
        .next()
        .and_then(|pair| pair.split_once('='))
        .map(|(_, value)| value.to_string())
        .unwrap()
}

fn get_with_cookie(uri: &str, token: &str) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .header(COOKIE, format!("{}={token}", csrf::COOKIE_NAME))
        .body(Body::empty())
        .unwrap()
}

fn post_with_cookie(fields: &[(String, String)], cookie: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder()
        .method("POST")
        .uri("/analyze")
        .header(CONTENT_TYPE, "application/x-www-form-urlencoded");
    if let Some(token) = cookie {
        builder = builder.header(COOKIE, format!("{}={token}", csrf::COOKIE_NAME));
    }
    builder.body(Body::from(encode_form(fields))).unwrap()
}

#[test]
fn issued_tokens_verify() {
    let token = csrf::issue(SECRET);
    assert!(csrf::is_authentic(SECRET, &token));
    assert!(!csrf::is_authentic("other-secret", &token));
    assert!(csrf::verify(SECRET, Some(&token), &token));
}

#[test]
fn tampered_or_mismatched_tokens_fail() {
    let token = csrf::issue(SECRET);
    let other = csrf::issue(SECRET);
    assert!(!csrf::verify(SECRET, Some(&other), &token));
    assert!(!csrf::verify(SECRET, None, &token));
    assert!(!csrf::is_authentic(SECRET, "no-dot"));
    assert!(!csrf::is_authentic(SECRET, ".abc"));

    let (nonce, signature) = token.split_once('.').unwrap();
    assert!(!csrf::is_authentic(SECRET, &format!("{nonce}.deadbeef")));
    assert!(!csrf::is_authentic(SECRET, &format!("{nonce}.{signature}0")));

    let mut flipped = signature.to_string();
    let last = if flipped.ends_with('0') { "1" } else { "0" };
    flipped.replace_range(flipped.len() - 1.., last);
    assert_eq!(flipped.len(), signature.len());
    assert!(!csrf::is_authentic(SECRET, &format!("{nonce}.{flipped}")));
}

#[test]
fn reads_cookie_among_others() {
    let mut headers = HeaderMap::new();
    headers.insert(
        COOKIE,
        HeaderValue::from_static("theme=dark; mindcheck_csrf=abc.def; lang=en"),
    );
    assert_eq!(csrf::cookie_token(&headers).as_deref(), Some("abc.def"));
    assert_eq!(csrf::cookie_token(&HeaderMap::new()), None);
}

#[test]
fn cookie_is_secure_only_when_asked() {
    let (_, value) = csrf::set_cookie_header("abc.def", true);
    let value = value.to_str().unwrap();
    assert!(value.starts_with("mindcheck_csrf=abc.def"));
    assert!(value.contains("HttpOnly"));
    assert!(value.contains("Secure"));

    let (_, value) = csrf::set_cookie_header("abc.def", false);
    assert!(!value.to_str().unwrap().contains("Secure"));
}

#[tokio::test]
async fn post_without_token_is_forbidden() {
    let (status, body) = send(csrf_app(), post_with_cookie(&baseline(), None)).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert!(body.contains("Reload the page"));
}

#[tokio::test]
async fn post_with_forged_token_is_forbidden() {
    let forged = csrf::issue("attacker-secret");
    let mut fields = baseline();
    set_field(&mut fields, "csrf_token", &forged);
    let (status, _) = send(csrf_app(), post_with_cookie(&fields, Some(&forged))).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn token_from_form_page_is_accepted() {
    let app = csrf_app();
    let (_, headers, _) = send_full(app.clone(), get("/")).await;
    let token = cookie_value(&headers);

    let mut fields = baseline();
    set_field(&mut fields, "csrf_token", &token);
    let (status, body) = send(app, post_with_cookie(&fields, Some(&token))).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Personalized Suggestions"));
}

#[tokio::test]
async fn second_tab_keeps_first_tab_valid() {
    let app = csrf_app();
    let (_, headers, _) = send_full(app.clone(), get("/")).await;
    let first_tab = cookie_value(&headers);

    let (_, headers, body) = send_full(app.clone(), get_with_cookie("/", &first_tab)).await;
    assert_eq!(cookie_value(&headers), first_tab);
    assert!(body.contains(&first_tab));

    let mut fields = baseline();
    set_field(&mut fields, "csrf_token", &first_tab);
    let (status, _) = send(app, post_with_cookie(&fields, Some(&first_tab))).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn rerendered_form_reuses_token() {
    let app = csrf_app();
    let token = csrf::issue(SECRET);
    let mut fields = baseline();
    set_field(&mut fields, "csrf_token", &token);
    set_field(&mut fields, "age", "abc");

    let (status, headers, body) = send_full(app, post_with_cookie(&fields, Some(&token))).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Age must be a number."));
    assert_eq!(cookie_value(&headers), token);
}

#[tokio::test]
async fn forged_cookie_is_replaced() {
    let forged = csrf::issue("attacker-secret");
    let (_, headers, _) = send_full(csrf_app(), get_with_cookie("/", &forged)).await;
    let issued = cookie_value(&headers);
    assert_ne!(issued, forged);
    assert!(csrf::is_authentic(SECRET, &issued));
}
