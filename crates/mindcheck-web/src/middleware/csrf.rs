//! Double-submit CSRF protection.
//!
//! A token is `nonce.signature`, where the signature is the hex SHA-256 of
//! `secret:nonce`. Form pages set it as a cookie and embed it as a hidden
//! field; a POST is accepted only when both copies match and verify.

use axum::http::header::{COOKIE, SET_COOKIE};
use axum::http::{HeaderMap, HeaderValue};
use sha2::{Digest, Sha256};
use uuid::Uuid;

pub const COOKIE_NAME: &str = "mindcheck_csrf";

fn sign(secret: &str, nonce: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(secret.as_bytes());
    hasher.update(b":");
    hasher.update(nonce.as_bytes());
    hex::encode(hasher.finalize())
}

/// Mint a fresh token.
pub fn issue(secret: &str) -> String {
    let nonce = Uuid::new_v4().simple().to_string();
    let signature = sign(secret, &nonce);
    format!("{nonce}.{signature}")
}

/// Check that `token` was minted with `secret`.
pub fn is_authentic(secret: &str, token: &str) -> bool {
    token
        .split_once('.')
        .is_some_and(|(nonce, signature)| {
            !nonce.is_empty() && constant_time_eq(sign(secret, nonce).as_bytes(), signature.as_bytes())
        })
}

/// Byte comparison whose duration does not depend on where inputs differ.
fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    a.len() == b.len() && a.iter().zip(b).fold(0u8, |acc, (x, y)| acc | (x ^ y)) == 0
}

/// Both copies present, equal, and authentic.
pub fn verify(secret: &str, cookie_token: Option<&str>, form_token: &str) -> bool {
    cookie_token.is_some_and(|cookie| cookie == form_token && is_authentic(secret, form_token))
}

/// Read the token cookie from request headers.
pub fn cookie_token(headers: &HeaderMap) -> Option<String> {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .flat_map(|v| v.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, _)| *name == COOKIE_NAME)
        .map(|(_, value)| value.to_string())
}

/// `Set-Cookie` header carrying `token`.
pub fn set_cookie_header(token: &str, secure: bool) -> (axum::http::HeaderName, HeaderValue) {
    let secure = if secure { "; Secure" } else { "" };
    let cookie = format!("{COOKIE_NAME}={token}; Path=/; HttpOnly; SameSite=Strict{secure}");
    // Token characters are hex and '.', always a valid header value.
    let value = HeaderValue::from_str(&cookie).unwrap_or_else(|_| HeaderValue::from_static(""));
    (SET_COOKIE, value)
}
