use std::time::Instant;

use axum::extract::Request;
use axum::middleware::Next;
use axum::response::Response;

use super::{forwarded_for, peer_ip};

/// Request logging middleware.
///
/// Logs every request as a structured event. Form contents are never logged.
pub async fn audit_log(req: Request, next: Next) -> Response {
    let method = req.method().clone();
    let uri = req.uri().path().to_string();
    let peer = peer_ip(&req).unwrap_or_else(|| "unknown".to_string());
    let forwarded = forwarded_for(&req);
    let started = Instant::now();

    let response = next.run(req).await;

    let status = response.status().as_u16();
    tracing::info!(
        method = %method,
        path = %uri,
        peer = %peer,
        forwarded_for = forwarded.as_deref(),
        status = status,
        elapsed_ms = started.elapsed().as_millis() as u64,
        "http_request"
    );

    response
}
