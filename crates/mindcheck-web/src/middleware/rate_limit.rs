use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;

use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use moka::sync::Cache;

use crate::config::RateLimit;
use crate::error::AppError;
use crate::state::AppState;

use super::client_key;

/// Upper bound on distinct clients tracked at once.
const MAX_TRACKED_CLIENTS: u64 = 100_000;

/// Fixed-window counter per client. A window opens with the client's first
/// request and expires `limit.window` later.
#[derive(Clone)]
pub struct RateLimiter {
    limit: RateLimit,
    counters: Cache<String, Arc<AtomicU32>>,
}

impl RateLimiter {
    pub fn new(limit: RateLimit) -> Self {
        Self {
            limit,
            counters: Cache::builder()
                .max_capacity(MAX_TRACKED_CLIENTS)
                .time_to_live(limit.window)
                .build(),
        }
    }

    /// Count one request for `client`; `false` once the window is spent.
    pub fn check(&self, client: &str) -> bool {
        let counter = self
            .counters
            .get_with(client.to_string(), || Arc::new(AtomicU32::new(0)));
        let seen = counter.fetch_add(1, Ordering::Relaxed).saturating_add(1);
        seen <= self.limit.max_requests
    }
}

pub async fn rate_limit(State(state): State<AppState>, req: Request, next: Next) -> Response {
    let client = client_key(&req, state.config.trusted_proxy);
    if !state.limiter.check(&client) {
        tracing::warn!(client = %client, limit = %state.config.rate_limit, "rate limit exceeded");
        return AppError::TooManyRequests.into_response();
    }
    next.run(req).await
}
