use std::sync::Arc;

use mindcheck_bedrock::feedback::FeedbackProvider;

use crate::config::AppConfig;
use crate::middleware::rate_limit::RateLimiter;

/// Shared application state, injected into all route handlers via Axum state.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub feedback: Arc<dyn FeedbackProvider>,
    pub limiter: RateLimiter,
}

impl AppState {
    pub fn new(config: AppConfig, feedback: Arc<dyn FeedbackProvider>) -> Self {
        let limiter = RateLimiter::new(config.rate_limit);
        Self {
            config: Arc::new(config),
            feedback,
            limiter,
        }
    }
}
