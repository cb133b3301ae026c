use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use moka::sync::Cache;
use tracing::{debug, warn};

use mindcheck_core::models::summary::AssessmentSummary;

use crate::error::BedrockError;
use crate::prompt;

/// Source of optional free-text feedback for a check-in.
///
/// Implementations must never fail loudly: any error, timeout or empty
/// answer is reported as `None`.
#[async_trait]
pub trait FeedbackProvider: Send + Sync {
    async fn feedback(&self, summary: &AssessmentSummary) -> Option<String>;
}

/// Used when no model is configured.
#[derive(Debug, Clone, Copy, Default)]
pub struct DisabledFeedback;

#[async_trait]
impl FeedbackProvider for DisabledFeedback {
    async fn feedback(&self, _summary: &AssessmentSummary) -> Option<String> {
        None
    }
}

/// Memoizes successful answers for identical summaries for a bounded time.
pub struct CachedFeedback {
    inner: Arc<dyn FeedbackProvider>,
    cache: Cache<String, String>,
}

impl CachedFeedback {
    pub fn new(inner: Arc<dyn FeedbackProvider>, ttl: Duration, max_entries: u64) -> Self {
        Self {
            inner,
            cache: Cache::builder()
                .max_capacity(max_entries)
                .time_to_live(ttl)
                .build(),
        }
    }
}

#[async_trait]
impl FeedbackProvider for CachedFeedback {
    async fn feedback(&self, summary: &AssessmentSummary) -> Option<String> {
        let key = match summary.cache_key() {
            Ok(key) => key,
            Err(e) => {
                warn!(error = %e, "feedback cache key unavailable; bypassing cache");
                return self.inner.feedback(summary).await;
            }
        };
        if let Some(hit) = self.cache.get(&key) {
            debug!("feedback cache hit");
            return Some(hit);
        }

        let text = self.inner.feedback(summary).await?;
        self.cache.insert(key, text.clone());
        Some(text)
    }
}

/// Run a model call under `timeout`, folding every failure into `None`.
pub async fn bounded<F>(timeout: Duration, call: F) -> Option<String>
where
    F: Future<Output = Result<String, BedrockError>>,
{
    let outcome = match tokio::time::timeout(timeout, call).await {
        Ok(result) => result,
        Err(_) => Err(BedrockError::Timeout(timeout)),
    };

    match outcome.and_then(|text| prompt::clean_response(&text).ok_or(BedrockError::EmptyResponse)) {
        Ok(text) => Some(text),
        Err(e) => {
            warn!(error = %e, "ai feedback unavailable");
            None
        }
    }
}
