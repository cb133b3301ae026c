use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use mindcheck_bedrock::error::BedrockError;
use mindcheck_bedrock::feedback::{bounded, CachedFeedback, DisabledFeedback, FeedbackProvider};
use mindcheck_core::models::assessment::Mood;
use mindcheck_core::models::severity::{Gad7Level, Phq9Level};
use mindcheck_core::models::summary::AssessmentSummary;

fn summary(age: u16) -> AssessmentSummary {
    AssessmentSummary {
        age,
        mood: Mood::Neutral,
        sleep_hours: 7.0,
        stress_level: 2,
        phq9_score: 3,
        phq9_level: Phq9Level::Minimal,
        gad7_score: 2,
        gad7_level: Gad7Level::Minimal,
        suggestions: vec!["Keep it up.".to_string()],
        notes: None,
    }
}

struct Counting {
    calls: AtomicUsize,
    answer: Option<String>,
}

#[async_trait]
impl FeedbackProvider for Counting {
    async fn feedback(&self, _summary: &AssessmentSummary) -> Option<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.answer.clone()
    }
}

#[tokio::test]
async fn disabled_provider_returns_nothing() {
    assert_eq!(DisabledFeedback.feedback(&summary(30)).await, None);
}

#[tokio::test]
async fn cache_reuses_answers_for_identical_summaries() {
    let inner = Arc::new(Counting {
        calls: AtomicUsize::new(0),
        answer: Some("Try a short walk.".to_string()),
    });
    let cached = CachedFeedback::new(inner.clone(), Duration::from_secs(60), 16);

    assert_eq!(cached.feedback(&summary(30)).await.as_deref(), Some("Try a short walk."));
    assert_eq!(cached.feedback(&summary(30)).await.as_deref(), Some("Try a short walk."));
    assert_eq!(inner.calls.load(Ordering::SeqCst), 1);

    cached.feedback(&summary(31)).await;
    assert_eq!(inner.calls.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn cache_does_not_store_misses() {
    let inner = Arc::new(Counting {
        calls: AtomicUsize::new(0),
        answer: None,
    });
    let cached = CachedFeedback::new(inner.clone(), Duration::from_secs(60), 16);

    assert_eq!(cached.feedback(&summary(30)).await, None);
    assert_eq!(cached.feedback(&summary(30)).await, None);
    assert_eq!(inner.calls.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn bounded_trims_successful_text() {
    let text = bounded(Duration::from_secs(1), async { Ok::<_, BedrockError>("  Be kind to yourself.\n".to_string()) }).await;
    assert_eq!(text.as_deref(), Some("Be kind to yourself."));
}

#[tokio::test]
async fn bounded_absorbs_errors() {
    let text = bounded(Duration::from_secs(1), async {
        Err(BedrockError::Invocation("throttled".to_string()))
    })
    .await;
    assert_eq!(text, None);
}

#[tokio::test]
async fn bounded_treats_blank_output_as_none() {
    let text = bounded(Duration::from_secs(1), async { Ok::<_, BedrockError>("   ".to_string()) }).await;
    assert_eq!(text, None);
}

#[tokio::test]
async fn bounded_gives_up_after_timeout() {
    let text = bounded(Duration::from_millis(10), async {
        tokio::time::sleep(Duration::from_secs(5)).await;
        Ok::<_, BedrockError>("too late".to_string())
    })
    .await;
    assert_eq!(text, None);
}
