use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::assessment::{AssessmentInput, Mood};
use super::result::AssessmentResult;
use super::severity::{Gad7Level, Phq9Level};

/// Maximum number of characters of free-text notes shared externally.
pub const MAX_SHARED_NOTES_CHARS: usize = 500;

/// Redacted view of a check-in that is safe to send to an external AI
/// provider: aggregated scores and levels only, truncated notes, no name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AssessmentSummary {
    pub age: u16,
    pub mood: Mood,
    pub sleep_hours: f64,
    pub stress_level: u8,
    pub phq9_score: u8,
    pub phq9_level: Phq9Level,
    pub gad7_score: u8,
    pub gad7_level: Gad7Level,
    pub suggestions: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl AssessmentSummary {
    pub fn redacted(input: &AssessmentInput, result: &AssessmentResult) -> Self {
        let notes = input.notes_text().trim();
        let notes = (!notes.is_empty())
            .then(|| notes.chars().take(MAX_SHARED_NOTES_CHARS).collect::<String>());

        Self {
            age: input.age,
            mood: input.mood,
            sleep_hours: input.sleep_hours,
            stress_level: input.stress_level,
            phq9_score: result.phq9_score,
            phq9_level: result.phq9_level,
            gad7_score: result.gad7_score,
            gad7_level: result.gad7_level,
            suggestions: result.suggestions.clone(),
            notes,
        }
    }

    /// Stable key for caching provider responses to identical summaries.
    /// JSON keeps free-text fields delimited, so distinct summaries never
    /// share a key.
    pub fn cache_key(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
