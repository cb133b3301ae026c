//! Prompt assembly for well-being feedback.
//!
//! Only the redacted [`AssessmentSummary`] is ever formatted into a prompt.

use mindcheck_core::models::summary::AssessmentSummary;

pub const SYSTEM_PROMPT: &str = "You are a supportive, non-clinical assistant. Provide short, practical, \
and safe well-being suggestions. Avoid diagnostics or medical claims. Encourage reaching out to \
trusted people or professionals when appropriate, and include a brief safety note if risk \
indicators appear. Keep the response under 120 words.";

pub const MAX_TOKENS: i32 = 220;
pub const TEMPERATURE: f32 = 0.4;

/// Format the summary as the user turn.
pub fn build_user_message(summary: &AssessmentSummary) -> String {
    let suggestions = if summary.suggestions.is_empty() {
        "none".to_string()
    } else {
        summary.suggestions.join(" | ")
    };

    format!(
        "Age: {}. Mood: {}. Sleep: {} hours. Stress: {}/5. \
         PHQ-9: {} ({}). GAD-7: {} ({}). \
         Notes (redacted): {}. Suggestions so far: {}",
        summary.age,
        summary.mood,
        summary.sleep_hours,
        summary.stress_level,
        summary.phq9_score,
        summary.phq9_level,
        summary.gad7_score,
        summary.gad7_level,
        summary.notes.as_deref().unwrap_or(""),
        suggestions,
    )
}

/// Trim model output; blank output counts as no feedback.
pub fn clean_response(text: &str) -> Option<String> {
    let trimmed = text.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}
