use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

/// Self-reported mood, as offered by the check-in form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Mood {
    VeryLow,
    Low,
    Neutral,
    Good,
    VeryGood,
}

impl Mood {
    pub const ALL: [Mood; 5] = [
        Mood::VeryLow,
        Mood::Low,
        Mood::Neutral,
        Mood::Good,
        Mood::VeryGood,
    ];

    /// The value submitted by the HTML form (e.g. `"very low"`).
    pub fn form_value(self) -> &'static str {
        match self {
            Mood::VeryLow => "very low",
            Mood::Low => "low",
            Mood::Neutral => "neutral",
            Mood::Good => "good",
            Mood::VeryGood => "very good",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Mood::VeryLow => "Very low",
            Mood::Low => "Low",
            Mood::Neutral => "Neutral",
            Mood::Good => "Good",
            Mood::VeryGood => "Very good",
        }
    }

    pub fn is_low(self) -> bool {
        matches!(self, Mood::VeryLow | Mood::Low)
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.form_value())
    }
}

impl FromStr for Mood {
    type Err = CoreError;

    /// Accepts the form spelling (`very low`) as well as `very_low` and
    /// `very-low`, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace(['_', '-'], " ");
        Mood::ALL
            .into_iter()
            .find(|m| m.form_value() == normalized)
            .ok_or_else(|| CoreError::InvalidMood(s.to_string()))
    }
}

/// One submitted check-in. Ranges are enforced by
/// [`AssessmentInput::validate`](crate::validation) before scoring.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AssessmentInput {
    pub name: String,
    pub age: u16,
    pub mood: Mood,
    pub sleep_hours: f64,
    pub stress_level: u8,
    #[serde(default)]
    pub notes: Option<String>,
    pub phq9_answers: Vec<u8>,
    pub gad7_answers: Vec<u8>,
    pub exercise_days: u8,
    pub caffeine_cups: u32,
    pub screen_hours: f64,
    pub support_level: u8,
}

impl AssessmentInput {
    /// Free-text notes, or the empty string when none were given.
    pub fn notes_text(&self) -> &str {
        self.notes.as_deref().unwrap_or("")
    }
}
