//! Range validation for a submitted check-in.
//!
//! Errors are keyed by the check-in form's field names (`sleep`, `stress`,
//! `phq9_1` …) so the web layer can show each message next to its input.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::models::assessment::AssessmentInput;

pub const PHQ9_ITEM_COUNT: usize = 9;
pub const GAD7_ITEM_COUNT: usize = 7;
pub const MAX_ITEM_ANSWER: u8 = 3;

/// Per-field validation messages, ordered by field name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(transparent)]
#[ts(export)]
pub struct ValidationErrors {
    pub fields: BTreeMap<String, String>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a message for `field`. The first message for a field wins.
    pub fn add(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.fields.entry(field.into()).or_insert_with(|| message.into());
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.fields.get(field).map(String::as_str)
    }

    pub fn contains(&self, field: &str) -> bool {
        self.fields.contains_key(field)
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn merge(&mut self, other: ValidationErrors) {
        for (field, message) in other.fields {
            self.add(field, message);
        }
    }

    pub fn into_result(self) -> Result<(), ValidationErrors> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self
            .fields
            .iter()
            .map(|(field, message)| format!("{field}: {message}"))
            .collect();
        write!(f, "invalid input ({})", parts.join("; "))
    }
}

impl std::error::Error for ValidationErrors {}

impl AssessmentInput {
    /// Check every bounded field. Scoring assumes this has passed.
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();

        if self.name.trim().is_empty() {
            errors.add("name", "Name is required.");
        }
        if !(13..=120).contains(&self.age) {
            errors.add("age", "Enter a realistic age (13-120).");
        }
        if !self.sleep_hours.is_finite() || !(0.0..=24.0).contains(&self.sleep_hours) {
            errors.add("sleep", "Enter hours between 0 and 24.");
        }
        if !(1..=5).contains(&self.stress_level) {
            errors.add("stress", "Stress must be 1-5.");
        }

        validate_answers(&mut errors, "phq9", &self.phq9_answers, PHQ9_ITEM_COUNT);
        validate_answers(&mut errors, "gad7", &self.gad7_answers, GAD7_ITEM_COUNT);

        if self.exercise_days > 7 {
            errors.add("exercise_days", "0-7");
        }
        if !self.screen_hours.is_finite() || self.screen_hours < 0.0 {
            errors.add("screen_hours", "Enter 0 or more.");
        }
        if !(1..=5).contains(&self.support_level) {
            errors.add("support_level", "1-5");
        }

        errors.into_result()
    }
}

/// Items are numbered from 1 in field names (`phq9_1` … `phq9_9`).
fn validate_answers(errors: &mut ValidationErrors, prefix: &str, answers: &[u8], expected: usize) {
    for i in 0..expected.max(answers.len()) {
        let ok = i < expected && answers.get(i).is_some_and(|&a| a <= MAX_ITEM_ANSWER);
        if !ok {
            errors.add(format!("{prefix}_{}", i + 1), "Select 0-3");
        }
    }
}
