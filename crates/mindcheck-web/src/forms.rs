//! Parsing of the urlencoded check-in form into an [`AssessmentInput`].
//!
//! Parse failures and range failures are collected together so the form can
//! show every problem at once.

use std::collections::HashMap;
use std::str::FromStr;

use mindcheck_core::models::assessment::{AssessmentInput, Mood};
use mindcheck_core::validation::{ValidationErrors, GAD7_ITEM_COUNT, MAX_ITEM_ANSWER, PHQ9_ITEM_COUNT};

/// Raw submitted form fields.
pub type FormFields = HashMap<String, String>;

/// Hidden field carrying the CSRF token.
pub const CSRF_FIELD: &str = "csrf_token";

/// Free-text notes field name.
pub const NOTES_FIELD: &str = "thoughts";

/// Trimmed value of `field`, or `""` when absent.
pub fn field<'a>(form: &'a FormFields, name: &str) -> &'a str {
    form.get(name).map(|v| v.trim()).unwrap_or("")
}

/// Whether the visitor opted in to AI feedback.
pub fn wants_ai(form: &FormFields) -> bool {
    field(form, "use_ai") == "on"
}

/// Parse and validate a submitted form.
pub fn parse_assessment(form: &FormFields) -> Result<AssessmentInput, ValidationErrors> {
    let mut errors = ValidationErrors::new();

    let age = parse_or(form, "age", "Age must be a number.", &mut errors)
        .map(|age: i64| {
            u16::try_from(age).unwrap_or_else(|_| {
                errors.add("age", "Enter a realistic age (13-120).");
                0
            })
        })
        .unwrap_or(0);

    let mood = Mood::from_str(field(form, "mood")).unwrap_or_else(|_| {
        errors.add("mood", "Select a mood option.");
        Mood::Neutral
    });

    let sleep_hours = parse_or(form, "sleep", "Sleep must be a number.", &mut errors).unwrap_or(0.0);

    let stress_level = parse_or(form, "stress", "Stress must be a number.", &mut errors)
        .map(|stress: i64| {
            u8::try_from(stress).unwrap_or_else(|_| {
                errors.add("stress", "Stress must be 1-5.");
                0
            })
        })
        .unwrap_or(0);

    let phq9_answers = parse_answers(form, "phq9", PHQ9_ITEM_COUNT, &mut errors);
    let gad7_answers = parse_answers(form, "gad7", GAD7_ITEM_COUNT, &mut errors);

    let exercise_days = parse_count(form, "exercise_days", &mut errors)
        .map(|days| u8::try_from(days).unwrap_or(u8::MAX))
        .unwrap_or(0);
    let caffeine_cups = parse_count(form, "caffeine_cups", &mut errors).unwrap_or(0);
    let screen_hours = parse_or(form, "screen_hours", "Required", &mut errors).unwrap_or(0.0);
    let support_level = parse_or(form, "support_level", "Required", &mut errors)
        .map(|level: i64| u8::try_from(level).unwrap_or(0))
        .unwrap_or(3);

    let notes = field(form, NOTES_FIELD);
    let input = AssessmentInput {
        name: field(form, "name").to_string(),
        age,
        mood,
        sleep_hours,
        stress_level,
        notes: (!notes.is_empty()).then(|| notes.to_string()),
        phq9_answers,
        gad7_answers,
        exercise_days,
        caffeine_cups,
        screen_hours,
        support_level,
    };

    // Parse messages were recorded first, so they take precedence over the
    // range messages triggered by the placeholder values above.
    if let Err(range_errors) = input.validate() {
        errors.merge(range_errors);
    }

    errors.into_result().map(|()| input)
}

fn parse_or<T: FromStr>(
    form: &FormFields,
    name: &str,
    message: &str,
    errors: &mut ValidationErrors,
) -> Option<T> {
    let parsed = field(form, name).parse().ok();
    if parsed.is_none() {
        errors.add(name, message);
    }
    parsed
}

/// Non-negative whole number. Negative values get their own message.
fn parse_count(form: &FormFields, name: &str, errors: &mut ValidationErrors) -> Option<u32> {
    let value: i64 = parse_or(form, name, "Required", errors)?;
    match u32::try_from(value) {
        Ok(count) => Some(count),
        Err(_) => {
            errors.add(name, "Enter 0 or more.");
            None
        }
    }
}

fn parse_answers(
    form: &FormFields,
    prefix: &str,
    count: usize,
    errors: &mut ValidationErrors,
) -> Vec<u8> {
    (1..=count)
        .map(|i| {
            let name = format!("{prefix}_{i}");
            match field(form, &name).parse::<u8>() {
                Ok(answer) if answer <= MAX_ITEM_ANSWER => answer,
                _ => {
                    errors.add(name, "Select 0-3");
                    0
                }
            }
        })
        .collect()
}
