//! Rule-based suggestion engine.
//!
//! Every rule is evaluated independently and in a fixed order, so identical
//! input always yields identical output. The engine has no failure path.

use serde::Serialize;

use mindcheck_core::models::assessment::AssessmentInput;

pub const LOW_MOOD: &str = "Your mood seems low. Consider small enjoyable activities and reaching out to someone you trust.";
pub const SHORT_SLEEP: &str = "You're sleeping less than recommended. Try a consistent bedtime and reduce screens before bed.";
pub const LONG_SLEEP: &str = "You're sleeping a lot. If this persists, consider discussing with a healthcare professional.";
pub const HIGH_STRESS: &str = "High stress reported. Try short breathing exercises, brief walks, or journaling.";
pub const NOTES_CRISIS: &str = "If you feel unsafe or at risk of harming yourself, seek immediate help: local emergency services or a crisis hotline in your country.";
pub const QUESTIONNAIRE_CRISIS: &str = "You reported some thoughts of self-harm or that you'd be better off dead. Please seek immediate help or contact a crisis hotline.";
pub const DOING_WELL: &str = "You're doing many things right. Keep monitoring your well-being and maintain supportive routines.";
pub const LOW_EXERCISE: &str = "Consider adding 10–15 minute walks on 2+ days each week to build regular exercise.";
pub const HIGH_CAFFEINE: &str = "High caffeine can impact anxiety and sleep; consider reducing gradually.";
pub const HIGH_SCREEN_TIME: &str = "Try short breaks and evening screen curfews; less screen time can aid sleep and mood.";
pub const LOW_SUPPORT: &str = "Think about one person you could check in with this week to strengthen your support network.";

/// Words in free-text notes that raise the risk flag.
pub const RISK_KEYWORDS: [&str; 4] = ["hopeless", "harm", "suicide", "worthless"];

const SHORT_SLEEP_HOURS: f64 = 6.0;
const LONG_SLEEP_HOURS: f64 = 9.0;
const HIGH_STRESS_LEVEL: u8 = 4;
const MIN_EXERCISE_DAYS: u8 = 2;
const MAX_CAFFEINE_CUPS: u32 = 3;
const MAX_SCREEN_HOURS: f64 = 6.0;
const LOW_SUPPORT_LEVEL: u8 = 2;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Suggestions {
    pub items: Vec<String>,
    pub risk_flag: bool,
}

/// Case-insensitive substring match against [`RISK_KEYWORDS`].
pub fn notes_indicate_risk(notes: &str) -> bool {
    let lowered = notes.to_lowercase();
    RISK_KEYWORDS.iter().any(|word| lowered.contains(word))
}

/// Build the ordered suggestion list and risk flag.
///
/// `suicidal_ideation` is the PHQ-9 item 9 flag. When set, its crisis message
/// is placed first. The "doing well" affirmation is added only when none of
/// the mood, sleep, stress or risk rules fired; lifestyle nudges do not
/// suppress it.
pub fn build_suggestions(input: &AssessmentInput, suicidal_ideation: bool) -> Suggestions {
    let mut items: Vec<String> = Vec::new();
    let mut risk_flag = false;

    if input.mood.is_low() {
        items.push(LOW_MOOD.to_string());
    }

    if input.sleep_hours < SHORT_SLEEP_HOURS {
        items.push(SHORT_SLEEP.to_string());
    } else if input.sleep_hours > LONG_SLEEP_HOURS {
        items.push(LONG_SLEEP.to_string());
    }

    if input.stress_level >= HIGH_STRESS_LEVEL {
        items.push(HIGH_STRESS.to_string());
    }

    if notes_indicate_risk(input.notes_text()) {
        risk_flag = true;
        items.push(NOTES_CRISIS.to_string());
    }

    if suicidal_ideation {
        risk_flag = true;
        items.insert(0, QUESTIONNAIRE_CRISIS.to_string());
    }

    if items.is_empty() {
        items.push(DOING_WELL.to_string());
    }

    if input.exercise_days < MIN_EXERCISE_DAYS {
        items.push(LOW_EXERCISE.to_string());
    }
    if input.caffeine_cups > MAX_CAFFEINE_CUPS {
        items.push(HIGH_CAFFEINE.to_string());
    }
    if input.screen_hours > MAX_SCREEN_HOURS {
        items.push(HIGH_SCREEN_TIME.to_string());
    }
    if input.support_level <= LOW_SUPPORT_LEVEL {
        items.push(LOW_SUPPORT.to_string());
    }

    Suggestions { items, risk_flag }
}
