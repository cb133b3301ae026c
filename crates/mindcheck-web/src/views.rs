//! Serializable view models handed to the Tera templates. All lookups are
//! resolved here so templates only print values.

use std::collections::BTreeMap;

use serde::Serialize;

use mindcheck_core::models::assessment::{AssessmentInput, Mood};
use mindcheck_core::models::result::AssessmentResult;
use mindcheck_core::validation::ValidationErrors;
use mindcheck_instruments::scoring::ResponseOption;
use mindcheck_instruments::{all_instruments, Instrument};

use crate::forms::{self, FormFields};

/// Plain inputs echoed back on the form.
const TEXT_FIELDS: [&str; 9] = [
    "name",
    "age",
    "sleep",
    "stress",
    forms::NOTES_FIELD,
    "exercise_days",
    "caffeine_cups",
    "screen_hours",
    "support_level",
];

#[derive(Debug, Serialize)]
pub struct FieldView {
    pub value: String,
    pub error: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct MoodOption {
    pub value: &'static str,
    pub label: &'static str,
    pub selected: bool,
}

#[derive(Debug, Serialize)]
pub struct ItemView {
    pub id: String,
    pub number: usize,
    pub text: String,
    pub selected: Option<u8>,
    pub error: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct QuestionnaireView {
    pub id: String,
    pub name: String,
    pub prompt: String,
    pub options: Vec<ResponseOption>,
    pub items: Vec<ItemView>,
}

#[derive(Debug, Serialize)]
pub struct FormPage {
    pub csrf_token: String,
    pub has_errors: bool,
    pub fields: BTreeMap<&'static str, FieldView>,
    pub moods: Vec<MoodOption>,
    pub mood_error: Option<String>,
    pub questionnaires: Vec<QuestionnaireView>,
    pub use_ai: bool,
    pub ai_available: bool,
}

impl FormPage {
    /// Empty form.
    pub fn blank(csrf_token: String, ai_available: bool) -> Self {
        Self::with_values(csrf_token, ai_available, &FormFields::new(), &ValidationErrors::new())
    }

    /// Form re-populated with the visitor's submission and its errors.
    pub fn with_values(
        csrf_token: String,
        ai_available: bool,
        form: &FormFields,
        errors: &ValidationErrors,
    ) -> Self {
        let error_for = |name: &str| errors.get(name).map(str::to_string);

        let fields = TEXT_FIELDS
            .into_iter()
            .map(|name| {
                let view = FieldView {
                    value: forms::field(form, name).to_string(),
                    error: error_for(name),
                };
                (name, view)
            })
            .collect();

        let submitted_mood = forms::field(form, "mood").to_lowercase();
        let moods = Mood::ALL
            .into_iter()
            .map(|m| MoodOption {
                value: m.form_value(),
                label: m.label(),
                selected: submitted_mood == m.form_value(),
            })
            .collect();

        let questionnaires = all_instruments()
            .iter()
            .map(|instrument| questionnaire(instrument.as_ref(), form, errors))
            .collect();

        Self {
            csrf_token,
            has_errors: !errors.is_empty(),
            fields,
            moods,
            mood_error: error_for("mood"),
            questionnaires,
            use_ai: forms::wants_ai(form),
            ai_available,
        }
    }
}

fn questionnaire(
    instrument: &dyn Instrument,
    form: &FormFields,
    errors: &ValidationErrors,
) -> QuestionnaireView {
    let items = instrument
        .items()
        .iter()
        .map(|item| ItemView {
            id: item.id.clone(),
            number: item.number,
            text: item.text.clone(),
            selected: forms::field(form, &item.id)
                .parse()
                .ok()
                .filter(|v| instrument.answer_range().contains(*v)),
            error: errors.get(&item.id).map(str::to_string),
        })
        .collect();

    QuestionnaireView {
        id: instrument.id().to_string(),
        name: instrument.name().to_string(),
        prompt: instrument.prompt().to_string(),
        options: instrument.response_options().to_vec(),
        items,
    }
}

#[derive(Debug, Serialize)]
pub struct ScoreCard {
    pub name: String,
    pub score: u8,
    pub max: u8,
    pub level: &'static str,
    pub percent: u8,
}

impl ScoreCard {
    fn new(instrument: &dyn Instrument, score: u8, level: &'static str) -> Self {
        let max = instrument.max_total();
        let percent = if max == 0 {
            0
        } else {
            (u16::from(score) * 100 / u16::from(max)).min(100) as u8
        };
        Self {
            name: instrument.name().to_string(),
            score,
            max,
            level,
            percent,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ResultPage {
    pub name: String,
    pub age: u16,
    pub mood: &'static str,
    pub sleep_hours: f64,
    pub stress_level: u8,
    pub notes: Option<String>,
    pub exercise_days: u8,
    pub caffeine_cups: u32,
    pub screen_hours: f64,
    pub support_level: u8,
    pub cards: Vec<ScoreCard>,
    pub risk_flag: bool,
    pub suicidal_ideation: bool,
    pub suggestions: Vec<String>,
    pub ai_requested: bool,
    pub ai_feedback: Option<String>,
}

impl ResultPage {
    pub fn new(
        input: &AssessmentInput,
        result: &AssessmentResult,
        ai_requested: bool,
        ai_feedback: Option<String>,
    ) -> Self {
        use mindcheck_instruments::instruments::{gad7::Gad7, phq9::Phq9};

        Self {
            name: input.name.clone(),
            age: input.age,
            mood: input.mood.label(),
            sleep_hours: input.sleep_hours,
            stress_level: input.stress_level,
            notes: input.notes.clone(),
            exercise_days: input.exercise_days,
            caffeine_cups: input.caffeine_cups,
            screen_hours: input.screen_hours,
            support_level: input.support_level,
            cards: vec![
                ScoreCard::new(&Phq9, result.phq9_score, result.phq9_level.label()),
                ScoreCard::new(&Gad7, result.gad7_score, result.gad7_level.label()),
            ],
            risk_flag: result.risk_flag,
            suicidal_ideation: result.suicidal_ideation_flag,
            suggestions: result.suggestions.clone(),
            ai_requested,
            ai_feedback,
        }
    }
}
