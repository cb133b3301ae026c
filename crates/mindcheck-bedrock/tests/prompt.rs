use mindcheck_bedrock::prompt::{build_user_message, clean_response, SYSTEM_PROMPT};
use mindcheck_bedrock::tokens::{get_pricing, TokenCount};
use mindcheck_core::models::assessment::{AssessmentInput, Mood};
use mindcheck_core::models::result::AssessmentResult;
use mindcheck_core::models::severity::{Gad7Level, Phq9Level};
use mindcheck_core::models::summary::AssessmentSummary;

fn redacted() -> AssessmentSummary {
    let input = AssessmentInput {
        name: "Riley Secretname".to_string(),
        age: 41,
        mood: Mood::VeryLow,
        sleep_hours: 5.0,
        stress_level: 4,
        notes: Some("Work has been heavy".to_string()),
        phq9_answers: vec![2; 9],
        gad7_answers: vec![2; 7],
        exercise_days: 0,
        caffeine_cups: 4,
        screen_hours: 8.0,
        support_level: 2,
    };
    let result = AssessmentResult {
        phq9_score: 18,
        phq9_level: Phq9Level::ModeratelySevere,
        suicidal_ideation_flag: true,
        gad7_score: 14,
        gad7_level: Gad7Level::Moderate,
        risk_flag: true,
        suggestions: vec!["First.".to_string(), "Second.".to_string()],
    };
    AssessmentSummary::redacted(&input, &result)
}

#[test]
fn user_message_carries_scores_and_levels() {
    let message = build_user_message(&redacted());
    assert!(message.contains("Age: 41."));
    assert!(message.contains("Mood: very low."));
    assert!(message.contains("Stress: 4/5."));
    assert!(message.contains("PHQ-9: 18 (Moderately severe)."));
    assert!(message.contains("GAD-7: 14 (Moderate)."));
    assert!(message.contains("Work has been heavy"));
    assert!(message.contains("First. | Second."));
}

#[test]
fn user_message_never_includes_name() {
    let message = build_user_message(&redacted());
    assert!(!message.contains("Riley"));
    assert!(!message.contains("Secretname"));
}

#[test]
fn system_prompt_sets_length_and_safety() {
    assert!(SYSTEM_PROMPT.contains("non-clinical"));
    assert!(SYSTEM_PROMPT.contains("under 120 words"));
}

#[test]
fn clean_response_trims() {
    assert_eq!(clean_response("\n ok \n").as_deref(), Some("ok"));
    assert_eq!(clean_response(""), None);
}

#[test]
fn pricing_lookup() {
    let pricing = get_pricing("us.anthropic.claude-haiku-4-5").unwrap();
    let cost = pricing.estimate_cost(TokenCount {
        input: 1_000_000,
        output: 0,
    });
    assert!((cost - 0.80).abs() < 1e-9);
    assert!(get_pricing("unknown-model").is_none());
}
