use mindcheck_core::models::assessment::{AssessmentInput, Mood};

fn valid_input() -> AssessmentInput {
    AssessmentInput {
        name: "Alex".to_string(),
        age: 25,
        mood: Mood::Neutral,
        sleep_hours: 7.0,
        stress_level: 2,
        notes: Some("Feeling okay".to_string()),
        phq9_answers: vec![0; 9],
        gad7_answers: vec![0; 7],
        exercise_days: 2,
        caffeine_cups: 1,
        screen_hours: 3.0,
        support_level: 4,
    }
}

#[test]
fn valid_input_passes() {
    assert!(valid_input().validate().is_ok());
}

#[test]
fn blank_name_is_required() {
    let mut input = valid_input();
    input.name = "   ".to_string();
    let errors = input.validate().unwrap_err();
    assert_eq!(errors.get("name"), Some("Name is required."));
    assert_eq!(errors.len(), 1);
}

#[test]
fn age_bounds_are_inclusive() {
    let mut input = valid_input();
    for age in [13, 120] {
        input.age = age;
        assert!(input.validate().is_ok(), "age {age} should be accepted");
    }
    for age in [12, 121] {
        input.age = age;
        let errors = input.validate().unwrap_err();
        assert_eq!(errors.get("age"), Some("Enter a realistic age (13-120)."));
    }
}

#[test]
fn sleep_outside_day_is_rejected() {
    let mut input = valid_input();
    input.sleep_hours = 25.0;
    let errors = input.validate().unwrap_err();
    assert_eq!(errors.get("sleep"), Some("Enter hours between 0 and 24."));

    input.sleep_hours = f64::NAN;
    assert!(input.validate().unwrap_err().contains("sleep"));
}

#[test]
fn stress_and_support_must_be_one_to_five() {
    let mut input = valid_input();
    input.stress_level = 0;
    input.support_level = 6;
    let errors = input.validate().unwrap_err();
    assert_eq!(errors.get("stress"), Some("Stress must be 1-5."));
    assert_eq!(errors.get("support_level"), Some("1-5"));
}

#[test]
fn out_of_range_answer_is_reported_per_item() {
    let mut input = valid_input();
    input.phq9_answers[3] = 4;
    input.gad7_answers[6] = 9;
    let errors = input.validate().unwrap_err();
    assert_eq!(errors.get("phq9_4"), Some("Select 0-3"));
    assert_eq!(errors.get("gad7_7"), Some("Select 0-3"));
    assert_eq!(errors.len(), 2);
}

#[test]
fn short_answer_list_flags_missing_items() {
    let mut input = valid_input();
    input.phq9_answers.truncate(7);
    let errors = input.validate().unwrap_err();
    assert!(errors.contains("phq9_8"));
    assert!(errors.contains("phq9_9"));
    assert!(!errors.contains("phq9_7"));
}

#[test]
fn extra_answers_are_flagged() {
    let mut input = valid_input();
    input.gad7_answers.push(0);
    let errors = input.validate().unwrap_err();
    assert!(errors.contains("gad7_8"));
}

#[test]
fn lifestyle_ranges() {
    let mut input = valid_input();
    input.exercise_days = 8;
    input.screen_hours = -1.0;
    let errors = input.validate().unwrap_err();
    assert_eq!(errors.get("exercise_days"), Some("0-7"));
    assert_eq!(errors.get("screen_hours"), Some("Enter 0 or more."));
}

#[test]
fn display_lists_fields() {
    let mut input = valid_input();
    input.name.clear();
    let message = input.validate().unwrap_err().to_string();
    assert!(message.contains("name: Name is required."));
}
