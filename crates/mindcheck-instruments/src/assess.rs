use mindcheck_core::models::assessment::AssessmentInput;
use mindcheck_core::models::result::AssessmentResult;

use crate::error::InstrumentError;
use crate::instruments::gad7::score_gad7;
use crate::instruments::phq9::score_phq9;
use crate::suggestions::build_suggestions;

/// Score both questionnaires and derive suggestions for a validated input.
pub fn assess(input: &AssessmentInput) -> Result<AssessmentResult, InstrumentError> {
    let phq9 = score_phq9(&input.phq9_answers)?;
    let gad7 = score_gad7(&input.gad7_answers)?;
    let suggestions = build_suggestions(input, phq9.suicidal_ideation);

    Ok(AssessmentResult {
        phq9_score: phq9.score,
        phq9_level: phq9.level,
        suicidal_ideation_flag: phq9.suicidal_ideation,
        gad7_score: gad7.score,
        gad7_level: gad7.level,
        risk_flag: suggestions.risk_flag,
        suggestions: suggestions.items,
    })
}
