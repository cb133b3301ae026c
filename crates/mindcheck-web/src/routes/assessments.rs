use axum::extract::rejection::JsonRejection;
use axum::Json;

use mindcheck_core::models::assessment::AssessmentInput;
use mindcheck_core::models::result::AssessmentResult;
use mindcheck_instruments::assess::assess;

use crate::error::ApiError;

/// Validate and score a JSON check-in. No AI call is made on this path.
pub async fn create_assessment(
    payload: Result<Json<AssessmentInput>, JsonRejection>,
) -> Result<Json<AssessmentResult>, ApiError> {
    let Json(input) = payload.map_err(|e| ApiError::BadRequest(e.body_text()))?;
    input.validate()?;

    let result = assess(&input)?;
    tracing::info!(
        phq9_level = %result.phq9_level,
        gad7_level = %result.gad7_level,
        risk_flag = result.risk_flag,
        "api check-in scored"
    );
    Ok(Json(result))
}
