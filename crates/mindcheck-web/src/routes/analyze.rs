use axum::extract::State;
use axum::http::HeaderMap;
use axum::response::{Html, IntoResponse, Response};
use axum::Form;
use tracing::info;

use mindcheck_core::models::summary::AssessmentSummary;
use mindcheck_instruments::assess::assess;

use crate::error::AppError;
use crate::forms::{self, FormFields, CSRF_FIELD};
use crate::middleware::csrf;
use crate::render;
use crate::routes::pages::form_response;
use crate::state::AppState;
use crate::views::{FormPage, ResultPage};

/// Score a submitted check-in and render the result page, or re-render the
/// form with per-field messages.
pub async fn analyze(
    State(state): State<AppState>,
    headers: HeaderMap,
    Form(form): Form<FormFields>,
) -> Result<Response, AppError> {
    if state.config.csrf_enabled {
        let cookie = csrf::cookie_token(&headers);
        if !csrf::verify(&state.config.secret_key, cookie.as_deref(), forms::field(&form, CSRF_FIELD)) {
            tracing::warn!("csrf token missing or invalid");
            return Err(AppError::Forbidden(
                "Your session expired. Reload the page and submit the form again.".to_string(),
            ));
        }
    }

    let input = match forms::parse_assessment(&form) {
        Ok(input) => input,
        Err(errors) => {
            info!(invalid_fields = errors.len(), "check-in rejected");
            let ai_available = state.config.ai.is_some();
            return form_response(&state, &headers, |token| {
                FormPage::with_values(token, ai_available, &form, &errors)
            });
        }
    };

    let result = assess(&input)?;

    let ai_requested = forms::wants_ai(&form);
    let ai_feedback = if ai_requested {
        let summary = AssessmentSummary::redacted(&input, &result);
        state.feedback.feedback(&summary).await
    } else {
        None
    };

    info!(
        phq9_level = %result.phq9_level,
        gad7_level = %result.gad7_level,
        risk_flag = result.risk_flag,
        suggestions = result.suggestions.len(),
        ai_requested,
        ai_delivered = ai_feedback.is_some(),
        "check-in scored"
    );

    let page = ResultPage::new(&input, &result, ai_requested, ai_feedback);
    let body = render::render("result.html", &page)?;
    Ok(Html(body).into_response())
}
