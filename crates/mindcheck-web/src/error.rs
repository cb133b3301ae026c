use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use mindcheck_core::validation::ValidationErrors;
use mindcheck_instruments::error::InstrumentError;

use crate::render;

/// Error type for HTML page handlers. Renders the shared error page.
#[derive(Debug)]
pub enum AppError {
    NotFound,
    Forbidden(String),
    TooManyRequests,
    Internal(String),
}

#[derive(Serialize)]
struct ErrorPage<'a> {
    heading: &'a str,
    message: &'a str,
}

impl AppError {
    fn parts(&self) -> (StatusCode, &str, &str) {
        match self {
            AppError::NotFound => (
                StatusCode::NOT_FOUND,
                "Page not found",
                "The page you are looking for does not exist.",
            ),
            AppError::Forbidden(msg) => (StatusCode::FORBIDDEN, "Request refused", msg),
            AppError::TooManyRequests => (
                StatusCode::TOO_MANY_REQUESTS,
                "Too many requests",
                "You have sent too many requests. Please wait a minute and try again.",
            ),
            AppError::Internal(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Something went wrong",
                "We encountered an unexpected error. Please try again shortly.",
            ),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if let AppError::Internal(msg) = &self {
            tracing::error!("internal error: {msg}");
        }

        let (status, heading, message) = self.parts();
        let body = render::render("error.html", &ErrorPage { heading, message })
            .unwrap_or_else(|_| format!("{heading}. {message}"));

        (status, Html(body)).into_response()
    }
}

impl From<tera::Error> for AppError {
    fn from(e: tera::Error) -> Self {
        AppError::Internal(format!("template rendering failed: {e}"))
    }
}

impl From<InstrumentError> for AppError {
    fn from(e: InstrumentError) -> Self {
        AppError::Internal(e.to_string())
    }
}

/// Error type for JSON API handlers.
#[derive(Debug)]
pub enum ApiError {
    NotFound(String),
    BadRequest(String),
    Validation(ValidationErrors),
    Internal(String),
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    fields: Option<ValidationErrors>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error, fields) = match self {
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg, None),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg, None),
            ApiError::Validation(errors) => (
                StatusCode::BAD_REQUEST,
                "validation failed".to_string(),
                Some(errors),
            ),
            ApiError::Internal(msg) => {
                tracing::error!("internal error: {msg}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_string(),
                    None,
                )
            }
        };

        (status, Json(ErrorBody { error, fields })).into_response()
    }
}

impl From<InstrumentError> for ApiError {
    fn from(e: InstrumentError) -> Self {
        match e {
            InstrumentError::UnknownInstrument(id) => {
                ApiError::NotFound(format!("instrument not found: {id}"))
            }
            other => ApiError::Internal(other.to_string()),
        }
    }
}

impl From<ValidationErrors> for ApiError {
    fn from(e: ValidationErrors) -> Self {
        ApiError::Validation(e)
    }
}
