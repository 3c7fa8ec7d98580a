//! API error types with HTTP response mapping.

use application::UseCaseError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use domain::{IssueCode, ValidationIssues};

/// API-level error type that maps to HTTP responses.
///
/// Every variant renders as `{"error": message}`.
#[derive(Debug)]
pub enum ApiError {
    /// Resource not found.
    NotFound(String),
    /// Missing or empty input from the client.
    BadRequest(String),
    /// Input that is present but malformed or invalid.
    Unprocessable(String),
    /// Use case failure.
    UseCase(UseCaseError),
    /// Internal server error.
    Internal(String),
}

impl ApiError {
    /// Classifies a rejected request body.
    ///
    /// Bodies that are only missing fields are bad requests, as is an empty
    /// `query`. Anything else is unprocessable.
    pub fn from_request_issues(issues: &ValidationIssues) -> Self {
        if issues.only_missing_fields()
            && let Some(first) = issues.iter().next()
        {
            return ApiError::BadRequest(format!("Missing {}", first.path));
        }
        if let Some(empty) = issues.find(IssueCode::TooSmall) {
            let message = capitalize(&empty.message);
            return if empty.path == "query" {
                ApiError::BadRequest(message)
            } else {
                ApiError::Unprocessable(message)
            };
        }
        ApiError::Unprocessable(issues.to_string())
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::Unprocessable(msg) => (StatusCode::UNPROCESSABLE_ENTITY, msg),
            ApiError::UseCase(err) => use_case_error_to_response(err),
            ApiError::Internal(msg) => {
                tracing::error!(error = %msg, "internal server error");
                (StatusCode::INTERNAL_SERVER_ERROR, msg)
            }
        };

        let body = serde_json::json!({ "error": message });
        (status, axum::Json(body)).into_response()
    }
}

fn use_case_error_to_response(err: UseCaseError) -> (StatusCode, String) {
    match &err {
        UseCaseError::Validation(_) => (StatusCode::UNPROCESSABLE_ENTITY, err.to_string()),
        UseCaseError::NotFound { .. } => (StatusCode::NOT_FOUND, err.to_string()),
        UseCaseError::Repository(_) | UseCaseError::Planner(_) => {
            tracing::error!(error = %err, "use case failed");
            (StatusCode::INTERNAL_SERVER_ERROR, err.to_string())
        }
    }
}

impl From<UseCaseError> for ApiError {
    fn from(err: UseCaseError) -> Self {
        ApiError::UseCase(err)
    }
}
