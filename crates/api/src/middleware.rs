//! Forced-failure hook used by client tests.

use axum::extract::Request;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};

use crate::error::ApiError;

/// Header that forces a 500 when set to `internal`.
pub const MOCK_ERROR_HEADER: &str = "x-mock-error";

/// Answers 500 before any work when the request asks for it with
/// `x-mock-error: internal` or `?__mock=500`.
pub async fn mock_failure(req: Request, next: Next) -> Response {
    if wants_failure(&req) {
        return ApiError::Internal("Internal server error".to_string()).into_response();
    }
    next.run(req).await
}

fn wants_failure(req: &Request) -> bool {
    let by_header = req
        .headers()
        .get(MOCK_ERROR_HEADER)
        .and_then(|v| v.to_str().ok())
        == Some("internal");
    let by_query = req
        .uri()
        .query()
        .is_some_and(|q| q.split('&').any(|pair| pair == "__mock=500"));
    by_header || by_query
}
