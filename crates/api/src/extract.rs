//! Request body extraction through the schema validator.

use axum::body::Bytes;
use axum::extract::{FromRequest, Request};
use domain::{Schema, validate};
use serde_json::Value;

use crate::error::ApiError;

/// JSON body validated against `T`'s schema.
///
/// Unparseable JSON is rejected as unprocessable; schema violations are
/// classified by [`ApiError::from_request_issues`]. The content type is not
/// checked.
#[derive(Debug)]
pub struct ValidatedJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    S: Send + Sync,
    T: Schema + Send,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|e| ApiError::BadRequest(e.body_text()))?;

        let raw: Value = serde_json::from_slice(&bytes)
            .map_err(|_| ApiError::Unprocessable("Invalid JSON body".to_string()))?;

        validate::<T>(&raw)
            .map(ValidatedJson)
            .map_err(|issues| ApiError::from_request_issues(&issues))
    }
}
