//! The user's saved trips.

use std::sync::Arc;

use axum::Json;
use axum::extract::{Path, State};
use common::ITINERARY_ID_PREFIX;
use domain::{MyTripCard, MyTripCardRecord, SaveTripRequest};
use serde::Serialize;

use crate::AppState;
use crate::error::ApiError;
use crate::extract::ValidatedJson;

#[derive(Debug, Serialize)]
pub struct OkResponse {
    pub ok: bool,
}

/// GET /api/my-trips
#[tracing::instrument(skip(state))]
pub async fn list(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<MyTripCardRecord>>, ApiError> {
    let cards = state.service.list_trips().await?;
    Ok(Json(cards.iter().map(MyTripCard::to_json).collect()))
}

/// POST /api/my-trips: save an itinerary to the user's trips.
#[tracing::instrument(skip(state, req))]
pub async fn add(
    State(state): State<Arc<AppState>>,
    ValidatedJson(req): ValidatedJson<SaveTripRequest>,
) -> Result<Json<MyTripCardRecord>, ApiError> {
    let card = state.service.add_trip(&req).await?;
    Ok(Json(card.to_json()))
}

/// DELETE /api/my-trips/{id}
#[tracing::instrument(skip(state))]
pub async fn remove(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<OkResponse>, ApiError> {
    if !id.starts_with(ITINERARY_ID_PREFIX) {
        return Err(ApiError::BadRequest("Invalid trip ID format".to_string()));
    }

    if !state.service.delete_trip(&id).await? {
        return Err(ApiError::NotFound("Trip not found".to_string()));
    }
    Ok(Json(OkResponse { ok: true }))
}
