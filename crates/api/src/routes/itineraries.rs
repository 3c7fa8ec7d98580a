//! Itinerary generation and lookup.

use std::sync::Arc;

use application::CreatedItinerary;
use axum::Json;
use axum::extract::{Path, State};
use domain::{CreateItineraryRequest, ItineraryRecord};

use crate::AppState;
use crate::error::ApiError;
use crate::extract::ValidatedJson;

/// POST /api/itineraries: plan and store an itinerary for a query.
#[tracing::instrument(skip(state, req))]
pub async fn create(
    State(state): State<Arc<AppState>>,
    ValidatedJson(req): ValidatedJson<CreateItineraryRequest>,
) -> Result<Json<CreatedItinerary>, ApiError> {
    let created = state.service.create_itinerary(&req).await?;
    Ok(Json(created))
}

/// GET /api/itineraries/{id}
#[tracing::instrument(skip(state))]
pub async fn get(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<ItineraryRecord>, ApiError> {
    let itinerary = state.service.get_itinerary(&id).await?;
    Ok(Json(itinerary.to_json()))
}
