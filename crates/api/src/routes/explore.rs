//! Public plan browsing.

use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use domain::{PublicPlanCard, PublicPlanCardRecord};

use crate::AppState;
use crate::error::ApiError;

/// GET /api/explore: summary cards of every stored itinerary.
#[tracing::instrument(skip(state))]
pub async fn list(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<PublicPlanCardRecord>>, ApiError> {
    let cards = state.service.get_public_plans().await?;
    Ok(Json(cards.iter().map(PublicPlanCard::to_json).collect()))
}
