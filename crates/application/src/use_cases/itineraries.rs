use common::IdGenerator;
use domain::{CreateItineraryRequest, Itinerary, PublicPlanCard};
use repository::Repositories;
use serde::{Deserialize, Serialize};

use crate::error::{Result, UseCaseError};
use crate::planner::Planner;

/// Result of [`create_itinerary`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatedItinerary {
    pub id: String,
}

/// Plans an itinerary for the query, stores it and returns its id.
///
/// The id comes from `ids` (seeded with the query) and is handed to the
/// planner. Planner output is validated before it is saved; planner and
/// repository failures propagate unchanged.
#[tracing::instrument(skip(repos, planner, ids))]
pub async fn create_itinerary(
    repos: &Repositories,
    input: &CreateItineraryRequest,
    planner: &dyn Planner,
    ids: &dyn IdGenerator,
) -> Result<CreatedItinerary> {
    let id = ids.next_id(&input.query);
    let plan = planner.plan(&input.query, &id).await?;
    let itinerary = Itinerary::create(&plan)?;

    repos.itineraries.save(&itinerary).await?;

    metrics::counter!("itineraries_created_total").increment(1);
    tracing::info!(id = itinerary.id(), days = itinerary.day_count(), "itinerary created");

    Ok(CreatedItinerary {
        id: itinerary.id().to_string(),
    })
}

/// Fetches one itinerary, failing with `NotFound` when it does not exist.
#[tracing::instrument(skip(repos))]
pub async fn get_itinerary(repos: &Repositories, id: &str) -> Result<Itinerary> {
    repos
        .itineraries
        .find_by_id(id)
        .await?
        .ok_or_else(|| UseCaseError::itinerary_not_found(id))
}

#[tracing::instrument(skip(repos))]
pub async fn get_public_plans(repos: &Repositories) -> Result<Vec<PublicPlanCard>> {
    Ok(repos.itineraries.find_public().await?)
}
