//! Travel service providing the use cases behind one handle.

use std::sync::Arc;

use common::{Clock, HashIdGenerator, IdGenerator, SystemClock};
use domain::{CreateItineraryRequest, Itinerary, MyTripCard, PublicPlanCard, SaveTripRequest};
use repository::Repositories;

use crate::error::Result;
use crate::planner::{Planner, PlannerStub};
use crate::use_cases::{self, CreatedItinerary};

/// Binds the repositories to the planner, id generator and clock so
/// callers only pass request input.
///
/// This is the composition point for the injected capabilities; the use
/// case functions themselves never pick a default.
#[derive(Clone)]
pub struct TravelService {
    repos: Repositories,
    planner: Arc<dyn Planner>,
    ids: Arc<dyn IdGenerator>,
    clock: Arc<dyn Clock>,
}

impl TravelService {
    pub fn new(
        repos: Repositories,
        planner: Arc<dyn Planner>,
        ids: Arc<dyn IdGenerator>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            repos,
            planner,
            ids,
            clock,
        }
    }

    /// Stub planner, hash ids and the system clock over the given stores.
    pub fn with_defaults(repos: Repositories) -> Self {
        Self::new(
            repos,
            Arc::new(PlannerStub::new()),
            Arc::new(HashIdGenerator),
            Arc::new(SystemClock),
        )
    }

    /// Returns the underlying repositories.
    pub fn repositories(&self) -> &Repositories {
        &self.repos
    }

    pub async fn create_itinerary(
        &self,
        input: &CreateItineraryRequest,
    ) -> Result<CreatedItinerary> {
        use_cases::create_itinerary(&self.repos, input, self.planner.as_ref(), self.ids.as_ref())
            .await
    }

    pub async fn get_itinerary(&self, id: &str) -> Result<Itinerary> {
        use_cases::get_itinerary(&self.repos, id).await
    }

    pub async fn get_public_plans(&self) -> Result<Vec<PublicPlanCard>> {
        use_cases::get_public_plans(&self.repos).await
    }

    pub async fn list_trips(&self) -> Result<Vec<MyTripCard>> {
        use_cases::list_trips(&self.repos).await
    }

    pub async fn add_trip(&self, input: &SaveTripRequest) -> Result<MyTripCard> {
        use_cases::add_trip(&self.repos, input, self.clock.as_ref()).await
    }

    pub async fn delete_trip(&self, id: &str) -> Result<bool> {
        use_cases::delete_trip(&self.repos, id).await
    }
}

impl std::fmt::Debug for TravelService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TravelService")
            .field("repos", &self.repos)
            .finish_non_exhaustive()
    }
}
