use async_trait::async_trait;
use domain::{Itinerary, MyTripCard, PublicPlanCard, Trip};

use crate::Result;

/// Storage contract for itineraries.
///
/// Implementations must never hand out storage shared with the caller: `save`
/// stores its own copy and every read returns a fresh one.
#[async_trait]
pub trait ItineraryRepository: Send + Sync {
    /// Stores a copy of `itinerary` under its id, replacing any previous value.
    async fn save(&self, itinerary: &Itinerary) -> Result<()>;

    /// Returns a copy of the itinerary stored under `id`, or `None`.
    async fn find_by_id(&self, id: &str) -> Result<Option<Itinerary>>;

    /// Derives a public card for every stored itinerary.
    async fn find_public(&self) -> Result<Vec<PublicPlanCard>>;
}

/// Storage contract for the user's saved trips.
#[async_trait]
pub trait TripsRepository: Send + Sync {
    /// Stores a copy of `trip` under its id, replacing any previous value.
    async fn save(&self, trip: &Trip) -> Result<()>;

    /// Returns a card for every stored trip.
    async fn list(&self) -> Result<Vec<MyTripCard>>;

    /// Removes the trip stored under `id`.
    ///
    /// Returns true if a trip existed and was removed. Deleting an unknown id
    /// is not an error.
    async fn delete(&self, id: &str) -> Result<bool>;
}
