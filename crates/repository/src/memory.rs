use async_trait::async_trait;
use domain::{Itinerary, MyTripCard, PublicPlanCard, Trip};

use crate::Result;
use crate::ports::{ItineraryRepository, TripsRepository};
use crate::table::Table;

/// In-memory itinerary store for the lifetime of the process.
///
/// Cloning the repository yields another handle to the same rows.
#[derive(Debug, Clone, Default)]
pub struct InMemoryItineraryRepository {
    itineraries: Table<Itinerary>,
}

impl InMemoryItineraryRepository {
    /// Creates a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of stored itineraries.
    pub async fn len(&self) -> usize {
        self.itineraries.len().await
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }

    /// Removes every stored itinerary.
    pub async fn clear(&self) {
        self.itineraries.clear().await;
    }
}

#[async_trait]
impl ItineraryRepository for InMemoryItineraryRepository {
    async fn save(&self, itinerary: &Itinerary) -> Result<()> {
        self.itineraries.put(itinerary.id(), itinerary).await;
        tracing::debug!(id = itinerary.id(), "itinerary saved");
        Ok(())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Itinerary>> {
        Ok(self.itineraries.get(id).await)
    }

    async fn find_public(&self) -> Result<Vec<PublicPlanCard>> {
        Ok(self.itineraries.map(Itinerary::public_card).await)
    }
}

/// In-memory store of the user's saved trips.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTripsRepository {
    trips: Table<Trip>,
}

impl InMemoryTripsRepository {
    /// Creates a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of stored trips.
    pub async fn len(&self) -> usize {
        self.trips.len().await
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }

    /// Removes every stored trip.
    pub async fn clear(&self) {
        self.trips.clear().await;
    }
}

#[async_trait]
impl TripsRepository for InMemoryTripsRepository {
    async fn save(&self, trip: &Trip) -> Result<()> {
        self.trips.put(trip.id(), trip).await;
        tracing::debug!(id = trip.id(), "trip saved");
        Ok(())
    }

    async fn list(&self) -> Result<Vec<MyTripCard>> {
        Ok(self.trips.map(Trip::card).await)
    }

    async fn delete(&self, id: &str) -> Result<bool> {
        let removed = self.trips.remove(id).await;
        tracing::debug!(id, removed, "trip delete");
        Ok(removed)
    }
}
