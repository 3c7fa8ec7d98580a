//! Composition of the repositories the use cases depend on.

use std::sync::Arc;

use crate::memory::{InMemoryItineraryRepository, InMemoryTripsRepository};
use crate::ports::{ItineraryRepository, TripsRepository};

/// The two logical tables of the application.
#[derive(Clone)]
pub struct Repositories {
    pub itineraries: Arc<dyn ItineraryRepository>,
    pub trips: Arc<dyn TripsRepository>,
}

impl Repositories {
    /// Bundles the given implementations.
    pub fn new(
        itineraries: Arc<dyn ItineraryRepository>,
        trips: Arc<dyn TripsRepository>,
    ) -> Self {
        Self { itineraries, trips }
    }

    /// Fresh, empty in-memory stores.
    pub fn in_memory() -> Self {
        Self::new(
            Arc::new(InMemoryItineraryRepository::new()),
            Arc::new(InMemoryTripsRepository::new()),
        )
    }
}

impl std::fmt::Debug for Repositories {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Repositories").finish_non_exhaustive()
    }
}
