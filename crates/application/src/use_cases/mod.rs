//! One function per use case.
//!
//! Each takes the [`Repositories`](repository::Repositories) bundle plus its
//! input and, where behaviour would otherwise depend on the environment, an
//! injected capability (planner, id generator or clock).

mod itineraries;
mod trips;

pub use itineraries::{CreatedItinerary, create_itinerary, get_itinerary, get_public_plans};
pub use trips::{add_trip, delete_trip, list_trips};

#[cfg(test)]
pub(crate) mod testing;
