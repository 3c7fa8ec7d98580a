//! Application layer for the travel planner.
//!
//! Use cases orchestrate the domain entities and repository ports:
//! creating and fetching itineraries, browsing public plans, and managing
//! the user's saved trips. [`TravelService`] bundles them with their
//! injected planner, id generator and clock.

pub mod error;
pub mod planner;
pub mod service;
pub mod use_cases;

pub use error::{PlannerError, Result, UseCaseError};
pub use planner::{Planner, PlannerStub, STUB_CREATED_AT};
pub use service::TravelService;
pub use use_cases::{
    CreatedItinerary, add_trip, create_itinerary, delete_trip, get_itinerary, get_public_plans,
    list_trips,
};
