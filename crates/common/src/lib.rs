//! Capabilities injected into the travel planner core.
//!
//! The core never reads the wall clock or invents identifiers on its own;
//! callers hand it a [`Clock`] and an [`IdGenerator`]. Real implementations
//! are chosen at the outermost composition point.

pub mod clock;
pub mod ids;

pub use clock::{Clock, FixedClock, SystemClock, format_timestamp};
pub use ids::{HashIdGenerator, ITINERARY_ID_PREFIX, IdGenerator, UuidIdGenerator, query_hash};
