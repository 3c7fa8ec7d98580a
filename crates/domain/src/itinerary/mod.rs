//! Itinerary aggregate and its parts.

mod aggregate;
mod day;
mod segment;

pub use aggregate::Itinerary;
pub use day::Day;
pub use segment::{SegmentKind, validate_segment};
