//! Domain layer for the travel planner.
//!
//! This crate provides:
//! - Plain wire records (`contracts`) shared with every outer layer
//! - A schema validator turning untyped JSON into those records
//! - Immutable entities built only through validating factories:
//!   [`Itinerary`], [`Day`], [`Trip`], [`PublicPlanCard`], [`MyTripCard`]

pub mod cards;
pub mod contracts;
pub mod error;
pub mod itinerary;
pub mod schema;
pub mod trip;

pub use cards::{MyTripCard, PublicPlanCard};
pub use contracts::{
    CreateItineraryRequest, DayRecord, ItineraryRecord, MyTripCardRecord, PublicPlanCardRecord,
    SaveTripRequest, Segment, TravelMode,
};
pub use error::DomainError;
pub use itinerary::{Day, Itinerary, SegmentKind, validate_segment};
pub use schema::{IssueCode, Schema, SchemaKind, ValidationIssue, ValidationIssues, validate};
pub use trip::Trip;
