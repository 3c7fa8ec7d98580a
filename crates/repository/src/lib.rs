//! Storage boundary for the travel planner.
//!
//! Use cases depend only on the [`ItineraryRepository`] and
//! [`TripsRepository`] ports. This crate also ships the process-lifetime
//! in-memory implementations and decorators for injecting storage faults in
//! tests.

pub mod error;
pub mod faulty;
pub mod memory;
pub mod ports;
pub mod provider;
mod table;

pub use error::{RepositoryError, Result};
pub use faulty::{FaultyItineraryRepository, FaultyTripsRepository, Operation};
pub use memory::{InMemoryItineraryRepository, InMemoryTripsRepository};
pub use ports::{ItineraryRepository, TripsRepository};
pub use provider::Repositories;
