//! Route handlers, one module per resource.

pub mod explore;
pub mod itineraries;
pub mod system;
pub mod trips;
