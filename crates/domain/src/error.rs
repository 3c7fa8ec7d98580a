//! Domain error types.

use thiserror::Error;

use crate::schema::ValidationIssues;

/// Errors raised while constructing domain values.
///
/// Both variants are validation failures: the input was rejected and nothing
/// was constructed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// The input did not match the declared schema.
    #[error(transparent)]
    Validation(#[from] ValidationIssues),

    /// An itinerary was given an empty list of days.
    #[error("Itinerary must have at least one day")]
    EmptyItinerary,
}

impl DomainError {
    /// Returns the schema issues, if this is a schema failure.
    pub fn issues(&self) -> Option<&ValidationIssues> {
        match self {
            DomainError::Validation(issues) => Some(issues),
            DomainError::EmptyItinerary => None,
        }
    }
}
