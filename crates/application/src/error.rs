//! Use case error types.

use domain::DomainError;
use repository::RepositoryError;
use thiserror::Error;

/// Failure reported by a [`Planner`](crate::Planner).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlannerError {
    /// The planner could not produce an itinerary for the query.
    #[error("Planner failed: {0}")]
    Failed(String),
}

/// Errors that can occur while executing a use case.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UseCaseError {
    /// Input or planner output failed schema or domain checks.
    #[error(transparent)]
    Validation(#[from] DomainError),

    /// The requested record does not exist.
    #[error("{entity} {id} not found")]
    NotFound { entity: &'static str, id: String },

    /// The backing store failed.
    #[error(transparent)]
    Repository(#[from] RepositoryError),

    /// The planner failed.
    #[error(transparent)]
    Planner(#[from] PlannerError),
}

impl UseCaseError {
    pub(crate) fn itinerary_not_found(id: &str) -> Self {
        UseCaseError::NotFound {
            entity: "Itinerary",
            id: id.to_string(),
        }
    }
}

/// Convenience type alias for use case results.
pub type Result<T> = std::result::Result<T, UseCaseError>;
