use thiserror::Error;

/// Errors that can occur when interacting with a repository.
///
/// The in-memory stores never produce these; they exist for backing stores
/// that can fail and for fault-injection in tests.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RepositoryError {
    /// The backing store could not complete the operation.
    #[error("Repository unavailable during {operation}: {reason}")]
    Unavailable {
        operation: &'static str,
        reason: String,
    },
}

/// Result type for repository operations.
pub type Result<T> = std::result::Result<T, RepositoryError>;
