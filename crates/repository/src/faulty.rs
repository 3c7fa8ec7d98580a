//! Decorators that make any repository fail on demand.
//!
//! Intended for tests that need to observe how callers react to storage
//! failures. Wrap a real implementation, arm the operations that should
//! fail, and hand the wrapper to the code under test.

use std::collections::HashSet;
use std::sync::{Arc, Mutex, PoisonError};

use async_trait::async_trait;
use domain::{Itinerary, MyTripCard, PublicPlanCard, Trip};

use crate::ports::{ItineraryRepository, TripsRepository};
use crate::{RepositoryError, Result};

/// A repository operation that can be made to fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Save,
    FindById,
    FindPublic,
    List,
    Delete,
}

impl Operation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Operation::Save => "save",
            Operation::FindById => "find_by_id",
            Operation::FindPublic => "find_public",
            Operation::List => "list",
            Operation::Delete => "delete",
        }
    }
}

#[derive(Debug, Clone, Default)]
struct Faults {
    armed: Arc<Mutex<HashSet<Operation>>>,
}

impl Faults {
    fn set(&self, operation: Operation, fail: bool) {
        let mut armed = self.armed.lock().unwrap_or_else(PoisonError::into_inner);
        if fail {
            armed.insert(operation);
        } else {
            armed.remove(&operation);
        }
    }

    fn check(&self, operation: Operation) -> Result<()> {
        let armed = self.armed.lock().unwrap_or_else(PoisonError::into_inner);
        if armed.contains(&operation) {
            tracing::warn!(operation = operation.as_str(), "injected repository failure");
            return Err(RepositoryError::Unavailable {
                operation: operation.as_str(),
                reason: "Database connection failed".to_string(),
            });
        }
        Ok(())
    }
}

/// Itinerary repository wrapper that fails armed operations.
#[derive(Debug, Clone)]
pub struct FaultyItineraryRepository<R> {
    inner: R,
    faults: Faults,
}

impl<R: ItineraryRepository> FaultyItineraryRepository<R> {
    /// Wraps `inner`; nothing fails until armed.
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            faults: Faults::default(),
        }
    }

    /// Makes `operation` fail (or succeed again) from now on.
    pub fn set_fail_on(&self, operation: Operation, fail: bool) {
        self.faults.set(operation, fail);
    }

    pub fn inner(&self) -> &R {
        &self.inner
    }
}

#[async_trait]
impl<R: ItineraryRepository> ItineraryRepository for FaultyItineraryRepository<R> {
    async fn save(&self, itinerary: &Itinerary) -> Result<()> {
        self.faults.check(Operation::Save)?;
        self.inner.save(itinerary).await
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Itinerary>> {
        self.faults.check(Operation::FindById)?;
        self.inner.find_by_id(id).await
    }

    async fn find_public(&self) -> Result<Vec<PublicPlanCard>> {
        self.faults.check(Operation::FindPublic)?;
        self.inner.find_public().await
    }
}

/// Trips repository wrapper that fails armed operations.
#[derive(Debug, Clone)]
pub struct FaultyTripsRepository<R> {
    inner: R,
    faults: Faults,
}

impl<R: TripsRepository> FaultyTripsRepository<R> {
    /// Wraps `inner`; nothing fails until armed.
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            faults: Faults::default(),
        }
    }

    /// Makes `operation` fail (or succeed again) from now on.
    pub fn set_fail_on(&self, operation: Operation, fail: bool) {
        self.faults.set(operation, fail);
    }

    pub fn inner(&self) -> &R {
        &self.inner
    }
}

#[async_trait]
impl<R: TripsRepository> TripsRepository for FaultyTripsRepository<R> {
    async fn save(&self, trip: &Trip) -> Result<()> {
        self.faults.check(Operation::Save)?;
        self.inner.save(trip).await
    }

    async fn list(&self) -> Result<Vec<MyTripCard>> {
        self.faults.check(Operation::List)?;
        self.inner.list().await
    }

    async fn delete(&self, id: &str) -> Result<bool> {
        self.faults.check(Operation::Delete)?;
        self.inner.delete(id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::{InMemoryItineraryRepository, InMemoryTripsRepository};
    use serde_json::json;

    fn trip() -> Trip {
        Trip::create(&json!({
            "id": "trip_1", "title": "My Trip", "createdAt": "2024-01-15T12:00:00.000Z"
        }))
        .unwrap()
    }

    #[tokio::test]
    async fn passes_through_until_armed() {
        let repo = FaultyTripsRepository::new(InMemoryTripsRepository::new());
        repo.save(&trip()).await.unwrap();
        assert_eq!(repo.list().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn armed_save_fails_without_storing() {
        let repo = FaultyTripsRepository::new(InMemoryTripsRepository::new());
        repo.set_fail_on(Operation::Save, true);

        let err = repo.save(&trip()).await.unwrap_err();
        assert_eq!(
            err,
            RepositoryError::Unavailable {
                operation: "save",
                reason: "Database connection failed".to_string(),
            }
        );
        assert!(repo.inner().is_empty().await);
    }

    #[tokio::test]
    async fn disarming_restores_operation() {
        let repo = FaultyTripsRepository::new(InMemoryTripsRepository::new());
        repo.set_fail_on(Operation::List, true);
        assert!(repo.list().await.is_err());
        repo.set_fail_on(Operation::List, false);
        assert!(repo.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn only_armed_operation_fails() {
        let repo = FaultyItineraryRepository::new(InMemoryItineraryRepository::new());
        repo.set_fail_on(Operation::FindPublic, true);

        assert!(repo.find_by_id("anything").await.unwrap().is_none());
        assert!(matches!(
            repo.find_public().await,
            Err(RepositoryError::Unavailable { operation: "find_public", .. })
        ));
    }

    #[tokio::test]
    async fn clones_share_fault_state() {
        let repo = FaultyTripsRepository::new(InMemoryTripsRepository::new());
        let handle = repo.clone();
        handle.set_fail_on(Operation::Delete, true);
        assert!(repo.delete("trip_1").await.is_err());
    }
}
