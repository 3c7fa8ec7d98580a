//! Test doubles for the use case tests.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use common::IdGenerator;
use domain::{Itinerary, MyTripCard, PublicPlanCard, Trip};
use repository::{ItineraryRepository, Repositories, Result, TripsRepository};
use serde_json::Value;

use crate::{Planner, PlannerError};

/// Records every saved entity; reads always come back empty.
#[derive(Debug, Clone, Default)]
pub struct Recorder {
    itineraries: Arc<Mutex<Vec<Itinerary>>>,
    trips: Arc<Mutex<Vec<Trip>>>,
}

impl Recorder {
    pub fn saved_itineraries(&self) -> Vec<Itinerary> {
        self.itineraries.lock().unwrap().clone()
    }

    pub fn saved_trips(&self) -> Vec<Trip> {
        self.trips.lock().unwrap().clone()
    }
}

#[async_trait]
impl ItineraryRepository for Recorder {
    async fn save(&self, itinerary: &Itinerary) -> Result<()> {
        self.itineraries.lock().unwrap().push(itinerary.clone());
        Ok(())
    }

    async fn find_by_id(&self, _id: &str) -> Result<Option<Itinerary>> {
        Ok(None)
    }

    async fn find_public(&self) -> Result<Vec<PublicPlanCard>> {
        Ok(Vec::new())
    }
}

#[async_trait]
impl TripsRepository for Recorder {
    async fn save(&self, trip: &Trip) -> Result<()> {
        self.trips.lock().unwrap().push(trip.clone());
        Ok(())
    }

    async fn list(&self) -> Result<Vec<MyTripCard>> {
        Ok(Vec::new())
    }

    async fn delete(&self, _id: &str) -> Result<bool> {
        Ok(false)
    }
}

pub fn recording() -> (Repositories, Recorder) {
    let recorder = Recorder::default();
    let repos = Repositories::new(Arc::new(recorder.clone()), Arc::new(recorder.clone()));
    (repos, recorder)
}

/// Returns the same plan for every query and records its arguments.
#[derive(Debug, Default)]
pub struct FixedPlanner {
    plan: Value,
    calls: Mutex<Vec<(String, String)>>,
}

impl FixedPlanner {
    pub fn new(plan: Value) -> Self {
        Self {
            plan,
            calls: Mutex::default(),
        }
    }

    pub fn calls(&self) -> Vec<(String, String)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl Planner for FixedPlanner {
    async fn plan(&self, query: &str, id: &str) -> std::result::Result<Value, PlannerError> {
        self.calls
            .lock()
            .unwrap()
            .push((query.to_string(), id.to_string()));
        Ok(self.plan.clone())
    }
}

pub struct FailingPlanner;

#[async_trait]
impl Planner for FailingPlanner {
    async fn plan(&self, _query: &str, _id: &str) -> std::result::Result<Value, PlannerError> {
        Err(PlannerError::Failed("Planner failed".to_string()))
    }
}

pub struct FixedIds(pub &'static str);

impl IdGenerator for FixedIds {
    fn next_id(&self, _seed: &str) -> String {
        self.0.to_string()
    }
}
