//! Itinerary planning.
//!
//! A [`Planner`] turns a free-text query into raw itinerary JSON. Its output
//! is untrusted: callers validate it through `Itinerary::create` before it
//! reaches a repository.

use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

use async_trait::async_trait;
use chrono::{Days, NaiveDate};
use common::query_hash;
use domain::Itinerary;
use serde_json::{Value, json};

use crate::error::PlannerError;

/// Timestamp stamped on every stub itinerary.
pub const STUB_CREATED_AT: &str = "2024-01-01T00:00:00.000Z";

const TITLE_QUERY_CHARS: usize = 50;
const MAX_DAYS: u32 = 3;

/// Produces itineraries from user queries.
#[async_trait]
pub trait Planner: Send + Sync {
    /// Plans an itinerary for `query` that will be stored under `id`.
    async fn plan(&self, query: &str, id: &str) -> Result<Value, PlannerError>;
}

/// Deterministic planner used until a real one is wired in.
///
/// The same query always yields the same plan: one to three days starting
/// 2024-03-01, each with a visit and a meal. Plans are cached per query.
/// If a generated plan would not validate, a one-day template is returned
/// (and cached) instead.
///
/// The cache is never evicted: it holds one entry per distinct query for as
/// long as the planner (and its clones) live.
#[derive(Debug, Clone, Default)]
pub struct PlannerStub {
    cache: Arc<RwLock<HashMap<String, Value>>>,
}

impl PlannerStub {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of queries with a cached plan.
    pub fn cached(&self) -> usize {
        self.cache
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    fn generate(query: &str, id: &str) -> Value {
        let day_count = 1 + query_hash(query).unsigned_abs() % MAX_DAYS;
        let start = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap_or_default();

        let days: Vec<Value> = (0..day_count)
            .map(|i| {
                let date = start
                    .checked_add_days(Days::new(u64::from(i)))
                    .unwrap_or(start);
                let n = i + 1;
                json!({
                    "date": date.format("%Y-%m-%d").to_string(),
                    "segments": [
                        {"type": "poi", "name": format!("Location {n}"), "stayMin": 120},
                        {"type": "meal", "name": format!("Restaurant {n}"), "stayMin": 60}
                    ]
                })
            })
            .collect();

        json!({
            "id": id,
            "createdAt": STUB_CREATED_AT,
            "title": title_for(query),
            "sourceQuery": query,
            "days": days
        })
    }

    fn fallback(query: &str, id: &str) -> Value {
        json!({
            "id": id,
            "createdAt": STUB_CREATED_AT,
            "title": title_for(query),
            "sourceQuery": query,
            "days": [{
                "date": "2024-01-01",
                "segments": [
                    {"type": "poi", "name": "Default Location", "stayMin": 120},
                    {"type": "meal", "name": "Default Restaurant", "stayMin": 60}
                ]
            }]
        })
    }
}

fn title_for(query: &str) -> String {
    let head: String = query.chars().take(TITLE_QUERY_CHARS).collect();
    format!("Trip: {head}")
}

#[async_trait]
impl Planner for PlannerStub {
    #[tracing::instrument(skip(self))]
    async fn plan(&self, query: &str, id: &str) -> Result<Value, PlannerError> {
        let cached = self
            .cache
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(query)
            .cloned();
        if let Some(mut plan) = cached {
            tracing::debug!("planner cache hit");
            plan["id"] = Value::from(id);
            return Ok(plan);
        }

        let mut plan = Self::generate(query, id);
        if let Err(e) = Itinerary::create(&plan) {
            tracing::warn!(error = %e, "generated plan rejected, using fallback template");
            plan = Self::fallback(query, id);
        }

        self.cache
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(query.to_string(), plan.clone());
        Ok(plan)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn same_query_yields_same_plan() {
        let planner = PlannerStub::new();
        let first = planner.plan("3 days in Tokyo", "itinerary_x").await.unwrap();
        let second = planner.plan("3 days in Tokyo", "itinerary_x").await.unwrap();
        assert_eq!(first, second);
        assert_eq!(planner.cached(), 1);
    }

    #[tokio::test]
    async fn cache_keeps_one_entry_per_distinct_query() {
        let planner = PlannerStub::new();
        let handle = planner.clone();
        planner.plan("Paris", "itinerary_a").await.unwrap();
        planner.plan("Rome", "itinerary_b").await.unwrap();
        planner.plan("Paris", "itinerary_a").await.unwrap();
        assert_eq!(handle.cached(), 2);
    }

    #[tokio::test]
    async fn plan_is_a_valid_itinerary() {
        let planner = PlannerStub::new();
        let plan = planner.plan("Weekend in Kyoto", "itinerary_k").await.unwrap();
        let itinerary = Itinerary::create(&plan).unwrap();

        assert_eq!(itinerary.id(), "itinerary_k");
        assert_eq!(itinerary.title(), "Trip: Weekend in Kyoto");
        assert_eq!(itinerary.source_query(), "Weekend in Kyoto");
        assert_eq!(itinerary.created_at(), STUB_CREATED_AT);
        assert!((1..=3).contains(&itinerary.day_count()));
    }

    #[tokio::test]
    async fn day_count_follows_query_hash() {
        // "ab" hashes to 3105; 3105 % 3 == 0
        let planner = PlannerStub::new();
        let plan = planner.plan("ab", "itinerary_2e9").await.unwrap();
        let days = plan["days"].as_array().unwrap();
        assert_eq!(days.len(), 1);
        assert_eq!(days[0]["date"], "2024-03-01");
        assert_eq!(days[0]["segments"][0]["name"], "Location 1");
        assert_eq!(days[0]["segments"][1]["name"], "Restaurant 1");
    }

    #[tokio::test]
    async fn consecutive_days_are_dated_in_order() {
        // "b" hashes to 98; 98 % 3 == 2
        let planner = PlannerStub::new();
        let plan = planner.plan("b", "itinerary_b").await.unwrap();
        let dates: Vec<&str> = plan["days"]
            .as_array()
            .unwrap()
            .iter()
            .map(|day| day["date"].as_str().unwrap())
            .collect();
        assert_eq!(dates, ["2024-03-01", "2024-03-02", "2024-03-03"]);
    }

    #[tokio::test]
    async fn title_keeps_first_fifty_characters() {
        let query = "x".repeat(80);
        let planner = PlannerStub::new();
        let plan = planner.plan(&query, "itinerary_long").await.unwrap();
        assert_eq!(plan["title"], format!("Trip: {}", "x".repeat(50)));
        assert_eq!(plan["sourceQuery"], query);
    }

    #[tokio::test]
    async fn cached_plan_takes_the_requested_id() {
        let planner = PlannerStub::new();
        planner.plan("Paris", "itinerary_a").await.unwrap();
        let plan = planner.plan("Paris", "itinerary_b").await.unwrap();
        assert_eq!(plan["id"], "itinerary_b");
    }

    #[test]
    fn fallback_template_is_valid() {
        let itinerary = Itinerary::create(&PlannerStub::fallback("q", "itinerary_q")).unwrap();
        assert_eq!(itinerary.day_count(), 1);
        assert_eq!(itinerary.days()[0].date(), "2024-01-01");
    }
}
