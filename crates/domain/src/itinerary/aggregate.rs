//! The itinerary aggregate root.

use serde_json::Value;

use crate::cards::PublicPlanCard;
use crate::contracts::{ItineraryRecord, PublicPlanCardRecord};
use crate::error::DomainError;
use crate::schema::validate;

use super::Day;

/// Number of leading days summarized in a public card.
const HIGHLIGHT_DAYS: usize = 2;

/// A complete multi-day travel plan.
///
/// Invariants:
/// - `days` is never empty
/// - no field changes after construction; an "update" is a new itinerary
///   saved under the same id
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Itinerary {
    id: String,
    created_at: String,
    title: String,
    source_query: String,
    days: Vec<Day>,
}

impl Itinerary {
    /// Validates untrusted input and builds an itinerary from it.
    ///
    /// Fails with [`DomainError::Validation`] when the shape is wrong and with
    /// [`DomainError::EmptyItinerary`] when the shape is right but `days` is
    /// empty.
    pub fn create(input: &Value) -> Result<Self, DomainError> {
        let record: ItineraryRecord = validate(input)?;
        Self::try_from(record)
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// ISO-8601 creation timestamp.
    pub fn created_at(&self) -> &str {
        &self.created_at
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn source_query(&self) -> &str {
        &self.source_query
    }

    pub fn days(&self) -> &[Day] {
        &self.days
    }

    pub fn day_count(&self) -> usize {
        self.days.len()
    }

    /// Returns a fresh plain snapshot of the itinerary.
    pub fn to_json(&self) -> ItineraryRecord {
        ItineraryRecord {
            id: self.id.clone(),
            created_at: self.created_at.clone(),
            title: self.title.clone(),
            source_query: self.source_query.clone(),
            days: self.days.iter().map(Day::to_json).collect(),
        }
    }

    /// Summarizes the itinerary for public browsing.
    ///
    /// Duration is always `"<n> days"`, including `"1 days"`; highlights describe the first two
    /// days by their number of activities.
    pub fn public_card(&self) -> PublicPlanCard {
        let duration = format!("{} days", self.day_count());
        let highlights = self
            .days
            .iter()
            .take(HIGHLIGHT_DAYS)
            .map(|day| format!("Day {}: {} activities", day.date(), day.activity_count()))
            .collect();

        PublicPlanCard::from(PublicPlanCardRecord {
            id: self.id.clone(),
            title: self.title.clone(),
            thumbnail: None,
            duration: Some(duration),
            highlights: Some(highlights),
        })
    }
}

impl TryFrom<ItineraryRecord> for Itinerary {
    type Error = DomainError;

    fn try_from(record: ItineraryRecord) -> Result<Self, Self::Error> {
        if record.days.is_empty() {
            return Err(DomainError::EmptyItinerary);
        }
        Ok(Self {
            id: record.id,
            created_at: record.created_at,
            title: record.title,
            source_query: record.source_query,
            days: record.days.into_iter().map(Day::from).collect(),
        })
    }
}
