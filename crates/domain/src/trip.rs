//! Saved trip entity.

use serde_json::Value;

use crate::cards::MyTripCard;
use crate::contracts::MyTripCardRecord;
use crate::error::DomainError;

/// A user's saved reference to a generated itinerary.
///
/// Created when an itinerary is added to the user's trips and removed by id.
/// A trip carries exactly the data of its list card, so it is stored as one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Trip {
    card: MyTripCard,
}

impl Trip {
    /// Validates untrusted input and builds a trip from it.
    pub fn create(input: &Value) -> Result<Self, DomainError> {
        Ok(Self {
            card: MyTripCard::create(input)?,
        })
    }

    pub fn id(&self) -> &str {
        self.card.id()
    }

    pub fn title(&self) -> &str {
        self.card.title()
    }

    pub fn created_at(&self) -> &str {
        self.card.created_at()
    }

    pub fn thumbnail(&self) -> Option<&str> {
        self.card.thumbnail()
    }

    /// Returns a fresh plain snapshot of the trip.
    pub fn to_json(&self) -> MyTripCardRecord {
        self.card.to_json()
    }

    /// The list-view card for this trip.
    pub fn card(&self) -> MyTripCard {
        self.card.clone()
    }
}

impl From<MyTripCardRecord> for Trip {
    fn from(record: MyTripCardRecord) -> Self {
        Self {
            card: MyTripCard::from(record),
        }
    }
}
