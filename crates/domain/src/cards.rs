//! Card value objects shown in list views.

use serde_json::Value;

use crate::contracts::{MyTripCardRecord, PublicPlanCardRecord};
use crate::error::DomainError;
use crate::schema::validate;

/// Public, abbreviated summary of an itinerary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublicPlanCard {
    id: String,
    title: String,
    thumbnail: Option<String>,
    duration: Option<String>,
    highlights: Option<Vec<String>>,
}

impl PublicPlanCard {
    /// Validates untrusted input and builds a card from it.
    pub fn create(input: &Value) -> Result<Self, DomainError> {
        let record: PublicPlanCardRecord = validate(input)?;
        Ok(Self::from(record))
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn thumbnail(&self) -> Option<&str> {
        self.thumbnail.as_deref()
    }

    /// Display string such as `3 days`.
    pub fn duration(&self) -> Option<&str> {
        self.duration.as_deref()
    }

    pub fn highlights(&self) -> Option<&[String]> {
        self.highlights.as_deref()
    }

    /// Returns a fresh plain snapshot of the card.
    pub fn to_json(&self) -> PublicPlanCardRecord {
        PublicPlanCardRecord {
            id: self.id.clone(),
            title: self.title.clone(),
            thumbnail: self.thumbnail.clone(),
            duration: self.duration.clone(),
            highlights: self.highlights.clone(),
        }
    }
}

impl From<PublicPlanCardRecord> for PublicPlanCard {
    fn from(record: PublicPlanCardRecord) -> Self {
        Self {
            id: record.id,
            title: record.title,
            thumbnail: record.thumbnail,
            duration: record.duration,
            highlights: record.highlights,
        }
    }
}

/// A saved trip as listed in the user's personal collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MyTripCard {
    id: String,
    title: String,
    created_at: String,
    thumbnail: Option<String>,
}

impl MyTripCard {
    /// Validates untrusted input and builds a card from it.
    pub fn create(input: &Value) -> Result<Self, DomainError> {
        let record: MyTripCardRecord = validate(input)?;
        Ok(Self::from(record))
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn created_at(&self) -> &str {
        &self.created_at
    }

    pub fn thumbnail(&self) -> Option<&str> {
        self.thumbnail.as_deref()
    }

    /// Returns a fresh plain snapshot of the card.
    pub fn to_json(&self) -> MyTripCardRecord {
        MyTripCardRecord {
            id: self.id.clone(),
            title: self.title.clone(),
            created_at: self.created_at.clone(),
            thumbnail: self.thumbnail.clone(),
        }
    }
}

impl From<MyTripCardRecord> for MyTripCard {
    fn from(record: MyTripCardRecord) -> Self {
        Self {
            id: record.id,
            title: record.title,
            created_at: record.created_at,
            thumbnail: record.thumbnail,
        }
    }
}
