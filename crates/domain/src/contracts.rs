//! Plain wire records.
//!
//! These are the shapes produced by the schema validator and returned by the
//! entities' `to_json` snapshots. Field names follow the JSON contract
//! (camelCase); optional fields are omitted when absent.

use serde::{Deserialize, Serialize};
use serde_json::Number;

/// Transport mode of a [`Segment::Move`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TravelMode {
    Walk,
    Bus,
    Train,
}

impl TravelMode {
    /// All accepted modes, in wire order.
    pub const ALL: [TravelMode; 3] = [TravelMode::Walk, TravelMode::Bus, TravelMode::Train];

    /// Returns the wire name of the mode.
    pub fn as_str(&self) -> &'static str {
        match self {
            TravelMode::Walk => "walk",
            TravelMode::Bus => "bus",
            TravelMode::Train => "train",
        }
    }
}

impl std::fmt::Display for TravelMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One atomic activity within a day, discriminated by its `type` tag.
///
/// Minute counts keep the JSON number exactly as given (any sign, integer or
/// fractional), so a segment serializes back to the same value it came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase", rename_all_fields = "camelCase")]
pub enum Segment {
    /// A point of interest visit.
    Poi {
        name: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        stay_min: Option<Number>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        note: Option<String>,
    },
    /// Transit between two places.
    Move {
        from: String,
        to: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        mode: Option<TravelMode>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        eta_min: Option<Number>,
    },
    /// A meal stop.
    Meal {
        name: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        stay_min: Option<Number>,
    },
    /// Idle time, in minutes.
    Buffer { min: Number },
}

/// One calendar day of an itinerary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayRecord {
    /// `YYYY-MM-DD`; not checked beyond being a string.
    pub date: String,
    pub segments: Vec<Segment>,
}

/// A full multi-day plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItineraryRecord {
    pub id: String,
    /// ISO-8601 timestamp.
    pub created_at: String,
    pub title: String,
    /// The free-text request the plan was generated from.
    pub source_query: String,
    pub days: Vec<DayRecord>,
}

/// Public summary of an itinerary, for browsing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicPlanCardRecord {
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub highlights: Option<Vec<String>>,
}

/// A user's saved trip as shown in their list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MyTripCardRecord {
    pub id: String,
    pub title: String,
    pub created_at: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
}

/// Body of a request to generate an itinerary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateItineraryRequest {
    pub query: String,
}

/// Body of a request to add an itinerary to the user's trips.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaveTripRequest {
    pub id: String,
    pub title: String,
}
