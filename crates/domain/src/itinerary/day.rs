use serde_json::Value;

use crate::contracts::{DayRecord, Segment};
use crate::error::DomainError;
use crate::schema::validate;

/// One calendar day within an itinerary.
///
/// Owns its segments; nothing outside can change them after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Day {
    date: String,
    segments: Vec<Segment>,
}

impl Day {
    /// Validates untrusted input and builds a day from it.
    pub fn create(input: &Value) -> Result<Self, DomainError> {
        let record: DayRecord = validate(input)?;
        Ok(Self::from(record))
    }

    pub fn date(&self) -> &str {
        &self.date
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Number of segments planned for the day.
    pub fn activity_count(&self) -> usize {
        self.segments.len()
    }

    /// Returns a fresh plain snapshot of the day.
    pub fn to_json(&self) -> DayRecord {
        DayRecord {
            date: self.date.clone(),
            segments: self.segments.clone(),
        }
    }
}

impl From<DayRecord> for Day {
    fn from(record: DayRecord) -> Self {
        Self {
            date: record.date,
            segments: record.segments,
        }
    }
}
