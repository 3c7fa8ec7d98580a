//! Segment kinds and helpers.

use serde_json::{Number, Value};

use crate::contracts::Segment;
use crate::error::DomainError;
use crate::schema::validate;

/// The four segment variants, without their payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SegmentKind {
    Poi,
    Move,
    Meal,
    Buffer,
}

impl SegmentKind {
    /// Returns the wire tag of the kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            SegmentKind::Poi => "poi",
            SegmentKind::Move => "move",
            SegmentKind::Meal => "meal",
            SegmentKind::Buffer => "buffer",
        }
    }
}

impl std::fmt::Display for SegmentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Segment {
    pub fn kind(&self) -> SegmentKind {
        match self {
            Segment::Poi { .. } => SegmentKind::Poi,
            Segment::Move { .. } => SegmentKind::Move,
            Segment::Meal { .. } => SegmentKind::Meal,
            Segment::Buffer { .. } => SegmentKind::Buffer,
        }
    }

    pub fn is_poi(&self) -> bool {
        matches!(self, Segment::Poi { .. })
    }

    pub fn is_move(&self) -> bool {
        matches!(self, Segment::Move { .. })
    }

    pub fn is_meal(&self) -> bool {
        matches!(self, Segment::Meal { .. })
    }

    pub fn is_buffer(&self) -> bool {
        matches!(self, Segment::Buffer { .. })
    }

    /// Minutes this segment occupies, when known.
    pub fn minutes(&self) -> Option<f64> {
        match self {
            Segment::Poi { stay_min, .. } | Segment::Meal { stay_min, .. } => stay_min.as_ref(),
            Segment::Move { eta_min, .. } => eta_min.as_ref(),
            Segment::Buffer { min } => Some(min),
        }
        .and_then(Number::as_f64)
    }
}

/// Validates untrusted input as a single segment.
pub fn validate_segment(input: &Value) -> Result<Segment, DomainError> {
    Ok(validate::<Segment>(input)?)
}
