//! Schema validation for untyped input.
//!
//! [`validate`] is the single gate between untrusted JSON and the typed
//! records in [`crate::contracts`]. It walks the whole input, collects every
//! problem as a `(path, reason)` pair and only deserializes once the input is
//! known to be well formed.

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use thiserror::Error;

use common::ITINERARY_ID_PREFIX;

use crate::contracts::{
    CreateItineraryRequest, DayRecord, ItineraryRecord, MyTripCardRecord, PublicPlanCardRecord,
    SaveTripRequest, Segment,
};

const SEGMENT_TAGS: [&str; 4] = ["poi", "move", "meal", "buffer"];
const TRAVEL_MODES: [&str; 3] = ["walk", "bus", "train"];

/// Names every shape the validator knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SchemaKind {
    Segment,
    Day,
    Itinerary,
    PublicPlanCard,
    MyTripCard,
    CreateItineraryRequest,
    SaveTripRequest,
}

impl SchemaKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            SchemaKind::Segment => "segment",
            SchemaKind::Day => "day",
            SchemaKind::Itinerary => "itinerary",
            SchemaKind::PublicPlanCard => "public plan card",
            SchemaKind::MyTripCard => "trip card",
            SchemaKind::CreateItineraryRequest => "create itinerary request",
            SchemaKind::SaveTripRequest => "save trip request",
        }
    }
}

impl std::fmt::Display for SchemaKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Category of a single validation problem.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IssueCode {
    /// A required field is absent.
    Required,
    /// A field has the wrong primitive type.
    InvalidType,
    /// A tag or enum value is not one of the declared variants.
    InvalidVariant,
    /// A string declared non-empty is empty.
    TooSmall,
    /// A string does not have the declared format.
    InvalidFormat,
}

/// One rejected field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationIssue {
    /// Field path such as `days[0].segments[1].type`; empty for the root.
    pub path: String,
    pub code: IssueCode,
    pub message: String,
}

impl std::fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.path.is_empty() {
            write!(f, "<root>: {}", self.message)
        } else {
            write!(f, "{}: {}", self.path, self.message)
        }
    }
}

/// A structured rejection: every issue found in one input.
///
/// Never empty.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid {schema}: {}", join_issues(.issues))]
pub struct ValidationIssues {
    schema: SchemaKind,
    issues: Vec<ValidationIssue>,
}

impl ValidationIssues {
    fn new(schema: SchemaKind, issues: Vec<ValidationIssue>) -> Self {
        debug_assert!(!issues.is_empty());
        Self { schema, issues }
    }

    /// The schema the input was checked against.
    pub fn schema(&self) -> SchemaKind {
        self.schema
    }

    pub fn issues(&self) -> &[ValidationIssue] {
        &self.issues
    }

    pub fn iter(&self) -> impl Iterator<Item = &ValidationIssue> {
        self.issues.iter()
    }

    pub fn len(&self) -> usize {
        self.issues.len()
    }

    pub fn is_empty(&self) -> bool {
        self.issues.is_empty()
    }

    /// Returns true when every issue is a missing required field.
    pub fn only_missing_fields(&self) -> bool {
        self.issues.iter().all(|i| i.code == IssueCode::Required)
    }

    /// Returns the first issue with the given code.
    pub fn find(&self, code: IssueCode) -> Option<&ValidationIssue> {
        self.issues.iter().find(|i| i.code == code)
    }
}

fn join_issues(issues: &[ValidationIssue]) -> String {
    issues
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// A record shape the validator can check.
pub trait Schema: DeserializeOwned {
    const KIND: SchemaKind;

    /// Records every problem with `value` (located at `path`) in `checker`.
    fn check(checker: &mut Checker, value: &Value, path: &str);
}

/// Validates `input` against `T`'s schema and returns the typed record.
///
/// The returned record owns its data; nothing is shared with `input`.
pub fn validate<T: Schema>(input: &Value) -> Result<T, ValidationIssues> {
    let mut checker = Checker::default();
    T::check(&mut checker, input, "");
    if !checker.issues.is_empty() {
        tracing::debug!(schema = %T::KIND, issues = checker.issues.len(), "input rejected");
        return Err(ValidationIssues::new(T::KIND, checker.issues));
    }

    <T as serde::Deserialize>::deserialize(input).map_err(|e| {
        ValidationIssues::new(
            T::KIND,
            vec![ValidationIssue {
                path: String::new(),
                code: IssueCode::InvalidType,
                message: e.to_string(),
            }],
        )
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Rule {
    Required,
    Optional,
    NonEmpty,
}

/// Accumulates issues while a [`Schema`] walks its input.
#[derive(Debug, Default)]
pub struct Checker {
    issues: Vec<ValidationIssue>,
}

impl Checker {
    fn push(&mut self, path: &str, code: IssueCode, message: impl Into<String>) {
        self.issues.push(ValidationIssue {
            path: path.to_string(),
            code,
            message: message.into(),
        });
    }

    fn object<'v>(&mut self, value: &'v Value, path: &str) -> Option<&'v Map<String, Value>> {
        match value {
            Value::Object(map) => Some(map),
            other => {
                self.push(path, IssueCode::InvalidType, expected("object", other));
                None
            }
        }
    }

    fn lookup<'v>(
        &mut self,
        obj: &'v Map<String, Value>,
        parent: &str,
        key: &str,
        rule: Rule,
    ) -> Option<(&'v Value, String)> {
        let path = join(parent, key);
        match obj.get(key) {
            Some(value) => Some((value, path)),
            None => {
                if rule != Rule::Optional {
                    self.push(&path, IssueCode::Required, "Required");
                }
                None
            }
        }
    }

    fn string<'v>(
        &mut self,
        obj: &'v Map<String, Value>,
        parent: &str,
        key: &str,
        rule: Rule,
    ) -> Option<&'v str> {
        let (value, path) = self.lookup(obj, parent, key, rule)?;
        let Some(s) = value.as_str() else {
            self.push(&path, IssueCode::InvalidType, expected("string", value));
            return None;
        };
        if rule == Rule::NonEmpty && s.is_empty() {
            self.push(&path, IssueCode::TooSmall, format!("{key} cannot be empty"));
        }
        Some(s)
    }

    /// Any JSON number is accepted; no sign or integer rule is declared.
    fn number(&mut self, obj: &Map<String, Value>, parent: &str, key: &str, rule: Rule) {
        let Some((value, path)) = self.lookup(obj, parent, key, rule) else {
            return;
        };
        if !value.is_number() {
            self.push(&path, IssueCode::InvalidType, expected("number", value));
        }
    }

    fn one_of<'v>(
        &mut self,
        obj: &'v Map<String, Value>,
        parent: &str,
        key: &str,
        rule: Rule,
        allowed: &[&str],
    ) -> Option<&'v str> {
        let (value, path) = self.lookup(obj, parent, key, rule)?;
        let Some(s) = value.as_str() else {
            self.push(&path, IssueCode::InvalidType, expected("string", value));
            return None;
        };
        if !allowed.contains(&s) {
            self.push(
                &path,
                IssueCode::InvalidVariant,
                format!("expected one of {}, received '{s}'", allowed.join(" | ")),
            );
            return None;
        }
        Some(s)
    }

    fn array<'v>(
        &mut self,
        obj: &'v Map<String, Value>,
        parent: &str,
        key: &str,
        rule: Rule,
    ) -> Option<(&'v [Value], String)> {
        let (value, path) = self.lookup(obj, parent, key, rule)?;
        match value {
            Value::Array(items) => Some((items.as_slice(), path)),
            other => {
                self.push(&path, IssueCode::InvalidType, expected("array", other));
                None
            }
        }
    }

    fn string_array(&mut self, obj: &Map<String, Value>, parent: &str, key: &str, rule: Rule) {
        let Some((items, path)) = self.array(obj, parent, key, rule) else {
            return;
        };
        for (i, item) in items.iter().enumerate() {
            if !item.is_string() {
                self.push(&index(&path, i), IssueCode::InvalidType, expected("string", item));
            }
        }
    }
}

impl Schema for Segment {
    const KIND: SchemaKind = SchemaKind::Segment;

    fn check(checker: &mut Checker, value: &Value, path: &str) {
        let Some(obj) = checker.object(value, path) else {
            return;
        };
        let Some(tag) = checker.one_of(obj, path, "type", Rule::Required, &SEGMENT_TAGS) else {
            return;
        };
        match tag {
            "poi" => {
                checker.string(obj, path, "name", Rule::Required);
                checker.number(obj, path, "stayMin", Rule::Optional);
                checker.string(obj, path, "note", Rule::Optional);
            }
            "move" => {
                checker.string(obj, path, "from", Rule::Required);
                checker.string(obj, path, "to", Rule::Required);
                checker.one_of(obj, path, "mode", Rule::Optional, &TRAVEL_MODES);
                checker.number(obj, path, "etaMin", Rule::Optional);
            }
            "meal" => {
                checker.string(obj, path, "name", Rule::Required);
                checker.number(obj, path, "stayMin", Rule::Optional);
            }
            _ => checker.number(obj, path, "min", Rule::Required),
        }
    }
}

impl Schema for DayRecord {
    const KIND: SchemaKind = SchemaKind::Day;

    fn check(checker: &mut Checker, value: &Value, path: &str) {
        let Some(obj) = checker.object(value, path) else {
            return;
        };
        checker.string(obj, path, "date", Rule::Required);
        if let Some((segments, segments_path)) = checker.array(obj, path, "segments", Rule::Required)
        {
            for (i, segment) in segments.iter().enumerate() {
                Segment::check(checker, segment, &index(&segments_path, i));
            }
        }
    }
}

impl Schema for ItineraryRecord {
    const KIND: SchemaKind = SchemaKind::Itinerary;

    fn check(checker: &mut Checker, value: &Value, path: &str) {
        let Some(obj) = checker.object(value, path) else {
            return;
        };
        checker.string(obj, path, "id", Rule::Required);
        checker.string(obj, path, "createdAt", Rule::Required);
        checker.string(obj, path, "title", Rule::Required);
        checker.string(obj, path, "sourceQuery", Rule::Required);
        if let Some((days, days_path)) = checker.array(obj, path, "days", Rule::Required) {
            for (i, day) in days.iter().enumerate() {
                DayRecord::check(checker, day, &index(&days_path, i));
            }
        }
    }
}

impl Schema for PublicPlanCardRecord {
    const KIND: SchemaKind = SchemaKind::PublicPlanCard;

    fn check(checker: &mut Checker, value: &Value, path: &str) {
        let Some(obj) = checker.object(value, path) else {
            return;
        };
        checker.string(obj, path, "id", Rule::Required);
        checker.string(obj, path, "title", Rule::Required);
        checker.string(obj, path, "thumbnail", Rule::Optional);
        checker.string(obj, path, "duration", Rule::Optional);
        checker.string_array(obj, path, "highlights", Rule::Optional);
    }
}

impl Schema for MyTripCardRecord {
    const KIND: SchemaKind = SchemaKind::MyTripCard;

    fn check(checker: &mut Checker, value: &Value, path: &str) {
        let Some(obj) = checker.object(value, path) else {
            return;
        };
        checker.string(obj, path, "id", Rule::Required);
        checker.string(obj, path, "title", Rule::Required);
        checker.string(obj, path, "createdAt", Rule::Required);
        checker.string(obj, path, "thumbnail", Rule::Optional);
    }
}

impl Schema for CreateItineraryRequest {
    const KIND: SchemaKind = SchemaKind::CreateItineraryRequest;

    fn check(checker: &mut Checker, value: &Value, path: &str) {
        let Some(obj) = checker.object(value, path) else {
            return;
        };
        checker.string(obj, path, "query", Rule::NonEmpty);
    }
}

impl Schema for SaveTripRequest {
    const KIND: SchemaKind = SchemaKind::SaveTripRequest;

    fn check(checker: &mut Checker, value: &Value, path: &str) {
        let Some(obj) = checker.object(value, path) else {
            return;
        };
        if let Some(id) = checker.string(obj, path, "id", Rule::NonEmpty)
            && !id.is_empty()
            && !id.starts_with(ITINERARY_ID_PREFIX)
        {
            checker.push(
                &join(path, "id"),
                IssueCode::InvalidFormat,
                "Invalid ID format",
            );
        }
        checker.string(obj, path, "title", Rule::NonEmpty);
    }
}

fn join(parent: &str, key: &str) -> String {
    if parent.is_empty() {
        key.to_string()
    } else {
        format!("{parent}.{key}")
    }
}

fn index(path: &str, i: usize) -> String {
    format!("{path}[{i}]")
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn expected(kind: &str, found: &Value) -> String {
    format!("expected {kind}, received {}", type_name(found))
}
