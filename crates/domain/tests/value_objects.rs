//! Integration tests for the validated value objects.
//!
//! These tests exercise construction from untrusted JSON, snapshot isolation
//! and the round trip back to plain data.

use domain::{
    Day, DomainError, IssueCode, Itinerary, ItineraryRecord, MyTripCard, PublicPlanCard,
    SchemaKind, Segment, SegmentKind, Trip,
};
use serde_json::{Value, json};

fn itinerary_input(days: Value) -> Value {
    json!({
        "id": "t1",
        "createdAt": "2024-01-01T00:00:00Z",
        "title": "Tokyo Trip",
        "sourceQuery": "3 days in Tokyo",
        "days": days
    })
}

mod construction {
    use super::*;

    #[test]
    fn every_segment_variant_round_trips() {
        let input = itinerary_input(json!([
            {
                "date": "2024-01-01",
                "segments": [
                    {"type": "poi", "name": "Shrine", "stayMin": 90, "note": "early"},
                    {"type": "move", "from": "Shrine", "to": "Market", "mode": "walk", "etaMin": 12},
                    {"type": "meal", "name": "Ramen", "stayMin": 40},
                    {"type": "buffer", "min": 15}
                ]
            }
        ]));

        let itinerary = Itinerary::create(&input).unwrap();
        let kinds: Vec<SegmentKind> = itinerary.days()[0]
            .segments()
            .iter()
            .map(Segment::kind)
            .collect();
        assert_eq!(
            kinds,
            [
                SegmentKind::Poi,
                SegmentKind::Move,
                SegmentKind::Meal,
                SegmentKind::Buffer
            ]
        );
        assert_eq!(serde_json::to_value(itinerary.to_json()).unwrap(), input);
    }

    #[test]
    fn unconstrained_minute_values_round_trip() {
        let input: Value = serde_json::from_str(
            r#"{
                "id": "t1",
                "createdAt": "2024-01-01T00:00:00Z",
                "title": "Tokyo Trip",
                "sourceQuery": "3 days in Tokyo",
                "days": [{"date": "2024-01-01", "segments": [
                    {"type": "buffer", "min": 7.5},
                    {"type": "buffer", "min": -5},
                    {"type": "poi", "name": "Shrine", "stayMin": 60.0}
                ]}]
            }"#,
        )
        .unwrap();

        let itinerary = Itinerary::create(&input).unwrap();
        let minutes: Vec<Option<f64>> = itinerary.days()[0]
            .segments()
            .iter()
            .map(Segment::minutes)
            .collect();
        assert_eq!(minutes, [Some(7.5), Some(-5.0), Some(60.0)]);
        assert_eq!(serde_json::to_value(itinerary.to_json()).unwrap(), input);
    }

    #[test]
    fn zero_days_fails_even_when_everything_else_is_valid() {
        let err = Itinerary::create(&itinerary_input(json!([]))).unwrap_err();
        assert_eq!(err, DomainError::EmptyItinerary);
    }

    #[test]
    fn zero_days_with_bad_fields_reports_schema_first() {
        let mut input = itinerary_input(json!([]));
        input["title"] = json!(42);
        let err = Itinerary::create(&input).unwrap_err();
        let issues = err.issues().unwrap();
        assert_eq!(issues.schema(), SchemaKind::Itinerary);
        assert_eq!(issues.issues()[0].path, "title");
    }

    #[test]
    fn unknown_segment_tag_is_reported_with_its_path() {
        let input = itinerary_input(json!([
            {"date": "2024-01-01", "segments": [{"type": "teleport"}]}
        ]));
        let err = Itinerary::create(&input).unwrap_err();
        let issue = err.issues().unwrap().find(IssueCode::InvalidVariant).unwrap();
        assert_eq!(issue.path, "days[0].segments[0].type");
    }
}

mod isolation {
    use super::*;

    #[test]
    fn mutating_raw_input_after_create_changes_nothing() {
        let mut input = itinerary_input(json!([
            {"date": "2024-01-01", "segments": [{"type": "poi", "name": "Shrine"}]}
        ]));
        let itinerary = Itinerary::create(&input).unwrap();
        let before = itinerary.to_json();

        input["title"] = json!("Changed");
        input["days"]
            .as_array_mut()
            .unwrap()
            .push(json!({"date": "2024-01-02", "segments": []}));
        input["days"][0]["segments"][0]["name"] = json!("Temple");

        assert_eq!(itinerary.to_json(), before);
        assert_eq!(itinerary.day_count(), 1);
    }

    #[test]
    fn successive_snapshots_are_equal_but_independent() {
        let itinerary = Itinerary::create(&itinerary_input(json!([
            {"date": "2024-01-01", "segments": [{"type": "poi", "name": "Shrine"}]},
            {"date": "2024-01-02", "segments": [{"type": "buffer", "min": 30}]}
        ])))
        .unwrap();

        let mut first: ItineraryRecord = itinerary.to_json();
        let second = itinerary.to_json();
        assert_eq!(first, second);

        first.title.push('!');
        first.days[0].segments.clear();
        first.days.pop();

        assert_eq!(second.days.len(), 2);
        assert_eq!(second.days[0].segments.len(), 1);
        assert_eq!(itinerary.to_json(), second);
    }

    #[test]
    fn trip_and_card_snapshots_are_independent() {
        let input = json!({
            "id": "trip_1", "title": "My Trip", "createdAt": "2024-01-15T12:00:00.000Z"
        });
        let trip = Trip::create(&input).unwrap();
        let card = MyTripCard::create(&input).unwrap();

        let mut snapshot = trip.to_json();
        snapshot.thumbnail = Some("x".to_string());
        assert_eq!(trip.thumbnail(), None);
        assert_eq!(card.to_json(), trip.to_json());
    }
}

mod projections {
    use super::*;

    #[test]
    fn public_card_is_a_valid_public_plan_card() {
        let itinerary = Itinerary::create(&itinerary_input(json!([
            {"date": "2024-01-01", "segments": [{"type": "poi", "name": "A"}, {"type": "meal", "name": "B"}]},
            {"date": "2024-01-02", "segments": []},
            {"date": "2024-01-03", "segments": [{"type": "buffer", "min": 5}]}
        ])))
        .unwrap();

        let card = itinerary.public_card();
        let reparsed = PublicPlanCard::create(&serde_json::to_value(card.to_json()).unwrap())
            .unwrap();
        assert_eq!(reparsed, card);
        assert_eq!(card.duration(), Some("3 days"));
        assert_eq!(
            card.highlights().unwrap(),
            ["Day 2024-01-01: 2 activities", "Day 2024-01-02: 0 activities"]
        );
    }

    #[test]
    fn day_built_standalone_matches_day_inside_itinerary() {
        let day_input = json!({"date": "2024-01-01", "segments": [{"type": "poi", "name": "Shrine"}]});
        let day = Day::create(&day_input).unwrap();
        let itinerary = Itinerary::create(&itinerary_input(json!([day_input]))).unwrap();
        assert_eq!(itinerary.days()[0], day);
    }
}
