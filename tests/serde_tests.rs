#![cfg(feature = "serde")]
//! Serialization tests for TimeOfDay and Point.

use rstest::rstest;
use timekeep::geometry::Point;
use timekeep::time::TimeOfDay;

#[rstest]
fn time_serializes_as_clock_string() {
    let value = TimeOfDay::new(9, 45, 0).unwrap();
    assert_eq!(serde_json::to_string(&value).unwrap(), "\"09:45:00\"");
}

#[rstest]
fn time_deserializes_from_clock_string() {
    let value: TimeOfDay = serde_json::from_str("\"100:00:01\"").unwrap();
    assert_eq!(value, TimeOfDay::new(100, 0, 1).unwrap());
}

#[rstest]
#[case("\"09:60:00\"")]
#[case("\"09:45\"")]
#[case("945")]
fn invalid_time_does_not_deserialize(#[case] json: &str) {
    assert!(serde_json::from_str::<TimeOfDay>(json).is_err());
}

#[rstest]
fn invalid_time_error_mentions_cause() {
    let error = serde_json::from_str::<TimeOfDay>("\"09:00:60\"").unwrap_err();
    assert!(error.to_string().contains("second must be in 0..60, got 60"));
}

#[rstest]
fn times_in_a_list_round_trip() {
    let laps = vec![
        TimeOfDay::new(1, 7, 2).unwrap(),
        TimeOfDay::new(1, 5, 8).unwrap(),
    ];
    let json = serde_json::to_string(&laps).unwrap();
    assert_eq!(json, "[\"01:07:02\",\"01:05:08\"]");
    let decoded: Vec<TimeOfDay> = serde_json::from_str(&json).unwrap();
    assert_eq!(decoded, laps);
}

#[rstest]
fn point_serializes_as_struct() {
    let point = Point::new(3.0, 4.0);
    assert_eq!(serde_json::to_string(&point).unwrap(), "{\"x\":3.0,\"y\":4.0}");
}
