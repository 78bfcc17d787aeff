//! Property-based tests for TimeOfDay.
//!
//! These tests check the conversion, ordering and addition properties every
//! valid TimeOfDay must satisfy.

use proptest::prelude::*;
use timekeep::time::{TimeOfDay, TimeOfDayError};

fn any_time() -> impl Strategy<Value = TimeOfDay> {
    (0_u64..1_000_000, 0_u8..60, 0_u8..60)
        .prop_map(|(hour, minute, second)| TimeOfDay::new(hour, minute, second).unwrap())
}

// =============================================================================
// Round Trip
// Description: from_total_seconds inverts total_seconds
// =============================================================================

proptest! {
    #[test]
    fn prop_total_seconds_round_trip(value in any_time()) {
        prop_assert_eq!(TimeOfDay::from_total_seconds(value.total_seconds()), value);
    }

    #[test]
    fn prop_seconds_round_trip(seconds in 0_u64..u64::MAX) {
        prop_assert_eq!(TimeOfDay::from_total_seconds(seconds).total_seconds(), seconds);
    }

    #[test]
    fn prop_display_parse_round_trip(value in any_time()) {
        prop_assert_eq!(value.to_string().parse::<TimeOfDay>(), Ok(value));
    }
}

// =============================================================================
// Validation
// Description: minutes and seconds of 60 or more never construct
// =============================================================================

proptest! {
    #[test]
    fn prop_valid_fields_construct(hour in 0_u64..1_000_000, minute in 0_u8..60, second in 0_u8..60) {
        prop_assert!(TimeOfDay::new(hour, minute, second).is_ok());
    }

    #[test]
    fn prop_large_minute_rejected(hour in 0_u64..1_000_000, minute in 60_u8..=u8::MAX, second in 0_u8..60) {
        prop_assert_eq!(
            TimeOfDay::new(hour, minute, second),
            Err(TimeOfDayError::MinuteOutOfRange(minute))
        );
    }

    #[test]
    fn prop_large_second_rejected(hour in 0_u64..1_000_000, minute in 0_u8..60, second in 60_u8..=u8::MAX) {
        prop_assert_eq!(
            TimeOfDay::new(hour, minute, second),
            Err(TimeOfDayError::SecondOutOfRange(second))
        );
    }

    #[test]
    fn prop_display_is_zero_padded(value in any_time()) {
        let rendered = value.to_string();
        let fields: Vec<&str> = rendered.split(':').collect();
        prop_assert_eq!(fields.len(), 3);
        prop_assert!(fields[0].len() >= 2);
        prop_assert_eq!(fields[1].len(), 2);
        prop_assert_eq!(fields[2].len(), 2);
    }
}

// =============================================================================
// Addition
// Description: addition is commutative and agrees with total seconds
// =============================================================================

proptest! {
    #[test]
    fn prop_add_seconds_commutative(value in any_time(), seconds in 0_u64..10_000_000) {
        prop_assert_eq!(value + seconds, seconds + value);
    }

    #[test]
    fn prop_add_times_commutative(left in any_time(), right in any_time()) {
        prop_assert_eq!(left + right, right + left);
    }

    #[test]
    fn prop_add_matches_total_seconds(left in any_time(), right in any_time()) {
        prop_assert_eq!(
            (left + right).total_seconds(),
            left.total_seconds() + right.total_seconds()
        );
        prop_assert_eq!(left + right, left + right.total_seconds());
    }
}

// =============================================================================
// Ordering
// Description: is_after is the strict lexicographic order
// =============================================================================

proptest! {
    #[test]
    fn prop_is_after_matches_ord(left in any_time(), right in any_time()) {
        prop_assert_eq!(left.is_after(&right), left > right);
        prop_assert_eq!(
            left.is_after(&right),
            left.total_seconds() > right.total_seconds()
        );
    }

    #[test]
    fn prop_is_after_irreflexive(value in any_time()) {
        prop_assert!(!value.is_after(&value));
    }
}
