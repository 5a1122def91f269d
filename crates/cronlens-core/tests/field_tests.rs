//! Tests for single-field validation.
//!
//! The cascade order matters as much as the individual rules, so several
//! tests pin which failure wins when a field has more than one problem.

use cronlens_core::field::{validate_field, FieldError, FieldOutcome};

/// Helper: validate against the minute bounds (0-59).
fn minute(field: &str) -> FieldOutcome {
    validate_field(field, 0, 59, true)
}

/// Helper: validate against the day-of-month bounds (1-31).
fn day_of_month(field: &str) -> FieldOutcome {
    validate_field(field, 1, 31, true)
}

/// Helper: validate against the day-of-week bounds (0-7).
fn day_of_week(field: &str) -> FieldOutcome {
    validate_field(field, 0, 7, true)
}

fn invalid(outcome: FieldOutcome) -> FieldError {
    match outcome {
        FieldOutcome::Invalid(reason) => reason,
        FieldOutcome::Valid => panic!("expected an invalid outcome"),
    }
}

// ---------------------------------------------------------------------------
// Empty fields and wildcards
// ---------------------------------------------------------------------------

#[test]
fn empty_field_is_missing_value() {
    assert_eq!(invalid(minute("")), FieldError::MissingValue);
}

#[test]
fn bare_wildcard_accepted() {
    assert!(minute("*").is_valid());
    assert!(day_of_week("*").is_valid());
}

#[test]
fn wildcard_where_disallowed_falls_through_to_invalid_field() {
    // With the wildcard off, "*" survives the character class and dies in
    // the single-value parse.
    assert_eq!(
        invalid(validate_field("*", 0, 59, false)),
        FieldError::InvalidField
    );
}

// ---------------------------------------------------------------------------
// Character class
// ---------------------------------------------------------------------------

#[test]
fn letters_are_invalid_characters() {
    assert_eq!(invalid(minute("abc")), FieldError::InvalidCharacters);
    assert_eq!(invalid(day_of_week("MON")), FieldError::InvalidCharacters);
}

#[test]
fn macros_are_invalid_characters() {
    // @hourly and friends are not supported; the @ fails the class.
    assert_eq!(invalid(minute("@hourly")), FieldError::InvalidCharacters);
}

#[test]
fn character_class_beats_step_parsing() {
    // The 'a' is rejected before the step syntax is ever inspected.
    assert_eq!(invalid(minute("*/a")), FieldError::InvalidCharacters);
}

// ---------------------------------------------------------------------------
// Steps
// ---------------------------------------------------------------------------

#[test]
fn wildcard_step_accepted() {
    assert!(minute("*/5").is_valid());
    assert!(minute("*/1").is_valid());
}

#[test]
fn zero_step_rejected() {
    assert_eq!(invalid(minute("*/0")), FieldError::InvalidStep);
}

#[test]
fn negative_step_rejected() {
    assert_eq!(invalid(minute("*/-1")), FieldError::InvalidStep);
}

#[test]
fn double_slash_rejected() {
    // The second '/' lands in the step text, which then fails to parse.
    assert_eq!(invalid(minute("*/5/2")), FieldError::InvalidStep);
}

#[test]
fn step_with_numeric_range_accepted() {
    assert!(minute("10-30/5").is_valid());
}

#[test]
fn step_with_single_value_accepted() {
    assert!(minute("10/5").is_valid());
}

#[test]
fn step_range_is_validated_recursively() {
    assert_eq!(
        invalid(minute("30-10/5")),
        FieldError::RangeStartGreater { start: 30, end: 10 }
    );
    assert_eq!(
        invalid(minute("0-60/5")),
        FieldError::SpanOutOfRange { start: 0, end: 60 }
    );
}

// ---------------------------------------------------------------------------
// Ranges
// ---------------------------------------------------------------------------

#[test]
fn simple_range_accepted() {
    assert!(minute("1-5").is_valid());
    assert!(minute("0-59").is_valid());
}

#[test]
fn reversed_range_rejected() {
    assert_eq!(
        invalid(minute("5-1")),
        FieldError::RangeStartGreater { start: 5, end: 1 }
    );
}

#[test]
fn out_of_bounds_range_rejected() {
    assert_eq!(
        invalid(minute("0-60")),
        FieldError::SpanOutOfRange { start: 0, end: 60 }
    );
}

#[test]
fn dangling_range_rejected() {
    assert_eq!(invalid(minute("1-")), FieldError::InvalidRangeFormat);
}

#[test]
fn triple_range_rejected() {
    assert_eq!(invalid(minute("1-2-3")), FieldError::InvalidRangeFormat);
}

#[test]
fn range_beats_list_in_precedence() {
    // '-' is inspected before ',', so this is a malformed range, not a
    // list with a range entry.
    assert_eq!(invalid(minute("1-5,7")), FieldError::InvalidRangeFormat);
}

#[test]
fn negative_single_value_is_out_of_range() {
    assert_eq!(
        invalid(minute("-1")),
        FieldError::ValueOutOfRange { value: -1 }
    );
    assert_eq!(
        invalid(day_of_week("-7")),
        FieldError::ValueOutOfRange { value: -7 }
    );
}

#[test]
fn unparseable_negative_is_malformed_range() {
    assert_eq!(invalid(minute("-")), FieldError::InvalidRangeFormat);
    assert_eq!(invalid(minute("--1")), FieldError::InvalidRangeFormat);
}

// ---------------------------------------------------------------------------
// Lists
// ---------------------------------------------------------------------------

#[test]
fn numeric_list_accepted() {
    assert!(minute("0,15,30,45").is_valid());
}

#[test]
fn list_collects_all_bad_entries() {
    assert_eq!(
        invalid(minute("1,60,61")),
        FieldError::InvalidValues {
            entries: vec!["60".to_string(), "61".to_string()]
        }
    );
}

#[test]
fn empty_list_entry_is_invalid() {
    assert_eq!(
        invalid(minute("1,,2")),
        FieldError::InvalidValues {
            entries: vec!["".to_string()]
        }
    );
}

#[test]
fn zero_in_one_based_list_is_invalid() {
    assert_eq!(
        invalid(day_of_month("0,15")),
        FieldError::InvalidValues {
            entries: vec!["0".to_string()]
        }
    );
}

#[test]
fn sunday_alias_in_list_is_in_bounds() {
    // 7 sits inside the 0-7 weekday bounds, so lists need no alias logic.
    assert!(day_of_week("0,7").is_valid());
}

// ---------------------------------------------------------------------------
// Single values
// ---------------------------------------------------------------------------

#[test]
fn boundary_values_accepted() {
    assert!(minute("0").is_valid());
    assert!(minute("59").is_valid());
    assert!(day_of_month("1").is_valid());
    assert!(day_of_month("31").is_valid());
}

#[test]
fn value_above_max_rejected() {
    assert_eq!(
        invalid(minute("60")),
        FieldError::ValueOutOfRange { value: 60 }
    );
    assert_eq!(
        invalid(day_of_month("32")),
        FieldError::ValueOutOfRange { value: 32 }
    );
}

#[test]
fn zero_rejected_in_one_based_fields() {
    assert_eq!(
        invalid(day_of_month("0")),
        FieldError::ValueOutOfRange { value: 0 }
    );
    assert_eq!(
        invalid(validate_field("0", 1, 12, true)),
        FieldError::ValueOutOfRange { value: 0 }
    );
}

#[test]
fn sunday_alias_accepted_in_weekday_field() {
    assert!(day_of_week("7").is_valid());
    assert!(day_of_week("0").is_valid());
}

#[test]
fn eight_rejected_in_weekday_field() {
    assert_eq!(
        invalid(day_of_week("8")),
        FieldError::ValueOutOfRange { value: 8 }
    );
}

#[test]
fn leading_zeros_parse_as_numbers() {
    assert!(minute("05").is_valid());
}

// ---------------------------------------------------------------------------
// Purity
// ---------------------------------------------------------------------------

#[test]
fn validation_is_idempotent() {
    for field in ["*", "*/5", "5-1", "1,60,61", "-1", "7", ""] {
        assert_eq!(minute(field), minute(field), "outcome drifted for {:?}", field);
    }
}
