//! Whole-expression validation: five whitespace-separated fields checked
//! against the fixed bounds table.

use crate::field::{validate_field, FieldSpec};

/// Bounds table for the five cron positions, in order: minute, hour,
/// day-of-month, month, day-of-week.
///
/// `0` and `7` both denote Sunday in the day-of-week field, hence the
/// inclusive `0..=7` bounds there.
pub const FIELD_SPECS: [FieldSpec; 5] = [
    FieldSpec {
        name: "minute",
        min: 0,
        max: 59,
        allow_wildcard: true,
    },
    FieldSpec {
        name: "hour",
        min: 0,
        max: 23,
        allow_wildcard: true,
    },
    FieldSpec {
        name: "day-of-month",
        min: 1,
        max: 31,
        allow_wildcard: true,
    },
    FieldSpec {
        name: "month",
        min: 1,
        max: 12,
        allow_wildcard: true,
    },
    FieldSpec {
        name: "day-of-week",
        min: 0,
        max: 7,
        allow_wildcard: true,
    },
];

/// Position of the day-of-month field within [`FIELD_SPECS`].
pub(crate) const DAY_OF_MONTH_INDEX: usize = 2;
/// Position of the month field within [`FIELD_SPECS`].
pub(crate) const MONTH_INDEX: usize = 3;
/// Position of the day-of-week field within [`FIELD_SPECS`].
pub(crate) const DAY_OF_WEEK_INDEX: usize = 4;

/// Split a cron expression into its fields on any whitespace run.
pub(crate) fn split_fields(expr: &str) -> Vec<&str> {
    expr.split_whitespace().collect()
}

/// Fast-path gate: true iff `expr` has exactly five fields and every one
/// validates against its bounds.
///
/// Boolean only -- this is what the embedding UI calls on every debounced
/// keystroke and before persisting an expression. Use
/// [`crate::report::get_validation_errors`] for the detailed reasons.
pub fn is_valid_cron_format(expr: &str) -> bool {
    let fields = split_fields(expr);
    if fields.len() != FIELD_SPECS.len() {
        return false;
    }
    fields
        .iter()
        .zip(FIELD_SPECS.iter())
        .all(|(field, spec)| validate_field(field, spec.min, spec.max, spec.allow_wildcard).is_valid())
}
