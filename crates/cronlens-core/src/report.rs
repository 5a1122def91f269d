//! Structured, de-duplicated validation errors for UI display.
//!
//! The reporter re-validates the expression and maps every failing field
//! onto a translation key plus an interpolation payload; the embedding UI
//! owns turning keys into localized text. A cross-field day/month
//! plausibility check (`0 0 30 2 *` can never fire) is appended last.
//!
//! # De-duplication
//!
//! Structural reasons (bad characters, empty field, bad step, malformed
//! range) are keyed on the translation key alone, so at most one of each
//! survives per expression. Value-dependent reasons are keyed on the key
//! plus the payload with `fieldName`/`fieldRange` stripped -- which means
//! two different fields failing with the same reason and the same numbers
//! collapse into a single reported error. That collapse is long-standing
//! behavior the embedding UI's test suite depends on; keep it.

use std::collections::HashSet;

use serde::Serialize;
use serde_json::{json, Map, Value};

use crate::expression::{
    split_fields, DAY_OF_MONTH_INDEX, DAY_OF_WEEK_INDEX, FIELD_SPECS, MONTH_INDEX,
};
use crate::field::{validate_field, FieldError, FieldOutcome, FieldSpec};

/// Translation keys understood by the embedding UI's message catalog.
pub mod keys {
    pub const NO_EXPRESSION: &str = "noExpression";
    pub const INVALID_FIELD_COUNT: &str = "invalidFieldCount";
    pub const MISSING_VALUE: &str = "missingValue";
    pub const INVALID_CHARACTERS: &str = "invalidCharacters";
    pub const INVALID_STEP: &str = "invalidStep";
    pub const INVALID_RANGE_FORMAT: &str = "invalidRangeFormat";
    pub const RANGE_START_GREATER: &str = "rangeStartGreater";
    pub const INVALID_VALUES: &str = "invalidValues";
    pub const VALUE_OUT_OF_RANGE: &str = "valueOutOfRange";
    pub const INVALID_DAY_OF_WEEK_VALUES: &str = "invalidDayOfWeekValues";
    pub const DAY_OF_WEEK_RANGE: &str = "dayOfWeekRange";
    pub const INVALID_FIELD: &str = "invalidField";
}

/// A user-facing validation error: a translation key plus the values to
/// interpolate into the localized message.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CronError {
    pub key: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub values: Option<Map<String, Value>>,
}

impl CronError {
    fn bare(key: &str) -> Self {
        Self {
            key: key.to_string(),
            values: None,
        }
    }

    fn with_values(key: &str, values: Map<String, Value>) -> Self {
        Self {
            key: key.to_string(),
            values: Some(values),
        }
    }
}

/// Produce the ordered, de-duplicated error list for an expression.
///
/// Field errors come first in insertion order, followed by at most one
/// day/month plausibility error. An empty input yields a single
/// `noExpression` entry; a wrong field count yields a single
/// `invalidFieldCount` entry carrying the actual count.
pub fn get_validation_errors(expr: &str) -> Vec<CronError> {
    if expr.is_empty() {
        return vec![CronError::bare(keys::NO_EXPRESSION)];
    }

    let fields = split_fields(expr);
    if fields.len() != FIELD_SPECS.len() {
        let mut values = Map::new();
        values.insert("count".to_string(), json!(fields.len()));
        return vec![CronError::with_values(keys::INVALID_FIELD_COUNT, values)];
    }

    let mut errors: Vec<CronError> = Vec::new();
    let mut seen: HashSet<String> = HashSet::new();

    for (index, (field, spec)) in fields.iter().zip(FIELD_SPECS.iter()).enumerate() {
        if let FieldOutcome::Invalid(reason) =
            validate_field(field, spec.min, spec.max, spec.allow_wildcard)
        {
            let error = describe(&reason, spec, index);
            if seen.insert(dedup_key(&error)) {
                errors.push(error);
            }
        }
    }

    // The plausibility entry bypasses de-duplication; it is appended at
    // most once and always last.
    if let Some(error) = day_month_mismatch(fields[DAY_OF_MONTH_INDEX], fields[MONTH_INDEX]) {
        errors.push(error);
    }

    errors
}

/// Map one field failure onto its translation key and payload. The
/// day-of-week position gets dedicated keys for list and range failures
/// so the UI can word them in weekday terms.
fn describe(reason: &FieldError, spec: &FieldSpec, index: usize) -> CronError {
    let weekday = index == DAY_OF_WEEK_INDEX;
    let mut values = base_payload(spec);

    match reason {
        FieldError::MissingValue => CronError::with_values(keys::MISSING_VALUE, values),
        FieldError::InvalidCharacters => CronError::with_values(keys::INVALID_CHARACTERS, values),
        FieldError::InvalidStep => CronError::with_values(keys::INVALID_STEP, values),
        FieldError::InvalidRangeFormat => {
            CronError::with_values(keys::INVALID_RANGE_FORMAT, values)
        }
        FieldError::RangeStartGreater { start, end } => {
            values.insert("start".to_string(), json!(start));
            values.insert("end".to_string(), json!(end));
            CronError::with_values(keys::RANGE_START_GREATER, values)
        }
        FieldError::InvalidValues { entries } => {
            values.insert("values".to_string(), json!(entries.join(", ")));
            let key = if weekday {
                keys::INVALID_DAY_OF_WEEK_VALUES
            } else {
                keys::INVALID_VALUES
            };
            CronError::with_values(key, values)
        }
        FieldError::ValueOutOfRange { value } => {
            values.insert("value".to_string(), json!(value));
            let key = if weekday {
                keys::DAY_OF_WEEK_RANGE
            } else {
                keys::VALUE_OUT_OF_RANGE
            };
            CronError::with_values(key, values)
        }
        FieldError::SpanOutOfRange { start, end } => {
            values.insert("start".to_string(), json!(start));
            values.insert("end".to_string(), json!(end));
            let key = if weekday {
                keys::DAY_OF_WEEK_RANGE
            } else {
                keys::VALUE_OUT_OF_RANGE
            };
            CronError::with_values(key, values)
        }
        FieldError::InvalidField => CronError::with_values(keys::INVALID_FIELD, values),
    }
}

/// Every field error's payload leads with the field name and its bounds.
fn base_payload(spec: &FieldSpec) -> Map<String, Value> {
    let mut values = Map::new();
    values.insert("fieldName".to_string(), json!(spec.name));
    values.insert(
        "fieldRange".to_string(),
        json!(format!("{}-{}", spec.min, spec.max)),
    );
    values
}

/// Reasons whose de-duplication key is the translation key alone.
const STRUCTURAL_KEYS: [&str; 4] = [
    keys::INVALID_CHARACTERS,
    keys::MISSING_VALUE,
    keys::INVALID_STEP,
    keys::INVALID_RANGE_FORMAT,
];

/// De-duplication key for one error. Value-dependent reasons key on the
/// payload with `fieldName`/`fieldRange` stripped out.
fn dedup_key(error: &CronError) -> String {
    if STRUCTURAL_KEYS.contains(&error.key.as_str()) {
        return error.key.clone();
    }
    let mut stripped = error.values.clone().unwrap_or_default();
    stripped.remove("fieldName");
    stripped.remove("fieldRange");
    format!("{}|{}", error.key, Value::Object(stripped))
}

/// Days per month, non-leap. February 29 is tolerated separately so a
/// `29 2` schedule is never flagged even though it only fires in leap
/// years.
const DAYS_IN_MONTH: [i64; 12] = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// Cross-field plausibility: a bare-digit day-of-month that exceeds the
/// length of a bare-digit month (e.g. `0 0 30 2 *`). Only runs when both
/// fields are plain integers and the month lies within 1-12.
fn day_month_mismatch(day_field: &str, month_field: &str) -> Option<CronError> {
    let day = parse_plain(day_field)?;
    let month = parse_plain(month_field)?;
    if !(1..=12).contains(&month) {
        return None;
    }
    if month == 2 && day == 29 {
        return None;
    }
    if day > DAYS_IN_MONTH[(month - 1) as usize] {
        let mut values = Map::new();
        values.insert("day".to_string(), json!(day));
        values.insert("month".to_string(), json!(month));
        return Some(CronError::with_values(keys::INVALID_FIELD, values));
    }
    None
}

/// Parse a field consisting solely of digits; any syntax character
/// (wildcard, list, range, step) disqualifies it.
fn parse_plain(field: &str) -> Option<i64> {
    if field.is_empty() || !field.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    field.parse().ok()
}
