//! English rendering of core error descriptors.
//!
//! The core emits translation keys plus interpolation payloads; the web
//! UI feeds them to its message catalog. The CLI ships this
//! single-locale catalog instead.

use cronlens_core::report::keys;
use cronlens_core::CronError;
use serde_json::Value;

/// Warning shown when day-of-month and day-of-week are both pinned.
pub const AMBIGUOUS: &str = "day-of-month and day-of-week are both restricted; \
most cron engines run this when EITHER matches, not when both do";

/// Render one error descriptor as English text.
pub fn render(error: &CronError) -> String {
    match error.key.as_str() {
        keys::NO_EXPRESSION => "no cron expression given".to_string(),
        keys::INVALID_FIELD_COUNT => {
            format!("expected 5 fields, found {}", lookup(error, "count"))
        }
        keys::MISSING_VALUE => format!("the {} field is empty", lookup(error, "fieldName")),
        keys::INVALID_CHARACTERS => format!(
            "the {} field contains invalid characters",
            lookup(error, "fieldName")
        ),
        keys::INVALID_STEP => format!(
            "the {} field has an invalid step; steps must be positive numbers",
            lookup(error, "fieldName")
        ),
        keys::INVALID_RANGE_FORMAT => {
            format!("the {} field has a malformed range", lookup(error, "fieldName"))
        }
        keys::RANGE_START_GREATER => format!(
            "range start {} is greater than end {} in the {} field",
            lookup(error, "start"),
            lookup(error, "end"),
            lookup(error, "fieldName")
        ),
        keys::INVALID_VALUES => format!(
            "invalid values [{}] in the {} field (allowed: {})",
            lookup(error, "values"),
            lookup(error, "fieldName"),
            lookup(error, "fieldRange")
        ),
        keys::INVALID_DAY_OF_WEEK_VALUES => format!(
            "invalid weekday values [{}] (allowed: 0-7, where 0 and 7 are Sunday)",
            lookup(error, "values")
        ),
        keys::VALUE_OUT_OF_RANGE => out_of_range(
            error,
            &format!(
                "the {} field (allowed: {})",
                lookup(error, "fieldName"),
                lookup(error, "fieldRange")
            ),
        ),
        keys::DAY_OF_WEEK_RANGE => {
            out_of_range(error, "the day-of-week field (allowed: 0-7)")
        }
        keys::INVALID_FIELD => invalid_field(error),
        // Unknown keys pass through so new core errors degrade readably.
        other => other.to_string(),
    }
}

/// `valueOutOfRange` payloads come in two shapes: a single value or the
/// two ends of a range.
fn out_of_range(error: &CronError, place: &str) -> String {
    if has(error, "value") {
        format!("value {} is outside {}", lookup(error, "value"), place)
    } else {
        format!(
            "range {}-{} is outside {}",
            lookup(error, "start"),
            lookup(error, "end"),
            place
        )
    }
}

/// `invalidField` is either a non-numeric single field or the day/month
/// plausibility finding.
fn invalid_field(error: &CronError) -> String {
    if has(error, "day") {
        format!(
            "day {} does not exist in month {}",
            lookup(error, "day"),
            lookup(error, "month")
        )
    } else {
        format!("the {} field is not a valid value", lookup(error, "fieldName"))
    }
}

fn has(error: &CronError, name: &str) -> bool {
    error
        .values
        .as_ref()
        .map(|values| values.contains_key(name))
        .unwrap_or(false)
}

fn lookup(error: &CronError, name: &str) -> String {
    error
        .values
        .as_ref()
        .and_then(|values| values.get(name))
        .map(|value| match value {
            Value::String(text) => text.clone(),
            other => other.to_string(),
        })
        .unwrap_or_default()
}
