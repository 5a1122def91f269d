//! Per-field validation for cron expressions.
//!
//! Each of the five cron positions is validated independently against its
//! numeric bounds. The checks run in a fixed precedence order, first match
//! wins: missing value, bare wildcard, character class, step syntax, range
//! syntax, list syntax, single value. The ordering is load-bearing: it
//! decides which failure a field with several problems reports, and it is
//! why `1-5,7` is a malformed range rather than a list.

/// Inclusive numeric bounds and wildcard policy for one cron field
/// position. Defined once per position in
/// [`crate::expression::FIELD_SPECS`], never mutated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    /// Human-facing field name used in error payloads (e.g. "day-of-week").
    pub name: &'static str,
    pub min: i64,
    pub max: i64,
    pub allow_wildcard: bool,
}

/// Outcome of validating a single field. Produced fresh per call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldOutcome {
    Valid,
    Invalid(FieldError),
}

impl FieldOutcome {
    /// True when the field passed validation.
    pub fn is_valid(&self) -> bool {
        matches!(self, FieldOutcome::Valid)
    }
}

/// Why a field failed validation, carrying the offending values where the
/// failure is value-dependent.
///
/// `ValueOutOfRange` and `SpanOutOfRange` are the same reason
/// (`valueOutOfRange`) with different interpolation payloads: a single
/// value versus the two ends of a range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldError {
    /// The field is empty.
    MissingValue,
    /// The field contains characters outside `[0-9,*/-]`.
    InvalidCharacters,
    /// The `/step` part is not a positive integer.
    InvalidStep,
    /// A `-` expression that is not `start-end` with two integer parts.
    InvalidRangeFormat,
    /// A range whose start exceeds its end.
    RangeStartGreater { start: i64, end: i64 },
    /// List entries that are empty, non-numeric, or out of bounds.
    InvalidValues { entries: Vec<String> },
    /// A single value outside the field bounds.
    ValueOutOfRange { value: i64 },
    /// A range with at least one end outside the field bounds.
    SpanOutOfRange { start: i64, end: i64 },
    /// The field is not a numeric value at all (single-value position).
    InvalidField,
}

/// Validate one cron field against `[min, max]`.
///
/// `allow_wildcard` controls whether a bare `*` (or the `*` range of a
/// step expression) is accepted. The weekday alias `7` is accepted
/// wherever `max == 7`, so `0 0 * * 7` means Sunday just like
/// `0 0 * * 0`.
pub fn validate_field(field: &str, min: i64, max: i64, allow_wildcard: bool) -> FieldOutcome {
    if field.is_empty() {
        return FieldOutcome::Invalid(FieldError::MissingValue);
    }
    if field == "*" && allow_wildcard {
        return FieldOutcome::Valid;
    }
    if field
        .chars()
        .any(|c| !c.is_ascii_digit() && !matches!(c, ',' | '*' | '/' | '-'))
    {
        return FieldOutcome::Invalid(FieldError::InvalidCharacters);
    }

    if let Some((range, step)) = field.split_once('/') {
        return validate_step(range, step, min, max, allow_wildcard);
    }
    if field.contains('-') {
        return validate_range(field, min, max);
    }
    if field.contains(',') {
        return validate_list(field, min, max);
    }
    validate_single(field, min, max)
}

/// `range/step` syntax. The step must be a positive integer; the range
/// part is re-validated with the wildcard disallowed unless it is `*`
/// itself. A second `/` lands in the step text and fails the parse.
fn validate_step(range: &str, step: &str, min: i64, max: i64, allow_wildcard: bool) -> FieldOutcome {
    match step.parse::<i64>() {
        Ok(n) if n > 0 => {}
        _ => return FieldOutcome::Invalid(FieldError::InvalidStep),
    }
    if range == "*" && allow_wildcard {
        return FieldOutcome::Valid;
    }
    validate_field(range, min, max, false)
}

/// `start-end` syntax, plus the single-negative-number form that only the
/// weekday alias could ever accept.
fn validate_range(field: &str, min: i64, max: i64) -> FieldOutcome {
    if field.starts_with('-') {
        // A single negative number, not a range. Field minima are all
        // non-negative, so everything lands out of bounds.
        let value = match field.parse::<i64>() {
            Ok(v) => v,
            Err(_) => return FieldOutcome::Invalid(FieldError::InvalidRangeFormat),
        };
        if max == 7 && value == 7 {
            return FieldOutcome::Valid;
        }
        if value < min || value > max {
            return FieldOutcome::Invalid(FieldError::ValueOutOfRange { value });
        }
        return FieldOutcome::Valid;
    }

    let parts: Vec<&str> = field.split('-').collect();
    if parts.len() != 2 {
        return FieldOutcome::Invalid(FieldError::InvalidRangeFormat);
    }
    let (start, end) = match (parts[0].parse::<i64>(), parts[1].parse::<i64>()) {
        (Ok(start), Ok(end)) => (start, end),
        _ => return FieldOutcome::Invalid(FieldError::InvalidRangeFormat),
    };
    if start > end {
        return FieldOutcome::Invalid(FieldError::RangeStartGreater { start, end });
    }
    if start < min || end > max {
        return FieldOutcome::Invalid(FieldError::SpanOutOfRange { start, end });
    }
    FieldOutcome::Valid
}

/// Comma-list syntax. Every entry that is empty, non-numeric, or out of
/// bounds is collected so the error message can name all of them at once.
fn validate_list(field: &str, min: i64, max: i64) -> FieldOutcome {
    let entries: Vec<String> = field
        .split(',')
        .filter(|entry| match entry.parse::<i64>() {
            Ok(value) => value < min || value > max,
            Err(_) => true,
        })
        .map(str::to_string)
        .collect();

    if entries.is_empty() {
        FieldOutcome::Valid
    } else {
        FieldOutcome::Invalid(FieldError::InvalidValues { entries })
    }
}

/// A single plain value.
fn validate_single(field: &str, min: i64, max: i64) -> FieldOutcome {
    let value = match field.parse::<i64>() {
        Ok(v) => v,
        Err(_) => return FieldOutcome::Invalid(FieldError::InvalidField),
    };
    if max == 7 && value == 7 {
        // Sunday alias: 7 is accepted only where the bounds say 0-7.
        return FieldOutcome::Valid;
    }
    if value == 0 && min == 1 {
        // 1-based fields (day-of-month, month) reject 0 explicitly.
        return FieldOutcome::Invalid(FieldError::ValueOutOfRange { value });
    }
    if value < min || value > max {
        return FieldOutcome::Invalid(FieldError::ValueOutOfRange { value });
    }
    FieldOutcome::Valid
}
