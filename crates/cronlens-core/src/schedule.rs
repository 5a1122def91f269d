//! Next-run calculation -- turns a validated cron expression into its next
//! five concrete run timestamps, formatted for a locale.
//!
//! Wraps the `croner` crate and `chrono-tz`: croner finds occurrences with
//! standard cron semantics (including the day-of-month OR day-of-week
//! behavior the ambiguity detector warns about), chrono-tz anchors the
//! search in the host timezone.

use std::sync::OnceLock;

use chrono::{DateTime, Locale, Utc};
use chrono_tz::Tz;
use croner::Cron;
use serde::Serialize;

use crate::ambiguity::detect_ambiguous_schedule;
use crate::error::{Result, ScheduleError};
use crate::expression::is_valid_cron_format;

/// Number of upcoming runs a calculation produces.
pub const RUN_COUNT: usize = 5;

/// Long-form run format: weekday name, full date, time, timezone name.
/// `%A` and `%B` localize through `format_localized`.
const RUN_FORMAT: &str = "%A, %B %-d, %Y, %H:%M:%S %Z";

/// Message used when the expression fails the validator gate.
const INVALID_EXPRESSION: &str = "Invalid cron expression";

/// Result of one next-runs calculation. Created fresh per call, never
/// mutated after return. Serializes camelCase for the UI boundary.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CronCalculationResult {
    /// Formatted run timestamps; empty or exactly [`RUN_COUNT`] long.
    pub runs: Vec<String>,
    /// Human-safe failure message; `None` on success.
    pub error: Option<String>,
    /// Verdict of [`detect_ambiguous_schedule`]. Reset to `false` whenever
    /// the calculation fails, even though it was computed before iterating.
    pub has_ambiguous_schedule: bool,
}

impl CronCalculationResult {
    fn failed(message: &str) -> Self {
        let message = if message.is_empty() {
            INVALID_EXPRESSION
        } else {
            message
        };
        Self {
            runs: Vec::new(),
            error: Some(message.to_string()),
            has_ambiguous_schedule: false,
        }
    }
}

/// Compute the next [`RUN_COUNT`] runs of `expr`, formatted for `locale`.
///
/// Stateless pipeline: validate, detect ambiguity, iterate, format. All
/// failure is returned as data; this function never panics and never
/// returns `Err`. Concurrent calls for different expressions are
/// independent.
pub fn calculate_next_runs(expr: &str, locale: &str) -> CronCalculationResult {
    if !is_valid_cron_format(expr) {
        return CronCalculationResult::failed(INVALID_EXPRESSION);
    }

    // Computed up front so a successful calculation carries it; the error
    // path below discards it again.
    let has_ambiguous_schedule = detect_ambiguous_schedule(expr);

    match next_runs(expr, locale) {
        Ok(runs) => CronCalculationResult {
            runs,
            error: None,
            has_ambiguous_schedule,
        },
        Err(err) => CronCalculationResult::failed(&err.to_string()),
    }
}

/// The fallible phase: parse the pattern, walk strictly-future occurrences
/// seeded at now in the host timezone, format each one.
fn next_runs(expr: &str, locale: &str) -> Result<Vec<String>> {
    let cron = Cron::new(expr)
        .parse()
        .map_err(|e| ScheduleError::InvalidExpression(e.to_string()))?;

    let locale = resolve_locale(locale);
    let mut cursor: DateTime<Tz> = Utc::now().with_timezone(&host_timezone());
    let mut runs = Vec::with_capacity(RUN_COUNT);

    for _ in 0..RUN_COUNT {
        cursor = cron
            .find_next_occurrence(&cursor, false)
            .map_err(|_| ScheduleError::NoUpcomingRuns)?;
        runs.push(cursor.format_localized(RUN_FORMAT, locale).to_string());
    }

    Ok(runs)
}

/// Resolve the host's IANA timezone once per process. Hosts without a
/// resolvable zone fall back to UTC rather than failing every calculation.
fn host_timezone() -> Tz {
    static HOST_TZ: OnceLock<Tz> = OnceLock::new();
    *HOST_TZ.get_or_init(|| {
        iana_time_zone::get_timezone()
            .ok()
            .and_then(|id| id.parse().ok())
            .unwrap_or(Tz::UTC)
    })
}

/// Map a BCP-47 tag ("en-US") onto a chrono locale ("en_US"), falling
/// back to `en_US` for tags chrono carries no data for. Formatting
/// therefore never fails on the locale axis.
fn resolve_locale(tag: &str) -> Locale {
    Locale::try_from(tag.replace('-', "_").as_str()).unwrap_or(Locale::en_US)
}
