//! Error types for schedule calculation.

use thiserror::Error;

/// Failures inside the schedule-calculation pipeline. These never escape
/// [`crate::calculate_next_runs`]; they are converted into the `error`
/// field of the returned result at the component boundary.
#[derive(Error, Debug)]
pub enum ScheduleError {
    #[error("Invalid cron expression: {0}")]
    InvalidExpression(String),

    #[error("No upcoming occurrences found")]
    NoUpcomingRuns,
}

pub type Result<T> = std::result::Result<T, ScheduleError>;
