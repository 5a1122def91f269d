//! Heuristic detection of day-of-month/day-of-week collisions.
//!
//! Standard cron engines treat a day-of-month and a day-of-week that are
//! both restricted as an OR: the job fires when either matches. A user
//! writing `0 0 15 * 1` usually expects an AND ("the 15th, if it is a
//! Monday") and instead gets "every 15th, and also every Monday". This
//! module flags that trap so the UI can warn about it.

use crate::expression::{split_fields, DAY_OF_MONTH_INDEX, DAY_OF_WEEK_INDEX, FIELD_SPECS};

/// True when the day-of-month and day-of-week fields are both pinned to
/// exact values, which standard cron engines combine with OR semantics.
///
/// This is a textual heuristic, not a validator: it runs on fields that
/// would fail numeric validation, and it never fails itself. Fewer than
/// five fields simply yields `false`.
pub fn detect_ambiguous_schedule(expr: &str) -> bool {
    let fields = split_fields(expr);
    if fields.len() < FIELD_SPECS.len() {
        return false;
    }
    is_pinned(fields[DAY_OF_MONTH_INDEX]) && is_pinned(fields[DAY_OF_WEEK_INDEX])
}

/// A field is pinned when it is not a wildcard and uses no step, range,
/// or list syntax.
fn is_pinned(field: &str) -> bool {
    field != "*" && !field.contains(['/', '-', ','])
}
