//! Human-readable presentation helpers.
//!
//! The engine computes in raw minutes; conversion to days and text
//! formatting happen only here, at the presentation edge.

use crate::schedule::CriticalPathResult;

/// Minutes in a calendar day.
pub const MINUTES_IN_DAY: f64 = 60.0 * 24.0;

/// Convert raw minutes to fractional days.
#[must_use]
pub fn minutes_to_days(minutes: f64) -> f64 {
    minutes / MINUTES_IN_DAY
}

/// Render a short two-line summary of a critical path computation.
#[must_use]
pub fn format_critical_path_summary(result: &CriticalPathResult) -> String {
    let days = minutes_to_days(result.project_duration);
    let path = if result.critical_path.is_empty() {
        "(none)".to_string()
    } else {
        result.critical_path.join(" -> ")
    };
    format!("Critical path length: {days:.2} days\nNodes: {path}")
}
