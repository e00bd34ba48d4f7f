// Net worked hours: elapsed time minus the break.

use crate::shared::core::validation::ValidationError;
use chrono::{DateTime, TimeDelta, Utc};

/// Writes must leave some worked time after the break.
pub fn ensure_break_fits(elapsed: TimeDelta, break_minutes: u32) -> Result<(), ValidationError> {
    let elapsed_minutes = elapsed.num_minutes();
    if i64::from(break_minutes) >= elapsed_minutes {
        return Err(ValidationError::BreakExceedsShift {
            break_minutes,
            elapsed_minutes,
        });
    }
    Ok(())
}

/// Clamped at zero for rows written before the break check existed.
pub fn net_hours(start: DateTime<Utc>, end: DateTime<Utc>, break_minutes: u32) -> f64 {
    let elapsed = (end - start).num_seconds() as f64 / 3600.0;
    (elapsed - f64::from(break_minutes) / 60.0).max(0.0)
}

pub fn format_hours(hours: f64) -> String {
    format!("{hours:.2}")
}
