// Monthly report for one driver: the month's entries in date order plus their totals.

use crate::modules::time_entries::core::time_entry::{HoursTotals, TimeEntry};
use crate::shared::core::month::Month;
use chrono::NaiveDate;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthlyReport {
    pub driver_name: String,
    pub month: Month,
    pub period_start: NaiveDate,
    pub period_end: NaiveDate,
    pub entries: Vec<TimeEntry>,
    pub summary: HoursTotals,
}

impl MonthlyReport {
    pub fn build(driver_name: impl Into<String>, month: Month, entries: Vec<TimeEntry>) -> Self {
        let (period_start, period_end) = month.date_range();
        let summary = HoursTotals::of(&entries);
        Self {
            driver_name: driver_name.into(),
            month,
            period_start,
            period_end,
            entries,
            summary,
        }
    }
}
