// Shift listing rows and the monthly shift report.
//
// Responsibilities
// - Join shifts with driver names and their net hours.
// - Sum net hours and break minutes over a month, optionally for one driver.

use crate::modules::shifts::core::driver::DriverDirectory;
use crate::modules::shifts::core::net_duration::format_hours;
use crate::modules::shifts::core::shift::Shift;
use crate::shared::core::month::Month;
use chrono::NaiveDate;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShiftRow {
    #[serde(flatten)]
    pub shift: Shift,
    pub driver_name: String,
    pub net_hours: String,
}

impl ShiftRow {
    pub fn new(shift: Shift, directory: &DriverDirectory) -> Self {
        Self {
            driver_name: directory.name_of(&shift.driver_id).to_string(),
            net_hours: format_hours(shift.net_hours()),
            shift,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct ShiftTotals {
    pub total_hours: f64,
    pub total_break_minutes: u64,
}

impl ShiftTotals {
    pub fn of<'a>(shifts: impl IntoIterator<Item = &'a Shift>) -> Self {
        shifts.into_iter().fold(Self::default(), |totals, shift| Self {
            total_hours: totals.total_hours + shift.net_hours(),
            total_break_minutes: totals.total_break_minutes + u64::from(shift.break_minutes),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShiftReport {
    pub driver_id: Option<String>,
    pub month: Month,
    pub period_start: NaiveDate,
    pub period_end: NaiveDate,
    pub rows: Vec<ShiftRow>,
    pub summary: ShiftTotals,
}

impl ShiftReport {
    pub fn build(
        driver_id: Option<String>,
        month: Month,
        shifts: Vec<Shift>,
        directory: &DriverDirectory,
    ) -> Self {
        let (period_start, period_end) = month.date_range();
        let summary = ShiftTotals::of(&shifts);
        let rows = shifts
            .into_iter()
            .map(|shift| ShiftRow::new(shift, directory))
            .collect();
        Self {
            driver_id,
            month,
            period_start,
            period_end,
            rows,
            summary,
        }
    }
}
