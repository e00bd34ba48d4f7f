// Time entry record: hours a driver was planned for and actually worked on a date.
//
// Responsibilities
// - Typed row of the `time_entries` table.
// - Per entry difference and its status label.
// - Summation of target, actual and balance over any set of entries.

use crate::shared::infrastructure::record_store::{FieldValue, Record};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeEntry {
    pub id: String,
    pub driver_name: String,
    pub work_date: NaiveDate,
    pub target_hours: f64,
    pub actual_hours: f64,
}

impl TimeEntry {
    pub fn difference(&self) -> f64 {
        self.actual_hours - self.target_hours
    }

    pub fn performance(&self) -> Performance {
        Performance::of(self.difference())
    }
}

impl Record for TimeEntry {
    const TABLE: &'static str = "time_entries";

    fn id(&self) -> &str {
        &self.id
    }

    fn field(&self, column: &str) -> Option<FieldValue> {
        match column {
            "id" => Some(self.id.as_str().into()),
            "driver_name" => Some(self.driver_name.as_str().into()),
            "work_date" => Some(self.work_date.into()),
            "target_hours" => Some(FieldValue::Number(self.target_hours)),
            "actual_hours" => Some(FieldValue::Number(self.actual_hours)),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Performance {
    Overperform,
    Underperform,
    Exact,
}

impl Performance {
    pub fn of(difference: f64) -> Self {
        if difference > 0.0 {
            Performance::Overperform
        } else if difference < 0.0 {
            Performance::Underperform
        } else {
            Performance::Exact
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct HoursTotals {
    pub total_target: f64,
    pub total_actual: f64,
    pub balance: f64,
}

impl HoursTotals {
    pub fn of<'a>(entries: impl IntoIterator<Item = &'a TimeEntry>) -> Self {
        let (total_target, total_actual) = entries
            .into_iter()
            .fold((0.0, 0.0), |(target, actual), entry| {
                (target + entry.target_hours, actual + entry.actual_hours)
            });
        Self {
            total_target,
            total_actual,
            balance: total_actual - total_target,
        }
    }
}
