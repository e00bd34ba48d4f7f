// Command data type for adding a time entry.
//
// Purpose
// - Express the intent to record target and actual hours for a driver on a date.
//
// Responsibilities
// - Carry input data for the handler, independent of HTTP or GraphQL.
// - Validate itself before anything reaches the store.

use crate::shared::core::validation::{ValidationError, require_hours, require_text};
use chrono::NaiveDate;

#[derive(Debug, Clone, PartialEq)]
pub struct AddTimeEntry {
    pub driver_name: String,
    pub work_date: NaiveDate,
    pub target_hours: f64,
    pub actual_hours: f64,
}

impl AddTimeEntry {
    pub fn validate(self) -> Result<Self, ValidationError> {
        Ok(Self {
            driver_name: require_text("driver_name", &self.driver_name)?,
            work_date: self.work_date,
            target_hours: require_hours("target_hours", self.target_hours)?,
            actual_hours: require_hours("actual_hours", self.actual_hours)?,
        })
    }
}
