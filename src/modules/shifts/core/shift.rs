// Shift record: one driver's working window with its policy-derived break.

use crate::modules::shifts::core::net_duration::net_hours;
use crate::shared::infrastructure::record_store::{FieldValue, Record};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shift {
    pub id: String,
    pub user_id: String,
    pub driver_id: String,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub break_minutes: u32,
}

impl Shift {
    pub fn net_hours(&self) -> f64 {
        net_hours(self.start_time, self.end_time, self.break_minutes)
    }

    /// Audit line written when the shift is deleted.
    pub fn deletion_details(&self, driver_name: &str) -> String {
        format!(
            "DELETED: shift of {driver_name} | date: {} | time: {}-{} | (ID: {})",
            self.start_time.format("%Y-%m-%d"),
            self.start_time.format("%H:%M"),
            self.end_time.format("%H:%M"),
            self.id,
        )
    }
}

impl Record for Shift {
    const TABLE: &'static str = "shifts";

    fn id(&self) -> &str {
        &self.id
    }

    fn field(&self, column: &str) -> Option<FieldValue> {
        match column {
            "id" => Some(self.id.as_str().into()),
            "user_id" => Some(self.user_id.as_str().into()),
            "driver_id" => Some(self.driver_id.as_str().into()),
            "start_time" => Some(self.start_time.into()),
            "end_time" => Some(self.end_time.into()),
            "break_minutes" => Some(FieldValue::Integer(i64::from(self.break_minutes))),
            _ => None,
        }
    }
}
