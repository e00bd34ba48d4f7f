// Shared builders for time entry records and the AddTimeEntry command.
// Defaults come from json/add_time_entry.json, the shape a form submission produces.

use crate::modules::time_entries::core::time_entry::TimeEntry;
use crate::modules::time_entries::use_cases::add_time_entry::command::AddTimeEntry;
use chrono::NaiveDate;
use serde::Deserialize;

// JSON -> DTO (transport shape)
#[derive(Debug, Clone, Deserialize)]
pub struct AddTimeEntryDto {
    pub driver_name: String,
    pub work_date: NaiveDate,
    pub target_hours: f64,
    pub actual_hours: f64,
}

fn default_dto() -> AddTimeEntryDto {
    serde_json::from_str(include_str!("json/add_time_entry.json")).unwrap()
}

pub struct AddTimeEntryBuilder {
    inner: AddTimeEntry,
}

impl Default for AddTimeEntryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl AddTimeEntryBuilder {
    pub fn new() -> Self {
        let dto = default_dto();
        Self {
            inner: AddTimeEntry {
                driver_name: dto.driver_name,
                work_date: dto.work_date,
                target_hours: dto.target_hours,
                actual_hours: dto.actual_hours,
            },
        }
    }

    pub fn driver_name(mut self, v: impl Into<String>) -> Self {
        self.inner.driver_name = v.into();
        self
    }

    pub fn work_date(mut self, v: NaiveDate) -> Self {
        self.inner.work_date = v;
        self
    }

    pub fn target_hours(mut self, v: f64) -> Self {
        self.inner.target_hours = v;
        self
    }

    pub fn actual_hours(mut self, v: f64) -> Self {
        self.inner.actual_hours = v;
        self
    }

    pub fn build(self) -> AddTimeEntry {
        self.inner
    }
}

pub struct TimeEntryBuilder {
    inner: TimeEntry,
}

impl Default for TimeEntryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl TimeEntryBuilder {
    pub fn new() -> Self {
        let dto = default_dto();
        Self {
            inner: TimeEntry {
                id: "entry-fixed-0001".to_string(),
                driver_name: dto.driver_name,
                work_date: dto.work_date,
                target_hours: dto.target_hours,
                actual_hours: dto.actual_hours,
            },
        }
    }

    pub fn id(mut self, v: impl Into<String>) -> Self {
        self.inner.id = v.into();
        self
    }

    pub fn driver_name(mut self, v: impl Into<String>) -> Self {
        self.inner.driver_name = v.into();
        self
    }

    pub fn work_date(mut self, v: NaiveDate) -> Self {
        self.inner.work_date = v;
        self
    }

    pub fn target_hours(mut self, v: f64) -> Self {
        self.inner.target_hours = v;
        self
    }

    pub fn actual_hours(mut self, v: f64) -> Self {
        self.inner.actual_hours = v;
        self
    }

    pub fn build(self) -> TimeEntry {
        self.inner
    }
}
