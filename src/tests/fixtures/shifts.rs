// Shared builders for driver and shift records.

use crate::modules::shifts::core::driver::Driver;
use crate::modules::shifts::core::shift::Shift;
use chrono::{DateTime, Utc};

fn timestamp(raw: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(raw).unwrap().with_timezone(&Utc)
}

pub struct DriverBuilder {
    inner: Driver,
}

impl Default for DriverBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl DriverBuilder {
    pub fn new() -> Self {
        Self {
            inner: Driver {
                id: "driver-fixed-0001".to_string(),
                name: "Anna de Vries".to_string(),
                boss_id: "user-fixed-0001".to_string(),
            },
        }
    }

    pub fn id(mut self, v: impl Into<String>) -> Self {
        self.inner.id = v.into();
        self
    }

    pub fn name(mut self, v: impl Into<String>) -> Self {
        self.inner.name = v.into();
        self
    }

    pub fn boss_id(mut self, v: impl Into<String>) -> Self {
        self.inner.boss_id = v.into();
        self
    }

    pub fn build(self) -> Driver {
        self.inner
    }
}

/// Defaults to a six hour day shift, short enough to carry no break.
pub struct ShiftBuilder {
    inner: Shift,
}

impl Default for ShiftBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl ShiftBuilder {
    pub fn new() -> Self {
        Self {
            inner: Shift {
                id: "shift-fixed-0001".to_string(),
                user_id: "user-fixed-0001".to_string(),
                driver_id: "driver-fixed-0001".to_string(),
                start_time: timestamp("2024-03-10T08:00:00Z"),
                end_time: timestamp("2024-03-10T14:00:00Z"),
                break_minutes: 0,
            },
        }
    }

    pub fn id(mut self, v: impl Into<String>) -> Self {
        self.inner.id = v.into();
        self
    }

    pub fn user_id(mut self, v: impl Into<String>) -> Self {
        self.inner.user_id = v.into();
        self
    }

    pub fn driver_id(mut self, v: impl Into<String>) -> Self {
        self.inner.driver_id = v.into();
        self
    }

    /// RFC 3339 start and end, e.g. "2024-03-10T22:00:00Z".
    pub fn window(mut self, start: &str, end: &str) -> Self {
        self.inner.start_time = timestamp(start);
        self.inner.end_time = timestamp(end);
        self
    }

    pub fn break_minutes(mut self, v: u32) -> Self {
        self.inner.break_minutes = v;
        self
    }

    pub fn build(self) -> Shift {
        self.inner
    }
}
