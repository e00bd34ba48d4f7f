// Monthly shift report, for one driver or the whole roster.
//
// Responsibilities
// - Select shifts starting on or after the first day 00:00 and ending on or
//   before the last day 23:59:59, oldest first.
// - Join driver names and sum net hours and breaks.
// - Return None when the shift store fails.

use crate::modules::shifts::core::driver::{Driver, DriverDirectory};
use crate::modules::shifts::core::report::ShiftReport;
use crate::modules::shifts::core::shift::Shift;
use crate::shared::core::month::Month;
use crate::shared::infrastructure::record_store::{Direction, Filter, Query, SharedStore};

pub struct ShiftReportHandler {
    shifts: SharedStore<Shift>,
    drivers: SharedStore<Driver>,
}

impl ShiftReportHandler {
    pub fn new(shifts: SharedStore<Shift>, drivers: SharedStore<Driver>) -> Self {
        Self { shifts, drivers }
    }

    pub async fn handle(&self, driver_id: Option<String>, month: Month) -> Option<ShiftReport> {
        let driver_id = driver_id.filter(|id| !id.trim().is_empty());
        let (start, end) = month.timestamp_range();
        let mut query = Query::new()
            .filter(Filter::gte("start_time", start))
            .filter(Filter::lte("end_time", end))
            .order_by("start_time", Direction::Ascending);
        if let Some(id) = &driver_id {
            query = query.filter(Filter::eq("driver_id", id.as_str()));
        }

        let shifts = match self.shifts.select(&query).await {
            Ok(shifts) => shifts,
            Err(err) => {
                tracing::error!(%month, error = %err, "error fetching shift report");
                return None;
            }
        };
        let directory = DriverDirectory::load(&self.drivers).await;
        Some(ShiftReport::build(driver_id, month, shifts, &directory))
    }
}
