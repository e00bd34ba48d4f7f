use crate::modules::shifts::core::driver::{Driver, DriverDirectory};
use crate::modules::shifts::core::report::ShiftRow;
use crate::modules::shifts::core::shift::Shift;
use crate::shared::infrastructure::record_store::{Direction, Query, SharedStore};

pub struct ListShiftsHandler {
    shifts: SharedStore<Shift>,
    drivers: SharedStore<Driver>,
}

impl ListShiftsHandler {
    pub fn new(shifts: SharedStore<Shift>, drivers: SharedStore<Driver>) -> Self {
        Self { shifts, drivers }
    }

    /// Latest shift first, each joined with its driver's name.
    pub async fn handle(&self) -> Vec<ShiftRow> {
        let query = Query::new().order_by("start_time", Direction::Descending);
        let shifts = match self.shifts.select(&query).await {
            Ok(shifts) => shifts,
            Err(err) => {
                tracing::error!(error = %err, "error fetching shifts");
                return Vec::new();
            }
        };
        let directory = DriverDirectory::load(&self.drivers).await;
        shifts
            .into_iter()
            .map(|shift| ShiftRow::new(shift, &directory))
            .collect()
    }
}
