// Read side of the dashboard: entry history with overall totals, and the driver picker.
//
// Read failures are logged and degrade to empty results; the dashboard shows "no data".

use crate::modules::time_entries::core::time_entry::{HoursTotals, TimeEntry};
use crate::shared::infrastructure::record_store::{Direction, Query, SharedStore};
use serde::Serialize;
use std::collections::BTreeSet;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimeEntriesOverview {
    pub entries: Vec<TimeEntry>,
    pub totals: HoursTotals,
}

pub struct ListTimeEntriesHandler {
    store: SharedStore<TimeEntry>,
}

impl ListTimeEntriesHandler {
    pub fn new(store: SharedStore<TimeEntry>) -> Self {
        Self { store }
    }

    pub async fn handle(&self) -> TimeEntriesOverview {
        let query = Query::new().order_by("work_date", Direction::Descending);
        let entries = match self.store.select(&query).await {
            Ok(entries) => entries,
            Err(err) => {
                tracing::error!(error = %err, "error fetching time entries");
                Vec::new()
            }
        };
        let totals = HoursTotals::of(&entries);
        TimeEntriesOverview { entries, totals }
    }

    /// Distinct driver names in alphabetical order.
    pub async fn driver_names(&self) -> Vec<String> {
        match self.store.select(&Query::new()).await {
            Ok(entries) => entries
                .into_iter()
                .map(|entry| entry.driver_name)
                .collect::<BTreeSet<_>>()
                .into_iter()
                .collect(),
            Err(err) => {
                tracing::error!(error = %err, "error fetching driver names");
                Vec::new()
            }
        }
    }
}
