use crate::modules::time_entries::core::driver_stats::{DriverStat, aggregate_driver_stats};
use crate::modules::time_entries::core::time_entry::TimeEntry;
use crate::shared::infrastructure::record_store::{Query, SharedStore};

pub struct DriverLeaderboardHandler {
    store: SharedStore<TimeEntry>,
}

impl DriverLeaderboardHandler {
    pub fn new(store: SharedStore<TimeEntry>) -> Self {
        Self { store }
    }

    pub async fn handle(&self) -> Vec<DriverStat> {
        match self.store.select(&Query::new()).await {
            Ok(entries) => aggregate_driver_stats(&entries),
            Err(err) => {
                tracing::error!(error = %err, "error fetching driver stats");
                Vec::new()
            }
        }
    }
}
