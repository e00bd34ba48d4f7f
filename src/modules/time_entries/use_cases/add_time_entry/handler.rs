use crate::modules::time_entries::core::time_entry::TimeEntry;
use crate::modules::time_entries::use_cases::add_time_entry::command::AddTimeEntry;
use crate::shared::core::errors::ApplicationError;
use crate::shared::infrastructure::record_store::SharedStore;
use uuid::Uuid;

pub struct AddTimeEntryHandler {
    store: SharedStore<TimeEntry>,
}

impl AddTimeEntryHandler {
    pub fn new(store: SharedStore<TimeEntry>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, command: AddTimeEntry) -> Result<TimeEntry, ApplicationError> {
        let command = command.validate()?;
        let entry = TimeEntry {
            id: Uuid::now_v7().to_string(),
            driver_name: command.driver_name,
            work_date: command.work_date,
            target_hours: command.target_hours,
            actual_hours: command.actual_hours,
        };

        let stored = self.store.insert(entry).await.map_err(|err| {
            tracing::error!(error = %err, "error adding time entry");
            ApplicationError::Store(err)
        })?;
        tracing::info!(id = %stored.id, driver_name = %stored.driver_name, "time entry added");
        Ok(stored)
    }
}
