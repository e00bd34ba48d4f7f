use crate::modules::time_entries::core::time_entry::TimeEntry;
use crate::shared::core::errors::ApplicationError;
use crate::shared::core::validation::require_id;
use crate::shared::infrastructure::record_store::{Filter, SharedStore};

pub struct DeleteTimeEntryHandler {
    store: SharedStore<TimeEntry>,
}

impl DeleteTimeEntryHandler {
    pub fn new(store: SharedStore<TimeEntry>) -> Self {
        Self { store }
    }

    /// Deleting an id that no longer exists is not an error.
    pub async fn handle(&self, id: &str) -> Result<(), ApplicationError> {
        let id = require_id(id)?;
        let deleted = self
            .store
            .delete(&[Filter::eq("id", id.as_str())])
            .await
            .map_err(|err| {
                tracing::error!(%id, error = %err, "error deleting time entry");
                ApplicationError::Store(err)
            })?;
        tracing::info!(%id, deleted, "time entry deleted");
        Ok(())
    }
}
