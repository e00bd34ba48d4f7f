// Delete a shift and leave a readable trace of what was removed.
//
// Responsibilities
// - Read the shift and its driver first so the audit row can describe them.
// - Delete by id; a shift that is already gone is not audited.

use crate::modules::shifts::core::driver::{Driver, UNKNOWN_DRIVER};
use crate::modules::shifts::core::shift::Shift;
use crate::shared::core::errors::ApplicationError;
use crate::shared::core::validation::require_id;
use crate::shared::infrastructure::audit_log::{AuditAction, AuditTrail};
use crate::shared::infrastructure::record_store::{Filter, Query, Record, SharedStore};
use std::sync::Arc;

pub struct DeleteShiftHandler {
    shifts: SharedStore<Shift>,
    drivers: SharedStore<Driver>,
    audit: Arc<AuditTrail>,
}

impl DeleteShiftHandler {
    pub fn new(shifts: SharedStore<Shift>, drivers: SharedStore<Driver>, audit: Arc<AuditTrail>) -> Self {
        Self {
            shifts,
            drivers,
            audit,
        }
    }

    pub async fn handle(&self, user_id: &str, id: &str) -> Result<(), ApplicationError> {
        let id = require_id(id)?;
        let by_id = Filter::eq("id", id.as_str());

        let existing = self
            .shifts
            .select(&Query::new().filter(by_id.clone()).limit(1))
            .await
            .map_err(|err| {
                tracing::error!(%id, error = %err, "error reading shift before delete");
                ApplicationError::Store(err)
            })?;
        let Some(shift) = existing.into_iter().next() else {
            tracing::info!(%id, "shift already gone");
            return Ok(());
        };
        let driver_name = self.driver_name(&shift.driver_id).await;

        self.shifts.delete(&[by_id]).await.map_err(|err| {
            tracing::error!(%id, error = %err, "error deleting shift");
            ApplicationError::Store(err)
        })?;
        tracing::info!(%id, "shift deleted");

        self.audit
            .record(
                user_id,
                AuditAction::Delete,
                Shift::TABLE,
                shift.deletion_details(&driver_name),
            )
            .await
    }

    async fn driver_name(&self, driver_id: &str) -> String {
        let query = Query::new().filter(Filter::eq("id", driver_id)).limit(1);
        self.drivers
            .select(&query)
            .await
            .ok()
            .and_then(|drivers| drivers.into_iter().next())
            .map(|d| d.name)
            .unwrap_or_else(|| UNKNOWN_DRIVER.to_string())
    }
}
