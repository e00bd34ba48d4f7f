// Record a shift for a driver.
//
// Responsibilities
// - Resolve the working window, rolling overnight ends into the next day.
// - Derive the break from the policy and refuse shifts it would swallow.
// - Insert the shift for the signed-in user, then audit it under the driver's name.

use crate::modules::shifts::core::break_policy::{BreakPolicy, ShiftWindow};
use crate::modules::shifts::core::driver::{Driver, UNKNOWN_DRIVER};
use crate::modules::shifts::core::net_duration::ensure_break_fits;
use crate::modules::shifts::core::shift::Shift;
use crate::modules::shifts::use_cases::record_shift::command::RecordShift;
use crate::shared::core::errors::ApplicationError;
use crate::shared::infrastructure::audit_log::{AuditAction, AuditTrail};
use crate::shared::infrastructure::record_store::{Filter, Query, Record, SharedStore};
use std::sync::Arc;
use uuid::Uuid;

pub struct RecordShiftHandler {
    shifts: SharedStore<Shift>,
    drivers: SharedStore<Driver>,
    audit: Arc<AuditTrail>,
    policy: BreakPolicy,
}

impl RecordShiftHandler {
    pub fn new(
        shifts: SharedStore<Shift>,
        drivers: SharedStore<Driver>,
        audit: Arc<AuditTrail>,
        policy: BreakPolicy,
    ) -> Self {
        Self {
            shifts,
            drivers,
            audit,
            policy,
        }
    }

    pub async fn handle(&self, user_id: &str, command: RecordShift) -> Result<Shift, ApplicationError> {
        let window = ShiftWindow::resolve(command.date, command.start_time, command.end_time);
        let break_minutes = self.policy.break_minutes(window.elapsed());
        ensure_break_fits(window.elapsed(), break_minutes)?;

        let shift = Shift {
            id: Uuid::now_v7().to_string(),
            user_id: user_id.to_string(),
            driver_id: command.driver_id,
            start_time: window.start,
            end_time: window.end,
            break_minutes,
        };

        let stored = self.shifts.insert(shift).await.map_err(|err| {
            tracing::error!(error = %err, "error recording shift");
            ApplicationError::Store(err)
        })?;
        tracing::info!(id = %stored.id, driver_id = %stored.driver_id, break_minutes, "shift recorded");

        let driver_name = self.driver_name(&stored.driver_id).await;
        self.audit
            .record(
                user_id,
                AuditAction::Insert,
                Shift::TABLE,
                format!("New shift: {driver_name} on {}", command.date),
            )
            .await?;
        Ok(stored)
    }

    async fn driver_name(&self, driver_id: &str) -> String {
        let query = Query::new().filter(Filter::eq("id", driver_id)).limit(1);
        match self.drivers.select(&query).await {
            Ok(drivers) => drivers
                .into_iter()
                .next()
                .map(|d| d.name)
                .unwrap_or_else(|| UNKNOWN_DRIVER.to_string()),
            Err(err) => {
                tracing::warn!(%driver_id, error = %err, "driver name unavailable for audit details");
                UNKNOWN_DRIVER.to_string()
            }
        }
    }
}
