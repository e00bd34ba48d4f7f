// Driver roster owned by the signed-in boss.
//
// Responsibilities
// - List drivers by name, degrading to an empty list.
// - Add and delete drivers, each followed by an audit row.

use crate::modules::shifts::core::driver::{Driver, UNKNOWN_DRIVER};
use crate::shared::core::errors::ApplicationError;
use crate::shared::core::validation::{require_id, require_text};
use crate::shared::infrastructure::audit_log::{AuditAction, AuditTrail};
use crate::shared::infrastructure::record_store::{
    Direction, Filter, Query, Record, SharedStore,
};
use std::sync::Arc;
use uuid::Uuid;

pub struct ManageDriversHandler {
    store: SharedStore<Driver>,
    audit: Arc<AuditTrail>,
}

impl ManageDriversHandler {
    pub fn new(store: SharedStore<Driver>, audit: Arc<AuditTrail>) -> Self {
        Self { store, audit }
    }

    pub async fn list(&self) -> Vec<Driver> {
        let query = Query::new().order_by("name", Direction::Ascending);
        match self.store.select(&query).await {
            Ok(drivers) => drivers,
            Err(err) => {
                tracing::error!(error = %err, "error fetching drivers");
                Vec::new()
            }
        }
    }

    pub async fn add(&self, user_id: &str, name: &str) -> Result<Driver, ApplicationError> {
        let driver = Driver {
            id: Uuid::now_v7().to_string(),
            name: require_text("name", name)?,
            boss_id: user_id.to_string(),
        };

        let stored = self.store.insert(driver).await.map_err(|err| {
            tracing::error!(error = %err, "error adding driver");
            ApplicationError::Store(err)
        })?;
        tracing::info!(id = %stored.id, name = %stored.name, "driver added");

        self.audit
            .record(
                user_id,
                AuditAction::Insert,
                Driver::TABLE,
                format!("New driver: {} (ID: {})", stored.name, stored.id),
            )
            .await?;
        Ok(stored)
    }

    pub async fn delete(&self, user_id: &str, id: &str) -> Result<(), ApplicationError> {
        let id = require_id(id)?;
        let by_id = Filter::eq("id", id.as_str());

        let existing = self
            .store
            .select(&Query::new().filter(by_id.clone()).limit(1))
            .await
            .map_err(|err| {
                tracing::error!(%id, error = %err, "error fetching driver before delete");
                ApplicationError::Store(err)
            })?;
        let name = existing
            .first()
            .map(|d| d.name.as_str())
            .unwrap_or(UNKNOWN_DRIVER)
            .to_string();

        let deleted = self.store.delete(&[by_id]).await.map_err(|err| {
            tracing::error!(%id, error = %err, "error deleting driver");
            ApplicationError::Store(err)
        })?;
        if deleted == 0 {
            tracing::info!(%id, "driver already gone");
            return Ok(());
        }
        tracing::info!(%id, "driver deleted");

        self.audit
            .record(
                user_id,
                AuditAction::Delete,
                Driver::TABLE,
                format!("DELETED: driver {name} (ID: {id})"),
            )
            .await
    }
}
