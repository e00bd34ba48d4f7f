use crate::shared::infrastructure::audit_log::AuditLogEntry;
use crate::shared::infrastructure::record_store::{Direction, Query, SharedStore};

pub const AUDIT_LOG_PAGE: usize = 50;

pub struct ListAuditLogsHandler {
    store: SharedStore<AuditLogEntry>,
}

impl ListAuditLogsHandler {
    pub fn new(store: SharedStore<AuditLogEntry>) -> Self {
        Self { store }
    }

    pub async fn handle(&self) -> Vec<AuditLogEntry> {
        let query = Query::new()
            .order_by("created_at", Direction::Descending)
            .limit(AUDIT_LOG_PAGE);
        match self.store.select(&query).await {
            Ok(entries) => entries,
            Err(err) => {
                tracing::error!(error = %err, "error fetching audit logs");
                Vec::new()
            }
        }
    }
}
