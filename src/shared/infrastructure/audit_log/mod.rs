// Append-only audit trail written after each driver and shift mutation.
//
// Responsibilities
// - Build the audit row (who, what, which table, human readable details).
// - Write it as a second, independent insert after the primary mutation.
// - Best effort by default: a failed audit write is logged and the mutation stands.
//   With `required` set, the failure is returned to the caller instead.

use crate::shared::core::errors::ApplicationError;
use crate::shared::infrastructure::record_store::{FieldValue, Record, SharedStore};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum AuditAction {
    Insert,
    Delete,
}

impl AuditAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            AuditAction::Insert => "INSERT",
            AuditAction::Delete => "DELETE",
        }
    }
}

impl fmt::Display for AuditAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditLogEntry {
    pub id: String,
    pub user_id: String,
    pub action: AuditAction,
    pub table_name: String,
    pub details: String,
    pub created_at: DateTime<Utc>,
}

impl Record for AuditLogEntry {
    const TABLE: &'static str = "audit_logs";

    fn id(&self) -> &str {
        &self.id
    }

    fn field(&self, column: &str) -> Option<FieldValue> {
        match column {
            "id" => Some(self.id.as_str().into()),
            "user_id" => Some(self.user_id.as_str().into()),
            "action" => Some(self.action.as_str().into()),
            "table_name" => Some(self.table_name.as_str().into()),
            "created_at" => Some(self.created_at.into()),
            _ => None,
        }
    }
}

pub struct AuditTrail {
    store: SharedStore<AuditLogEntry>,
    required: bool,
}

impl AuditTrail {
    pub fn new(store: SharedStore<AuditLogEntry>, required: bool) -> Self {
        Self { store, required }
    }

    pub async fn record(
        &self,
        user_id: &str,
        action: AuditAction,
        table_name: &str,
        details: String,
    ) -> Result<(), ApplicationError> {
        let entry = AuditLogEntry {
            id: Uuid::now_v7().to_string(),
            user_id: user_id.to_string(),
            action,
            table_name: table_name.to_string(),
            details,
            created_at: Utc::now(),
        };

        match self.store.insert(entry).await {
            Ok(_) => Ok(()),
            Err(err) if self.required => {
                tracing::error!(%action, table_name, error = %err, "audit log write failed");
                Err(ApplicationError::Audit(err))
            }
            Err(err) => {
                tracing::warn!(%action, table_name, error = %err, "audit log write failed, mutation kept");
                Ok(())
            }
        }
    }
}
