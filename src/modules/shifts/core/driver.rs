// Driver record and name resolution for shift listings and reports.

use crate::shared::infrastructure::record_store::{FieldValue, Query, Record, SharedStore};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

pub const UNKNOWN_DRIVER: &str = "Unknown";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Driver {
    pub id: String,
    pub name: String,
    pub boss_id: String,
}

impl Record for Driver {
    const TABLE: &'static str = "drivers";

    fn id(&self) -> &str {
        &self.id
    }

    fn field(&self, column: &str) -> Option<FieldValue> {
        match column {
            "id" => Some(self.id.as_str().into()),
            "name" => Some(self.name.as_str().into()),
            "boss_id" => Some(self.boss_id.as_str().into()),
            _ => None,
        }
    }
}

/// Driver id to name, falling back to "Unknown" for ids with no driver row.
#[derive(Debug, Default)]
pub struct DriverDirectory {
    names: HashMap<String, String>,
}

impl DriverDirectory {
    /// An unreadable drivers table leaves every name as "Unknown".
    pub async fn load(store: &SharedStore<Driver>) -> Self {
        match store.select(&Query::new()).await {
            Ok(drivers) => drivers.into_iter().collect(),
            Err(err) => {
                tracing::error!(error = %err, "error fetching driver names");
                Self::default()
            }
        }
    }

    pub fn name_of(&self, driver_id: &str) -> &str {
        self.names
            .get(driver_id)
            .map(String::as_str)
            .unwrap_or(UNKNOWN_DRIVER)
    }
}

impl FromIterator<Driver> for DriverDirectory {
    fn from_iter<I: IntoIterator<Item = Driver>>(drivers: I) -> Self {
        Self {
            names: drivers.into_iter().map(|d| (d.id, d.name)).collect(),
        }
    }
}
