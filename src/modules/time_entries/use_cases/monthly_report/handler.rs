// Monthly report for one driver.
//
// Responsibilities
// - Select the driver's entries inside the month, oldest first.
// - Summarize them.
// - Return None when the store fails so the caller can show "report unavailable".

use crate::modules::time_entries::core::monthly_report::MonthlyReport;
use crate::modules::time_entries::core::time_entry::TimeEntry;
use crate::shared::core::month::Month;
use crate::shared::core::validation::{ValidationError, require_text};
use crate::shared::infrastructure::record_store::{Direction, Filter, Query, SharedStore};

pub struct MonthlyReportHandler {
    store: SharedStore<TimeEntry>,
}

impl MonthlyReportHandler {
    pub fn new(store: SharedStore<TimeEntry>) -> Self {
        Self { store }
    }

    pub async fn handle(
        &self,
        driver_name: &str,
        month: Month,
    ) -> Result<Option<MonthlyReport>, ValidationError> {
        let driver_name = require_text("driver", driver_name)?;
        let (start, end) = month.date_range();
        let query = Query::new()
            .filter(Filter::eq("driver_name", driver_name.as_str()))
            .filter(Filter::gte("work_date", start))
            .filter(Filter::lte("work_date", end))
            .order_by("work_date", Direction::Ascending);

        match self.store.select(&query).await {
            Ok(entries) => Ok(Some(MonthlyReport::build(driver_name, month, entries))),
            Err(err) => {
                tracing::error!(%driver_name, %month, error = %err, "error fetching monthly report");
                Ok(None)
            }
        }
    }
}
