use async_graphql::{Context, Enum, ID, Object, Result as GqlResult, SimpleObject};
use chrono::NaiveDate;

use crate::modules::time_entries::core::driver_stats::DriverStat;
use crate::modules::time_entries::core::monthly_report::MonthlyReport;
use crate::modules::time_entries::core::time_entry::{HoursTotals, Performance, TimeEntry};
use crate::modules::time_entries::use_cases::add_time_entry::command::AddTimeEntry;
use crate::shared::core::month::Month;
use crate::shared::core::validation::{parse_date, require_hours};
use crate::shared::infrastructure::identity::Session;
use crate::shell::state::AppState;

#[derive(Enum, Clone, Copy, PartialEq, Eq)]
pub enum GqlPerformance {
    Overperform,
    Underperform,
    Exact,
}

impl From<Performance> for GqlPerformance {
    fn from(performance: Performance) -> Self {
        match performance {
            Performance::Overperform => GqlPerformance::Overperform,
            Performance::Underperform => GqlPerformance::Underperform,
            Performance::Exact => GqlPerformance::Exact,
        }
    }
}

#[derive(SimpleObject, Clone)]
pub struct GqlTimeEntry {
    pub id: ID,
    pub driver_name: String,
    pub work_date: NaiveDate,
    pub target_hours: f64,
    pub actual_hours: f64,
    pub difference: f64,
    pub performance: GqlPerformance,
}

impl From<TimeEntry> for GqlTimeEntry {
    fn from(entry: TimeEntry) -> Self {
        Self {
            difference: entry.difference(),
            performance: entry.performance().into(),
            id: ID(entry.id),
            driver_name: entry.driver_name,
            work_date: entry.work_date,
            target_hours: entry.target_hours,
            actual_hours: entry.actual_hours,
        }
    }
}

#[derive(SimpleObject, Clone)]
pub struct GqlHoursTotals {
    pub total_target: f64,
    pub total_actual: f64,
    pub balance: f64,
}

impl From<HoursTotals> for GqlHoursTotals {
    fn from(totals: HoursTotals) -> Self {
        Self {
            total_target: totals.total_target,
            total_actual: totals.total_actual,
            balance: totals.balance,
        }
    }
}

#[derive(SimpleObject, Clone)]
pub struct GqlTimeEntries {
    pub entries: Vec<GqlTimeEntry>,
    pub totals: GqlHoursTotals,
}

#[derive(SimpleObject, Clone)]
pub struct GqlDriverStat {
    pub driver_name: String,
    pub total_target: f64,
    pub total_actual: f64,
    pub balance: f64,
}

impl From<DriverStat> for GqlDriverStat {
    fn from(stat: DriverStat) -> Self {
        Self {
            driver_name: stat.driver_name,
            total_target: stat.total_target,
            total_actual: stat.total_actual,
            balance: stat.balance,
        }
    }
}

#[derive(SimpleObject, Clone)]
pub struct GqlMonthlyReport {
    pub driver_name: String,
    pub month: String,
    pub period_start: NaiveDate,
    pub period_end: NaiveDate,
    pub entries: Vec<GqlTimeEntry>,
    pub summary: GqlHoursTotals,
}

impl From<MonthlyReport> for GqlMonthlyReport {
    fn from(report: MonthlyReport) -> Self {
        Self {
            driver_name: report.driver_name,
            month: report.month.to_string(),
            period_start: report.period_start,
            period_end: report.period_end,
            entries: report.entries.into_iter().map(Into::into).collect(),
            summary: report.summary.into(),
        }
    }
}

fn require_session<'a>(context: &'a Context<'_>) -> GqlResult<&'a Session> {
    context
        .data_opt::<Session>()
        .ok_or_else(|| async_graphql::Error::new("not signed in"))
}

pub struct QueryRoot;

#[Object]
impl QueryRoot {
    async fn time_entries(&self, context: &Context<'_>) -> GqlResult<GqlTimeEntries> {
        require_session(context)?;
        let state = context.data_unchecked::<AppState>();
        let overview = state.list_time_entries.handle().await;
        Ok(GqlTimeEntries {
            entries: overview.entries.into_iter().map(Into::into).collect(),
            totals: overview.totals.into(),
        })
    }

    async fn driver_leaderboard(&self, context: &Context<'_>) -> GqlResult<Vec<GqlDriverStat>> {
        require_session(context)?;
        let state = context.data_unchecked::<AppState>();
        let stats = state.driver_leaderboard.handle().await;
        Ok(stats.into_iter().map(Into::into).collect())
    }

    async fn driver_names(&self, context: &Context<'_>) -> GqlResult<Vec<String>> {
        require_session(context)?;
        let state = context.data_unchecked::<AppState>();
        Ok(state.list_time_entries.driver_names().await)
    }

    /// Null when the store could not be read.
    async fn monthly_report(
        &self,
        context: &Context<'_>,
        driver: String,
        month: String,
    ) -> GqlResult<Option<GqlMonthlyReport>> {
        require_session(context)?;
        let state = context.data_unchecked::<AppState>();
        let month: Month = month.parse()?;
        let report = state.monthly_report.handle(&driver, month).await?;
        Ok(report.map(Into::into))
    }
}

pub struct MutationRoot;

#[Object]
impl MutationRoot {
    async fn add_time_entry(
        &self,
        context: &Context<'_>,
        driver_name: String,
        work_date: String,
        target_hours: f64,
        actual_hours: f64,
    ) -> GqlResult<GqlTimeEntry> {
        require_session(context)?;
        let state = context.data_unchecked::<AppState>();

        let command = AddTimeEntry {
            driver_name,
            work_date: parse_date(&work_date)?,
            target_hours: require_hours("target_hours", target_hours)?,
            actual_hours: require_hours("actual_hours", actual_hours)?,
        };

        let entry = state
            .add_time_entry
            .handle(command)
            .await
            .map_err(|e| async_graphql::Error::new(e.to_string()))?;
        Ok(entry.into())
    }

    async fn delete_time_entry(&self, context: &Context<'_>, id: ID) -> GqlResult<bool> {
        require_session(context)?;
        let state = context.data_unchecked::<AppState>();
        state
            .delete_time_entry
            .handle(&id)
            .await
            .map_err(|e| async_graphql::Error::new(e.to_string()))?;
        Ok(true)
    }
}
