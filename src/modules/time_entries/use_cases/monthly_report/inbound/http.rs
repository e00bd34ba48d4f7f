use axum::{
    Json,
    extract::{Query, State},
    response::IntoResponse,
};
use serde::Deserialize;

use crate::shared::core::errors::ApplicationError;
use crate::shared::core::month::Month;
use crate::shell::http::report_unavailable;
use crate::shell::session::CurrentSession;
use crate::shell::state::AppState;

/// Missing parameters arrive empty and fail validation like blank ones.
#[derive(Default, Deserialize)]
#[serde(default)]
pub struct MonthlyReportParams {
    pub driver: String,
    pub month: String,
}

pub async fn handle(
    State(state): State<AppState>,
    CurrentSession(_session): CurrentSession,
    Query(params): Query<MonthlyReportParams>,
) -> impl IntoResponse {
    let month: Month = match params.month.parse() {
        Ok(month) => month,
        Err(err) => return ApplicationError::Validation(err).into_response(),
    };

    match state.monthly_report.handle(&params.driver, month).await {
        Ok(Some(report)) => Json(report).into_response(),
        Ok(None) => report_unavailable(),
        Err(err) => ApplicationError::Validation(err).into_response(),
    }
}
