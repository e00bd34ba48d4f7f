use axum::{
    Json, extract::State, extract::rejection::JsonRejection, http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;

use crate::modules::time_entries::use_cases::add_time_entry::command::AddTimeEntry;
use crate::shared::core::errors::ApplicationError;
use crate::shared::core::validation::{NumericInput, parse_date};
use crate::shell::session::CurrentSession;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct AddTimeEntryBody {
    pub driver_name: String,
    pub work_date: String,
    pub target_hours: NumericInput,
    pub actual_hours: NumericInput,
}

impl AddTimeEntryBody {
    fn into_command(self) -> Result<AddTimeEntry, ApplicationError> {
        Ok(AddTimeEntry {
            driver_name: self.driver_name,
            work_date: parse_date(&self.work_date)?,
            target_hours: self.target_hours.hours("target_hours")?,
            actual_hours: self.actual_hours.hours("actual_hours")?,
        })
    }
}

pub async fn handle(
    State(state): State<AppState>,
    CurrentSession(_session): CurrentSession,
    body: Result<Json<AddTimeEntryBody>, JsonRejection>,
) -> impl IntoResponse {
    let Json(body) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };

    let command = match body.into_command() {
        Ok(command) => command,
        Err(err) => return err.into_response(),
    };

    match state.add_time_entry.handle(command).await {
        Ok(entry) => (StatusCode::CREATED, Json(entry)).into_response(),
        Err(err) => err.into_response(),
    }
}
