use axum::{
    Json, extract::State, extract::rejection::JsonRejection, http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;

use crate::modules::shifts::use_cases::record_shift::command::RecordShift;
use crate::shared::core::errors::ApplicationError;
use crate::shell::session::CurrentSession;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct RecordShiftBody {
    pub driver_id: String,
    pub date: String,
    pub start_time: String,
    pub end_time: String,
}

pub async fn handle(
    State(state): State<AppState>,
    CurrentSession(session): CurrentSession,
    body: Result<Json<RecordShiftBody>, JsonRejection>,
) -> impl IntoResponse {
    let Json(body) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };

    let command = match RecordShift::parse(&body.driver_id, &body.date, &body.start_time, &body.end_time) {
        Ok(command) => command,
        Err(err) => return ApplicationError::Validation(err).into_response(),
    };

    match state.record_shift.handle(&session.user_id, command).await {
        Ok(shift) => (StatusCode::CREATED, Json(shift)).into_response(),
        Err(err) => err.into_response(),
    }
}
