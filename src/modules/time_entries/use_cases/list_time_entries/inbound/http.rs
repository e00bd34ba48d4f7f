use axum::{Json, extract::State, response::IntoResponse};

use crate::shell::session::CurrentSession;
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    CurrentSession(_session): CurrentSession,
) -> impl IntoResponse {
    Json(state.list_time_entries.handle().await)
}

pub async fn handle_driver_names(
    State(state): State<AppState>,
    CurrentSession(_session): CurrentSession,
) -> impl IntoResponse {
    Json(state.list_time_entries.driver_names().await)
}
