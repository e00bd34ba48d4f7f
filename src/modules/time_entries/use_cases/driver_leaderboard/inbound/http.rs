use axum::{Json, extract::State, response::IntoResponse};

use crate::shell::session::CurrentSession;
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    CurrentSession(_session): CurrentSession,
) -> impl IntoResponse {
    Json(state.driver_leaderboard.handle().await)
}
