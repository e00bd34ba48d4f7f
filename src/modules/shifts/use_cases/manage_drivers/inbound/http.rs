use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;

use crate::shell::session::CurrentSession;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct AddDriverBody {
    pub name: String,
}

pub async fn handle_list(
    State(state): State<AppState>,
    CurrentSession(_session): CurrentSession,
) -> impl IntoResponse {
    Json(state.manage_drivers.list().await)
}

pub async fn handle_add(
    State(state): State<AppState>,
    CurrentSession(session): CurrentSession,
    body: Result<Json<AddDriverBody>, JsonRejection>,
) -> impl IntoResponse {
    let Json(body) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };

    match state.manage_drivers.add(&session.user_id, &body.name).await {
        Ok(driver) => (StatusCode::CREATED, Json(driver)).into_response(),
        Err(err) => err.into_response(),
    }
}

pub async fn handle_delete(
    State(state): State<AppState>,
    CurrentSession(session): CurrentSession,
    Path(id): Path<String>,
) -> impl IntoResponse {
    match state.manage_drivers.delete(&session.user_id, &id).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(err) => err.into_response(),
    }
}
