// Sign up, sign in and sign out against the identity provider.

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
};
use serde::Deserialize;

use crate::shared::core::errors::ApplicationError;
use crate::shell::session::{CurrentSession, bearer_token};
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct CredentialsBody {
    pub email: String,
    pub password: String,
}

pub async fn handle_sign_up(
    State(state): State<AppState>,
    body: Result<Json<CredentialsBody>, JsonRejection>,
) -> impl IntoResponse {
    let Json(body) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };

    match state.identity.sign_up(&body.email, &body.password).await {
        Ok(session) => {
            tracing::info!(user_id = %session.user_id, "account created");
            (StatusCode::CREATED, Json(session)).into_response()
        }
        Err(err) => err.into_response(),
    }
}

pub async fn handle_sign_in(
    State(state): State<AppState>,
    body: Result<Json<CredentialsBody>, JsonRejection>,
) -> impl IntoResponse {
    let Json(body) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };

    match state.identity.sign_in(&body.email, &body.password).await {
        Ok(session) => Json(session).into_response(),
        Err(err) => err.into_response(),
    }
}

pub async fn handle_sign_out(State(state): State<AppState>, headers: HeaderMap) -> impl IntoResponse {
    let Some(token) = bearer_token(&headers) else {
        return ApplicationError::Unauthenticated.into_response();
    };

    match state.identity.sign_out(token).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(err) => err.into_response(),
    }
}

pub async fn handle_session(CurrentSession(session): CurrentSession) -> impl IntoResponse {
    Json(session)
}
