use axum::{
    extract::FromRequestParts,
    http::{HeaderMap, header::AUTHORIZATION, request::Parts},
};

use crate::shared::core::errors::ApplicationError;
use crate::shared::infrastructure::identity::Session;
use crate::shell::state::AppState;

/// The signed-in user behind the request's bearer token.
pub struct CurrentSession(pub Session);

pub fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|token| !token.is_empty())
}

pub async fn resolve_session(state: &AppState, headers: &HeaderMap) -> Option<Session> {
    let token = bearer_token(headers)?;
    match state.identity.current_session(token).await {
        Ok(session) => session,
        Err(err) => {
            tracing::error!(error = %err, "error resolving session");
            None
        }
    }
}

impl FromRequestParts<AppState> for CurrentSession {
    type Rejection = ApplicationError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        resolve_session(state, &parts.headers)
            .await
            .map(CurrentSession)
            .ok_or(ApplicationError::Unauthenticated)
    }
}
