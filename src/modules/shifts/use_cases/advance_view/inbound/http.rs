use axum::{Json, response::IntoResponse};
use serde::{Deserialize, Serialize};

use crate::modules::shifts::core::view_state::{ViewAction, ViewState};
use crate::shell::session::CurrentSession;

#[derive(Deserialize)]
pub struct AdvanceViewBody {
    pub state: ViewState,
    pub action: ViewAction,
}

#[derive(Serialize)]
pub struct ViewTransition {
    pub state: ViewState,
    pub needs_report_fetch: bool,
    pub needs_audit_fetch: bool,
}

pub async fn handle(
    CurrentSession(_session): CurrentSession,
    Json(body): Json<AdvanceViewBody>,
) -> impl IntoResponse {
    let state = body.state.reduce(body.action);
    Json(ViewTransition {
        needs_report_fetch: state.needs_report_fetch(),
        needs_audit_fetch: state.needs_audit_fetch(),
        state,
    })
}
