use axum::{
    Extension, Json, Router,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{delete, get, post},
};
use serde::Serialize;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::modules::accounts::inbound::http as accounts_http;
use crate::modules::shifts::use_cases::advance_view::inbound::http as advance_view_http;
use crate::modules::shifts::use_cases::delete_shift::inbound::http as delete_shift_http;
use crate::modules::shifts::use_cases::list_audit_logs::inbound::http as list_audit_logs_http;
use crate::modules::shifts::use_cases::list_shifts::inbound::http as list_shifts_http;
use crate::modules::shifts::use_cases::manage_drivers::inbound::http as drivers_http;
use crate::modules::shifts::use_cases::record_shift::inbound::http as record_shift_http;
use crate::modules::shifts::use_cases::shift_report::inbound::http as shift_report_http;
use crate::modules::time_entries::use_cases::add_time_entry::inbound::http as add_http;
use crate::modules::time_entries::use_cases::delete_time_entry::inbound::http as delete_http;
use crate::modules::time_entries::use_cases::driver_leaderboard::inbound::http as leaderboard_http;
use crate::modules::time_entries::use_cases::list_time_entries::inbound::http as list_http;
use crate::modules::time_entries::use_cases::monthly_report::inbound::http as monthly_report_http;
use crate::shared::core::errors::ApplicationError;
use crate::shared::infrastructure::identity::IdentityError;
use crate::shell::graphql::{self, build_schema};
use crate::shell::state::AppState;

pub fn router(state: AppState) -> Router {
    let schema = build_schema(state.clone());

    Router::new()
        .route("/auth/sign-up", post(accounts_http::handle_sign_up))
        .route("/auth/sign-in", post(accounts_http::handle_sign_in))
        .route("/auth/sign-out", post(accounts_http::handle_sign_out))
        .route("/auth/session", get(accounts_http::handle_session))
        .route("/time-entries", get(list_http::handle).post(add_http::handle))
        .route("/time-entries/{id}", delete(delete_http::handle))
        .route("/leaderboard", get(leaderboard_http::handle))
        .route("/driver-names", get(list_http::handle_driver_names))
        .route("/reports/monthly", get(monthly_report_http::handle))
        .route(
            "/drivers",
            get(drivers_http::handle_list).post(drivers_http::handle_add),
        )
        .route("/drivers/{id}", delete(drivers_http::handle_delete))
        .route(
            "/shifts",
            get(list_shifts_http::handle).post(record_shift_http::handle),
        )
        .route("/shifts/report", get(shift_report_http::handle))
        .route("/shifts/{id}", delete(delete_shift_http::handle))
        .route("/audit-logs", get(list_audit_logs_http::handle))
        .route("/dashboard/view", post(advance_view_http::handle))
        .route("/graphql", get(graphql::graphiql).post(graphql::graphql))
        .with_state(state)
        .layer(Extension(schema))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
    (
        status,
        Json(ErrorBody {
            error: message.into(),
        }),
    )
        .into_response()
}

pub fn report_unavailable() -> Response {
    error_response(StatusCode::SERVICE_UNAVAILABLE, "report unavailable")
}

impl IntoResponse for ApplicationError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApplicationError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApplicationError::Unauthenticated => StatusCode::UNAUTHORIZED,
            ApplicationError::Store(_) | ApplicationError::Audit(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        error_response(status, self.to_string())
    }
}

impl IntoResponse for IdentityError {
    fn into_response(self) -> Response {
        let status = match &self {
            IdentityError::InvalidCredentials => StatusCode::UNAUTHORIZED,
            IdentityError::EmailTaken(_) => StatusCode::CONFLICT,
            IdentityError::InvalidInput(_) => StatusCode::UNPROCESSABLE_ENTITY,
            IdentityError::Backend(_) => {
                tracing::error!(error = %self, "identity provider failure");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        error_response(status, self.to_string())
    }
}
