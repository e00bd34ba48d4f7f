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

#[derive(Default, Deserialize)]
#[serde(default)]
pub struct ShiftReportParams {
    pub driver_id: Option<String>,
    pub month: String,
}

pub async fn handle(
    State(state): State<AppState>,
    CurrentSession(_session): CurrentSession,
    Query(params): Query<ShiftReportParams>,
) -> impl IntoResponse {
    let month: Month = match params.month.parse() {
        Ok(month) => month,
        Err(err) => return ApplicationError::Validation(err).into_response(),
    };

    match state.shift_report.handle(params.driver_id, month).await {
        Some(report) => Json(report).into_response(),
        None => report_unavailable(),
    }
}

#[cfg(test)]
mod shift_report_http_inbound_tests {
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    use crate::tests::fixtures::app::TestAppBuilder;
    use crate::tests::fixtures::shifts::ShiftBuilder;

    fn get(uri: &str, token: &str) -> Request<Body> {
        Request::get(uri)
            .header("authorization", format!("Bearer {token}"))
            .body(Body::empty())
            .unwrap()
    }

    #[tokio::test]
    async fn it_should_return_the_report_summary() {
        let app = TestAppBuilder::new()
            .shifts(vec![
                ShiftBuilder::new()
                    .driver_id("d1")
                    .window("2024-03-10T08:00:00Z", "2024-03-10T17:00:00Z")
                    .break_minutes(30)
                    .build(),
            ])
            .build();
        let token = app.sign_in().await;

        let response = app
            .router()
            .oneshot(get("/shifts/report?driver_id=d1&month=2024-03", &token))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(json["summary"]["total_hours"], 8.5);
        assert_eq!(json["summary"]["total_break_minutes"], 30);
        assert_eq!(json["rows"][0]["driver_name"], "Unknown");
    }

    #[tokio::test]
    async fn it_should_return_422_for_a_malformed_month() {
        let app = TestAppBuilder::new().build();
        let token = app.sign_in().await;

        let response = app
            .router()
            .oneshot(get("/shifts/report?month=march", &token))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn it_should_return_503_when_the_store_is_offline() {
        let app = TestAppBuilder::new().offline_shifts().build();
        let token = app.sign_in().await;

        let response = app
            .router()
            .oneshot(get("/shifts/report?month=2024-03", &token))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    }
}
