use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};

use crate::shell::session::CurrentSession;
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    CurrentSession(_session): CurrentSession,
    Path(id): Path<String>,
) -> impl IntoResponse {
    match state.delete_time_entry.handle(&id).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(err) => err.into_response(),
    }
}

#[cfg(test)]
mod delete_time_entry_http_inbound_tests {
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use tower::ServiceExt;

    use crate::tests::fixtures::app::TestAppBuilder;
    use crate::tests::fixtures::time_entries::TimeEntryBuilder;

    fn delete(token: &str, id: &str) -> Request<Body> {
        Request::delete(format!("/time-entries/{id}"))
            .header("authorization", format!("Bearer {token}"))
            .body(Body::empty())
            .unwrap()
    }

    #[tokio::test]
    async fn it_should_return_204_and_remove_the_entry() {
        let app = TestAppBuilder::new()
            .time_entries(vec![TimeEntryBuilder::new().id("te-1").build()])
            .build();
        let token = app.sign_in().await;

        let response = app.router().oneshot(delete(&token, "te-1")).await.unwrap();

        assert_eq!(response.status(), StatusCode::NO_CONTENT);
        assert!(app.time_entries.is_empty().await);
    }

    #[tokio::test]
    async fn it_should_return_500_when_the_store_is_offline() {
        let app = TestAppBuilder::new().offline_time_entries().build();
        let token = app.sign_in().await;

        let response = app.router().oneshot(delete(&token, "te-1")).await.unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
