// End-to-end flows through the router: sign in, mutate, read back.

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

use crate::tests::fixtures::app::TestAppBuilder;

async fn call(router: Router, method: &str, uri: &str, token: &str, body: Option<Value>) -> (StatusCode, Value) {
    let mut request = Request::builder()
        .method(method)
        .uri(uri)
        .header("authorization", format!("Bearer {token}"));
    let body = match body {
        Some(json) => {
            request = request.header("content-type", "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };

    let response = router.oneshot(request.body(body).unwrap()).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, json)
}

#[tokio::test]
async fn it_should_track_hours_and_rank_drivers() {
    let app = TestAppBuilder::new().build();
    let token = app.sign_in().await;

    for (driver, date, target, actual) in [
        ("Anna", "2024-02-01", 8.0, 9.0),
        ("Ben", "2024-02-02", 8.0, 7.0),
        ("Anna", "2024-02-29", 8.0, 8.5),
        ("Anna", "2024-03-01", 8.0, 8.0),
    ] {
        let (status, _) = call(
            app.router(),
            "POST",
            "/time-entries",
            &token,
            Some(json!({
                "driver_name": driver,
                "work_date": date,
                "target_hours": target,
                "actual_hours": actual,
            })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
    }

    let (_, overview) = call(app.router(), "GET", "/time-entries", &token, None).await;
    assert_eq!(overview["entries"][0]["work_date"], "2024-03-01");
    assert_eq!(overview["totals"]["balance"], 0.5);

    let (_, leaderboard) = call(app.router(), "GET", "/leaderboard", &token, None).await;
    assert_eq!(leaderboard[0]["driver_name"], "Anna");
    assert_eq!(leaderboard[0]["balance"], 1.5);
    assert_eq!(leaderboard[1]["driver_name"], "Ben");
    assert_eq!(leaderboard[1]["balance"], -1.0);

    let (_, names) = call(app.router(), "GET", "/driver-names", &token, None).await;
    assert_eq!(names, json!(["Anna", "Ben"]));

    let (status, report) = call(
        app.router(),
        "GET",
        "/reports/monthly?driver=Anna&month=2024-02",
        &token,
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(report["entries"].as_array().unwrap().len(), 2);
    assert_eq!(report["summary"]["total_actual"], 17.5);

    let id = overview["entries"][0]["id"].as_str().unwrap().to_string();
    let (status, _) = call(app.router(), "DELETE", &format!("/time-entries/{id}"), &token, None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert_eq!(app.time_entries.len().await, 3);
}

#[tokio::test]
async fn it_should_record_shifts_and_keep_an_audit_trail() {
    let app = TestAppBuilder::new().build();
    let token = app.sign_in().await;

    let (status, driver) = call(app.router(), "POST", "/drivers", &token, Some(json!({ "name": "Anna" }))).await;
    assert_eq!(status, StatusCode::CREATED);
    let driver_id = driver["id"].as_str().unwrap().to_string();

    let (status, shift) = call(
        app.router(),
        "POST",
        "/shifts",
        &token,
        Some(json!({
            "driver_id": driver_id,
            "date": "2024-03-10",
            "start_time": "22:00",
            "end_time": "06:00",
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(shift["end_time"], "2024-03-11T06:00:00Z");
    assert_eq!(shift["break_minutes"], 30);

    let (_, shifts) = call(app.router(), "GET", "/shifts", &token, None).await;
    assert_eq!(shifts[0]["driver_name"], "Anna");
    assert_eq!(shifts[0]["net_hours"], "7.50");

    let (_, report) = call(
        app.router(),
        "GET",
        &format!("/shifts/report?driver_id={driver_id}&month=2024-03"),
        &token,
        None,
    )
    .await;
    assert_eq!(report["summary"]["total_hours"], 7.5);
    assert_eq!(report["summary"]["total_break_minutes"], 30);

    let shift_id = shift["id"].as_str().unwrap().to_string();
    let (status, _) = call(app.router(), "DELETE", &format!("/shifts/{shift_id}"), &token, None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (_, logs) = call(app.router(), "GET", "/audit-logs", &token, None).await;
    let details: Vec<&str> = logs
        .as_array()
        .unwrap()
        .iter()
        .map(|log| log["details"].as_str().unwrap())
        .collect();
    assert_eq!(details.len(), 3);
    assert!(details.contains(&"New shift: Anna on 2024-03-10"));
    assert!(details.contains(
        &format!("DELETED: shift of Anna | date: 2024-03-10 | time: 22:00-06:00 | (ID: {shift_id})").as_str()
    ));

    let (status, _) = call(
        app.router(),
        "POST",
        "/shifts",
        &token,
        Some(json!({
            "driver_id": driver_id,
            "date": "2024-03-12",
            "start_time": "08:00",
            "end_time": "17:00",
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, _) = call(app.router(), "DELETE", &format!("/drivers/{driver_id}"), &token, None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (_, shifts) = call(app.router(), "GET", "/shifts", &token, None).await;
    assert_eq!(shifts, json!([]));
    assert!(app.shifts.is_empty().await);
}
