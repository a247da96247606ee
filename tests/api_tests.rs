//! HTTP API tests for the schedule endpoints

use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{Method, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tempfile::TempDir;
use tower::util::ServiceExt;

use takeoff::api::{create_router, AppState};
use takeoff::{Schedule, StoreConfig};

fn setup_app() -> (Router, TempDir) {
    let temp_dir = TempDir::new().unwrap();
    let schedule = Arc::new(Schedule::open(StoreConfig::new(temp_dir.path().join("data"))));
    (create_router(Arc::new(AppState::new(schedule))), temp_dir)
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

#[tokio::test]
async fn test_list_seeded_events() {
    let (app, _dir) = setup_app();

    let (status, body) = send(&app, Method::GET, "/api/events", None).await;

    assert_eq!(status, StatusCode::OK);
    let events = body.as_array().unwrap();
    assert_eq!(events.len(), 6);
    assert!(events.iter().any(|e| e["id"] == "evt-launch-sync" && e["owner"] == "Avery"));
}

#[tokio::test]
async fn test_save_then_get_event() {
    let (app, _dir) = setup_app();

    let (status, saved) = send(
        &app,
        Method::POST,
        "/api/events",
        Some(json!({
            "id": "",
            "title": "Review",
            "start": "2025-03-10T09:00:00Z",
            "end": "2025-03-10T10:00:00Z",
            "assignees": null,
            "project": null,
            "aiNotes": null
        })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let id = saved["id"].as_str().unwrap().to_string();
    assert!(id.starts_with("evt-"));
    assert_eq!(saved["assignees"], json!([]));
    assert_eq!(saved["dependencies"], json!([]));
    assert_eq!(saved["createdAt"], saved["updatedAt"]);
    assert!(saved.get("project").is_none());

    let (status, fetched) = send(&app, Method::GET, &format!("/api/events/{}", id), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, saved);
}

#[tokio::test]
async fn test_delete_event() {
    let (app, _dir) = setup_app();

    let (status, _) = send(&app, Method::DELETE, "/api/events/evt-cx-review", None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, body) = send(&app, Method::DELETE, "/api/events/evt-cx-review", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "NOT_FOUND");

    let (_, events) = send(&app, Method::GET, "/api/events", None).await;
    assert_eq!(events.as_array().unwrap().len(), 5);
}

#[tokio::test]
async fn test_get_unknown_event() {
    let (app, _dir) = setup_app();

    let (status, body) = send(&app, Method::GET, "/api/events/evt-missing", None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "NOT_FOUND");
}

#[tokio::test]
async fn test_settings_endpoints() {
    let (app, _dir) = setup_app();

    let (status, settings) = send(&app, Method::GET, "/api/settings", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(settings["timezone"], "America/Los_Angeles");
    assert_eq!(settings["deepWorkAM"], true);

    let (status, saved) = send(
        &app,
        Method::PUT,
        "/api/settings",
        Some(json!({ "workdayEnd": "18:30", "deepWorkAM": false })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(saved["workdayEnd"], "18:30");
    assert_eq!(saved["workdayStart"], "08:00");
    assert_eq!(saved["defaultSlotMin"], 60);
    assert_eq!(saved["deepWorkAM"], false);

    let (_, current) = send(&app, Method::GET, "/api/settings", None).await;
    assert_eq!(current, saved);
}
