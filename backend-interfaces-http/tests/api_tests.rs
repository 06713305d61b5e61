use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use serde_json::Value;
use tempfile::TempDir;
use tower::ServiceExt;

use backend_application::AppState;
use backend_domain::RuntimeConfig;
use backend_infrastructure::{DefaultHealthService, JsonFileEventRepository};
use backend_interfaces_http::build_router;

struct TestApp {
    dir: TempDir,
    state: AppState,
}

impl TestApp {
    fn new(api_token: Option<&str>) -> Self {
        let dir = tempfile::tempdir().unwrap();
        let events_path = dir.path().join("events.json");
        let repo = Arc::new(JsonFileEventRepository::new(&events_path));
        let config = RuntimeConfig {
            bind_addr: "127.0.0.1:0".to_string(),
            api_token: api_token.map(ToString::to_string),
            events_path: events_path.to_string_lossy().to_string(),
            max_body_bytes: 64 * 1024,
            request_timeout_seconds: 5,
        };
        let health = Arc::new(DefaultHealthService::new(repo.clone()));
        let state = AppState::new(config, repo, health);
        Self { dir, state }
    }

    fn router(&self) -> Router {
        build_router(self.state.clone())
    }

    fn events_file(&self) -> std::path::PathBuf {
        self.dir.path().join("events.json")
    }

    async fn post_form(&self, uri: &str, body: &str) -> (StatusCode, Value) {
        let response = self
            .router()
            .oneshot(
                Request::post(uri)
                    .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();
        let status = response.status();
        (status, body_to_json(response.into_body()).await)
    }

    async fn get(&self, uri: &str) -> (StatusCode, Value) {
        let response = self
            .router()
            .oneshot(Request::get(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        (status, body_to_json(response.into_body()).await)
    }

    async fn add_event(&self, name: &str) -> StatusCode {
        let body = format!(
            "name={name}&date=2024-08-17&description=Garden+party&category=Personal&budget=250"
        );
        let response = self
            .router()
            .oneshot(
                Request::post("/add-event")
                    .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                    .body(Body::from(body))
                    .unwrap(),
            )
            .await
            .unwrap();
        response.status()
    }
}

async fn body_to_json(body: Body) -> Value {
    let bytes = axum::body::to_bytes(body, usize::MAX).await.unwrap();
    if bytes.is_empty() {
        return Value::Null;
    }
    serde_json::from_slice(&bytes).unwrap_or(Value::Null)
}

#[tokio::test]
async fn test_index_lists_nothing_before_first_save() {
    let app = TestApp::new(None);
    let (status, json) = app.get("/").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json, Value::Array(Vec::new()));
    assert!(!app.events_file().exists());
}

#[tokio::test]
async fn test_add_event_redirects_and_persists() {
    let app = TestApp::new(None);
    assert_eq!(app.add_event("Picnic").await, StatusCode::SEE_OTHER);
    assert_eq!(app.add_event("Barbecue").await, StatusCode::SEE_OTHER);
    assert!(app.events_file().exists());

    let (status, json) = app.get("/").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json.as_array().unwrap().len(), 2);
    assert_eq!(json[1]["id"], 2);
    assert_eq!(json[1]["name"], "Barbecue");
    assert_eq!(json[1]["date"], "2024-08-17");
    assert_eq!(json[1]["category"], "Personal");
    assert_eq!(json[1]["budget"], 250);
    assert_eq!(json[1]["rsvp"], Value::Array(Vec::new()));
    assert_eq!(json[1]["team"], Value::Array(Vec::new()));
}

#[tokio::test]
async fn test_add_event_rejects_invalid_date() {
    let app = TestApp::new(None);
    let (status, json) = app
        .post_form(
            "/add-event",
            "name=Launch&date=13%2F01%2F2024&description=&category=Business&budget=10",
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["status"], "Invalid date format!");
    assert!(!app.events_file().exists());
}

#[tokio::test]
async fn test_add_event_rejects_short_year() {
    let app = TestApp::new(None);
    let (status, json) = app
        .post_form(
            "/add-event",
            "name=Launch&date=24-01-13&description=&category=Business&budget=10",
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["status"], "Invalid date format!");
    assert!(!app.events_file().exists());
}

#[tokio::test]
async fn test_add_event_rejects_negative_budget() {
    let app = TestApp::new(None);
    let (status, _) = app
        .post_form(
            "/add-event",
            "name=Launch&date=2024-01-13&description=&category=Business&budget=-1",
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_view_event_and_not_found() {
    let app = TestApp::new(None);
    app.add_event("Picnic").await;

    let (status, json) = app.get("/event/1").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["name"], "Picnic");

    let (status, json) = app.get("/event/9999").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["status"], "Event not found");
}

#[tokio::test]
async fn test_rsvp_twice_is_rejected() {
    let app = TestApp::new(None);
    app.add_event("Picnic").await;

    let (status, json) = app.post_form("/rsvp/1", "attendee=Alice").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "RSVP added successfully");

    let (status, json) = app.post_form("/rsvp/1", "attendee=Alice").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["status"], "You have already RSVP'd");

    let (_, event) = app.get("/event/1").await;
    assert_eq!(event["rsvp"], serde_json::json!(["Alice"]));
}

#[tokio::test]
async fn test_rsvp_names_are_kept_as_entered() {
    let app = TestApp::new(None);
    app.add_event("Picnic").await;

    let (status, _) = app.post_form("/rsvp/1", "attendee=Alice").await;
    assert_eq!(status, StatusCode::OK);
    let (status, _) = app.post_form("/rsvp/1", "attendee=+Alice").await;
    assert_eq!(status, StatusCode::OK);

    let (_, event) = app.get("/event/1").await;
    assert_eq!(event["rsvp"], serde_json::json!(["Alice", " Alice"]));
}

#[tokio::test]
async fn test_attendance_flow() {
    let app = TestApp::new(None);
    app.add_event("Picnic").await;

    let (status, json) = app.post_form("/attendance/1", "attendee=Bob").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["status"], "Attendee has not RSVP'd or already marked");

    let (status, _) = app.post_form("/rsvp/1", "attendee=Bob").await;
    assert_eq!(status, StatusCode::OK);

    let (status, json) = app.post_form("/attendance/1", "attendee=Bob").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "Attendance marked successfully");

    let (status, _) = app.post_form("/attendance/1", "attendee=Bob").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (_, event) = app.get("/event/1").await;
    assert_eq!(event["attendance"], serde_json::json!(["Bob"]));
}

#[tokio::test]
async fn test_unknown_event_is_not_found_for_every_operation() {
    let app = TestApp::new(None);
    app.add_event("Picnic").await;

    for uri in ["/rsvp/9999", "/attendance/9999"] {
        let (status, json) = app.post_form(uri, "attendee=Alice").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(json["status"], "Event not found");
    }
}

#[tokio::test]
async fn test_missing_attendee_is_bad_request() {
    let app = TestApp::new(None);
    app.add_event("Picnic").await;
    let (status, _) = app.post_form("/rsvp/1", "").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_api_token_guards_event_routes() {
    let app = TestApp::new(Some("s3cret"));

    let (status, json) = app.get("/").await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(json["status"], "unauthorized");

    let response = app
        .router()
        .oneshot(
            Request::get("/")
                .header(header::AUTHORIZATION, "Bearer s3cret")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let (status, _) = app.get("/ops/health/live").await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_ready_reports_corrupted_store() {
    let app = TestApp::new(None);
    let (status, _) = app.get("/ops/health/ready").await;
    assert_eq!(status, StatusCode::OK);

    std::fs::write(app.events_file(), "{ not json").unwrap();
    let (status, _) = app.get("/ops/health/ready").await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);

    let (status, _) = app.get("/").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn test_metrics_count_outcomes() {
    let app = TestApp::new(None);
    app.add_event("Picnic").await;
    app.post_form("/rsvp/1", "attendee=Alice").await;
    app.post_form("/rsvp/1", "attendee=Alice").await;

    let response = app
        .router()
        .oneshot(
            Request::get("/ops/metrics/prometheus")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let text = String::from_utf8(bytes.to_vec()).unwrap();
    assert!(text.contains("eventdesk_events_created_total 1\n"));
    assert!(text.contains("eventdesk_rsvps_total 1\n"));
    assert!(text.contains("eventdesk_rejections_total{reason=\"duplicate_rsvp\"} 1\n"));
}
