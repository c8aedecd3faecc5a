use std::sync::Arc;
use std::time::Duration;

use axum::{
    body::Body,
    http::{header, HeaderValue, Method, Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use lexdemo::config::WebhookConfig;
use lexdemo::utils::webhook::WebhookClient;
use lexdemo::{app_router, AppState};

const FRONTEND: &str = "http://localhost:8080";

fn app(webhooks: WebhookConfig) -> Router {
    let state = Arc::new(AppState {
        webhooks,
        webhook_client: WebhookClient::new(Duration::from_secs(5)).unwrap(),
    });
    app_router(state, HeaderValue::from_static(FRONTEND))
}

fn all_hooks(server: &MockServer) -> WebhookConfig {
    WebhookConfig {
        register_url: Some(format!("{}/register", server.uri())),
        status_url: Some(format!("{}/status", server.uri())),
        waitlist_url: Some(format!("{}/waitlist", server.uri())),
    }
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().method(Method::GET).uri(uri).body(Body::empty()).unwrap()
}

async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

#[tokio::test]
async fn health_check_answers_ok() {
    let response = app(WebhookConfig::default()).oneshot(get("/api/health")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    assert_eq!(&bytes[..], b"OK");
}

#[tokio::test]
async fn register_passes_upstream_json_through() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/register"))
        .and(body_json(json!({"email": "ana@example.com"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"status": "pending", "position": 42})))
        .expect(1)
        .mount(&server)
        .await;

    let (status, body) = send(
        app(all_hooks(&server)),
        post_json("/api/register", json!({"email": "ana@example.com", "extra": true})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"status": "pending", "position": 42}));
}

#[tokio::test]
async fn register_rejects_missing_or_non_string_email() {
    let server = MockServer::start().await;
    Mock::given(method("POST")).respond_with(ResponseTemplate::new(200)).expect(0).mount(&server).await;

    for payload in [json!({}), json!({"email": 42}), json!({"email": ""})] {
        let (status, body) = send(app(all_hooks(&server)), post_json("/api/register", payload)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({"error": "Email is required"}));
    }

    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/register")
        .body(Body::from("not json"))
        .unwrap();
    let (status, _) = send(app(all_hooks(&server)), request).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn register_only_accepts_post() {
    let (status, body) = send(app(WebhookConfig::default()), get("/api/register")).await;
    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(body, json!({"error": "Method not allowed"}));
}

#[tokio::test]
async fn missing_webhook_is_a_configuration_error_without_details() {
    let (status, body) = send(
        app(WebhookConfig::default()),
        post_json("/api/register", json!({"email": "ana@example.com"})),
    )
    .await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({"error": "Server configuration error"}));
    assert!(!body.to_string().contains("N8N"));
}

#[tokio::test]
async fn validation_runs_before_the_configuration_check() {
    let (status, body) = send(app(WebhookConfig::default()), get("/api/status")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({"error": "Email is required"}));
}

#[tokio::test]
async fn upstream_failure_maps_to_endpoint_message() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(502))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let (status, body) = send(
        app(all_hooks(&server)),
        post_json("/api/register", json!({"email": "ana@example.com"})),
    )
    .await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({"error": "Failed to process registration"}));

    let (status, body) = send(app(all_hooks(&server)), get("/api/status?email=ana@example.com")).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({"error": "Failed to get status"}));

    let (status, body) = send(
        app(all_hooks(&server)),
        post_json("/api/waitlist", json!({"action": "waitlist_registrations.new", "email": "ana@example.com"})),
    )
    .await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({"error": "Failed to process request"}));
}

#[tokio::test]
async fn status_forwards_email_as_query() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/status"))
        .and(query_param("email", "ana+1@example.com"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"confirmed": true})))
        .expect(1)
        .mount(&server)
        .await;

    let (status, body) = send(
        app(all_hooks(&server)),
        get("/api/status?email=ana%2B1%40example.com"),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"confirmed": true}));
}

#[tokio::test]
async fn waitlist_checks_fields_per_action() {
    let server = MockServer::start().await;
    Mock::given(method("POST")).respond_with(ResponseTemplate::new(200)).expect(0).mount(&server).await;

    let cases = [
        (json!({"email": "ana@example.com"}), "Action is required"),
        (json!({"action": "", "email": "ana@example.com"}), "Action is required"),
        (json!({"action": "waitlist_registrations.new"}), "Email is required for registration"),
        (json!({"action": "email_validations.confirm", "email": "ana@example.com"}), "Token is required for confirmation"),
        (json!({"action": "email_validations.status", "email": ""}), "Email is required for status check"),
    ];
    for (payload, message) in cases {
        let (status, body) = send(app(all_hooks(&server)), post_json("/api/waitlist", payload)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({"error": message}));
    }
}

#[tokio::test]
async fn waitlist_forwards_the_whole_payload() {
    let server = MockServer::start().await;
    let payload = json!({"action": "email_validations.confirm", "token": "t-123", "source": "landing"});
    Mock::given(method("POST"))
        .and(path("/waitlist"))
        .and(body_json(payload.clone()))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"ok": true})))
        .expect(1)
        .mount(&server)
        .await;

    let (status, body) = send(app(all_hooks(&server)), post_json("/api/waitlist", payload)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"ok": true}));
}

#[tokio::test]
async fn waitlist_forwards_unknown_actions_unchecked() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(body_json(json!({"action": "bogus"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"handled": false})))
        .expect(1)
        .mount(&server)
        .await;

    let (status, body) = send(app(all_hooks(&server)), post_json("/api/waitlist", json!({"action": "bogus"}))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"handled": false}));
}

#[tokio::test]
async fn waitlist_get_builds_payload_from_query() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/waitlist"))
        .and(body_json(json!({"action": "email_validations.status", "email": "ana@example.com"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"confirmed": false})))
        .expect(1)
        .mount(&server)
        .await;

    let (status, body) = send(
        app(all_hooks(&server)),
        get("/api/waitlist?action=email_validations.status&email=ana@example.com&token=ignored"),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"confirmed": false}));
}

#[tokio::test]
async fn waitlist_rejects_other_methods() {
    let request = Request::builder()
        .method(Method::DELETE)
        .uri("/api/waitlist")
        .body(Body::empty())
        .unwrap();
    let (status, body) = send(app(WebhookConfig::default()), request).await;
    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(body, json!({"error": "Method not allowed"}));
}

#[tokio::test]
async fn cors_always_names_the_frontend_origin() {
    let request = Request::builder()
        .method(Method::OPTIONS)
        .uri("/api/register")
        .header(header::ORIGIN, FRONTEND)
        .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
        .body(Body::empty())
        .unwrap();
    let response = app(WebhookConfig::default()).oneshot(request).await.unwrap();
    assert_eq!(
        response.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN),
        Some(&HeaderValue::from_static(FRONTEND))
    );

    let request = Request::builder()
        .method(Method::OPTIONS)
        .uri("/api/register")
        .header(header::ORIGIN, "https://evil.example.com")
        .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
        .body(Body::empty())
        .unwrap();
    let response = app(WebhookConfig::default()).oneshot(request).await.unwrap();
    let allowed = response.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN);
    assert_eq!(allowed, Some(&HeaderValue::from_static(FRONTEND)));
    assert_ne!(allowed, Some(&HeaderValue::from_static("https://evil.example.com")));
}
