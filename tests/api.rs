//! Router-level tests that exercise everything in front of the database:
//! auth gating, payload validation, and the error envelope. The pool is
//! lazily connected and never touched by these paths.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use http_body_util::BodyExt;
use tower::ServiceExt;

use wellness_api::{app, config::Config, AppState};

fn test_state() -> AppState {
    let config = Config {
        database_url: "postgres://postgres@localhost/wellness_test".into(),
        db_max_connections: 5,
        db_acquire_timeout_secs: 5,
        host: "127.0.0.1".into(),
        port: 0,
        client_url: "http://localhost:5173".into(),
        jwt_secret: "integration-test-secret".into(),
        session_ttl_secs: 604_800,
        media_upload_url: None,
        app_env: "development".into(),
    };

    let db = sqlx::postgres::PgPoolOptions::new()
        .connect_lazy(&config.database_url)
        .expect("lazy pool construction cannot fail on a well-formed URL");

    AppState {
        db,
        config: Arc::new(config),
    }
}

fn json_request(method: Method, uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn empty_request(method: Method, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn health_is_public() {
    let response = app(test_state())
        .oneshot(empty_request(Method::GET, "/health"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["status"], "ok");
    assert!(body["version"].is_string());
}

#[tokio::test]
async fn protected_routes_require_a_session_cookie() {
    let protected = [
        (Method::GET, "/api/moods"),
        (Method::GET, "/api/moods/analytics"),
        (Method::GET, "/api/habits"),
        (Method::GET, "/api/habits/analytics/leaderboard"),
        (Method::GET, "/api/sleep"),
        (Method::GET, "/api/sleep/analytics"),
        (Method::GET, "/api/auth/me"),
        (Method::POST, "/api/auth/logout"),
    ];

    for (method, uri) in protected {
        let response = app(test_state())
            .oneshot(empty_request(method.clone(), uri))
            .await
            .unwrap();
        assert_eq!(
            response.status(),
            StatusCode::UNAUTHORIZED,
            "{method} {uri} should be gated"
        );
    }
}

#[tokio::test]
async fn garbage_session_cookie_is_rejected() {
    let request = Request::builder()
        .method(Method::GET)
        .uri("/api/moods")
        .header(header::COOKIE, "jwt=not-a-real-token")
        .body(Body::empty())
        .unwrap();

    let response = app(test_state()).oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let body = body_json(response).await;
    assert_eq!(body["message"], "Unauthorized: Invalid token.");
}

#[tokio::test]
async fn unauthenticated_error_envelope_is_message_only() {
    let response = app(test_state())
        .oneshot(empty_request(Method::GET, "/api/habits"))
        .await
        .unwrap();

    let body = body_json(response).await;
    assert!(body["message"].is_string());
    assert!(body.get("error").is_none());
}

#[tokio::test]
async fn signup_rejects_weak_password() {
    let response = app(test_state())
        .oneshot(json_request(
            Method::POST,
            "/api/auth/signup",
            serde_json::json!({
                "fullName": "Test User",
                "email": "test@example.com",
                "password": "alllowercase",
            }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert!(body["message"]
        .as_str()
        .unwrap()
        .contains("at least 8 characters"));
}

#[tokio::test]
async fn signup_rejects_bad_email() {
    let response = app(test_state())
        .oneshot(json_request(
            Method::POST,
            "/api/auth/signup",
            serde_json::json!({
                "fullName": "Test User",
                "email": "not-an-email",
                "password": "Abcdef12",
            }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn login_rejects_blank_credentials() {
    let response = app(test_state())
        .oneshot(json_request(
            Method::POST,
            "/api/auth/login",
            serde_json::json!({ "email": "", "password": "" }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
