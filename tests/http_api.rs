//! HTTP-level tests for the dictionary API: routes, status codes, JWT
//! authentication and the request log. The router is driven in-process with
//! `tower::ServiceExt::oneshot`; storage is a real file in a temp dir.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use defn::server::{build_router, JwtConfig, RequestLog};
use defn::Dictionary;
use http_body_util::BodyExt;
use jsonwebtoken::{encode, EncodingKey, Header};
use serde::Serialize;
use serde_json::Value;
use tempfile::TempDir;
use tower::ServiceExt;

const TEST_JWT_SECRET: &[u8] = b"test-secret-for-http-tests";

struct TestApp {
    _dir: TempDir,
    file: PathBuf,
    log: PathBuf,
    router: axum::Router,
}

fn app_with(jwt: Option<JwtConfig>) -> TestApp {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("dictionary.txt");
    let log = dir.path().join("api.log");
    let dictionary = Arc::new(Dictionary::open(&file).unwrap());
    let router = build_router(dictionary, jwt, RequestLog::to_file(&log));
    TestApp {
        _dir: dir,
        file,
        log,
        router,
    }
}

fn open_app() -> TestApp {
    app_with(None)
}

fn secured_app() -> TestApp {
    app_with(Some(JwtConfig::from_secret(TEST_JWT_SECRET)))
}

fn valid_token() -> String {
    JwtConfig::from_secret(TEST_JWT_SECRET)
        .issue(Some("John Doe".into()), Duration::from_secs(3600))
        .unwrap()
}

async fn send(app: &TestApp, method: Method, uri: &str, token: Option<&str>) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, token);
    }
    let response = app
        .router
        .clone()
        .oneshot(builder.body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

// ── Routes ─────────────────────────────────────────────────────

#[tokio::test]
async fn add_get_remove_round() {
    let app = open_app();

    let (status, body) = send(&app, Method::POST, "/add/cat/a%20small%20mammal", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Word 'cat' added to the dictionary.");

    let (status, body) = send(&app, Method::GET, "/get/cat", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["word"], "cat");
    assert_eq!(body["definition"], "a small mammal");
    assert!(body["message"]
        .as_str()
        .unwrap()
        .contains("Definition of"));

    let (status, body) = send(&app, Method::DELETE, "/remove/cat", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Word 'cat' removed from the dictionary.");

    let (status, _) = send(&app, Method::GET, "/get/cat", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn writes_land_in_the_file() {
    let app = open_app();
    send(&app, Method::POST, "/add/cat/meows", None).await;
    send(&app, Method::POST, "/add/dog/barks", None).await;

    let content = std::fs::read_to_string(&app.file).unwrap();
    assert_eq!(content, "cat: meows\ndog: barks\n");
}

#[tokio::test]
async fn list_returns_entries_in_file_order() {
    let app = open_app();
    send(&app, Method::POST, "/add/dog/barks", None).await;
    send(&app, Method::POST, "/add/cat/meows", None).await;

    let (status, body) = send(&app, Method::GET, "/list", None).await;
    assert_eq!(status, StatusCode::OK);
    let entries = body["entries"].as_array().unwrap();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0]["word"], "dog");
    assert_eq!(entries[1]["word"], "cat");
    assert_eq!(entries[1]["definition"], "meows");
}

#[tokio::test]
async fn unknown_word_is_404_with_error_body() {
    let app = open_app();
    send(&app, Method::POST, "/add/dog/barks", None).await;

    let (status, body) = send(&app, Method::GET, "/get/cat", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body["error"].as_str().unwrap().contains("cat"));
}

#[tokio::test]
async fn invalid_word_is_400() {
    let app = open_app();
    let (status, body) = send(&app, Method::POST, "/add/a:b/definition", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().is_some());
    assert!(!app.file.exists());
}

#[tokio::test]
async fn health_is_ok() {
    let app = open_app();
    let (status, body) = send(&app, Method::GET, "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}

// ── Authentication ─────────────────────────────────────────────

#[tokio::test]
async fn missing_token_is_401() {
    let app = secured_app();
    let (status, body) = send(&app, Method::GET, "/list", None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert!(body["error"].as_str().is_some());
}

#[tokio::test]
async fn garbage_token_is_401() {
    let app = secured_app();
    let (status, _) = send(&app, Method::POST, "/add/cat/meows", Some("not-a-jwt")).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert!(!app.file.exists());
}

#[tokio::test]
async fn token_signed_with_other_secret_is_401() {
    #[derive(Serialize)]
    struct TestClaims {
        name: String,
        exp: u64,
    }
    let claims = TestClaims {
        name: "mallory".into(),
        exp: (chrono::Utc::now().timestamp() + 3600) as u64,
    };
    let token = encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(b"some-other-secret"),
    )
    .unwrap();

    let app = secured_app();
    let (status, _) = send(&app, Method::GET, "/list", Some(&token)).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn valid_token_bare_or_bearer_is_accepted() {
    let app = secured_app();
    let token = valid_token();

    let (status, _) = send(&app, Method::POST, "/add/cat/meows", Some(&token)).await;
    assert_eq!(status, StatusCode::OK);

    let bearer = format!("Bearer {}", token);
    let (status, body) = send(&app, Method::GET, "/get/cat", Some(&bearer)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["definition"], "meows");
}

#[tokio::test]
async fn health_needs_no_token() {
    let app = secured_app();
    let (status, _) = send(&app, Method::GET, "/health", None).await;
    assert_eq!(status, StatusCode::OK);
}

// ── Request log ────────────────────────────────────────────────

#[tokio::test]
async fn every_request_is_logged_even_when_rejected() {
    let app = secured_app();
    send(&app, Method::GET, "/list", None).await;
    send(&app, Method::GET, "/health", None).await;

    let log = std::fs::read_to_string(&app.log).unwrap();
    let lines: Vec<&str> = log.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].starts_with('['));
    assert!(lines[0].contains("] GET /list "));
    assert!(lines[1].contains("] GET /health "));
}
