mod common;

use axum::{
    Router,
    routing::{get, post},
};
use axum_test::TestServer;
use serde_json::json;

use linkcut::api::handlers::{create_mapping_handler, resolve_handler};

#[tokio::test]
async fn test_create_mapping_success() {
    let (state, _rx, _store) = common::create_test_state();
    let app = Router::new()
        .route("/api/urls", post(create_mapping_handler))
        .with_state(state);

    let server = TestServer::new(app).unwrap();

    let response = server
        .post("/api/urls")
        .json(&json!({
            "originalUrl": "https://example.com/page"
        }))
        .await;

    assert_eq!(response.status_code(), 201);

    let json = response.json::<serde_json::Value>();
    assert!(json["code"].is_string());
    assert_eq!(json["originalUrl"], "https://example.com/page");
    assert_eq!(json["active"], true);
}

#[tokio::test]
async fn test_create_mapping_code_shape() {
    let (state, _rx, _store) = common::create_test_state();
    let app = Router::new()
        .route("/api/urls", post(create_mapping_handler))
        .with_state(state);

    let server = TestServer::new(app).unwrap();

    let response = server
        .post("/api/urls")
        .json(&json!({
            "originalUrl": "https://example.com/page"
        }))
        .await;

    let json = response.json::<serde_json::Value>();
    let code = json["code"].as_str().unwrap();

    assert_eq!(code.len(), 7);
    assert!(
        code.chars()
            .all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c))
    );
}

#[tokio::test]
async fn test_create_mapping_strips_tracking_params() {
    let (state, _rx, _store) = common::create_test_state();
    let app = Router::new()
        .route("/api/urls", post(create_mapping_handler))
        .with_state(state);

    let server = TestServer::new(app).unwrap();

    let response = server
        .post("/api/urls")
        .json(&json!({
            "originalUrl": "https://example.com/article?utm_source=news&id=42&fbclid=xyz"
        }))
        .await;

    assert_eq!(response.status_code(), 201);

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["originalUrl"], "https://example.com/article?id=42");
}

#[tokio::test]
async fn test_create_mapping_preserves_other_params() {
    let (state, _rx, _store) = common::create_test_state();
    let app = Router::new()
        .route("/api/urls", post(create_mapping_handler))
        .with_state(state);

    let server = TestServer::new(app).unwrap();

    let response = server
        .post("/api/urls")
        .json(&json!({
            "originalUrl": "https://example.com/search?a=1&utm_campaign=spring&b=2"
        }))
        .await;

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["originalUrl"], "https://example.com/search?a=1&b=2");
}

#[tokio::test]
async fn test_create_mapping_normalizes_bare_domain() {
    let (state, _rx, _store) = common::create_test_state();
    let app = Router::new()
        .route("/api/urls", post(create_mapping_handler))
        .with_state(state);

    let server = TestServer::new(app).unwrap();

    let response = server
        .post("/api/urls")
        .json(&json!({
            "originalUrl": "https://example.com"
        }))
        .await;

    assert_eq!(response.status_code(), 201);

    // Parsing adds the canonical root path
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["originalUrl"], "https://example.com/");
}

#[tokio::test]
async fn test_create_mapping_invalid_url() {
    let (state, _rx, _store) = common::create_test_state();
    let app = Router::new()
        .route("/api/urls", post(create_mapping_handler))
        .with_state(state);

    let server = TestServer::new(app).unwrap();

    let response = server
        .post("/api/urls")
        .json(&json!({
            "originalUrl": "not-a-valid-url"
        }))
        .await;

    response.assert_status_bad_request();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "invalid_input");
}

#[tokio::test]
async fn test_create_mapping_empty_url() {
    let (state, _rx, _store) = common::create_test_state();
    let app = Router::new()
        .route("/api/urls", post(create_mapping_handler))
        .with_state(state);

    let server = TestServer::new(app).unwrap();

    let response = server
        .post("/api/urls")
        .json(&json!({
            "originalUrl": ""
        }))
        .await;

    response.assert_status_bad_request();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "invalid_input");
}

#[tokio::test]
async fn test_create_mapping_past_expiry() {
    let (state, _rx, _store) = common::create_test_state();
    let app = Router::new()
        .route("/api/urls", post(create_mapping_handler))
        .with_state(state);

    let server = TestServer::new(app).unwrap();

    let response = server
        .post("/api/urls")
        .json(&json!({
            "originalUrl": "https://example.com/page",
            "expiresAt": "2020-01-01T00:00:00Z"
        }))
        .await;

    response.assert_status_bad_request();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "invalid_input");
}

#[tokio::test]
async fn test_create_mapping_with_expiry_roundtrip() {
    let (state, _rx, _store) = common::create_test_state();
    let app = Router::new()
        .route("/api/urls", post(create_mapping_handler))
        .with_state(state);

    let server = TestServer::new(app).unwrap();

    let response = server
        .post("/api/urls")
        .json(&json!({
            "originalUrl": "https://example.com/page",
            "expiresAt": "2033-01-01T00:00:00Z"
        }))
        .await;

    assert_eq!(response.status_code(), 201);

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["expiresAt"], "2033-01-01T00:00:00Z");
}

#[tokio::test]
async fn test_create_mapping_stores_owner() {
    let (state, _rx, store) = common::create_test_state();
    let app = Router::new()
        .route("/api/urls", post(create_mapping_handler))
        .with_state(state);

    let server = TestServer::new(app).unwrap();

    let response = server
        .post("/api/urls")
        .json(&json!({
            "originalUrl": "https://example.com/page",
            "ownerId": "user-17"
        }))
        .await;

    assert_eq!(response.status_code(), 201);

    let json = response.json::<serde_json::Value>();
    let code = json["code"].as_str().unwrap();

    use linkcut::domain::repositories::MappingRepository;
    let stored = store.find_by_code(code).await.unwrap().unwrap();
    assert_eq!(stored.owner_id.as_deref(), Some("user-17"));
}

#[tokio::test]
async fn test_create_then_resolve_round_trip() {
    let (state, _rx, _store) = common::create_test_state();
    let app = Router::new()
        .route("/api/urls", post(create_mapping_handler))
        .route("/api/urls/{code}", get(resolve_handler))
        .with_state(state);

    let server = TestServer::new(app).unwrap();

    let created = server
        .post("/api/urls")
        .json(&json!({
            "originalUrl": "https://example.com/deep/path?utm_medium=mail&q=7"
        }))
        .await;

    let created_json = created.json::<serde_json::Value>();
    let code = created_json["code"].as_str().unwrap();

    let resolved = server.get(&format!("/api/urls/{code}")).await;

    resolved.assert_status_ok();

    let resolved_json = resolved.json::<serde_json::Value>();
    assert_eq!(
        resolved_json["originalUrl"],
        "https://example.com/deep/path?q=7"
    );
}

#[tokio::test]
async fn test_resolve_unknown_code() {
    let (state, _rx, _store) = common::create_test_state();
    let app = Router::new()
        .route("/api/urls/{code}", get(resolve_handler))
        .with_state(state);

    let server = TestServer::new(app).unwrap();

    let response = server.get("/api/urls/abc9999").await;

    response.assert_status_not_found();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "not_found");
}

#[tokio::test]
async fn test_resolve_expired_code() {
    let (state, _rx, store) = common::create_test_state();
    let app = Router::new()
        .route("/api/urls/{code}", get(resolve_handler))
        .with_state(state);

    let server = TestServer::new(app).unwrap();

    common::seed_expired_mapping(&store, "dead001", "https://example.com/gone").await;

    let response = server.get("/api/urls/dead001").await;

    response.assert_status_not_found();
}

#[tokio::test]
async fn test_resolve_inactive_code() {
    let (state, _rx, store) = common::create_test_state();
    let app = Router::new()
        .route("/api/urls/{code}", get(resolve_handler))
        .with_state(state);

    let server = TestServer::new(app).unwrap();

    common::seed_inactive_mapping(&store, "0ff1ce5", "https://example.com/paused").await;

    let response = server.get("/api/urls/0ff1ce5").await;

    response.assert_status_not_found();
}

#[tokio::test]
async fn test_resolve_malformed_code() {
    let (state, _rx, _store) = common::create_test_state();
    let app = Router::new()
        .route("/api/urls/{code}", get(resolve_handler))
        .with_state(state);

    let server = TestServer::new(app).unwrap();

    // Wrong alphabet
    server.get("/api/urls/ABCDEFG").await.assert_status_not_found();

    // Wrong length
    server.get("/api/urls/abc123").await.assert_status_not_found();
    server.get("/api/urls/abc12345").await.assert_status_not_found();
}

#[tokio::test]
async fn test_resolve_error_body_uniform() {
    let (state, _rx, store) = common::create_test_state();
    let app = Router::new()
        .route("/api/urls/{code}", get(resolve_handler))
        .with_state(state);

    let server = TestServer::new(app).unwrap();

    common::seed_expired_mapping(&store, "dead001", "https://example.com/gone").await;
    common::seed_inactive_mapping(&store, "0ff1ce5", "https://example.com/paused").await;

    let unknown = server.get("/api/urls/abc9999").await;
    let expired = server.get("/api/urls/dead001").await;
    let inactive = server.get("/api/urls/0ff1ce5").await;

    unknown.assert_status_not_found();
    expired.assert_status_not_found();
    inactive.assert_status_not_found();

    // A probe cannot tell a dead code from one that never existed: the
    // payload only ever echoes the code that was asked for
    let unknown_json = unknown.json::<serde_json::Value>();
    let expired_json = expired.json::<serde_json::Value>();
    let inactive_json = inactive.json::<serde_json::Value>();

    assert_eq!(unknown_json["error"]["code"], "not_found");
    assert_eq!(expired_json["error"]["code"], "not_found");
    assert_eq!(inactive_json["error"]["code"], "not_found");

    assert_eq!(
        unknown_json["error"]["message"],
        expired_json["error"]["message"]
    );
    assert_eq!(
        unknown_json["error"]["message"],
        inactive_json["error"]["message"]
    );

    assert_eq!(expired_json["error"]["details"], json!({ "code": "dead001" }));
    assert_eq!(inactive_json["error"]["details"], json!({ "code": "0ff1ce5" }));
}
