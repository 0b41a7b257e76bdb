//! Integration tests for the HTTP API, driving the router in-process.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::routing::get;
use axum::Router;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use server::error::{
    INTERNAL_ERROR_MESSAGE, INVALID_RGB_MESSAGE, PAYLOAD_TOO_LARGE_MESSAGE, TIMEOUT_MESSAGE,
};
use server::{boundary_layers, build_router, ServerConfig, ServerState};
use tower::ServiceExt;

fn app_with(config: ServerConfig) -> Router {
    build_router(Arc::new(ServerState::new(config)))
}

fn app() -> Router {
    app_with(ServerConfig::default())
}

fn post_json(uri: &str, body: impl Into<Body>) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(body.into())
        .unwrap()
}

fn get_req(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

#[tokio::test]
async fn test_match_returns_result() {
    let (status, body) = send(
        app(),
        post_json("/api/foundation-match", r#"{"rgb":[250,215,185]}"#),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["bestMatch"]["name"], "W1");
    assert_eq!(body["bestMatch"]["confidence"], 100);
    assert_eq!(body["userUndertone"], "warm");

    let alts = body["alternativeMatches"].as_array().unwrap();
    let names: Vec<_> = alts.iter().map(|a| a["name"].as_str().unwrap()).collect();
    assert_eq!(names, vec!["C1", "NW15", "NC15"]);
    assert_eq!(alts[0]["distance"], 15);

    let recs = body["recommendations"].as_array().unwrap();
    assert_eq!(recs.len(), 2);
    assert!(recs[1].as_str().unwrap().contains("maccosmetics"));
}

#[tokio::test]
async fn test_out_of_range_values_are_clamped() {
    let (status, clamped) = send(
        app(),
        post_json("/api/foundation-match", r#"{"rgb":[300,-10,128]}"#),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (_, direct) = send(
        app(),
        post_json("/api/foundation-match", r#"{"rgb":[255,0,128]}"#),
    )
    .await;
    assert_eq!(clamped, direct);
}

#[tokio::test]
async fn test_invalid_bodies_return_400() {
    let bodies = [
        "{}",
        r#"{"rgb":[1,2]}"#,
        r#"{"rgb":[1,2,3,4]}"#,
        r#"{"rgb":"1,2,3"}"#,
        r#"{"rgb":[1,"two",3]}"#,
        r#"{"rgb":null}"#,
        "not json at all",
        "",
    ];

    for body in bodies {
        let (status, json) = send(app(), post_json("/api/foundation-match", body)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "body {body:?}");
        assert_eq!(json, json!({ "error": INVALID_RGB_MESSAGE }), "body {body:?}");
    }
}

#[tokio::test]
async fn test_missing_content_type_still_validated() {
    let request = Request::builder()
        .method("POST")
        .uri("/api/foundation-match")
        .body(Body::from("{}"))
        .unwrap();
    let (status, json) = send(app(), request).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"], INVALID_RGB_MESSAGE);
}

#[tokio::test]
async fn test_oversized_body_rejected() {
    let config = ServerConfig {
        max_body_size_kb: 1,
        ..ServerConfig::default()
    };
    let padding = "x".repeat(4096);
    let body = format!(r#"{{"rgb":[1,2,3],"pad":"{padding}"}}"#);
    let response = app_with(config)
        .oneshot(post_json("/api/foundation-match", body))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
    assert_eq!(
        response.headers()[header::CONTENT_TYPE],
        "application/json"
    );

    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(json, json!({ "error": PAYLOAD_TOO_LARGE_MESSAGE }));
}

#[tokio::test]
async fn test_body_at_limit_is_accepted() {
    let config = ServerConfig {
        max_body_size_kb: 1,
        ..ServerConfig::default()
    };
    let (status, body) = send(
        app_with(config),
        post_json("/api/foundation-match", r#"{"rgb":[250,215,185]}"#),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["bestMatch"]["name"], "W1");
}

#[tokio::test]
async fn test_wrong_method_returns_405() {
    let (status, body) = send(app(), get_req("/api/foundation-match")).await;
    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(body, json!({ "error": "Method not allowed" }));
}

#[tokio::test]
async fn test_list_shades() {
    let (status, body) = send(app(), get_req("/api/shades")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total"], 34);
    let shades = body["shades"].as_array().unwrap();
    assert_eq!(shades.len(), 34);
    assert_eq!(
        shades[0],
        json!({ "name": "NC15", "rgb": [235, 200, 170], "undertone": "neutral-cool" })
    );
}

#[tokio::test]
async fn test_health_and_readiness() {
    let (status, body) = send(app(), get_req("/health")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");

    let (status, body) = send(app(), get_req("/ready")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ready");
    assert_eq!(body["components"]["catalog"], 34);
}

#[tokio::test]
async fn test_api_info_and_metadata() {
    let (status, body) = send(app(), get_req("/")).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["endpoints"]
        .as_array()
        .unwrap()
        .contains(&json!("/api/foundation-match")));

    let (status, body) = send(app(), get_req("/api/metadata")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["catalog_size"], 34);
}

#[tokio::test]
async fn test_metrics_without_recorder_falls_back_to_json() {
    let (status, body) = send(app(), get_req("/metrics")).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["uptime_seconds"].is_u64());
}

#[tokio::test]
async fn test_unknown_route_returns_404() {
    let (status, body) = send(app(), get_req("/api/v2/nothing")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "error": "Not found" }));
}

#[tokio::test]
async fn test_request_id_is_echoed_or_generated() {
    let request = Request::builder()
        .uri("/health")
        .header("x-request-id", "req-123")
        .body(Body::empty())
        .unwrap();
    let response = app().oneshot(request).await.unwrap();
    assert_eq!(response.headers()["x-request-id"], "req-123");

    let response = app().oneshot(get_req("/health")).await.unwrap();
    let generated = response.headers()["x-request-id"].to_str().unwrap();
    assert_eq!(generated.len(), 36);
}

#[tokio::test]
async fn test_cors_allows_any_origin() {
    let request = Request::builder()
        .uri("/api/shades")
        .header(header::ORIGIN, "http://localhost:5173")
        .body(Body::empty())
        .unwrap();
    let response = app().oneshot(request).await.unwrap();
    assert_eq!(
        response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
        "*"
    );
}

async fn boom() -> &'static str {
    panic!("boom")
}

async fn stall() -> &'static str {
    std::future::pending::<()>().await;
    "unreachable"
}

/// Routes that misbehave, wrapped in the same boundary layers as the real router.
fn misbehaving_app(config: &ServerConfig) -> Router {
    let routes = Router::new()
        .route("/boom", get(boom))
        .route("/stall", get(stall));
    boundary_layers(routes, config)
}

#[tokio::test]
async fn test_panics_become_internal_errors() {
    let app = misbehaving_app(&ServerConfig::default());

    let (status, body) = send(app, get_req("/boom")).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({ "error": INTERNAL_ERROR_MESSAGE }));
}

#[tokio::test]
async fn test_slow_requests_time_out_with_error_body() {
    let config = ServerConfig {
        timeout_secs: 0,
        ..ServerConfig::default()
    };
    let app = misbehaving_app(&config);

    let (status, body) = send(app, get_req("/stall")).await;
    assert_eq!(status, StatusCode::REQUEST_TIMEOUT);
    assert_eq!(body, json!({ "error": TIMEOUT_MESSAGE }));
}
