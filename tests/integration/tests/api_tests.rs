//! API Integration Tests
//!
//! Each test spawns its own server on an ephemeral port; no external
//! services are needed.
//!
//! Run with: cargo test -p integration-tests --test api_tests

use chrono::Duration;
use integration_tests::{assert_json, assert_status, fixtures::*, TestServer};
use reqwest::StatusCode;
use serde_json::{json, Value};

const STARTED_AT: &str = "2023-11-14T22:13:20.000Z";

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health").await.expect("Request failed");
    let body: Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body["status"], "healthy");
}

// ============================================================================
// Write Tests
// ============================================================================

#[tokio::test]
async fn test_update_left_only() {
    let server = TestServer::start_with_clock().await.unwrap();

    let response = server.post(PRESENCE_PATH, &PresenceBody::left(true)).await.unwrap();
    let body: UpdateBody = assert_json(response, StatusCode::OK).await.unwrap();

    assert!(body.success);
    assert_eq!(body.message, "Presence updated");
    assert_eq!(body.data.left, Some(true));
    assert_eq!(body.data.right, None);
    assert_eq!(body.data.last_updated.left, STARTED_AT);
    assert_eq!(body.data.last_updated.right, "never");
}

#[tokio::test]
async fn test_update_both_sides() {
    let server = TestServer::start_with_clock().await.unwrap();

    let response = server
        .post(PRESENCE_PATH, &PresenceBody::both(false, true))
        .await
        .unwrap();
    let body: UpdateBody = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(body.data.left, Some(false));
    assert_eq!(body.data.right, Some(true));
}

#[tokio::test]
async fn test_update_requires_a_side() {
    let server = TestServer::start().await.unwrap();

    let response = server.post(PRESENCE_PATH, &PresenceBody::default()).await.unwrap();
    let body: ErrorBody = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();

    assert_eq!(body.error, "VALIDATION_ERROR");
    assert_eq!(body.message, "At least one side (left or right) must be provided");
}

#[tokio::test]
async fn test_update_null_sides_count_as_missing() {
    let server = TestServer::start().await.unwrap();

    let response = server
        .post(PRESENCE_PATH, &json!({ "left": null, "right": null }))
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

#[tokio::test]
async fn test_update_rejects_non_boolean() {
    let server = TestServer::start_with_clock().await.unwrap();

    let response = server
        .post(PRESENCE_PATH, &json!({ "left": true, "right": 1 }))
        .await
        .unwrap();
    let body: ErrorBody = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(body.error, "VALIDATION_ERROR");
    assert_eq!(body.message, "right must be a boolean");

    // The valid half of the request was not applied either
    let response = server.get(&format!("{PRESENCE_PATH}?side=left")).await.unwrap();
    let zone: ZoneBody = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(zone.last_updated_at, "never");
}

#[tokio::test]
async fn test_update_rejects_malformed_json() {
    let server = TestServer::start().await.unwrap();

    let response = server.post_raw(PRESENCE_PATH, "{\"left\": tru").await.unwrap();
    let body: ErrorBody = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(body.error, "INVALID_BODY");
}

#[tokio::test]
async fn test_update_rejects_non_object_bodies() {
    let server = TestServer::start_with_clock().await.unwrap();

    for body in [json!([true, false]), json!([]), json!([true]), json!("x")] {
        let response = server.post(PRESENCE_PATH, &body).await.unwrap();
        let error: ErrorBody = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
        assert_eq!(error.error, "INVALID_BODY", "body {body}");
    }

    // The array form did not leak through as a positional write
    let response = server.get(PRESENCE_PATH).await.unwrap();
    let merged: MergedBody = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(merged.last_updated.left, "never");
    assert_eq!(merged.last_updated.right, "never");
}

// ============================================================================
// Read Tests
// ============================================================================

#[tokio::test]
async fn test_single_side_read_is_fresh() {
    let server = TestServer::start_with_clock().await.unwrap();
    server.post(PRESENCE_PATH, &PresenceBody::left(true)).await.unwrap();

    let response = server.get(&format!("{PRESENCE_PATH}?side=left")).await.unwrap();
    let zone: ZoneBody = assert_json(response, StatusCode::OK).await.unwrap();

    assert!(zone.present);
    assert!(!zone.is_stale);
    assert_eq!(zone.last_updated_at, STARTED_AT);
}

#[tokio::test]
async fn test_never_written_side_is_stale() {
    let server = TestServer::start_with_clock().await.unwrap();

    let response = server.get(&format!("{PRESENCE_PATH}?side=right")).await.unwrap();
    let zone: ZoneBody = assert_json(response, StatusCode::OK).await.unwrap();

    assert!(!zone.present);
    assert!(zone.is_stale);
    assert_eq!(zone.last_updated_at, "never");
}

#[tokio::test]
async fn test_merged_read_with_one_side_written() {
    let server = TestServer::start_with_clock().await.unwrap();
    server.post(PRESENCE_PATH, &PresenceBody::left(true)).await.unwrap();

    let response = server.get(PRESENCE_PATH).await.unwrap();
    let merged: MergedBody = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(merged.side, "all");
    assert_eq!(merged.presence, json!(true));
    assert_eq!(merged.details.left, json!(true));
    assert_eq!(merged.details.right, json!("unavailable"));
    assert_eq!(merged.last_updated.left, STARTED_AT);
    assert_eq!(merged.last_updated.right, "never");
}

#[tokio::test]
async fn test_merged_read_is_logical_or() {
    let server = TestServer::start_with_clock().await.unwrap();
    server
        .post(PRESENCE_PATH, &PresenceBody::both(false, false))
        .await
        .unwrap();

    let response = server.get(PRESENCE_PATH).await.unwrap();
    let merged: MergedBody = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(merged.presence, json!(false));

    server.post(PRESENCE_PATH, &PresenceBody::right(true)).await.unwrap();

    let response = server.get(PRESENCE_PATH).await.unwrap();
    let merged: MergedBody = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(merged.presence, json!(true));
}

#[tokio::test]
async fn test_unknown_side_reads_merged_view() {
    let server = TestServer::start().await.unwrap();

    let response = server.get(&format!("{PRESENCE_PATH}?side=both")).await.unwrap();
    let merged: MergedBody = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(merged.side, "all");
    assert_eq!(merged.presence, json!("unavailable"));
}

// ============================================================================
// Staleness Tests
// ============================================================================

#[tokio::test]
async fn test_reading_goes_stale_after_timeout() {
    let server = TestServer::start_with_clock().await.unwrap();
    server.post(PRESENCE_PATH, &PresenceBody::left(true)).await.unwrap();

    // Exactly at the timeout the reading still counts
    server.advance_clock(Duration::minutes(10)).unwrap();
    let response = server.get(&format!("{PRESENCE_PATH}?side=left")).await.unwrap();
    let zone: ZoneBody = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(!zone.is_stale);

    server.advance_clock(Duration::milliseconds(1)).unwrap();
    let response = server.get(&format!("{PRESENCE_PATH}?side=left")).await.unwrap();
    let zone: ZoneBody = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(zone.present);
    assert!(zone.is_stale);

    let response = server.get(PRESENCE_PATH).await.unwrap();
    let merged: MergedBody = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(merged.presence, json!("unavailable"));
    assert_eq!(merged.details.left, json!("unavailable"));
    // The timestamp is still reported
    assert_eq!(merged.last_updated.left, STARTED_AT);
}

#[tokio::test]
async fn test_rewrite_refreshes_stale_side() {
    let server = TestServer::start_with_clock().await.unwrap();
    server.post(PRESENCE_PATH, &PresenceBody::right(true)).await.unwrap();

    server.advance_clock(Duration::minutes(11)).unwrap();
    server.post(PRESENCE_PATH, &PresenceBody::right(false)).await.unwrap();

    let response = server.get(&format!("{PRESENCE_PATH}?side=right")).await.unwrap();
    let zone: ZoneBody = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(!zone.present);
    assert!(!zone.is_stale);
    assert_eq!(zone.last_updated_at, "2023-11-14T22:24:20.000Z");
}

#[tokio::test]
async fn test_custom_timeout_is_honoured() {
    let mut config = integration_tests::test_config();
    config.presence.stale_timeout_ms = 1_000;
    let server = TestServer::start_with_config_and_clock(config).await.unwrap();

    server.post(PRESENCE_PATH, &PresenceBody::left(true)).await.unwrap();
    server.advance_clock(Duration::milliseconds(1_001)).unwrap();

    let response = server.get(&format!("{PRESENCE_PATH}?side=left")).await.unwrap();
    let zone: ZoneBody = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(zone.is_stale);
}

// ============================================================================
// Routing Tests
// ============================================================================

#[tokio::test]
async fn test_unknown_route_is_not_found() {
    let server = TestServer::start().await.unwrap();

    let response = server.get("/api/metrics/temperature").await.unwrap();
    let body: ErrorBody = assert_json(response, StatusCode::NOT_FOUND).await.unwrap();
    assert_eq!(body.error, "NOT_FOUND");
}

#[tokio::test]
async fn test_unsupported_method_returns_json_error() {
    let server = TestServer::start().await.unwrap();

    let response = server.put(PRESENCE_PATH, &PresenceBody::left(true)).await.unwrap();
    let body: ErrorBody = assert_json(response, StatusCode::METHOD_NOT_ALLOWED).await.unwrap();
    assert_eq!(body.error, "METHOD_NOT_ALLOWED");
    assert_eq!(body.message, "Method PUT not allowed");
}

#[tokio::test]
async fn test_request_id_header_is_returned() {
    let server = TestServer::start().await.unwrap();

    let response = server.get("/health").await.unwrap();
    assert!(response.headers().contains_key("x-request-id"));
}
