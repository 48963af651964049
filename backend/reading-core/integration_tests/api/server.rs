use crate::helpers::start_test_server;

use reading_core::api::{HEALTH_PATH, PROCESS_TEXT_PATH};

use reqwest::StatusCode;
use serde_json::{Value, json};

// ============================================================================
// Server lifecycle, health, CORS and static files
// ============================================================================

#[tokio::test]
async fn given_running_server_when_health_checked_then_reports_status() {
    let server = start_test_server().await;

    let response = server
        .client
        .get(server.url(HEALTH_PATH))
        .send()
        .await
        .expect("Request failed");

    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = response.json().await.expect("JSON body");
    assert_eq!(body["status"], "SomaBuddy server is running!");
    assert!(body["timestamp"].is_string());
}

/// **VALUE**: Verifies cross-origin requests are allowed.
///
/// **WHY THIS MATTERS**: In development the front-end runs on its own dev server port,
/// so every API call is cross-origin. Without CORS headers the browser blocks them all.
///
/// **BUG THIS CATCHES**: Would catch the CORS layer being removed from the router.
#[tokio::test]
async fn given_cross_origin_request_when_sent_then_response_allows_origin() {
    let server = start_test_server().await;

    let response = server
        .client
        .post(server.url(PROCESS_TEXT_PATH))
        .header("Origin", "http://localhost:3000")
        .json(&json!({"text": "Hello."}))
        .send()
        .await
        .expect("Request failed");

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response
            .headers()
            .get("access-control-allow-origin")
            .and_then(|v| v.to_str().ok()),
        Some("*")
    );
}

#[tokio::test]
async fn given_file_in_static_dir_when_requested_then_it_is_served() {
    let server = start_test_server().await;
    let public = server.dir.path().join("public");
    std::fs::create_dir_all(&public).expect("public dir");
    std::fs::write(public.join("hello.txt"), "jambo").expect("static file");

    let response = server
        .client
        .get(server.url("/hello.txt"))
        .send()
        .await
        .expect("Request failed");

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.text().await.expect("body"), "jambo");
}

#[tokio::test]
async fn given_running_server_when_shut_down_then_stops_accepting_requests() {
    // GIVEN: A running server
    let server = start_test_server().await;
    let url = server.url(HEALTH_PATH);
    let client = server.client.clone();

    // WHEN: Shutting down
    server.handle.shutdown().await.expect("Clean shutdown");

    // THEN: New connections fail
    let result = client.get(&url).send().await;
    assert!(result.is_err(), "Server should no longer accept connections");
}
