use crate::helpers::start_test_server;

use reading_core::api::PROCESS_TEXT_PATH;

use reqwest::StatusCode;
use serde_json::{Value, json};

// ============================================================================
// POST /api/process-text
// ============================================================================

/// **VALUE**: Verifies the end-to-end segmentation contract over HTTP.
///
/// **WHY THIS MATTERS**: This is the request the reading view makes whenever a book or
/// pasted text is opened. Every field here is read by the front-end.
///
/// **BUG THIS CATCHES**: Would catch routing mistakes, wrong JSON field names, or
/// segmentation regressions that only show up after serialization.
#[tokio::test]
async fn given_running_server_when_story_posted_then_returns_segmented_sentences() {
    // GIVEN: A running server
    let server = start_test_server().await;

    // WHEN: Posting a two-sentence story
    let response = server
        .client
        .post(server.url(PROCESS_TEXT_PATH))
        .json(&json!({"text": "Once upon a time. The end.", "options": {"fontSize": "large"}}))
        .send()
        .await
        .expect("Request failed");

    // THEN: 200 with two sentences
    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = response.json().await.expect("JSON body");

    assert_eq!(body["originalText"], "Once upon a time. The end.");
    assert_eq!(body["totalSentences"], 2);
    assert_eq!(body["sentences"][0]["text"], "Once upon a time.");
    assert_eq!(body["sentences"][1]["text"], "The end.");
    assert_eq!(body["sentences"][0]["words"].as_array().map(Vec::len), Some(4));
    assert_eq!(body["sentences"][1]["words"].as_array().map(Vec::len), Some(2));
    assert_eq!(body["sentences"][1]["words"][0], json!({"id": 0, "text": "The", "highlighted": false}));
    assert_eq!(body["options"], json!({"fontSize": "large"}));
}

#[tokio::test]
async fn given_empty_text_when_posted_then_returns_400_text_required() {
    let server = start_test_server().await;

    let response = server
        .client
        .post(server.url(PROCESS_TEXT_PATH))
        .json(&json!({"text": ""}))
        .send()
        .await
        .expect("Request failed");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = response.json().await.expect("JSON body");
    assert_eq!(body, json!({"error": "Text is required"}));
}

#[tokio::test]
async fn given_missing_text_when_posted_then_returns_400_text_required() {
    let server = start_test_server().await;

    let response = server
        .client
        .post(server.url(PROCESS_TEXT_PATH))
        .json(&json!({"options": {}}))
        .send()
        .await
        .expect("Request failed");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = response.json().await.expect("JSON body");
    assert_eq!(body["error"], "Text is required");
}

/// **VALUE**: Verifies that malformed bodies get the same error shape as validation errors.
///
/// **WHY THIS MATTERS**: The front-end shows `error` from any failed response. A plain-text
/// rejection body would surface as "undefined" to the child.
///
/// **BUG THIS CATCHES**: Would catch handlers using axum's `Json` extractor directly.
#[tokio::test]
async fn given_wrong_field_type_when_posted_then_returns_400_json_error() {
    let server = start_test_server().await;

    let response = server
        .client
        .post(server.url(PROCESS_TEXT_PATH))
        .json(&json!({"text": 42}))
        .send()
        .await
        .expect("Request failed");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = response.json().await.expect("JSON body");
    assert!(body["error"].is_string());
}
