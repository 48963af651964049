use crate::helpers::start_test_server;

use reading_core::api::{SPEECH_FEEDBACK_PATH, TTS_PATH};

use reqwest::StatusCode;
use serde_json::{Value, json};

// ============================================================================
// POST /api/speech-feedback and POST /api/tts
// ============================================================================

#[tokio::test]
async fn given_one_wrong_word_when_feedback_posted_then_returns_good_try_tier() {
    // GIVEN: A running server
    let server = start_test_server().await;

    // WHEN: Two of three words match
    let response = server
        .client
        .post(server.url(SPEECH_FEEDBACK_PATH))
        .json(&json!({"originalText": "the cat sat", "spokenText": "the dog sat", "confidence": 0.9}))
        .send()
        .await
        .expect("Request failed");

    // THEN: Score is 2/3, which is "Good try"
    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = response.json().await.expect("JSON body");

    let score = body["score"].as_f64().expect("numeric score");
    assert!((score - 2.0 / 3.0).abs() < 1e-9);
    assert_eq!(body["message"], "Good try! Almost there.");
    assert_eq!(body["encouragement"], "👍 Keep practicing, you're doing great!");
}

#[tokio::test]
async fn given_exact_reading_when_feedback_posted_then_returns_excellent() {
    let server = start_test_server().await;

    let response = server
        .client
        .post(server.url(SPEECH_FEEDBACK_PATH))
        .json(&json!({"originalText": "The rabbit lived in a big forest.", "spokenText": "the rabbit lived in a big forest."}))
        .send()
        .await
        .expect("Request failed");

    let body: Value = response.json().await.expect("JSON body");
    assert_eq!(body["score"], 1.0);
    assert_eq!(body["message"], "Excellent pronunciation!");
}

#[tokio::test]
async fn given_missing_spoken_text_when_feedback_posted_then_returns_400() {
    let server = start_test_server().await;

    let response = server
        .client
        .post(server.url(SPEECH_FEEDBACK_PATH))
        .json(&json!({"originalText": "hello"}))
        .send()
        .await
        .expect("Request failed");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = response.json().await.expect("JSON body");
    assert_eq!(body["error"], "spokenText is required");
}

#[tokio::test]
async fn given_tts_request_when_posted_then_echoes_voice_settings() {
    let server = start_test_server().await;

    let response = server
        .client
        .post(server.url(TTS_PATH))
        .json(&json!({"text": "Soma polepole.", "voice": "sw-KE"}))
        .send()
        .await
        .expect("Request failed");

    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = response.json().await.expect("JSON body");
    assert_eq!(
        body,
        json!({
            "text": "Soma polepole.",
            "voice": "sw-KE",
            "speed": 1.0,
            "message": "Use Web Speech API on frontend for TTS"
        })
    );
}
