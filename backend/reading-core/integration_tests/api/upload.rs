use crate::helpers::{start_test_server, start_test_server_with};

use reading_core::api::UPLOAD_PATH;

use reqwest::StatusCode;
use reqwest::multipart::{Form, Part};
use serde_json::Value;

// ============================================================================
// POST /api/upload
// ============================================================================

fn book_form(name: &str, mime: &str, bytes: &'static [u8]) -> Form {
    let part = Part::bytes(bytes)
        .file_name(name.to_string())
        .mime_str(mime)
        .expect("valid mime");
    Form::new().part("book", part)
}

/// **VALUE**: Verifies a text book can be uploaded and is written to disk.
///
/// **WHY THIS MATTERS**: Uploading is how teachers add material beyond the samples.
///
/// **BUG THIS CATCHES**: Would catch the multipart field name drifting from `book`,
/// `text/plain` being rejected for `.txt`, or the response pointing at a missing file.
#[tokio::test]
async fn given_text_file_when_uploaded_then_file_is_stored() {
    // GIVEN: A running server
    let server = start_test_server().await;

    // WHEN: Uploading a .txt book
    let response = server
        .client
        .post(server.url(UPLOAD_PATH))
        .multipart(book_form("story.txt", "text/plain", b"Once upon a time."))
        .send()
        .await
        .expect("Request failed");

    // THEN: 200 and the file exists where the response says
    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = response.json().await.expect("JSON body");
    assert_eq!(body["message"], "File uploaded successfully");
    assert_eq!(body["originalName"], "story.txt");
    assert_eq!(body["size"], 17);

    let filename = body["filename"].as_str().expect("filename");
    let stored = server.dir.path().join("uploads").join(filename);
    assert_eq!(
        std::fs::read_to_string(stored).expect("stored file"),
        "Once upon a time."
    );
}

#[tokio::test]
async fn given_html_file_when_uploaded_then_returns_400() {
    let server = start_test_server().await;

    let response = server
        .client
        .post(server.url(UPLOAD_PATH))
        .multipart(book_form("page.html", "text/html", b"<p>hi</p>"))
        .send()
        .await
        .expect("Request failed");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = response.json().await.expect("JSON body");
    assert_eq!(body["error"], "Only PDF, EPUB, and TXT files are allowed");
}

#[tokio::test]
async fn given_form_without_book_field_when_uploaded_then_returns_no_file() {
    let server = start_test_server().await;

    let response = server
        .client
        .post(server.url(UPLOAD_PATH))
        .multipart(Form::new().text("title", "no file here"))
        .send()
        .await
        .expect("Request failed");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = response.json().await.expect("JSON body");
    assert_eq!(body["error"], "No file uploaded");
}

#[tokio::test]
async fn given_non_multipart_body_when_uploaded_then_returns_no_file() {
    let server = start_test_server().await;

    let response = server
        .client
        .post(server.url(UPLOAD_PATH))
        .body("plain body")
        .send()
        .await
        .expect("Request failed");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = response.json().await.expect("JSON body");
    assert_eq!(body["error"], "No file uploaded");
}

#[tokio::test]
async fn given_file_over_configured_cap_when_uploaded_then_returns_413() {
    let server = start_test_server_with(|config| config.storage.max_upload_bytes = 8).await;

    let response = server
        .client
        .post(server.url(UPLOAD_PATH))
        .multipart(book_form("story.txt", "text/plain", b"this is longer than eight bytes"))
        .send()
        .await
        .expect("Request failed");

    assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
}
