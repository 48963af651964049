use somabuddy::app;

use reading_core::AppConfig;

use serde_json::{Value, json};
use tempfile::TempDir;

fn local_config(dir: &TempDir) -> AppConfig {
    let mut config = AppConfig::default();
    config.server.host = String::from("127.0.0.1");
    config.server.port = 0;
    config.server.static_dir = dir.path().join("public");
    config.storage.upload_dir = dir.path().join("uploads");
    config
}

/// **VALUE**: Verifies the application wiring serves a configured catalog end to end.
///
/// **WHY THIS MATTERS**: `app::start` is what `main` calls. If config, catalog and
/// server aren't connected, the binary starts but serves the wrong books.
///
/// **BUG THIS CATCHES**: Would catch `books_file` being ignored in favour of samples.
#[tokio::test]
async fn given_books_file_when_app_started_then_serves_configured_books() {
    // GIVEN: A config pointing at a one-book catalog
    let dir = TempDir::new().expect("temp dir");
    let books_path = dir.path().join("books.json");
    std::fs::write(
        &books_path,
        json!([{
            "id": 11, "title": "Amina Reads", "author": "", "level": "Grade 2",
            "language": "English", "content": "Amina reads every day."
        }])
        .to_string(),
    )
    .expect("write books");
    let mut config = local_config(&dir);
    config.storage.books_file = Some(books_path);

    // WHEN: Starting the app and listing books
    let handle = app::start(&config).await.expect("Failed to start app");
    let books: Value = reqwest::get(format!("{}/api/books", handle.base_url()))
        .await
        .expect("Request failed")
        .json()
        .await
        .expect("JSON body");

    // THEN: Only the configured book is served
    assert_eq!(books.as_array().map(Vec::len), Some(1));
    assert_eq!(books[0]["title"], "Amina Reads");

    handle.shutdown().await.expect("Clean shutdown");
}

#[tokio::test]
async fn given_default_catalog_when_app_started_then_feedback_endpoint_works() {
    let dir = TempDir::new().expect("temp dir");
    let handle = app::start(&local_config(&dir))
        .await
        .expect("Failed to start app");

    let body: Value = reqwest::Client::new()
        .post(format!("{}/api/speech-feedback", handle.base_url()))
        .json(&json!({"originalText": "hello world", "spokenText": ""}))
        .send()
        .await
        .expect("Request failed")
        .json()
        .await
        .expect("JSON body");

    assert_eq!(body["score"], 0.0);
    assert_eq!(body["message"], "Let's try again slowly.");

    handle.shutdown().await.expect("Clean shutdown");
}
