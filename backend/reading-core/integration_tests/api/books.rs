use crate::helpers::start_test_server;

use reading_core::api::BOOKS_PATH;

use models::Book;

use reqwest::StatusCode;
use serde_json::Value;

// ============================================================================
// GET /api/books and GET /api/books/{id}
// ============================================================================

#[tokio::test]
async fn given_sample_catalog_when_books_listed_then_returns_all_books() {
    let server = start_test_server().await;

    let response = server
        .client
        .get(server.url(BOOKS_PATH))
        .send()
        .await
        .expect("Request failed");

    assert_eq!(response.status(), StatusCode::OK);
    let books: Vec<Book> = response.json().await.expect("JSON body");
    assert_eq!(books.len(), 3);
    assert_eq!(books[0].title, "Kiswahili Darasa la 1");
}

#[tokio::test]
async fn given_existing_id_when_book_requested_then_returns_book() {
    let server = start_test_server().await;

    let response = server
        .client
        .get(server.url(&format!("{BOOKS_PATH}/2")))
        .send()
        .await
        .expect("Request failed");

    assert_eq!(response.status(), StatusCode::OK);
    let book: Book = response.json().await.expect("JSON body");
    assert_eq!(book.id, 2);
    assert_eq!(book.title, "English Reader Grade 2");
}

/// **VALUE**: Verifies unknown and non-numeric ids both give a JSON 404.
///
/// **WHY THIS MATTERS**: Stale links and hand-typed URLs are common. A 400 or an
/// HTML error page for a bad id would break the library view's error handling.
///
/// **BUG THIS CATCHES**: Would catch extracting `Path<u32>`, which rejects "abc"
/// with axum's own plain-text 400.
#[tokio::test]
async fn given_unknown_or_garbage_id_when_book_requested_then_returns_404() {
    let server = start_test_server().await;

    for id in ["99", "abc", "0"] {
        let response = server
            .client
            .get(server.url(&format!("{BOOKS_PATH}/{id}")))
            .send()
            .await
            .expect("Request failed");

        assert_eq!(response.status(), StatusCode::NOT_FOUND, "id {id}");
        let body: Value = response.json().await.expect("JSON body");
        assert_eq!(body["error"], "Book not found");
    }
}
