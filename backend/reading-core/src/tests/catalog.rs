// Unit tests for the book catalog

use crate::catalog::{BookRepository, InMemoryCatalog};
use crate::error::ConfigError;

use tempfile::TempDir;

#[test]
fn given_sample_catalog_when_listed_then_returns_three_books_in_id_order() {
    let catalog = InMemoryCatalog::with_samples();

    let ids: Vec<u32> = catalog.list().iter().map(|book| book.id).collect();

    assert_eq!(ids, vec![1, 2, 3]);
    assert_eq!(catalog.len(), 3);
}

#[test]
fn given_sample_catalog_when_finding_by_id_then_returns_matching_book() {
    let catalog = InMemoryCatalog::with_samples();

    let book = catalog.find(3).expect("book 3 exists");

    assert_eq!(book.title, "My First Storybook");
    assert_eq!(book.language, "English");
    assert!(catalog.find(42).is_none());
}

/// **VALUE**: Verifies every built-in book can actually be read.
///
/// **WHY THIS MATTERS**: Selecting a book sends its content straight to the segmenter.
/// A sample that fails validation would show in the library and then error on open.
///
/// **BUG THIS CATCHES**: Would catch an edited sample with blank content or a zero id.
#[test]
fn given_sample_books_when_segmented_then_each_has_sentences() {
    for book in InMemoryCatalog::with_samples().list() {
        let sentences = crate::text::segment(&book.content).expect("readable content");

        assert!(sentences.len() >= 2, "{} should have sentences", book.title);
        assert!(book.id != 0);
    }
}

#[test]
fn given_valid_books_file_when_loaded_then_catalog_contains_books() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("books.json");
    std::fs::write(
        &path,
        r#"[{"id": 10, "title": "Amina", "author": "", "level": "Grade 2",
            "language": "English", "content": "Amina reads."}]"#,
    )
    .expect("write");

    let catalog = InMemoryCatalog::load_json(&path).expect("valid file");

    assert_eq!(catalog.len(), 1);
    assert_eq!(catalog.find(10).map(|b| b.title), Some(String::from("Amina")));
}

#[test]
fn given_duplicate_ids_when_loaded_then_returns_validation_error() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("books.json");
    std::fs::write(
        &path,
        r#"[{"id": 1, "title": "A", "author": "", "level": "", "language": "", "content": "A."},
            {"id": 1, "title": "B", "author": "", "level": "", "language": "", "content": "B."}]"#,
    )
    .expect("write");

    let result = InMemoryCatalog::load_json(&path);

    match result {
        Err(ConfigError::ValidationError { reason, .. }) => {
            assert!(reason.contains("Duplicate book id 1"));
        }
        other => panic!("Expected ValidationError, got {other:?}"),
    }
}

#[test]
fn given_blank_content_when_loaded_then_returns_validation_error() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("books.json");
    std::fs::write(
        &path,
        r#"[{"id": 4, "title": "Empty", "author": "", "level": "", "language": "", "content": " "}]"#,
    )
    .expect("write");

    assert!(matches!(
        InMemoryCatalog::load_json(&path),
        Err(ConfigError::ValidationError { .. })
    ));
}

#[test]
fn given_missing_books_file_when_loaded_then_returns_read_error() {
    let dir = TempDir::new().expect("temp dir");

    let result = InMemoryCatalog::load_json(&dir.path().join("absent.json"));

    assert!(matches!(result, Err(ConfigError::ReadError { .. })));
}
