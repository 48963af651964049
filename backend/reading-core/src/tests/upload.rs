// Unit tests for upload validation and storage

use crate::error::ReadingError;
use crate::upload::{BookFileKind, UploadStore, sanitize_file_name, validate_upload};

use tempfile::TempDir;

#[test]
fn given_supported_files_when_validated_then_kind_is_detected() {
    assert_eq!(
        validate_upload("story.pdf", Some("application/pdf")).ok(),
        Some(BookFileKind::Pdf)
    );
    assert_eq!(
        validate_upload("story.EPUB", Some("application/epub+zip")).ok(),
        Some(BookFileKind::Epub)
    );
    assert_eq!(
        validate_upload("story.txt", Some("text/plain; charset=utf-8")).ok(),
        Some(BookFileKind::Text)
    );
    assert_eq!(validate_upload("story.txt", None).ok(), Some(BookFileKind::Text));
}

/// **VALUE**: Verifies that uploads are rejected unless extension and content type agree.
///
/// **WHY THIS MATTERS**: Uploaded files land in a directory that may be served back.
/// Accepting `.html` or a script renamed to `.pdf` with a script content type opens the
/// door to storing arbitrary content.
///
/// **BUG THIS CATCHES**: Would catch validation that checks only one of the two signals.
#[test]
fn given_unsupported_files_when_validated_then_returns_unsupported_file() {
    let cases = [
        ("page.html", Some("text/html")),
        ("notes", Some("text/plain")),
        ("story.pdf", Some("text/html")),
        ("archive.txt.exe", None),
    ];

    for (name, content_type) in cases {
        match validate_upload(name, content_type) {
            Err(error @ ReadingError::UnsupportedFile { .. }) => {
                assert_eq!(
                    error.client_message(),
                    "Only PDF, EPUB, and TXT files are allowed"
                );
            }
            other => panic!("{name} should be rejected, got {other:?}"),
        }
    }
}

#[test]
fn given_generic_content_type_when_validated_then_extension_decides() {
    assert_eq!(
        validate_upload("book.epub", Some("application/octet-stream")).ok(),
        Some(BookFileKind::Epub)
    );
}

#[test]
fn given_path_like_names_when_sanitized_then_only_file_name_remains() {
    assert_eq!(sanitize_file_name("../../etc/passwd.txt"), "passwd.txt");
    assert_eq!(sanitize_file_name(r"C:\books\My Story.pdf"), "My_Story.pdf");
    assert_eq!(sanitize_file_name("..."), "upload");
    assert_eq!(sanitize_file_name("hadithi ya sungura.txt"), "hadithi_ya_sungura.txt");
}

/// **VALUE**: Verifies that a stored upload lands in the configured directory.
///
/// **WHY THIS MATTERS**: The response `path` is how callers find the file later. If
/// the name or location differs from what is reported, the upload is effectively lost.
///
/// **BUG THIS CATCHES**: Would catch missing directory creation, a wrong reported size,
/// or a name that drops the timestamp prefix (overwriting earlier uploads).
#[tokio::test]
async fn given_valid_text_file_when_stored_then_file_exists_with_reported_metadata() {
    // GIVEN: A store pointed at a directory that doesn't exist yet
    let dir = TempDir::new().expect("temp dir");
    let upload_dir = dir.path().join("uploads");
    let store = UploadStore::new(&upload_dir, 1024);
    let content = b"Once upon a time. The end.";

    // WHEN: Storing a text file
    let response = store
        .store("story.txt", Some("text/plain"), content)
        .await
        .expect("stored");

    // THEN: Metadata matches and the bytes are on disk
    assert_eq!(response.message, "File uploaded successfully");
    assert_eq!(response.original_name, "story.txt");
    assert_eq!(response.size, content.len() as u64);
    assert!(response.filename.ends_with("-story.txt"));

    let prefix = response.filename.trim_end_matches("-story.txt");
    assert!(prefix.chars().all(|c| c.is_ascii_digit()));

    let on_disk = std::fs::read(upload_dir.join(&response.filename)).expect("file written");
    assert_eq!(on_disk, content);
    assert_eq!(
        response.path,
        upload_dir.join(&response.filename).display().to_string()
    );
}

#[tokio::test]
async fn given_file_over_limit_when_stored_then_returns_payload_too_large() {
    let dir = TempDir::new().expect("temp dir");
    let store = UploadStore::new(dir.path(), 4);

    let result = store.store("story.txt", None, b"too many bytes").await;

    match result {
        Err(error @ ReadingError::PayloadTooLarge { .. }) => {
            assert_eq!(error.status().as_u16(), 413);
        }
        other => panic!("Expected PayloadTooLarge, got {other:?}"),
    }
    assert_eq!(std::fs::read_dir(dir.path()).expect("dir").count(), 0);
}

#[tokio::test]
async fn given_unsupported_file_when_stored_then_nothing_is_written() {
    let dir = TempDir::new().expect("temp dir");
    let upload_dir = dir.path().join("uploads");
    let store = UploadStore::new(&upload_dir, 1024);

    let result = store.store("virus.exe", None, b"MZ").await;

    assert!(matches!(result, Err(ReadingError::UnsupportedFile { .. })));
    assert!(!upload_dir.exists());
}
