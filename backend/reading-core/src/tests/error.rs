// Unit tests for error classification

use crate::error::{CoreError, ReadingError};
use crate::upload::UploadStore;

use common::HttpStatusCode;
use models::Book;

/// **VALUE**: Verifies that response bodies never leak source locations.
///
/// **WHY THIS MATTERS**: `Display` embeds `[file:line:col]` for the logs. Returning
/// that to a browser exposes source layout and confuses readers of the error message.
///
/// **BUG THIS CATCHES**: Would catch `client_message` being replaced by `to_string()`.
#[test]
fn given_invalid_input_when_formatted_then_only_log_text_has_location() {
    // GIVEN: A validation failure
    let error = ReadingError::invalid_input("Text is required");

    // WHEN: Formatting for the log and for the client
    let log_text = error.to_string();
    let client_text = error.client_message();

    // THEN: Only the log line carries the location
    assert!(log_text.contains(&error.location().to_string()));
    assert_eq!(client_text, "Text is required");
}

#[test]
fn given_each_error_kind_when_classified_then_maps_to_expected_status() {
    assert_eq!(
        ReadingError::invalid_input("x").status(),
        HttpStatusCode::BAD_REQUEST
    );
    assert_eq!(
        ReadingError::not_found("Book not found").status(),
        HttpStatusCode::NOT_FOUND
    );
    assert_eq!(UploadStore::no_file().status(), HttpStatusCode::BAD_REQUEST);
    assert_eq!(UploadStore::no_file().client_message(), "No file uploaded");
}

#[test]
fn given_io_failure_when_converted_then_storage_error_hides_details() {
    let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "/secret/uploads");

    let error = ReadingError::from(io);

    assert!(error.status().is_server_error());
    assert_eq!(error.client_message(), "Failed to store file");
    assert!(error.to_string().contains("/secret/uploads"));
}

#[test]
fn given_model_validation_error_when_converted_then_becomes_invalid_input() {
    let model_error = Book::builder().build().expect_err("missing id");

    let error = ReadingError::from(model_error);

    assert!(matches!(error, ReadingError::InvalidInput { .. }));
    assert_eq!(error.client_message(), "Book id is required");
}

#[test]
fn given_reading_error_when_wrapped_then_core_error_is_transparent() {
    let inner = ReadingError::not_found("Book not found");
    let expected = inner.to_string();

    let core: CoreError = inner.into();

    assert_eq!(core.to_string(), expected);
}
