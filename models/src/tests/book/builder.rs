use crate::{Book, ModelError};

fn complete_builder() -> crate::BookBuilder {
    Book::builder()
        .with_id(7)
        .with_title("My First Storybook")
        .with_author("Longhorn Publishers")
        .with_level("Grade 1")
        .with_language("English")
        .with_content("Once upon a time. The end.")
}

/// **VALUE**: Verifies that builder validation rejects zero ids.
///
/// **WHY THIS MATTERS**: Books are looked up by id from `/api/books/{id}`. Id 0 is
/// what a failed integer parse on the client side usually produces, so a book stored
/// under 0 would be served for garbage requests.
///
/// **BUG THIS CATCHES**: Would catch if the zero-id check is deleted during refactoring.
#[test]
fn given_zero_id_when_building_book_then_returns_validation_error() {
    // GIVEN: Builder with id set to zero
    let builder = complete_builder().with_id(0);

    // WHEN: Attempting to build
    let result = builder.build();

    // THEN: Should return validation error
    match result {
        Err(ModelError::Validation { message, .. }) => {
            assert_eq!(message, "Book id must be non-zero");
        }
        Ok(book) => panic!("Expected validation error, got {book:?}"),
    }
}

/// **VALUE**: Verifies that a book without readable content is rejected.
///
/// **WHY THIS MATTERS**: Selecting a book sends its content to `/api/process-text`,
/// which rejects blank text. A blank book would be listed but could never be read.
///
/// **BUG THIS CATCHES**: Would catch if content validation only checks `is_empty`
/// and lets whitespace-only content through.
#[test]
fn given_whitespace_content_when_building_book_then_returns_validation_error() {
    // GIVEN: Builder whose content is only whitespace
    let builder = complete_builder().with_content("   \n ");

    // WHEN: Attempting to build
    let result = builder.build();

    // THEN: Should return validation error naming the book
    match result {
        Err(ModelError::Validation { message, .. }) => {
            assert!(message.contains("My First Storybook"));
        }
        Ok(book) => panic!("Expected validation error, got {book:?}"),
    }
}

#[test]
fn given_missing_title_when_building_then_returns_validation_error() {
    let builder = Book::builder().with_id(1).with_content("Hello.");

    let result = builder.build();

    assert!(matches!(
        result,
        Err(ModelError::Validation { ref message, .. }) if message == "Book title is required"
    ));
}

#[test]
fn given_only_required_fields_when_building_then_optional_fields_default_to_empty() {
    // GIVEN: Builder with id, title and content only
    let builder = Book::builder()
        .with_id(3)
        .with_title("Kiswahili")
        .with_content("Soma polepole.");

    // WHEN: Building
    let book = builder.build().expect("required fields are present");

    // THEN: Optional metadata is empty
    assert_eq!(book.id, 3);
    assert!(book.author.is_empty());
    assert!(book.level.is_empty());
    assert!(book.language.is_empty());
}
