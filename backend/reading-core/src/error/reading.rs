use common::{ErrorLocation, HttpStatusCode};

use std::io::Error as IoError;
use std::panic::Location;

use models::ModelError;
use thiserror::Error as ThisError;

/// Failures surfaced to API callers.
///
/// `Display` includes the source location for logs; [`ReadingError::client_message`]
/// is what goes into the response body.
#[derive(Debug, ThisError)]
pub enum ReadingError {
    #[error("Invalid Input Error: {message} {location}")]
    InvalidInput {
        message: String,
        location: ErrorLocation,
    },

    #[error("Not Found Error: {message} {location}")]
    NotFound {
        message: String,
        location: ErrorLocation,
    },

    #[error("No File Error: {message} {location}")]
    NoFile {
        message: String,
        location: ErrorLocation,
    },

    #[error("Unsupported File Error: {message} {location}")]
    UnsupportedFile {
        message: String,
        location: ErrorLocation,
    },

    #[error("Payload Too Large Error: {message} {location}")]
    PayloadTooLarge {
        message: String,
        location: ErrorLocation,
    },

    #[error("Storage Error: {message} {location}")]
    Storage {
        message: String,
        location: ErrorLocation,
    },
}

impl ReadingError {
    #[track_caller]
    pub fn invalid_input(message: impl Into<String>) -> Self {
        ReadingError::InvalidInput {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn not_found(message: impl Into<String>) -> Self {
        ReadingError::NotFound {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    pub fn status(&self) -> HttpStatusCode {
        match self {
            ReadingError::InvalidInput { .. }
            | ReadingError::NoFile { .. }
            | ReadingError::UnsupportedFile { .. } => HttpStatusCode::BAD_REQUEST,
            ReadingError::NotFound { .. } => HttpStatusCode::NOT_FOUND,
            ReadingError::PayloadTooLarge { .. } => HttpStatusCode::PAYLOAD_TOO_LARGE,
            ReadingError::Storage { .. } => HttpStatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Human-readable message without the source location.
    pub fn client_message(&self) -> &str {
        match self {
            ReadingError::InvalidInput { message, .. }
            | ReadingError::NotFound { message, .. }
            | ReadingError::NoFile { message, .. }
            | ReadingError::UnsupportedFile { message, .. }
            | ReadingError::PayloadTooLarge { message, .. } => message.as_str(),
            // Filesystem details stay in the log.
            ReadingError::Storage { .. } => "Failed to store file",
        }
    }

    pub fn location(&self) -> ErrorLocation {
        match self {
            ReadingError::InvalidInput { location, .. }
            | ReadingError::NotFound { location, .. }
            | ReadingError::NoFile { location, .. }
            | ReadingError::UnsupportedFile { location, .. }
            | ReadingError::PayloadTooLarge { location, .. }
            | ReadingError::Storage { location, .. } => *location,
        }
    }
}

impl From<IoError> for ReadingError {
    #[track_caller]
    fn from(error: IoError) -> Self {
        ReadingError::Storage {
            message: error.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<ModelError> for ReadingError {
    fn from(error: ModelError) -> Self {
        match error {
            ModelError::Validation { message, location } => {
                ReadingError::InvalidInput { message, location }
            }
        }
    }
}
