use common::ErrorLocation;

use serde::Serialize;
use thiserror::Error;

/// Errors that stop the server from starting or running.
///
/// Serializable so start-up failures can be emitted as structured JSON.
#[derive(Debug, Error, Serialize)]
#[serde(tag = "type", content = "data")]
pub enum SomabuddyError {
    /// Error from this App
    #[error("Somabuddy Error: {message} {location}")]
    Somabuddy {
        message: String,
        location: ErrorLocation,
    },

    /// Error from reading-core (config, catalog, server)
    #[error("Core Error: {message} {location}")]
    Core {
        message: String,
        location: ErrorLocation,
    },
}

impl From<reading_core::CoreError> for SomabuddyError {
    #[track_caller]
    fn from(error: reading_core::CoreError) -> Self {
        SomabuddyError::Core {
            message: error.to_string(),
            location: ErrorLocation::from(std::panic::Location::caller()),
        }
    }
}

impl From<reading_core::ConfigError> for SomabuddyError {
    #[track_caller]
    fn from(error: reading_core::ConfigError) -> Self {
        SomabuddyError::Core {
            message: error.to_string(),
            location: ErrorLocation::from(std::panic::Location::caller()),
        }
    }
}

impl From<reading_core::ServerError> for SomabuddyError {
    #[track_caller]
    fn from(error: reading_core::ServerError) -> Self {
        SomabuddyError::Core {
            message: error.to_string(),
            location: ErrorLocation::from(std::panic::Location::caller()),
        }
    }
}
