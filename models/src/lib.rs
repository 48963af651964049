//! Domain models for SomaBuddy.
//!
//! Pure data structures describing books, segmented text, pronunciation
//! feedback and the JSON payloads of the HTTP API. Models carry no
//! behaviour beyond construction-time validation; the logic operating on
//! them lives in `reading-core`.

pub mod book;
pub mod error;
pub mod payload;
pub mod text;

pub use book::{Book, BookBuilder};
pub use error::model_error::ModelError;
pub use payload::{
    ErrorResponse, HealthResponse, ProcessTextRequest, ProcessTextResponse,
    SpeechFeedbackRequest, TtsRequest, TtsResponse, UploadResponse,
};
pub use common::ErrorLocation;
pub use text::{FeedbackResult, ProcessedText, Sentence, Word};

#[cfg(test)]
mod tests;
