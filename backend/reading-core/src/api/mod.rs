//! HTTP API for the reading front-end.
//!
//! Routes live under [`API_PREFIX`]; any other path is served from the
//! static directory. Errors are returned as `{"error": "..."}` with the
//! status from [`ReadingError::status`](crate::error::ReadingError::status).

mod extract;
mod handle;
mod handlers;
mod response;
mod server;
mod state;

pub use extract::JsonBody;
pub use handle::ServerHandle;
pub use server::{router, start_server};
pub use state::AppState;

use const_format::concatcp;

pub const API_PREFIX: &str = "/api";
pub const HEALTH_PATH: &str = concatcp!(API_PREFIX, "/health");
pub const BOOKS_PATH: &str = concatcp!(API_PREFIX, "/books");
pub const BOOK_BY_ID_PATH: &str = concatcp!(BOOKS_PATH, "/{id}");
pub const UPLOAD_PATH: &str = concatcp!(API_PREFIX, "/upload");
pub const PROCESS_TEXT_PATH: &str = concatcp!(API_PREFIX, "/process-text");
pub const TTS_PATH: &str = concatcp!(API_PREFIX, "/tts");
pub const SPEECH_FEEDBACK_PATH: &str = concatcp!(API_PREFIX, "/speech-feedback");
