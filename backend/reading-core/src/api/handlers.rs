use crate::api::extract::JsonBody;
use crate::api::state::AppState;
use crate::error::ReadingError;
use crate::service;
use crate::upload::{UPLOAD_FIELD, UploadStore};

use common::ErrorLocation;
use models::{
    Book, FeedbackResult, HealthResponse, ProcessTextRequest, ProcessTextResponse,
    SpeechFeedbackRequest, TtsRequest, TtsResponse, UploadResponse,
};

use std::panic::Location;

use axum::Json;
use axum::extract::multipart::{Multipart, MultipartError, MultipartRejection};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use log::{debug, info};

const BOOK_NOT_FOUND_MESSAGE: &str = "Book not found";

pub(crate) async fn health() -> Json<HealthResponse> {
    Json(service::health())
}

pub(crate) async fn list_books(State(state): State<AppState>) -> Json<Vec<Book>> {
    let books = state.catalog.list();
    debug!("Listing {} books", books.len());
    Json(books)
}

/// Non-numeric ids are reported as not found.
pub(crate) async fn get_book(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Book>, ReadingError> {
    id.trim()
        .parse::<u32>()
        .ok()
        .and_then(|id| state.catalog.find(id))
        .map(Json)
        .ok_or_else(|| ReadingError::not_found(BOOK_NOT_FOUND_MESSAGE))
}

pub(crate) async fn process_text(
    JsonBody(request): JsonBody<ProcessTextRequest>,
) -> Result<Json<ProcessTextResponse>, ReadingError> {
    service::process_text(request).map(Json)
}

pub(crate) async fn speech_feedback(
    JsonBody(request): JsonBody<SpeechFeedbackRequest>,
) -> Result<Json<FeedbackResult>, ReadingError> {
    service::speech_feedback(request).map(Json)
}

pub(crate) async fn tts(
    JsonBody(request): JsonBody<TtsRequest>,
) -> Result<Json<TtsResponse>, ReadingError> {
    service::tts_settings(request).map(Json)
}

/// Stores the multipart field named `book`; other fields are ignored.
pub(crate) async fn upload(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<UploadResponse>, ReadingError> {
    let Ok(mut multipart) = multipart else {
        return Err(UploadStore::no_file());
    };

    while let Some(field) = multipart.next_field().await.map_err(multipart_error)? {
        if field.name() != Some(UPLOAD_FIELD) {
            continue;
        }

        let Some(original_name) = field.file_name().map(str::to_string) else {
            return Err(UploadStore::no_file());
        };
        let content_type = field.content_type().map(str::to_string);
        let bytes = field.bytes().await.map_err(multipart_error)?;

        info!("Receiving upload '{original_name}' ({} bytes)", bytes.len());

        return state
            .uploads
            .store(&original_name, content_type.as_deref(), &bytes)
            .await
            .map(Json);
    }

    Err(UploadStore::no_file())
}

#[track_caller]
fn multipart_error(error: MultipartError) -> ReadingError {
    if error.status() == StatusCode::PAYLOAD_TOO_LARGE {
        ReadingError::PayloadTooLarge {
            message: error.body_text(),
            location: ErrorLocation::from(Location::caller()),
        }
    } else {
        ReadingError::invalid_input(error.body_text())
    }
}
