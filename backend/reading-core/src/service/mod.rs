//! Request handling independent of the HTTP layer.
//!
//! Each function validates its payload, runs the text pipeline and shapes
//! the response. All of them are pure apart from logging, so they can be
//! called concurrently without coordination.

use crate::error::ReadingError;
use crate::scoring::{FeedbackTier, score};
use crate::text::segment;

use models::{
    FeedbackResult, HealthResponse, ProcessTextRequest, ProcessTextResponse, ProcessedText,
    SpeechFeedbackRequest, TtsRequest, TtsResponse,
};

use std::time::SystemTime;

use humantime::format_rfc3339_millis;
use log::debug;
use serde_json::{Map, Value};

pub const HEALTH_STATUS: &str = "SomaBuddy server is running!";
pub const DEFAULT_CONFIDENCE: f64 = 0.8;
pub const DEFAULT_VOICE: &str = "en-US";
pub const DEFAULT_SPEED: f64 = 1.0;
pub const MAX_SPEED: f64 = 4.0;

const TEXT_REQUIRED_MESSAGE: &str = "Text is required";
const TTS_MESSAGE: &str = "Use Web Speech API on frontend for TTS";

/// Segment the submitted text for the reading view.
///
/// # Errors
///
/// Returns [`ReadingError::InvalidInput`] ("Text is required") when `text`
/// is missing, empty or blank.
#[track_caller]
pub fn process_text(request: ProcessTextRequest) -> Result<ProcessTextResponse, ReadingError> {
    let text = match request.text {
        Some(text) if !text.trim().is_empty() => text,
        _ => return Err(ReadingError::invalid_input(TEXT_REQUIRED_MESSAGE)),
    };

    let sentences = segment(&text)?;
    let total_sentences = sentences.len();
    let options = request
        .options
        .unwrap_or_else(|| Value::Object(Map::new()));

    debug!("Processed text into {total_sentences} sentences");

    Ok(ProcessTextResponse {
        processed: ProcessedText {
            original_text: text,
            sentences,
        },
        total_sentences,
        options,
    })
}

/// Score a spoken attempt against the reference sentence.
///
/// `confidence` from the recogniser is passed through to the log as-is and
/// does not affect the score.
///
/// # Errors
///
/// Returns [`ReadingError::InvalidInput`] when either text is missing.
#[track_caller]
pub fn speech_feedback(request: SpeechFeedbackRequest) -> Result<FeedbackResult, ReadingError> {
    let original_text = request
        .original_text
        .ok_or_else(|| ReadingError::invalid_input("originalText is required"))?;
    let spoken_text = request
        .spoken_text
        .ok_or_else(|| ReadingError::invalid_input("spokenText is required"))?;

    let confidence = request.confidence.unwrap_or(DEFAULT_CONFIDENCE);

    let similarity = score(&original_text, &spoken_text);
    let tier = FeedbackTier::from_score(similarity);

    debug!("Speech feedback: score={similarity:.3} tier={tier:?} confidence={confidence}");

    Ok(FeedbackResult {
        score: similarity,
        message: tier.message().to_string(),
        encouragement: tier.encouragement().to_string(),
    })
}

/// Voice settings for browser-side speech synthesis.
///
/// # Errors
///
/// Returns [`ReadingError::InvalidInput`] when `text` is missing or
/// `speed` is outside `(0, 4]`.
#[track_caller]
pub fn tts_settings(request: TtsRequest) -> Result<TtsResponse, ReadingError> {
    let text = request
        .text
        .ok_or_else(|| ReadingError::invalid_input(TEXT_REQUIRED_MESSAGE))?;

    let speed = request.speed.unwrap_or(DEFAULT_SPEED);
    if !(speed > 0.0 && speed <= MAX_SPEED) {
        return Err(ReadingError::invalid_input(format!(
            "speed must be greater than 0 and at most {MAX_SPEED}, got {speed}"
        )));
    }

    let voice = request
        .voice
        .filter(|voice| !voice.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_VOICE.to_string());

    Ok(TtsResponse {
        text,
        voice,
        speed,
        message: TTS_MESSAGE.to_string(),
    })
}

pub fn health() -> HealthResponse {
    HealthResponse {
        status: HEALTH_STATUS.to_string(),
        timestamp: format_rfc3339_millis(SystemTime::now()).to_string(),
    }
}
