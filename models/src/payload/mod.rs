//! Request and response bodies of the HTTP API.
//!
//! Field names are camelCase on the wire. Required request fields are
//! `Option`s so that a missing field reaches validation and produces a
//! readable error instead of a deserializer message.

use crate::text::{ProcessedText, Sentence};

use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProcessTextRequest {
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub options: Option<Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessTextResponse {
    #[serde(flatten)]
    pub processed: ProcessedText,
    pub total_sentences: usize,
    pub options: Value,
}

impl ProcessTextResponse {
    pub fn sentences(&self) -> &[Sentence] {
        &self.processed.sentences
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpeechFeedbackRequest {
    #[serde(default)]
    pub original_text: Option<String>,
    #[serde(default)]
    pub spoken_text: Option<String>,
    #[serde(default)]
    pub confidence: Option<f64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TtsRequest {
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub voice: Option<String>,
    #[serde(default)]
    pub speed: Option<f64>,
}

/// Voice settings handed back to the browser, which does the synthesis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TtsResponse {
    pub text: String,
    pub voice: String,
    pub speed: f64,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadResponse {
    pub message: String,
    pub filename: String,
    pub original_name: String,
    pub size: u64,
    pub path: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}
