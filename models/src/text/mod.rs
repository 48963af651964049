//! Segmented text and pronunciation feedback.
//!
//! Word and sentence positions serialize as `id`, the field name the
//! reading view keys its highlighting on.

use serde::{Deserialize, Serialize};

/// A whitespace-delimited token inside a sentence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Word {
    /// 0-based position within the owning sentence.
    #[serde(rename = "id")]
    pub index: usize,
    pub text: String,
    /// Always `false` when produced by the segmenter; toggled by the reader UI.
    pub highlighted: bool,
}

impl Word {
    pub fn new(index: usize, text: impl Into<String>) -> Self {
        Self {
            index,
            text: text.into(),
            highlighted: false,
        }
    }
}

/// A run of text ending in `.`, `!` or `?`, split into words.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sentence {
    /// 0-based position within the document.
    #[serde(rename = "id")]
    pub index: usize,
    pub text: String,
    pub words: Vec<Word>,
}

impl Sentence {
    pub fn word_count(&self) -> usize {
        self.words.len()
    }
}

/// Result of segmenting one document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessedText {
    pub original_text: String,
    pub sentences: Vec<Sentence>,
}

/// Outcome of comparing a reference sentence with what the reader said.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedbackResult {
    /// Fraction of position-aligned matching words, in `[0, 1]`.
    pub score: f64,
    pub message: String,
    pub encouragement: String,
}
