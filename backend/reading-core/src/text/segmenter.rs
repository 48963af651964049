use crate::error::ReadingError;

use models::{Sentence, Word};

use std::sync::OnceLock;

use log::trace;
use regex::Regex;

/// Characters that end a sentence.
pub const TERMINATORS: [char; 3] = ['.', '!', '?'];

/// A run of non-terminators followed by one or more terminators.
const SENTENCE_PATTERN: &str = r"[^.!?]+[.!?]+";
const EMPTY_TEXT_MESSAGE: &str = "Text is required";

static SENTENCE_REGEX: OnceLock<Regex> = OnceLock::new();

pub(crate) fn get_sentence_regex() -> &'static Regex {
    SENTENCE_REGEX.get_or_init(|| Regex::new(SENTENCE_PATTERN).expect("valid regex pattern"))
}

/// Split `text` into sentences of indexed words, in document order.
///
/// Each terminated run becomes one sentence with its terminators attached.
/// Text without any terminator is a single sentence, and a trailing fragment
/// after the last terminator is kept as the final sentence so no words are
/// lost. A document made only of terminators and whitespace is one sentence
/// with no words.
///
/// # Errors
///
/// Returns [`ReadingError::InvalidInput`] when `text` is empty or whitespace.
#[track_caller]
pub fn segment(text: &str) -> Result<Vec<Sentence>, ReadingError> {
    if text.trim().is_empty() {
        return Err(ReadingError::invalid_input(EMPTY_TEXT_MESSAGE));
    }

    if is_only_terminators(text) {
        return Ok(vec![Sentence {
            index: 0,
            text: text.trim().to_string(),
            words: Vec::new(),
        }]);
    }

    let mut pieces: Vec<&str> = Vec::new();
    let mut consumed = 0;

    for found in get_sentence_regex().find_iter(text) {
        pieces.push(found.as_str());
        consumed = found.end();
    }

    let remainder = &text[consumed..];
    if !remainder.trim().is_empty() {
        pieces.push(remainder);
    }

    let sentences: Vec<Sentence> = pieces
        .into_iter()
        .enumerate()
        .map(|(index, piece)| build_sentence(index, piece))
        .collect();

    trace!(
        "Segmented {} chars into {} sentences",
        text.len(),
        sentences.len()
    );

    Ok(sentences)
}

/// Split on whitespace runs, dropping empty tokens.
pub fn split_words(text: &str) -> Vec<&str> {
    text.split_whitespace().collect()
}

fn build_sentence(index: usize, piece: &str) -> Sentence {
    let text = piece.trim();

    let words = split_words(text)
        .into_iter()
        .enumerate()
        .map(|(word_index, word)| Word::new(word_index, word))
        .collect();

    Sentence {
        index,
        text: text.to_string(),
        words,
    }
}

fn is_only_terminators(text: &str) -> bool {
    text.chars()
        .all(|c| c.is_whitespace() || TERMINATORS.contains(&c))
}
