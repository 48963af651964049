//! Splitting reading material into sentences and words.

mod segmenter;

pub use segmenter::{TERMINATORS, segment, split_words};

#[cfg(test)]
pub(crate) use segmenter::get_sentence_regex;
