//! Pronunciation scoring and the feedback shown to the reader.

mod feedback;
mod similarity;

pub use feedback::{FeedbackTier, classify};
pub use similarity::score;
