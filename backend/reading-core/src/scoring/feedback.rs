use serde::{Deserialize, Serialize};

const EXCELLENT_THRESHOLD: f64 = 0.8;
const GOOD_TRY_THRESHOLD: f64 = 0.6;

/// The three feedback levels a reading attempt can earn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FeedbackTier {
    Excellent,
    GoodTry,
    TryAgain,
}

impl FeedbackTier {
    /// Pick the tier for a score. Both thresholds are strict lower bounds.
    pub fn from_score(score: f64) -> Self {
        if score > EXCELLENT_THRESHOLD {
            FeedbackTier::Excellent
        } else if score > GOOD_TRY_THRESHOLD {
            FeedbackTier::GoodTry
        } else {
            FeedbackTier::TryAgain
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            FeedbackTier::Excellent => "Excellent pronunciation!",
            FeedbackTier::GoodTry => "Good try! Almost there.",
            FeedbackTier::TryAgain => "Let's try again slowly.",
        }
    }

    pub fn encouragement(&self) -> &'static str {
        match self {
            FeedbackTier::Excellent => "⭐ Well done! You read that perfectly!",
            FeedbackTier::GoodTry => "👍 Keep practicing, you're doing great!",
            FeedbackTier::TryAgain => "💪 Don't worry, practice makes perfect!",
        }
    }
}

/// Message and encouragement for `score`.
pub fn classify(score: f64) -> (&'static str, &'static str) {
    let tier = FeedbackTier::from_score(score);
    (tier.message(), tier.encouragement())
}
