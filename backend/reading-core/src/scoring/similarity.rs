use crate::text::split_words;

/// Fraction of positions at which `reference` and `spoken` have the same word.
///
/// Both sides are lower-cased and split on whitespace. Words are compared
/// position by position only, so one inserted or dropped word shifts every
/// later comparison. The denominator is the longer of the two sequences;
/// two empty sequences score `0.0`.
pub fn score(reference: &str, spoken: &str) -> f64 {
    let reference = reference.to_lowercase();
    let spoken = spoken.to_lowercase();

    let reference_words = split_words(&reference);
    let spoken_words = split_words(&spoken);

    let longest = reference_words.len().max(spoken_words.len());
    if longest == 0 {
        return 0.0;
    }

    let matches = reference_words
        .iter()
        .zip(spoken_words.iter())
        .filter(|(expected, heard)| expected == heard)
        .count();

    matches as f64 / longest as f64
}
