// Unit tests for sentence/word segmentation
// End-to-end coverage through HTTP lives in integration_tests/api/process_text.rs

use crate::error::ReadingError;
use crate::text::{get_sentence_regex, segment, split_words};

fn sentence_texts(text: &str) -> Vec<String> {
    segment(text)
        .expect("non-empty text")
        .into_iter()
        .map(|sentence| sentence.text)
        .collect()
}

/// **VALUE**: Verifies the canonical two-sentence story splits as the reader expects.
///
/// **WHY THIS MATTERS**: The reading view steps through sentences one at a time. If
/// sentence boundaries move, the child is asked to read half-sentences or two at once.
///
/// **BUG THIS CATCHES**: Would catch a pattern change that drops terminators, keeps the
/// leading space of the second sentence, or miscounts words.
#[test]
fn given_two_sentences_when_segmented_then_returns_trimmed_sentences_with_words() {
    // GIVEN: A short story
    let text = "Once upon a time. The end.";

    // WHEN: Segmenting
    let sentences = segment(text).expect("non-empty text");

    // THEN: Two trimmed sentences, in order, with indexed words
    assert_eq!(sentences.len(), 2);
    assert_eq!(sentences[0].text, "Once upon a time.");
    assert_eq!(sentences[1].text, "The end.");
    assert_eq!(sentences[0].index, 0);
    assert_eq!(sentences[1].index, 1);
    assert_eq!(sentences[0].word_count(), 4);
    assert_eq!(sentences[1].word_count(), 2);

    let words: Vec<&str> = sentences[1].words.iter().map(|w| w.text.as_str()).collect();
    assert_eq!(words, vec!["The", "end."]);
    assert_eq!(sentences[1].words[1].index, 1);
    assert!(sentences[1].words.iter().all(|w| !w.highlighted));
}

/// **VALUE**: Verifies that blank input is rejected rather than producing zero sentences.
///
/// **WHY THIS MATTERS**: The reader indexes `sentences[0]` as soon as text loads. An
/// empty sentence list would leave the reader on a blank page with no error.
///
/// **BUG THIS CATCHES**: Would catch if only `is_empty()` is checked and whitespace slips through.
#[test]
fn given_blank_text_when_segmented_then_returns_invalid_input() {
    for blank in ["", "   ", "\n\t "] {
        let result = segment(blank);

        assert!(
            matches!(result, Err(ReadingError::InvalidInput { .. })),
            "Blank text {blank:?} should be rejected"
        );
    }
}

#[test]
fn given_text_without_terminators_when_segmented_then_returns_single_sentence() {
    let sentences = segment("  a little girl named Amina  ").expect("non-empty text");

    assert_eq!(sentences.len(), 1);
    assert_eq!(sentences[0].text, "a little girl named Amina");
    assert_eq!(sentences[0].word_count(), 5);
}

/// **VALUE**: Verifies that text after the last terminator is kept.
///
/// **WHY THIS MATTERS**: Pasted text often ends without a full stop. Dropping the last
/// fragment would silently skip the end of the story.
///
/// **BUG THIS CATCHES**: Would catch a return to pure regex matching, which discards
/// the unterminated tail.
#[test]
fn given_unterminated_tail_when_segmented_then_tail_is_final_sentence() {
    let texts = sentence_texts("She reads. Every day");

    assert_eq!(texts, vec!["She reads.", "Every day"]);
}

#[test]
fn given_repeated_terminators_when_segmented_then_they_stay_attached() {
    let texts = sentence_texts("Wait... what?! Yes!");

    assert_eq!(texts, vec!["Wait...", "what?!", "Yes!"]);
}

#[test]
fn given_only_terminators_when_segmented_then_single_sentence_has_no_words() {
    // GIVEN: Punctuation and whitespace only
    let sentences = segment(" ?! ").expect("non-blank text");

    // THEN: One sentence, no words
    assert_eq!(sentences.len(), 1);
    assert_eq!(sentences[0].text, "?!");
    assert!(sentences[0].words.is_empty());
}

/// **VALUE**: Verifies a punctuation-only sentence inside a real document keeps its words.
///
/// **WHY THIS MATTERS**: The reading view highlights a sentence word by word. A sentence
/// whose text is "!" but whose word list is empty can never be highlighted or read aloud.
///
/// **BUG THIS CATCHES**: Would catch the whole-document punctuation rule leaking into
/// individual sentences, so `text` and `words` disagree.
#[test]
fn given_terminator_sentence_mid_document_when_segmented_then_it_keeps_its_word() {
    // GIVEN: A bare "!" between two ordinary sentences
    let sentences = segment("Hi. ! Bye.").expect("non-blank text");

    // THEN: Three sentences, the middle one has "!" as its only word
    assert_eq!(sentences.len(), 3);
    assert_eq!(sentences[1].text, "!");
    assert_eq!(sentences[1].words.len(), 1);
    assert_eq!(sentences[1].words[0].text, "!");
    assert_eq!(sentences[2].index, 2);
}

#[test]
fn given_internal_punctuation_when_segmented_then_commas_stay_on_words() {
    let sentences =
        segment("Once upon a time, there was a clever rabbit.").expect("non-empty text");

    assert_eq!(sentences.len(), 1);
    assert_eq!(sentences[0].words[3].text, "time,");
    assert_eq!(sentences[0].words.last().map(|w| w.text.as_str()), Some("rabbit."));
}

#[test]
fn given_multiline_text_when_segmented_then_newlines_are_trimmed() {
    let texts = sentence_texts("Soma polepole.\nNa uelewa.\n");

    assert_eq!(texts, vec!["Soma polepole.", "Na uelewa."]);
}

/// **VALUE**: Checks the structural guarantees callers rely on for every document.
///
/// **WHY THIS MATTERS**: Highlighting uses sentence and word positions as keys. Gaps,
/// duplicates or empty words produce mis-highlighted or invisible words.
///
/// **BUG THIS CATCHES**: Would catch index assignment drifting from encounter order,
/// or non-deterministic output between calls.
#[test]
fn given_varied_documents_when_segmented_then_indices_are_sequential_and_stable() {
    let documents = [
        "Hapa kuna kitabu cha Kiswahili. Tunajifunza maneno mapya kila siku.",
        "One!Two?Three.",
        "no punctuation at all",
        "Ends with space.   ",
    ];

    for document in documents {
        let first = segment(document).expect("non-empty text");
        let second = segment(document).expect("non-empty text");

        assert_eq!(first, second, "Segmentation must be deterministic");
        assert!(!first.is_empty());

        for (expected_index, sentence) in first.iter().enumerate() {
            assert_eq!(sentence.index, expected_index);
            for (expected_word, word) in sentence.words.iter().enumerate() {
                assert_eq!(word.index, expected_word);
                assert!(!word.text.trim().is_empty());
            }
        }
    }
}

#[test]
fn given_sentence_regex_when_applied_then_requires_non_terminator_body() {
    let re = get_sentence_regex();

    assert!(re.find("...").is_none());
    assert_eq!(re.find("Hi!!").map(|m| m.as_str()), Some("Hi!!"));
}

#[test]
fn given_whitespace_runs_when_splitting_words_then_drops_empty_tokens() {
    assert_eq!(split_words("  the   cat\tsat\n"), vec!["the", "cat", "sat"]);
    assert!(split_words("").is_empty());
}
