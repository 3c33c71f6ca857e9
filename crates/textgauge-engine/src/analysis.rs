use serde::{Deserialize, Serialize};

/// Scalar statistics for a piece of text.
///
/// `char_count` counts Unicode scalar values (`char`s), not bytes, so
/// multi-byte input is measured the way a reader would count letters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextReport {
    pub char_count: usize,
    pub word_count: usize,
    pub sentence_count: usize,
}

/// Count characters, words, and sentences in `text`.
///
/// Characters are counted literally, whitespace and punctuation included.
/// Words are maximal whitespace-delimited tokens; runs of whitespace
/// collapse and surrounding whitespace yields no empty tokens. Sentences
/// are the segments left after splitting on the literal period character
/// that are non-empty once trimmed, so a trailing period or a run of
/// periods adds nothing. Only `'.'` delimits sentences; text without a
/// period has no sentences at all, however many words it holds.
pub fn analyze(text: &str) -> TextReport {
    let sentence_count = if text.contains('.') {
        text.split('.')
            .filter(|segment| !segment.trim().is_empty())
            .count()
    } else {
        0
    };

    TextReport {
        char_count: text.chars().count(),
        word_count: text.split_whitespace().count(),
        sentence_count,
    }
}
