//! Sentence-level imperative heuristic (fallback pass)
//!
//! Only consulted when no line carries a marker. A sentence counts as an
//! action item when its first Latin word is one of a small set of verbs.
//! The list is closed: "Schedule the review." is missed, while a narrative
//! sentence such as "Check-ins were skipped last week." is accepted.

use regex::Regex;
use std::collections::HashSet;
use std::sync::LazyLock;

/// `.`, `!` or `?` followed by a whitespace run
static SENTENCE_BOUNDARY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[.!?]\s+").expect("sentence boundary pattern is valid"));

/// Latin letters and apostrophes; non-Latin scripts never match
static WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[A-Za-z']+").expect("word pattern is valid"));

/// Split text into sentences.
///
/// The terminating punctuation stays with its sentence and the whitespace
/// after it is dropped. Text without a boundary is a single sentence.
pub(crate) fn split_sentences(text: &str) -> Vec<&str> {
    let text = text.trim();
    let mut sentences = Vec::new();
    let mut start = 0;
    for boundary in SENTENCE_BOUNDARY.find_iter(text) {
        // The punctuation is a single ASCII byte
        let end = boundary.start() + 1;
        sentences.push(&text[start..end]);
        start = boundary.end();
    }
    sentences.push(&text[start..]);
    sentences
}

/// First `[A-Za-z']+` run in a sentence
pub(crate) fn first_word(sentence: &str) -> Option<&str> {
    WORD.find(sentence).map(|m| m.as_str())
}

/// Compiled fallback classifier
#[derive(Debug, Clone)]
pub(crate) struct ImperativeClassifier {
    verbs: HashSet<String>,
}

impl ImperativeClassifier {
    pub(crate) fn new(verbs: &[String]) -> Self {
        Self {
            verbs: verbs.iter().map(|v| v.to_lowercase()).collect(),
        }
    }

    /// Whether the sentence opens with a recognized imperative verb
    pub(crate) fn looks_imperative(&self, sentence: &str) -> bool {
        first_word(sentence).is_some_and(|word| self.verbs.contains(&word.to_lowercase()))
    }
}
