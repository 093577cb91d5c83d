//! Rule-based action-item extraction
//!
//! Two passes over the text:
//!
//! 1. [`ActionItemExtractor::classify_lines`] keeps lines with a bullet,
//!    numbered-list, keyword or checkbox marker, minus their decoration.
//! 2. [`ActionItemExtractor::imperative_sentences`] runs only when no line
//!    carried a marker, keeping whole sentences that open with an
//!    imperative verb.
//!
//! The combined result is deduplicated case-insensitively, first spelling
//! and position winning.

use crate::config::ExtractorConfig;
use crate::error::ExtractorError;
use crate::markers::{split_lines, LineClassifier};
use crate::sentences::{split_sentences, ImperativeClassifier};
use actionable_domain::traits::Extractor;
use std::collections::HashSet;
use std::convert::Infallible;
use std::sync::LazyLock;
use tracing::debug;

static DEFAULT_EXTRACTOR: LazyLock<ActionItemExtractor> = LazyLock::new(ActionItemExtractor::default);

/// Extract action items with the default marker and verb sets
///
/// # Examples
///
/// ```
/// use actionable_extractor::extract_action_items;
///
/// let items = extract_action_items("- [ ] Buy milk\nbuy milk\n* buy MILK");
/// assert_eq!(items, vec!["Buy milk"]);
/// ```
pub fn extract_action_items(text: &str) -> Vec<String> {
    DEFAULT_EXTRACTOR.extract(text)
}

/// Deterministic, rule-based action-item extractor
///
/// Immutable after construction; share it freely across threads.
#[derive(Debug, Clone)]
pub struct ActionItemExtractor {
    lines: LineClassifier,
    imperatives: ImperativeClassifier,
    config: ExtractorConfig,
}

impl ActionItemExtractor {
    /// Create an extractor from a validated configuration
    pub fn new(config: ExtractorConfig) -> Result<Self, ExtractorError> {
        config.validate().map_err(ExtractorError::Config)?;
        Ok(Self {
            lines: LineClassifier::new(&config)?,
            imperatives: ImperativeClassifier::new(&config.imperative_verbs),
            config,
        })
    }

    /// The configuration this extractor was built from
    pub fn config(&self) -> &ExtractorConfig {
        &self.config
    }

    /// Extract an ordered, deduplicated list of action items.
    ///
    /// Never fails: empty or marker-free text yields an empty list.
    pub fn extract(&self, text: &str) -> Vec<String> {
        let (marked_lines, mut items) = self.scan_lines(text);
        if marked_lines == 0 {
            debug!("No marked lines found, falling back to imperative sentences");
            items = self.imperative_sentences(text);
        }
        let unique = dedupe_case_insensitive(items);
        debug!("Extracted {} action items", unique.len());
        unique
    }

    /// First pass: cleaned marker lines in source order, not deduplicated
    pub fn classify_lines(&self, text: &str) -> Vec<String> {
        self.scan_lines(text).1
    }

    /// Count marked lines and collect their cleaned forms.
    ///
    /// A marked line that cleans down to nothing (`- [ ]`) still counts, so
    /// the fallback stays off whenever any marker was seen.
    fn scan_lines(&self, text: &str) -> (usize, Vec<String>) {
        let mut scanned = 0usize;
        let mut marked = 0usize;
        let items: Vec<String> = split_lines(text)
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .inspect(|_| scanned += 1)
            .filter(|line| self.lines.is_action_line(line))
            .inspect(|_| marked += 1)
            .filter_map(|line| self.lines.clean(line))
            .collect();
        debug!(
            "Scanned {} lines, {} carried markers, {} non-empty",
            scanned,
            marked,
            items.len()
        );
        (marked, items)
    }

    /// Second pass: imperative sentences in source order, not deduplicated
    pub fn imperative_sentences(&self, text: &str) -> Vec<String> {
        split_sentences(text)
            .into_iter()
            .map(str::trim)
            .filter(|sentence| !sentence.is_empty())
            .filter(|sentence| self.imperatives.looks_imperative(sentence))
            .map(str::to_string)
            .collect()
    }
}

impl Default for ActionItemExtractor {
    /// Extractor over the documented marker and verb sets
    fn default() -> Self {
        let config = ExtractorConfig::default();
        Self {
            lines: LineClassifier::new(&config).expect("default bullet pattern compiles"),
            imperatives: ImperativeClassifier::new(&config.imperative_verbs),
            config,
        }
    }
}

impl Extractor for ActionItemExtractor {
    type Error = Infallible;

    fn extract(&self, text: &str) -> Result<Vec<String>, Self::Error> {
        Ok(ActionItemExtractor::extract(self, text))
    }
}

/// Keep the first occurrence of each item, compared case-insensitively
pub(crate) fn dedupe_case_insensitive<I>(items: I) -> Vec<String>
where
    I: IntoIterator<Item = String>,
{
    let mut seen = HashSet::new();
    items
        .into_iter()
        .filter(|item| seen.insert(item.to_lowercase()))
        .collect()
}
