//! Line-level marker classification (first pass)
//!
//! A line is an action line when it starts with a bullet or numbered-list
//! token, starts with a keyword prefix, or contains a checkbox token.

use crate::config::ExtractorConfig;
use crate::error::ExtractorError;
use regex::Regex;

/// Split text on line-break boundaries.
///
/// Covers `\n`, `\r\n`, lone `\r`, and the other separators Unicode treats as
/// line breaks. A `\r\n` pair yields an empty piece in between, which callers
/// skip along with every other blank line.
pub(crate) fn split_lines(text: &str) -> impl Iterator<Item = &str> {
    text.split(|c: char| {
        matches!(
            c,
            '\n' | '\r' | '\u{0b}' | '\u{0c}' | '\u{1c}'..='\u{1e}' | '\u{85}' | '\u{2028}' | '\u{2029}'
        )
    })
}

/// Compiled first-pass classifier
#[derive(Debug, Clone)]
pub(crate) struct LineClassifier {
    bullet: Option<Regex>,
    keyword_prefixes: Vec<String>,
    checkbox_markers: Vec<String>,
    strip_keyword_prefixes: bool,
}

impl LineClassifier {
    pub(crate) fn new(config: &ExtractorConfig) -> Result<Self, ExtractorError> {
        Ok(Self {
            bullet: bullet_pattern(&config.bullet_markers, config.numbered_bullets)?,
            keyword_prefixes: config.keyword_prefixes.clone(),
            checkbox_markers: config.checkbox_markers.clone(),
            strip_keyword_prefixes: config.strip_keyword_prefixes,
        })
    }

    /// Whether a trimmed line carries any recognized marker
    pub(crate) fn is_action_line(&self, line: &str) -> bool {
        let lowered = line.trim().to_lowercase();
        if lowered.is_empty() {
            return false;
        }
        if self.bullet.as_ref().is_some_and(|re| re.is_match(&lowered)) {
            return true;
        }
        if self
            .keyword_prefixes
            .iter()
            .any(|prefix| strip_prefix_ignore_case(&lowered, prefix).is_some())
        {
            return true;
        }
        self.checkbox_markers
            .iter()
            .any(|marker| lowered.contains(&marker.to_lowercase()))
    }

    /// Remove decoration from an action line.
    ///
    /// Returns `None` when nothing is left, e.g. for a bare `- [ ]`.
    pub(crate) fn clean(&self, line: &str) -> Option<String> {
        let mut cleaned = line.trim();
        if let Some(re) = &self.bullet {
            if let Some(m) = re.find(cleaned) {
                cleaned = &cleaned[m.end()..];
            }
        }
        cleaned = cleaned.trim();

        // One-time prefix removal per token, in configured order
        for marker in &self.checkbox_markers {
            cleaned = cleaned.strip_prefix(marker.as_str()).unwrap_or(cleaned).trim();
        }

        if self.strip_keyword_prefixes {
            if let Some(rest) = self
                .keyword_prefixes
                .iter()
                .find_map(|prefix| strip_prefix_ignore_case(cleaned, prefix))
            {
                cleaned = rest.trim();
            }
        }

        if cleaned.is_empty() {
            None
        } else {
            Some(cleaned.to_string())
        }
    }
}

/// Build `^\s*(?:<bullets>|\d+\.)\s+`, or `None` when no bullet form is enabled
fn bullet_pattern(markers: &[String], numbered: bool) -> Result<Option<Regex>, ExtractorError> {
    let mut alternatives: Vec<String> = markers.iter().map(|m| regex::escape(m.trim())).collect();
    if numbered {
        alternatives.push(r"\d+\.".to_string());
    }
    if alternatives.is_empty() {
        return Ok(None);
    }
    let pattern = format!(r"(?i)^\s*(?:{})\s+", alternatives.join("|"));
    Ok(Some(Regex::new(&pattern)?))
}

/// Case-insensitive `str::strip_prefix` that never splits a character
fn strip_prefix_ignore_case<'a>(s: &'a str, prefix: &str) -> Option<&'a str> {
    let mut chars = s.char_indices();
    for expected in prefix.chars() {
        let (_, actual) = chars.next()?;
        if !actual.to_lowercase().eq(expected.to_lowercase()) {
            return None;
        }
    }
    let rest_start = chars.next().map(|(idx, _)| idx).unwrap_or(s.len());
    Some(&s[rest_start..])
}
