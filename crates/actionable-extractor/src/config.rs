//! Configuration for the Extractor
//!
//! The recognized markers and imperative verbs are plain data bound at
//! construction time, so callers can extend them without touching the
//! classification logic.

use serde::{Deserialize, Serialize};

/// Single-character (or short) bullet tokens recognized at line start
pub const DEFAULT_BULLET_MARKERS: &[&str] = &["-", "*", "•"];

/// Keyword prefixes that flag a line as an action item
pub const DEFAULT_KEYWORD_PREFIXES: &[&str] = &["todo:", "action:", "next:"];

/// Checkbox tokens recognized anywhere on a line
pub const DEFAULT_CHECKBOX_MARKERS: &[&str] = &["[ ]", "[todo]"];

/// Verbs that make a sentence look imperative in the fallback pass
pub const DEFAULT_IMPERATIVE_VERBS: &[&str] = &[
    "add",
    "create",
    "implement",
    "fix",
    "update",
    "write",
    "check",
    "verify",
    "refactor",
    "document",
    "design",
    "investigate",
];

/// Configuration for the rule-based extractor
///
/// # Examples
///
/// ```
/// use actionable_extractor::ExtractorConfig;
///
/// let config = ExtractorConfig::default();
/// assert!(!config.strip_keyword_prefixes);
///
/// let config = ExtractorConfig::normalized();
/// assert!(config.strip_keyword_prefixes);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractorConfig {
    /// Bullet tokens; a line starting with one of these followed by
    /// whitespace is an action line
    pub bullet_markers: Vec<String>,

    /// Treat `1.`, `23.` etc. followed by whitespace as a bullet
    pub numbered_bullets: bool,

    /// Case-insensitive line prefixes such as `todo:`
    pub keyword_prefixes: Vec<String>,

    /// Tokens that flag a line wherever they occur, e.g. `[ ]`
    pub checkbox_markers: Vec<String>,

    /// First words that mark a sentence as imperative in the fallback pass
    pub imperative_verbs: Vec<String>,

    /// Remove a matched keyword prefix from the cleaned item.
    /// Off by default: `TODO: Call Bob` stays `TODO: Call Bob`.
    pub strip_keyword_prefixes: bool,
}

impl Default for ExtractorConfig {
    /// The documented marker and verb sets
    fn default() -> Self {
        Self {
            bullet_markers: to_owned(DEFAULT_BULLET_MARKERS),
            numbered_bullets: true,
            keyword_prefixes: to_owned(DEFAULT_KEYWORD_PREFIXES),
            checkbox_markers: to_owned(DEFAULT_CHECKBOX_MARKERS),
            imperative_verbs: to_owned(DEFAULT_IMPERATIVE_VERBS),
            strip_keyword_prefixes: false,
        }
    }
}

impl ExtractorConfig {
    /// Defaults plus keyword-prefix stripping
    pub fn normalized() -> Self {
        Self {
            strip_keyword_prefixes: true,
            ..Self::default()
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.bullet_markers.iter().any(|m| m.trim().is_empty()) {
            return Err("bullet_markers must not contain blank entries".to_string());
        }
        if self.keyword_prefixes.iter().any(|p| p.trim().is_empty()) {
            return Err("keyword_prefixes must not contain blank entries".to_string());
        }
        if self.checkbox_markers.iter().any(|m| m.trim().is_empty()) {
            return Err("checkbox_markers must not contain blank entries".to_string());
        }
        for verb in &self.imperative_verbs {
            if verb.is_empty() || !verb.chars().all(|c| c.is_ascii_alphabetic() || c == '\'') {
                return Err(format!(
                    "imperative verb '{}' must consist of ASCII letters and apostrophes",
                    verb
                ));
            }
        }
        Ok(())
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, String> {
        toml::from_str(toml_str).map_err(|e| format!("Failed to parse TOML: {}", e))
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> Result<String, String> {
        toml::to_string_pretty(self).map_err(|e| format!("Failed to serialize to TOML: {}", e))
    }
}

fn to_owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
