//! Extraction method - which path produced a list of action items

use std::fmt;

/// The path that produced an extraction result
///
/// - Rules: the deterministic marker/imperative heuristic
/// - Llm: a language model asked for structured output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExtractionMethod {
    /// Rule-based heuristic (bullets, checkboxes, keywords, imperatives)
    Rules,

    /// Model-backed extraction
    Llm,
}

impl ExtractionMethod {
    /// Get the method name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            ExtractionMethod::Rules => "rules",
            ExtractionMethod::Llm => "llm",
        }
    }

    /// Parse a method from a string, ignoring case
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "rules" | "rule" => Some(ExtractionMethod::Rules),
            "llm" | "model" => Some(ExtractionMethod::Llm),
            _ => None,
        }
    }
}

impl fmt::Display for ExtractionMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ExtractionMethod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid extraction method: {}", s))
    }
}
