//! Error types for the Extractor

use thiserror::Error;

/// Errors that can occur while building an extractor or on the model path
///
/// Rule-based extraction itself never fails; these arise only from an
/// invalid configuration or from a model reply that cannot be used.
#[derive(Error, Debug)]
pub enum ExtractorError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Marker pattern failed to compile
    #[error("Pattern error: {0}")]
    Pattern(#[from] regex::Error),

    /// LLM provider error
    #[error("LLM error: {0}")]
    Llm(String),

    /// Model reply has the wrong shape
    #[error("Invalid response format: {0}")]
    InvalidFormat(String),

    /// JSON parsing error
    #[error("JSON parse error: {0}")]
    JsonParse(String),
}

impl From<serde_json::Error> for ExtractorError {
    fn from(e: serde_json::Error) -> Self {
        ExtractorError::JsonParse(e.to_string())
    }
}
