//! Trait definitions for external interactions
//!
//! These traits define the boundaries between domain logic and infrastructure.
//! Implementations live in other crates.

/// Trait for LLM provider operations
///
/// Implemented by the infrastructure layer (actionable-llm)
pub trait LlmProvider {
    /// Error type for LLM operations
    type Error;

    /// Generate text completion
    fn generate(&self, prompt: &str) -> Result<String, Self::Error>;

    /// Generate with structured output (if supported)
    ///
    /// `schema` is a JSON schema the reply should conform to.
    fn generate_structured(&self, prompt: &str, schema: &str) -> Result<String, Self::Error>;
}

/// Trait for extracting action items from text
///
/// Implemented by the application layer (actionable-extractor). The
/// rule-based extractor uses [`std::convert::Infallible`] as its error.
pub trait Extractor {
    /// Error type for extraction operations
    type Error;

    /// Extract an ordered, deduplicated list of action items
    fn extract(&self, text: &str) -> Result<Vec<String>, Self::Error>;
}
