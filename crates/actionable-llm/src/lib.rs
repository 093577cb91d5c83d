//! Actionable LLM Provider Layer
//!
//! Implementations of the `LlmProvider` trait from `actionable-domain`.
//!
//! # Providers
//!
//! - `MockProvider`: Deterministic mock for testing and offline use
//!
//! Networked backends are deliberately absent: model-backed extraction is
//! written against the trait so a host application can plug in its own.
//!
//! # Examples
//!
//! ```
//! use actionable_llm::MockProvider;
//! use actionable_domain::traits::LlmProvider;
//!
//! let provider = MockProvider::new(r#"{"action_items": ["Ship it"]}"#);
//! let result = provider.generate("test prompt").unwrap();
//! assert_eq!(result, r#"{"action_items": ["Ship it"]}"#);
//! ```

#![warn(missing_docs)]

mod mock;

use thiserror::Error;

pub use mock::MockProvider;

/// Errors that can occur during LLM operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LlmError {
    /// Network or API communication error
    #[error("Communication error: {0}")]
    Communication(String),

    /// Invalid response from LLM
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Rate limit exceeded
    #[error("Rate limit exceeded")]
    RateLimitExceeded,

    /// Model not available
    #[error("Model not available: {0}")]
    ModelNotAvailable(String),

    /// Generic error
    #[error("LLM error: {0}")]
    Other(String),
}
