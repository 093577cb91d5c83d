//! Actionable Extractor
//!
//! Turns free-form notes into an ordered list of action items.
//!
//! # Overview
//!
//! The core is a deterministic, rule-based extractor. It first keeps lines
//! that carry a structural marker (bullet, numbered-list token, `todo:`-style
//! keyword, or checkbox) and strips their decoration. Only when no line is
//! marked does it fall back to sentences that open with an imperative verb.
//! Results are deduplicated case-insensitively, first occurrence winning.
//!
//! A model-backed extractor sits beside it. It asks any
//! [`LlmProvider`](actionable_domain::traits::LlmProvider) for structured
//! output and falls back to the rules whenever that fails.
//!
//! # Architecture
//!
//! ```text
//! Text → lines → markers → cleanup ─┬─→ dedupe → items
//!                 (none found) → sentences → imperatives ─┘
//!
//! Text → LlmProvider → parser ──→ items
//!            (any failure) → rules ─┘
//! ```
//!
//! # Example Usage
//!
//! ```
//! use actionable_extractor::{ActionItemExtractor, ExtractorConfig};
//!
//! let extractor = ActionItemExtractor::default();
//! let items = extractor.extract("- [ ] Set up database\n1. Write tests\nSome narrative.");
//! assert_eq!(items, vec!["Set up database", "Write tests"]);
//!
//! let normalized = ActionItemExtractor::new(ExtractorConfig::normalized()).unwrap();
//! assert_eq!(normalized.extract("TODO: Call the dentist"), vec!["Call the dentist"]);
//! ```

#![warn(missing_docs)]

mod config;
mod error;
mod extractor;
mod llm;
mod markers;
mod parser;
mod prompt;
mod sentences;
mod types;


pub use config::{
    ExtractorConfig, DEFAULT_BULLET_MARKERS, DEFAULT_CHECKBOX_MARKERS, DEFAULT_IMPERATIVE_VERBS,
    DEFAULT_KEYWORD_PREFIXES,
};
pub use error::ExtractorError;
pub use extractor::{extract_action_items, ActionItemExtractor};
pub use llm::LlmExtractor;
pub use parser::parse_llm_response;
pub use prompt::{PromptBuilder, ACTION_ITEMS_SCHEMA};
pub use types::ExtractionOutcome;
