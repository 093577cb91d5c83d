//! Actionable Domain Layer
//!
//! Shared vocabulary for the action-item extraction workspace. It has no
//! external dependencies: only value types and the trait seams that
//! infrastructure crates implement.
//!
//! ## Key Concepts
//!
//! - **Action item**: a short, cleaned string naming a discrete task
//! - **Extraction method**: which path (rules or model) produced a result
//! - **Extractor**: anything that turns free-form notes into action items
//! - **LLM provider**: a text-completion backend used by model-backed extraction

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod method;
pub mod traits;

pub use method::ExtractionMethod;
