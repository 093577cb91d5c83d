//! Result types for model-backed extraction

use actionable_domain::ExtractionMethod;
use serde::Deserialize;

/// Items produced by [`crate::LlmExtractor::extract_detailed`], with the path
/// that produced them
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractionOutcome {
    /// Ordered, deduplicated action items
    pub items: Vec<String>,

    /// Which path produced `items`
    pub method: ExtractionMethod,

    /// Why the model path was abandoned, when it was
    pub fallback_reason: Option<String>,
}

impl ExtractionOutcome {
    /// Whether the rule-based fallback produced the items
    pub fn used_fallback(&self) -> bool {
        self.fallback_reason.is_some()
    }
}

/// Structured reply requested from the model
#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct ActionItemsReply {
    #[serde(default)]
    pub action_items: Vec<String>,
}
