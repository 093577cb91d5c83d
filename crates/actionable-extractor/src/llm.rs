//! Model-backed extraction with rule-based fallback

use crate::error::ExtractorError;
use crate::extractor::ActionItemExtractor;
use crate::parser::parse_llm_response;
use crate::prompt::{PromptBuilder, ACTION_ITEMS_SCHEMA};
use crate::types::ExtractionOutcome;
use actionable_domain::traits::{Extractor, LlmProvider};
use actionable_domain::ExtractionMethod;
use std::convert::Infallible;
use tracing::{debug, info, warn};

/// Extracts action items by asking a language model for structured output.
///
/// Whenever the provider fails or its reply cannot be parsed, the
/// rule-based [`ActionItemExtractor`] is used instead, so
/// [`LlmExtractor::extract`] never fails.
pub struct LlmExtractor<L>
where
    L: LlmProvider,
{
    provider: L,
    rules: ActionItemExtractor,
    model_name: String,
}

impl<L> LlmExtractor<L>
where
    L: LlmProvider,
    L::Error: std::fmt::Display,
{
    /// Create a new extractor falling back to the default rules
    pub fn new(provider: L) -> Self {
        Self {
            provider,
            rules: ActionItemExtractor::default(),
            model_name: "llm".to_string(),
        }
    }

    /// Use a specific rule-based extractor as the fallback
    pub fn with_rules(mut self, rules: ActionItemExtractor) -> Self {
        self.rules = rules;
        self
    }

    /// Set the model name reported in logs
    pub fn with_model_name(mut self, model_name: impl Into<String>) -> Self {
        self.model_name = model_name.into();
        self
    }

    /// The model name reported in logs
    pub fn model_name(&self) -> &str {
        &self.model_name
    }

    /// Ask the model only, surfacing every failure
    pub fn try_extract(&self, text: &str) -> Result<Vec<String>, ExtractorError> {
        if text.trim().is_empty() {
            return Ok(Vec::new());
        }

        let prompt = PromptBuilder::new(text).build();
        debug!("Prompt length: {} chars", prompt.len());

        let response = self
            .provider
            .generate_structured(&prompt, ACTION_ITEMS_SCHEMA)
            .map_err(|e| ExtractorError::Llm(e.to_string()))?;
        debug!("LLM response length: {} chars", response.len());

        let items = parse_llm_response(&response)?;
        info!(
            "Model '{}' extracted {} action items",
            self.model_name,
            items.len()
        );
        Ok(items)
    }

    /// Extract action items, noting which path produced them
    pub fn extract_detailed(&self, text: &str) -> ExtractionOutcome {
        match self.try_extract(text) {
            Ok(items) => ExtractionOutcome {
                items,
                method: ExtractionMethod::Llm,
                fallback_reason: None,
            },
            Err(e) => {
                warn!(
                    "LLM extraction with '{}' failed: {}. Falling back to rule-based extraction.",
                    self.model_name, e
                );
                ExtractionOutcome {
                    items: self.rules.extract(text),
                    method: ExtractionMethod::Rules,
                    fallback_reason: Some(e.to_string()),
                }
            }
        }
    }

    /// Extract action items; never fails
    pub fn extract(&self, text: &str) -> Vec<String> {
        self.extract_detailed(text).items
    }
}

impl<L> Extractor for LlmExtractor<L>
where
    L: LlmProvider,
    L::Error: std::fmt::Display,
{
    type Error = Infallible;

    fn extract(&self, text: &str) -> Result<Vec<String>, Self::Error> {
        Ok(LlmExtractor::extract(self, text))
    }
}
