//! Mock provider returning canned replies

use crate::LlmError;
use actionable_domain::traits::LlmProvider;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

#[derive(Debug, Clone)]
enum MockReply {
    Text(String),
    Fail(LlmError),
}

/// Mock LLM provider for deterministic testing
///
/// Returns pre-configured replies without making any network calls.
/// Clones share the call counter and the record of the last prompt.
///
/// # Examples
///
/// ```
/// use actionable_llm::{LlmError, MockProvider};
/// use actionable_domain::traits::LlmProvider;
///
/// let mut provider = MockProvider::default();
/// provider.add_response("prompt1", "response1");
/// provider.add_error("prompt2", LlmError::RateLimitExceeded);
///
/// assert_eq!(provider.generate("prompt1").unwrap(), "response1");
/// assert!(provider.generate("prompt2").is_err());
/// assert_eq!(provider.call_count(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct MockProvider {
    default_reply: MockReply,
    replies: HashMap<String, MockReply>,
    call_count: Arc<AtomicUsize>,
    last_prompt: Arc<Mutex<Option<String>>>,
}

impl MockProvider {
    /// Create a new MockProvider with a fixed response for all prompts
    pub fn new(response: impl Into<String>) -> Self {
        Self::with_default(MockReply::Text(response.into()))
    }

    /// Create a MockProvider that fails every call with `error`
    pub fn failing(error: LlmError) -> Self {
        Self::with_default(MockReply::Fail(error))
    }

    fn with_default(default_reply: MockReply) -> Self {
        Self {
            default_reply,
            replies: HashMap::new(),
            call_count: Arc::new(AtomicUsize::new(0)),
            last_prompt: Arc::new(Mutex::new(None)),
        }
    }

    /// Add a specific response for a given prompt
    pub fn add_response(&mut self, prompt: impl Into<String>, response: impl Into<String>) {
        self.replies
            .insert(prompt.into(), MockReply::Text(response.into()));
    }

    /// Configure to return an error for a specific prompt
    pub fn add_error(&mut self, prompt: impl Into<String>, error: LlmError) {
        self.replies.insert(prompt.into(), MockReply::Fail(error));
    }

    /// Get the number of times generate was called
    pub fn call_count(&self) -> usize {
        self.call_count.load(Ordering::SeqCst)
    }

    /// Reset the call count
    pub fn reset_call_count(&self) {
        self.call_count.store(0, Ordering::SeqCst);
    }

    /// The most recent prompt passed to the provider, if any
    pub fn last_prompt(&self) -> Option<String> {
        self.last_prompt
            .lock()
            .ok()
            .and_then(|guard| guard.clone())
    }

    fn reply_for(&self, prompt: &str) -> Result<String, LlmError> {
        self.call_count.fetch_add(1, Ordering::SeqCst);
        if let Ok(mut guard) = self.last_prompt.lock() {
            *guard = Some(prompt.to_string());
        }

        match self.replies.get(prompt).unwrap_or(&self.default_reply) {
            MockReply::Text(text) => Ok(text.clone()),
            MockReply::Fail(error) => Err(error.clone()),
        }
    }
}

impl Default for MockProvider {
    fn default() -> Self {
        Self::new(r#"{"action_items": []}"#)
    }
}

impl LlmProvider for MockProvider {
    type Error = LlmError;

    fn generate(&self, prompt: &str) -> Result<String, Self::Error> {
        self.reply_for(prompt)
    }

    fn generate_structured(&self, prompt: &str, _schema: &str) -> Result<String, Self::Error> {
        // The schema is not enforced; replies are returned verbatim
        self.reply_for(prompt)
    }
}
