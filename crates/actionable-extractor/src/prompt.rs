//! LLM prompt engineering for action-item extraction

/// JSON schema passed to `generate_structured`
pub const ACTION_ITEMS_SCHEMA: &str = r#"{
  "type": "object",
  "properties": {
    "action_items": {
      "type": "array",
      "items": { "type": "string" }
    }
  },
  "required": ["action_items"]
}"#;

/// Builds prompts asking the model for the action items in a note
pub struct PromptBuilder {
    text: String,
}

impl PromptBuilder {
    /// Create a new prompt builder
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// Build the complete extraction prompt
    pub fn build(&self) -> String {
        let mut prompt = String::new();

        prompt.push_str(EXTRACTION_INSTRUCTIONS);
        prompt.push_str("\n\n");

        prompt.push_str("Notes:\n");
        prompt.push_str("---\n");
        prompt.push_str(self.text.trim());
        prompt.push_str("\n---\n\n");

        prompt.push_str(OUTPUT_FORMAT_REMINDER);

        prompt
    }
}

const EXTRACTION_INSTRUCTIONS: &str = r#"Find every task in the notes below and list it as an action item.

Rules:
- Include explicit to-dos, checklist entries and commitments ("we need to...", "should...")
- Drop list decoration: bullets, numbers, checkboxes and labels such as "TODO:", "Action:" or "Next:"
- Keep each item short and in the words of the notes
- List each task once
- If there are no tasks, return an empty list

Examples:
- "- [ ] Buy groceries" becomes "Buy groceries"
- "TODO: Call the dentist" becomes "Call the dentist"
- "Need to finish the report by Friday" becomes "Finish the report by Friday""#;

const OUTPUT_FORMAT_REMINDER: &str = r#"Output format (JSON object only, no additional text):
{"action_items": ["first task", "second task"]}"#;
