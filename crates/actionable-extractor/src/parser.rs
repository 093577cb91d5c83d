//! Parse model output into action items

use crate::error::ExtractorError;
use crate::extractor::dedupe_case_insensitive;
use crate::types::ActionItemsReply;
use serde_json::Value;
use tracing::debug;

/// Parse a model reply into trimmed, non-empty, deduplicated action items.
///
/// Accepts `{"action_items": [...]}` (a missing key means no items) or a
/// bare JSON array, optionally wrapped in a Markdown code block. Every entry
/// must be a string.
pub fn parse_llm_response(response: &str) -> Result<Vec<String>, ExtractorError> {
    let json_str = extract_json(response)?;

    let json: Value = serde_json::from_str(json_str)
        .map_err(|e| ExtractorError::InvalidFormat(format!("JSON parse error: {}", e)))?;

    let raw_items = match json {
        Value::Object(_) => serde_json::from_value::<ActionItemsReply>(json)?.action_items,
        Value::Array(_) => serde_json::from_value::<Vec<String>>(json)?,
        other => {
            return Err(ExtractorError::InvalidFormat(format!(
                "Expected JSON object or array, got {}",
                type_name(&other)
            )))
        }
    };

    let total = raw_items.len();
    let items = dedupe_case_insensitive(
        raw_items
            .into_iter()
            .map(|item| item.trim().to_string())
            .filter(|item| !item.is_empty()),
    );
    debug!("Parsed {} of {} model items", items.len(), total);
    Ok(items)
}

/// Extract JSON from response, handling markdown code blocks
fn extract_json(response: &str) -> Result<&str, ExtractorError> {
    let trimmed = response.trim();

    if let Some(fenced) = trimmed.strip_prefix("```") {
        // Drop the info string (e.g. `json`) on the opening line
        let body = fenced
            .split_once('\n')
            .map(|(_, rest)| rest)
            .ok_or_else(|| ExtractorError::InvalidFormat("Empty code block".to_string()))?;
        let body = body.trim_end();
        let body = body.strip_suffix("```").unwrap_or(body);
        Ok(body.trim())
    } else {
        Ok(trimmed)
    }
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
