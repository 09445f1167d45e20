use serde_json::Value;

use super::error::TranslateError;
use super::interface::{OutputSchema, TranslationResult};

/// Remove a markdown code fence wrapped around the reply, if any.
///
/// The opener (```` ```json ````, any case, or a bare ```` ``` ````) and the
/// closing ```` ``` ```` are stripped independently, so a reply carrying only
/// one of them still decodes. Text without a fence is returned trimmed.
pub fn strip_code_fence(raw: &str) -> &str {
    let mut rest = raw.trim();
    if let Some(after) = rest.strip_prefix("```") {
        rest = match after.get(..4) {
            Some(tag) if tag.eq_ignore_ascii_case("json") => &after[4..],
            _ => after,
        };
    }
    if let Some(before) = rest.strip_suffix("```") {
        rest = before;
    }
    rest.trim()
}

/// JavaScript-style truthiness: `null`, `false`, `0` and `""` are falsy.
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map_or(true, |f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Decode the raw model reply into a translation result.
pub fn parse(raw: &str) -> Result<TranslationResult, TranslateError> {
    let payload = strip_code_fence(raw);
    let value: Value = serde_json::from_str(payload).map_err(|e| {
        TranslateError::Decode(format!("model reply is not valid JSON: {}", e))
    })?;

    if let Some(error) = value.get("error").filter(|e| is_truthy(e)) {
        return Ok(TranslationResult::Refused(error.clone()));
    }

    let output: OutputSchema = serde_json::from_value(value).map_err(|e| {
        TranslateError::Decode(format!("model reply does not match output schema: {}", e))
    })?;
    Ok(TranslationResult::Translated(output))
}
