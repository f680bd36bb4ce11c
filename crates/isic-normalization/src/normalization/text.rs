//! Whitespace, blank-value and string coercion rules shared by every field.

use serde_json::Value;

use crate::error::{NormalizationError, Result};

/// First normalization phase, applied to every field before type parsing.
///
/// Strings are trimmed. Null and blank strings become `None`, meaning the
/// field was not provided at all.
pub fn clean(value: &Value) -> Option<Value> {
    match value {
        Value::Null => None,
        Value::String(text) => {
            let trimmed = text.trim();
            if trimmed.is_empty() {
                None
            } else {
                Some(Value::String(trimmed.to_string()))
            }
        }
        other => Some(other.clone()),
    }
}

/// Lowercase string values; other values pass through.
pub fn lowercase(value: Value) -> Value {
    match value {
        Value::String(text) => Value::String(text.to_lowercase()),
        other => other,
    }
}

/// Parse a free-text or identifier value.
///
/// Numbers are accepted and stored in their decimal form, since identifier
/// columns are often numeric in spreadsheets.
pub fn parse_text(value: &Value) -> Result<String> {
    match value {
        Value::String(text) => Ok(text.clone()),
        Value::Number(number) => Ok(number.to_string()),
        _ => Err(NormalizationError::Text),
    }
}

/// Borrow the string form of a value for vocabulary lookups.
///
/// Vocabulary members are always strings; anything else is rendered so the
/// unsupported-value message can quote it.
pub fn as_term(value: &Value) -> std::result::Result<&str, String> {
    match value {
        Value::String(text) => Ok(text),
        other => Err(other.to_string()),
    }
}
