//! Boolean parsing for spreadsheet-style flags.

use serde_json::Value;

use crate::error::{NormalizationError, Result};

const TRUE_SPELLINGS: [&str; 6] = ["1", "on", "t", "true", "y", "yes"];
const FALSE_SPELLINGS: [&str; 6] = ["0", "off", "f", "false", "n", "no"];

/// Parse a boolean from a JSON boolean, the numbers 0 and 1, or one of the
/// usual true/false spellings in any case.
pub fn parse_boolean(value: &Value) -> Result<bool> {
    match value {
        Value::Bool(flag) => Ok(*flag),
        Value::Number(number) => match number.as_f64() {
            Some(n) if n == 1.0 => Ok(true),
            Some(n) if n == 0.0 => Ok(false),
            _ => Err(NormalizationError::Boolean),
        },
        Value::String(text) => parse_boolean_str(text),
        _ => Err(NormalizationError::Boolean),
    }
}

pub fn parse_boolean_str(text: &str) -> Result<bool> {
    let lowered = text.trim().to_ascii_lowercase();
    if TRUE_SPELLINGS.contains(&lowered.as_str()) {
        Ok(true)
    } else if FALSE_SPELLINGS.contains(&lowered.as_str()) {
        Ok(false)
    } else {
        Err(NormalizationError::Boolean)
    }
}
