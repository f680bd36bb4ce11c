//! Closed-vocabulary membership.

use isic_model::Vocabulary;
use serde_json::Value;

use crate::error::{NormalizationError, Result};
use crate::normalization::text::as_term;

/// Look up a value in the vocabulary `V`.
pub fn parse_term<V: Vocabulary>(value: &Value) -> Result<V> {
    let unsupported = |value: String| NormalizationError::UnsupportedValue {
        field: V::FIELD,
        value,
    };
    let text = as_term(value).map_err(unsupported)?;
    V::parse(text).ok_or_else(|| unsupported(text.to_string()))
}
