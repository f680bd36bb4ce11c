//! Patient age normalization.
//!
//! Ages above the ceiling are clamped so that exact ages of the oldest
//! patients are never stored.

use serde_json::Value;
use tracing::trace;

use crate::error::{NormalizationError, Result};
use crate::normalization::numeric::parse_integer;

/// Highest age stored.
pub const AGE_CEILING: i64 = 85;

/// Literal accepted for "85 or older".
pub const AGE_CEILING_SENTINEL: &str = "85+";

/// Parse and clamp an age.
pub fn parse_age(value: &Value) -> Result<i64> {
    if let Value::String(text) = value
        && text.trim() == AGE_CEILING_SENTINEL
    {
        return Ok(AGE_CEILING);
    }

    let age = match parse_integer(value) {
        Ok(age) => age,
        Err(NormalizationError::IntegerOverflow { negative: false }) => AGE_CEILING,
        Err(NormalizationError::IntegerOverflow { negative: true }) => {
            return Err(NormalizationError::BelowMinimum(0));
        }
        Err(err) => return Err(err),
    };

    if age < 0 {
        return Err(NormalizationError::BelowMinimum(0));
    }
    Ok(clamp_age(age))
}

pub fn clamp_age(age: i64) -> i64 {
    if age > AGE_CEILING {
        trace!("age clamped to ceiling");
    }
    age.min(AGE_CEILING)
}
