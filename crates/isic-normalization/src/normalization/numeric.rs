//! Integer and decimal parsing.
//!
//! Raw numbers arrive either as JSON numbers or as text from spreadsheet
//! cells. Both forms are accepted; non-finite values never are.

use std::num::IntErrorKind;

use serde_json::{Number, Value};

use crate::error::{NormalizationError, Result};

/// Parse an integer from a JSON number or numeric text.
///
/// Floats are accepted when they have no fractional part, so `"142"`,
/// `142` and `142.0` all parse to the same value.
pub fn parse_integer(value: &Value) -> Result<i64> {
    match value {
        Value::Number(number) => integer_from_number(number),
        Value::String(text) => parse_integer_str(text),
        _ => Err(NormalizationError::Integer),
    }
}

pub fn parse_integer_str(text: &str) -> Result<i64> {
    let trimmed = text.trim();
    match trimmed.parse::<i64>() {
        Ok(value) => Ok(value),
        Err(err) => match err.kind() {
            IntErrorKind::PosOverflow => Err(NormalizationError::IntegerOverflow { negative: false }),
            IntErrorKind::NegOverflow => Err(NormalizationError::IntegerOverflow { negative: true }),
            _ => trimmed
                .parse::<f64>()
                .map_err(|_| NormalizationError::Integer)
                .and_then(integer_from_float),
        },
    }
}

fn integer_from_number(number: &Number) -> Result<i64> {
    if let Some(value) = number.as_i64() {
        return Ok(value);
    }
    if number.is_u64() {
        return Err(NormalizationError::IntegerOverflow { negative: false });
    }
    number
        .as_f64()
        .ok_or(NormalizationError::Integer)
        .and_then(integer_from_float)
}

#[allow(clippy::cast_possible_truncation)]
fn integer_from_float(value: f64) -> Result<i64> {
    if !value.is_finite() || value.fract() != 0.0 {
        return Err(NormalizationError::Integer);
    }
    // i64::MAX is not exactly representable; its f64 rounding is 2^63.
    if value >= i64::MAX as f64 {
        return Err(NormalizationError::IntegerOverflow { negative: false });
    }
    if value < i64::MIN as f64 {
        return Err(NormalizationError::IntegerOverflow { negative: true });
    }
    Ok(value as i64)
}

/// Parse a finite decimal from a JSON number or numeric text.
pub fn parse_decimal(value: &Value) -> Result<f64> {
    match value {
        Value::Number(number) => number.as_f64().ok_or(NormalizationError::Number),
        Value::String(text) => parse_decimal_str(text),
        _ => Err(NormalizationError::Number),
    }
}

pub fn parse_decimal_str(text: &str) -> Result<f64> {
    text.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .ok_or(NormalizationError::Number)
}
