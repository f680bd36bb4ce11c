//! Linear measurements with optional unit suffixes.
//!
//! Values are stored in millimeters. Text input is a number followed by an
//! optional `um`, `mm` or `cm` suffix; a bare number is already millimeters.

use std::sync::LazyLock;

use regex::Regex;
use serde_json::Value;
use tracing::trace;

use crate::error::{NormalizationError, Result};
use crate::normalization::numeric::parse_decimal_str;

static MEASUREMENT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([+-]?(?:\d+\.?\d*|\.\d+)(?:[eE][+-]?\d+)?)\s*(um|mm|cm)?$")
        .expect("Invalid measurement regex")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LengthUnit {
    Micrometer,
    Millimeter,
    Centimeter,
}

impl LengthUnit {
    fn from_suffix(suffix: &str) -> Option<Self> {
        match suffix {
            "um" => Some(Self::Micrometer),
            "mm" => Some(Self::Millimeter),
            "cm" => Some(Self::Centimeter),
            _ => None,
        }
    }

    pub fn to_millimeters(self, value: f64) -> f64 {
        match self {
            Self::Micrometer => value / 1000.0,
            Self::Millimeter => value,
            Self::Centimeter => value * 10.0,
        }
    }
}

/// Parse a measurement into millimeters.
pub fn parse_measurement(value: &Value) -> Result<f64> {
    match value {
        Value::Number(number) => number.as_f64().ok_or(NormalizationError::Number),
        Value::String(text) => parse_measurement_str(text),
        _ => Err(NormalizationError::Number),
    }
}

pub fn parse_measurement_str(text: &str) -> Result<f64> {
    let captures = MEASUREMENT
        .captures(text.trim())
        .ok_or(NormalizationError::Number)?;
    let magnitude = parse_decimal_str(&captures[1])?;
    let unit = captures
        .get(2)
        .and_then(|suffix| LengthUnit::from_suffix(suffix.as_str()))
        .unwrap_or(LengthUnit::Millimeter);
    if unit != LengthUnit::Millimeter {
        trace!(?unit, "converting measurement to millimeters");
    }
    let millimeters = unit.to_millimeters(magnitude);
    if !millimeters.is_finite() {
        return Err(NormalizationError::Number);
    }
    Ok(millimeters)
}

/// Round to one decimal place, the precision clinical sizes are kept at.
pub fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
