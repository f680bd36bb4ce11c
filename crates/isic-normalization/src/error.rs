//! Error types for value normalization.

use thiserror::Error;

/// Reasons a raw value cannot be normalized.
///
/// The display text is the message shown to whoever supplied the value.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum NormalizationError {
    #[error("Unable to parse value as an integer.")]
    Integer,

    /// Integral input outside the representable range.
    #[error("Unable to parse value as an integer.")]
    IntegerOverflow {
        /// Sign of the out-of-range value.
        negative: bool,
    },

    #[error("Unable to parse value as a boolean.")]
    Boolean,

    /// Decimal input, including measurements whose text does not match
    /// the number-plus-unit grammar.
    #[error("Unable to parse value as a number.")]
    Number,

    #[error("Unable to parse value as a string.")]
    Text,

    #[error("Number must be greater than or equal to {0}.")]
    BelowMinimum(i64),

    /// Value outside a closed vocabulary, after any shorthand expansion.
    #[error("Unsupported value for {field}: '{value}'.")]
    UnsupportedValue { field: &'static str, value: String },
}

/// Result type for normalization operations.
pub type Result<T> = std::result::Result<T, NormalizationError>;
