//! Value normalization for ISIC metadata.
//!
//! Each normalizer takes one raw value (a JSON scalar, as read from a
//! spreadsheet cell or an API payload) and returns its canonical form or a
//! [`NormalizationError`] whose display text is the user-facing message.
//!
//! Blank handling comes first and is shared by every field: see
//! [`normalization::text::clean`]. Type-specific parsing runs only on values
//! that survive it.

mod error;

pub mod normalization;

pub use error::{NormalizationError, Result};

pub use normalization::age::{AGE_CEILING, AGE_CEILING_SENTINEL, parse_age};
pub use normalization::boolean::parse_boolean;
pub use normalization::measurement::{LengthUnit, parse_measurement, round_to_tenth};
pub use normalization::numeric::{parse_decimal, parse_integer};
pub use normalization::sex::parse_sex;
pub use normalization::term::parse_term;
pub use normalization::text::{clean, lowercase, parse_text};
