use isic_model::Sex;
use serde_json::Value;

use crate::error::Result;
use crate::normalization::term::parse_term;

/// Parse a sex value, expanding the `m` and `f` shorthands.
pub fn parse_sex(value: &Value) -> Result<Sex> {
    match value.as_str() {
        Some("m") => Ok(Sex::Male),
        Some("f") => Ok(Sex::Female),
        _ => parse_term(value),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::NormalizationError;
    use serde_json::json;

    #[test]
    fn test_shorthand() {
        assert_eq!(parse_sex(&json!("m")), Ok(Sex::Male));
        assert_eq!(parse_sex(&json!("f")), Ok(Sex::Female));
        assert_eq!(parse_sex(&json!("female")), Ok(Sex::Female));
    }

    #[test]
    fn test_unknown() {
        assert_eq!(
            parse_sex(&json!("x")),
            Err(NormalizationError::UnsupportedValue {
                field: "sex",
                value: "x".to_string()
            })
        );
    }
}
