//! Tests for loading validation options.

use isic_validate::{ValidationMode, ValidationOptions};

#[test]
fn test_defaults() {
    let options = ValidationOptions::default();
    assert_eq!(options.mode, ValidationMode::Strict);
    assert_eq!(options.max_examples, 5);
    assert_eq!(ValidationOptions::new(), options);
}

#[test]
fn test_from_toml() {
    let options = ValidationOptions::from_toml_str(
        r#"
        mode = "defer-aggregate-checks"
        max_examples = 10
        "#,
    )
    .expect("valid options");
    assert_eq!(options.mode, ValidationMode::DeferAggregateChecks);
    assert_eq!(options.max_examples, 10);
}

#[test]
fn test_missing_keys_keep_defaults() {
    let options = ValidationOptions::from_toml_str("max_examples = 1").expect("valid options");
    assert_eq!(options.mode, ValidationMode::Strict);
    assert_eq!(options.max_examples, 1);

    assert_eq!(
        ValidationOptions::from_toml_str("").expect("empty options"),
        ValidationOptions::default()
    );
}

#[test]
fn test_invalid_toml() {
    let err = ValidationOptions::from_toml_str(r#"mode = "lenient""#).expect_err("unknown mode");
    assert!(err.to_string().starts_with("invalid validation options"));
    assert!(ValidationOptions::from_toml_str("max_examples = -1").is_err());
}

#[test]
fn test_builders() {
    let options = ValidationOptions::new()
        .with_mode(ValidationMode::DeferAggregateChecks)
        .with_max_examples(3);
    assert_eq!(options.mode, ValidationMode::DeferAggregateChecks);
    assert_eq!(options.max_examples, 3);
}
