#![allow(dead_code)]

use std::sync::Once;

use isic_validate::{Issue, MetadataRow, ValidationError};
use serde_json::{Map, Value};
use tracing_subscriber::EnvFilter;

static INIT: Once = Once::new();

pub fn init_tracing() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

pub fn raw(value: Value) -> Map<String, Value> {
    match value {
        Value::Object(map) => map,
        other => panic!("expected an object, got {other}"),
    }
}

pub fn validate(value: Value) -> Result<MetadataRow, ValidationError> {
    init_tracing();
    MetadataRow::validate(&raw(value))
}

pub fn valid(value: Value) -> MetadataRow {
    validate(value).expect("row should validate")
}

/// The one issue a row is expected to fail with.
pub fn single_issue(value: Value) -> Issue {
    let err = validate(value).expect_err("row should be rejected");
    assert_eq!(err.len(), 1, "expected one issue, got {:?}", err.issues());
    err.into_issues().remove(0)
}
