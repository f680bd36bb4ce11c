#![allow(missing_docs)]

mod common;

use common::{raw, valid};
use isic_validate::{get_unstructured_columns, partition};
use serde_json::json;

#[test]
fn test_unstructured_fields() {
    let row = valid(json!({"age": 30, "hello": "world"}));
    assert_eq!(row.unstructured()["hello"], json!("world"));
    assert_eq!(row.dump()["unstructured"], json!({"hello": "world"}));
}

#[test]
fn test_unstructured_values_are_untouched() {
    let row = valid(json!({"notes": "  Left arm ", "count": 3, "blank": ""}));
    assert_eq!(row.unstructured()["notes"], json!("  Left arm "));
    assert_eq!(row.unstructured()["count"], json!(3));
    assert_eq!(row.unstructured()["blank"], json!(""));
}

#[test]
fn test_nested_unstructured_is_merged() {
    let row = valid(json!({"unstructured": {"site": "vienna"}, "scanner": "x1"}));
    assert_eq!(row.unstructured().len(), 2);
    assert_eq!(row.unstructured()["site"], json!("vienna"));
}

#[test]
fn test_no_unstructured_key_when_empty() {
    let row = valid(json!({"age": 30}));
    assert!(row.unstructured().is_empty());
    assert!(!row.dump().contains_key("unstructured"));
}

#[test]
fn test_get_unstructured_columns() {
    assert_eq!(get_unstructured_columns(["age", "foo", "bar"]), ["bar", "foo"]);
    assert_eq!(
        get_unstructured_columns(vec!["filename".to_string(), "isic_id".into(), "foo".into()]),
        ["foo"]
    );
    assert_eq!(
        get_unstructured_columns(["diagnosis_2", "diagnosis", "foo", "foo"]),
        ["foo"]
    );
    assert_eq!(get_unstructured_columns(["unstructured", "foo"]), ["foo"]);
    assert!(get_unstructured_columns(Vec::<String>::new()).is_empty());
}

#[test]
fn test_partition() {
    let (known, unknown) = partition(&raw(json!({"age": 30, "diagnosis_1": "Benign", "foo": 1})));
    assert_eq!(known.len(), 2);
    assert_eq!(unknown, raw(json!({"foo": 1})));
}

#[test]
fn test_partition_matches_validated_row() {
    let input = raw(json!({
        "age": 30,
        "scanner": "x1",
        "unstructured": {"site": "vienna", "visit": 2},
    }));
    let (known, unknown) = partition(&input);
    assert_eq!(known, raw(json!({"age": 30})));
    assert_eq!(unknown, raw(json!({"scanner": "x1", "site": "vienna", "visit": 2})));

    let row = valid(serde_json::Value::Object(input));
    assert_eq!(row.unstructured(), &unknown);
}

#[test]
fn test_non_object_unstructured_is_kept_as_a_field() {
    let (_, unknown) = partition(&raw(json!({"unstructured": "notes"})));
    assert_eq!(unknown, raw(json!({"unstructured": "notes"})));
}
