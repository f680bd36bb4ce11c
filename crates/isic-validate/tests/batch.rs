//! Tests for batch-level validation rules.

mod common;

use common::{raw, valid};
use isic_validate::{
    AggregateRule, ErrorKind, MetadataBatch, MetadataRow, ValidationMode, ValidationOptions,
    check_batch,
};
use serde_json::{Value, json};

fn rows(values: Vec<Value>) -> Vec<MetadataRow> {
    values.into_iter().map(valid).collect()
}

fn deferred(value: Value) -> MetadataRow {
    MetadataRow::validate_with_mode(&raw(value), ValidationMode::DeferAggregateChecks)
        .expect("row should validate with deferred rules")
}

#[test]
fn test_valid_batch() {
    let batch = MetadataBatch::new(rows(vec![
        json!({"lesion_id": "lesion1", "patient_id": "patient1", "diagnosis": "Melanoma Invasive"}),
        json!({"lesion_id": "lesion1", "patient_id": "patient1", "diagnosis": "Melanoma Invasive"}),
        json!({"lesion_id": "lesion2", "patient_id": "patient1"}),
    ]))
    .expect("batch is consistent");
    assert_eq!(batch.len(), 3);
    assert_eq!(batch.items()[2].lesion_id(), Some("lesion2"));
}

#[test]
fn test_empty_batch() {
    let batch = MetadataBatch::new(Vec::new()).expect("empty batch is valid");
    assert!(batch.is_empty());
}

#[test]
fn test_lesion_belongs_to_multiple_patients() {
    let err = MetadataBatch::new(rows(vec![
        json!({"lesion_id": "foo", "patient_id": "foopatient"}),
        json!({"lesion_id": "foo", "patient_id": "barpatient"}),
        json!({"lesion_id": "bar", "patient_id": "barpatient"}),
    ]))
    .expect_err("lesion foo spans two patients");

    assert_eq!(err.len(), 1);
    let issue = &err.issues()[0];
    assert_eq!(issue.kind(), ErrorKind::AggregateViolation);
    assert_eq!(issue.code(), Some("one_lesion_multiple_patients"));
    assert_eq!(issue.message(), "One or more lesions belong to multiple patients.");
    assert_eq!(issue.examples(), ["foo"]);
}

#[test]
fn test_rows_without_ids_are_ignored() {
    MetadataBatch::new(rows(vec![
        json!({"lesion_id": "", "patient_id": "foopatient"}),
        json!({"lesion_id": " ", "patient_id": "barpatient"}),
        json!({"patient_id": "bazpatient"}),
        json!({"lesion_id": "foo"}),
        json!({"lesion_id": "foo", "patient_id": "foopatient"}),
    ]))
    .expect("blank lesion ids never group");
}

#[test]
fn test_rcm_case_with_multiple_macroscopic_images() {
    let err = MetadataBatch::new(rows(vec![
        json!({"rcm_case_id": "foo", "image_type": "RCM: macroscopic"}),
        json!({"rcm_case_id": "foo", "image_type": "RCM: macroscopic"}),
        json!({"rcm_case_id": "foo", "image_type": "RCM: tile"}),
        json!({"rcm_case_id": "bar", "image_type": "RCM: macroscopic"}),
    ]))
    .expect_err("case foo has two macroscopic images");

    assert_eq!(err.len(), 1);
    assert_eq!(err.issues()[0].code(), Some("rcm_multiple_macroscopics"));
    assert_eq!(err.issues()[0].examples(), ["foo"]);
}

#[test]
fn test_rcm_case_with_multiple_lesions() {
    let err = MetadataBatch::new(rows(vec![
        json!({"rcm_case_id": "foo", "lesion_id": "lesion1", "image_type": "RCM: tile"}),
        json!({"rcm_case_id": "foo", "lesion_id": "lesion2", "image_type": "RCM: mosaic"}),
        json!({"rcm_case_id": "bar", "lesion_id": "lesion3", "image_type": "RCM: tile"}),
    ]))
    .expect_err("case foo spans two lesions");

    assert_eq!(err.len(), 1);
    assert_eq!(err.issues()[0].code(), Some("one_rcm_case_multiple_lesions"));
    assert_eq!(err.issues()[0].fields(), vec!["rcm_case_id", "lesion_id"]);
}

#[test]
fn test_batch_accepts_rows_validated_with_deferred_rules() {
    let err = MetadataBatch::new(vec![
        deferred(json!({"rcm_case_id": "foo", "lesion_id": "a"})),
        deferred(json!({"rcm_case_id": "foo", "lesion_id": "b"})),
    ])
    .expect_err("case foo spans two lesions");
    assert_eq!(err.issues()[0].code(), Some("one_rcm_case_multiple_lesions"));
}

#[test]
fn test_every_failing_rule_is_reported() {
    let err = MetadataBatch::new(rows(vec![
        json!({"lesion_id": "l1", "patient_id": "p1", "rcm_case_id": "c1", "image_type": "RCM: macroscopic"}),
        json!({"lesion_id": "l1", "patient_id": "p2", "rcm_case_id": "c1", "image_type": "RCM: macroscopic"}),
        json!({"lesion_id": "l2", "patient_id": "p2", "rcm_case_id": "c1", "image_type": "RCM: tile"}),
    ]))
    .expect_err("all three batch rules fail");

    let rules: Vec<&str> = err.issues().iter().filter_map(|i| i.code()).collect();
    let expected: Vec<&str> = AggregateRule::all().iter().map(|r| r.code()).collect();
    assert_eq!(rules, expected);
}

#[test]
fn test_examples_are_sorted_and_truncated() {
    let values: Vec<Value> = (0..8)
        .rev()
        .flat_map(|n| {
            [
                json!({"lesion_id": format!("lesion{n}"), "patient_id": "a"}),
                json!({"lesion_id": format!("lesion{n}"), "patient_id": "b"}),
            ]
        })
        .collect();
    let items = rows(values);

    let issues = check_batch(&items, 5);
    assert_eq!(
        issues[0].examples(),
        ["lesion0", "lesion1", "lesion2", "lesion3", "lesion4"]
    );

    let options = ValidationOptions::default().with_max_examples(2);
    let err = MetadataBatch::with_options(items, &options).expect_err("eight offending lesions");
    assert_eq!(err.issues()[0].examples(), ["lesion0", "lesion1"]);
    insta::assert_json_snapshot!(err.issues()[0], @r#"
    {
      "kind": "aggregate_violation",
      "fields": [
        "lesion_id",
        "patient_id"
      ],
      "message": "One or more lesions belong to multiple patients.",
      "code": "one_lesion_multiple_patients",
      "examples": [
        "lesion0",
        "lesion1"
      ]
    }
    "#);
}
