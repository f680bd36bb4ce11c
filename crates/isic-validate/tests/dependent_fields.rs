#![allow(missing_docs)]

mod common;

use common::{init_tracing, raw, single_issue, valid, validate};
use isic_model::{Diagnosis, ImageType};
use isic_validate::{ErrorKind, MetadataRow, ValidationMode};
use serde_json::json;

const NEVUS: &str = "Benign:Benign melanocytic proliferations:Nevus";
const BCC: &str = "Basal cell carcinoma";

#[test]
fn test_melanoma_fields() {
    let fields = [
        ("mel_class", json!("invasive melanoma")),
        ("mel_mitotic_index", json!("<1/mm^2")),
        ("mel_thick_mm", json!("0.5 mm")),
        ("mel_type", json!("nodular melanoma")),
        ("mel_ulcer", json!(true)),
    ];

    for (field, value) in fields {
        let issue = single_issue(json!({ field: value.clone() }));
        assert_eq!(issue.kind(), ErrorKind::MissingField, "{field}");
        assert_eq!(issue.message(), format!("Setting {field} requires setting diagnosis."));

        let issue = single_issue(json!({ field: value.clone(), "diagnosis": BCC }));
        assert_eq!(issue.kind(), ErrorKind::IncompatibleFields, "{field}");
        assert!(
            issue
                .message()
                .starts_with(&format!("Setting {field} is incompatible with diagnosis")),
            "{}",
            issue.message()
        );

        valid(json!({ field: value, "diagnosis": "Melanoma Invasive" }));
    }
}

#[test]
fn test_ulceration_requires_melanoma_for_every_diagnosis() {
    init_tracing();
    for diagnosis in Diagnosis::all().iter().filter(|d| !d.is_melanoma()) {
        let issue = single_issue(json!({"diagnosis": diagnosis.as_str(), "mel_ulcer": true}));
        assert_eq!(issue.kind(), ErrorKind::IncompatibleFields, "{diagnosis}");
        assert_eq!(issue.fields(), vec!["mel_ulcer", "diagnosis"]);
    }
}

#[test]
fn test_unset_melanoma_flags_need_no_diagnosis() {
    let row = valid(json!({"mel_ulcer": false, "mel_thick_mm": "0"}));
    assert_eq!(row.mel_ulcer(), Some(false));
    assert_eq!(row.mel_thick_mm(), Some(0.0));

    valid(json!({"mel_ulcer": "no", "diagnosis": BCC}));
}

#[test]
fn test_melanoma_fields_follow_every_melanoma_diagnosis() {
    init_tracing();
    assert_eq!(Diagnosis::melanoma_diagnoses().len(), 30);
    for diagnosis in Diagnosis::melanoma_diagnoses() {
        let row = valid(json!({
            "diagnosis": diagnosis.as_str(),
            "mel_class": "melanoma NOS",
            "mel_ulcer": true,
        }));
        assert_eq!(row.mel_class().map(|c| c.as_str()), Some("melanoma NOS"));
    }
}

#[test]
fn test_melanoma_cannot_be_benign() {
    for diagnosis in Diagnosis::melanoma_diagnoses() {
        let issue = single_issue(json!({
            "diagnosis": diagnosis.as_str(),
            "benign_malignant": "benign",
        }));
        assert_eq!(issue.kind(), ErrorKind::IncompatibleFields);
        assert_eq!(issue.fields(), vec!["diagnosis", "benign_malignant"]);
    }

    valid(json!({"diagnosis": "Melanoma Invasive", "benign_malignant": "malignant"}));
    valid(json!({"diagnosis": "Melanoma Invasive", "benign_malignant": "indeterminate"}));
}

#[test]
fn test_nevus_cannot_be_malignant() {
    for benign_malignant in ["malignant", "indeterminate/malignant"] {
        let issue = single_issue(json!({"diagnosis": NEVUS, "benign_malignant": benign_malignant}));
        assert_eq!(
            issue.message(),
            format!("Setting diagnosis to {NEVUS} is incompatible with benign_malignant {benign_malignant}.")
        );
    }

    valid(json!({"diagnosis": "Nevus, Spitz", "benign_malignant": "benign"}));
    valid(json!({"diagnosis": NEVUS, "benign_malignant": "indeterminate/benign"}));
}

#[test]
fn test_nevus_type_requires_nevus() {
    let issue = single_issue(json!({"nevus_type": "blue"}));
    assert_eq!(issue.message(), "Setting nevus_type requires setting diagnosis.");

    let issue = single_issue(json!({"nevus_type": "blue", "diagnosis": BCC}));
    assert_eq!(issue.kind(), ErrorKind::IncompatibleFields);

    // Nevus sebaceus is an adnexal proliferation, not a nevus.
    let issue = single_issue(json!({"nevus_type": "blue", "diagnosis": "Nevus sebaceus"}));
    assert_eq!(issue.kind(), ErrorKind::IncompatibleFields);

    valid(json!({"nevus_type": "blue", "diagnosis": "Blue nevus, Cellular"}));
    valid(json!({"nevus_type": "nevus NOS", "diagnosis": NEVUS}));
}

#[test]
fn test_dermoscopic_type_requires_dermoscopic_image() {
    let issue = single_issue(json!({"dermoscopic_type": "contact polarized"}));
    assert_eq!(
        issue.message(),
        "Setting dermoscopic_type requires setting image_type to dermoscopic."
    );

    let issue = single_issue(json!({
        "dermoscopic_type": "contact polarized",
        "image_type": "clinical: overview",
    }));
    assert_eq!(
        issue.message(),
        "Setting dermoscopic_type is incompatible with image_type clinical: overview."
    );

    valid(json!({"dermoscopic_type": "contact polarized", "image_type": "dermoscopic"}));
}

#[test]
fn test_tbp_tile_type_requires_tbp_tile_image() {
    let issue = single_issue(json!({"tbp_tile_type": "3D: XP"}));
    assert_eq!(issue.kind(), ErrorKind::MissingField);

    let issue = single_issue(json!({"tbp_tile_type": "3D: XP", "image_type": "dermoscopic"}));
    assert_eq!(issue.kind(), ErrorKind::IncompatibleFields);

    for image_type in ["TBP tile: close-up", "TBP tile: overview"] {
        valid(json!({"tbp_tile_type": "2D", "image_type": image_type}));
    }
}

#[test]
fn test_rcm_case_id_requires_rcm_image() {
    let issue = single_issue(json!({"rcm_case_id": "foo"}));
    assert_eq!(issue.message(), "Setting rcm_case_id requires setting image_type.");

    let issue = single_issue(json!({"rcm_case_id": "foo", "image_type": "dermoscopic"}));
    assert_eq!(
        issue.message(),
        "Setting rcm_case_id is incompatible with image_type dermoscopic."
    );

    for image_type in ImageType::all().iter().filter(|t| t.is_rcm()) {
        valid(json!({"rcm_case_id": "foo", "image_type": image_type.as_str()}));
    }
}

#[test]
fn test_rcm_case_id_rule_deferred() {
    init_tracing();
    let row = MetadataRow::validate_with_mode(
        &raw(json!({"rcm_case_id": "foo", "image_type": "dermoscopic"})),
        ValidationMode::DeferAggregateChecks,
    )
    .expect("rcm rule is deferred");
    assert_eq!(row.rcm_case_id(), Some("foo"));

    // Other rules still run.
    let err = MetadataRow::validate_with_mode(
        &raw(json!({"rcm_case_id": "foo", "mel_ulcer": true})),
        ValidationMode::DeferAggregateChecks,
    )
    .expect_err("melanoma rule is not deferred");
    assert_eq!(err.len(), 1);
    assert_eq!(err.issues()[0].fields(), vec!["mel_ulcer", "diagnosis"]);
}

#[test]
fn test_concomitant_biopsy_requires_histopathology() {
    let expected = "Setting concomitant_biopsy requires setting diagnosis_confirm_type to histopathology.";

    let issue = single_issue(json!({"concomitant_biopsy": true}));
    assert_eq!(issue.message(), expected);

    let issue = single_issue(json!({
        "concomitant_biopsy": "yes",
        "diagnosis_confirm_type": "single image expert consensus",
    }));
    assert_eq!(issue.message(), expected);

    valid(json!({"concomitant_biopsy": true, "diagnosis_confirm_type": "histopathology"}));
    valid(json!({"concomitant_biopsy": false}));
}

#[test]
fn test_rules_skip_fields_that_failed_to_parse() {
    let issue = single_issue(json!({"diagnosis": "not a diagnosis", "mel_ulcer": true}));
    assert_eq!(issue.kind(), ErrorKind::EnumError);
    assert_eq!(issue.fields(), vec!["diagnosis"]);

    let issue = single_issue(json!({"image_type": "polaroid", "dermoscopic_type": "contact polarized"}));
    assert_eq!(issue.kind(), ErrorKind::EnumError);
    assert_eq!(issue.fields(), vec!["image_type"]);
}

#[test]
fn test_every_rule_violation_is_reported() {
    let err = validate(json!({
        "mel_type": "nodular melanoma",
        "nevus_type": "halo",
        "tbp_tile_type": "2D",
        "concomitant_biopsy": true,
    }))
    .expect_err("four rule violations");
    let first_fields: Vec<&str> = err.issues().iter().map(|i| i.fields()[0]).collect();
    assert_eq!(
        first_fields,
        vec!["mel_type", "nevus_type", "tbp_tile_type", "concomitant_biopsy"]
    );
    assert!(err.to_string().starts_with("4 validation issue(s): "));
}
