#![allow(missing_docs)]

use std::collections::HashSet;

use isic_model::fields::{self, FIELD_REGISTRY, FieldCategory, FieldKind};
use isic_model::is_known_field;
use serde_json::json;

#[test]
fn every_field_has_one_descriptor() {
    let names: HashSet<&str> = fields::field_names().collect();
    assert_eq!(names.len(), FIELD_REGISTRY.len());
    assert_eq!(FIELD_REGISTRY.len(), 31);
}

#[test]
fn acquisition_fields() {
    let acquisition: Vec<&str> = FIELD_REGISTRY
        .iter()
        .filter(|descriptor| descriptor.category == FieldCategory::Acquisition)
        .map(|descriptor| descriptor.name)
        .collect();
    assert_eq!(
        acquisition,
        vec![
            "image_type",
            "dermoscopic_type",
            "marker_pen",
            "hairy",
            "blurry",
            "color_tint"
        ]
    );
}

#[test]
fn labels() {
    let site = fields::field("anatom_site_general").expect("registered");
    assert_eq!(site.label, Some("Anatomic Site"));
    assert_eq!(site.kind, FieldKind::Enumerated);
    assert!(fields::field("sex").is_some_and(|d| d.label.is_none()));
}

#[test]
fn known_fields_include_diagnosis_levels() {
    assert!(is_known_field("diagnosis"));
    assert!(is_known_field("diagnosis_3"));
    assert!(!is_known_field("diagnosis_6"));
    assert!(!is_known_field("unstructured"));
    assert!(!is_known_field("filename"));
}

#[test]
fn search_descriptors() {
    let search = |name: &str| {
        fields::field(name)
            .and_then(|descriptor| descriptor.search)
            .expect("searchable")
    };

    assert_eq!(search("mel_ulcer").es_property(), json!({"type": "boolean"}));
    assert_eq!(
        search("mel_ulcer").es_facet("mel_ulcer"),
        json!({"terms": {"field": "mel_ulcer"}})
    );
    assert_eq!(
        search("diagnosis").es_facet("diagnosis"),
        json!({"terms": {"field": "diagnosis", "size": 100}})
    );
    assert_eq!(
        search("clin_size_long_diam_mm").es_facet("clin_size_long_diam_mm"),
        json!({
            "histogram": {
                "field": "clin_size_long_diam_mm",
                "interval": 10,
                "extended_bounds": {"min": 0, "max": 100}
            }
        })
    );

    let ranges = search("mel_thick_mm").es_facet("mel_thick_mm");
    let ranges = ranges["range"]["ranges"].as_array().expect("ranges");
    assert_eq!(ranges.len(), 11);
    assert_eq!(ranges[0], json!({"from": 0.0, "to": 0.5}));
    assert_eq!(ranges[10], json!({"from": 5.0}));

    assert!(
        fields::field("acquisition_day").is_some_and(|d| d.search.is_none()),
        "acquisition day is not searchable"
    );
}
