//! Per-field normalization table and input preparation.
//!
//! Normalization runs in two phases. [`prepare`] cleans every value (trim,
//! blank to absent), lowercases the case-insensitive fields, resolves the
//! two diagnosis input shapes and diverts unknown fields. Each entry of
//! [`NORMALIZERS`] then parses one field into its typed slot on the row.

use std::collections::HashMap;

use isic_model::Diagnosis;
use isic_model::diagnosis::{LEVEL_FIELDS, SEPARATOR, accept_terminal_values};
use isic_normalization::{
    NormalizationError, clean, lowercase, parse_age, parse_boolean, parse_integer,
    parse_measurement, parse_sex, parse_term, parse_text, round_to_tenth,
};
use serde_json::{Map, Value};
use tracing::{debug, trace};

use crate::record::MetadataRow;
use crate::unstructured::partition;

/// Parses one field of a raw record into a [`MetadataRow`].
pub(crate) struct FieldNormalizer {
    pub name: &'static str,
    /// Lowercase string input before parsing.
    pub lowercase: bool,
    pub apply: fn(&mut MetadataRow, &Value) -> Result<(), NormalizationError>,
}

macro_rules! normalizer {
    ($field:ident, $parse:expr) => {
        normalizer!(@build $field, false, $parse)
    };
    ($field:ident, lowercase, $parse:expr) => {
        normalizer!(@build $field, true, $parse)
    };
    (@build $field:ident, $lowercase:expr, $parse:expr) => {
        FieldNormalizer {
            name: stringify!($field),
            lowercase: $lowercase,
            apply: |row, value| {
                row.$field = Some($parse(value)?);
                Ok(())
            },
        }
    };
}

/// One entry per schema field, in schema order.
pub(crate) static NORMALIZERS: &[FieldNormalizer] = &[
    normalizer!(age, parse_age),
    normalizer!(sex, lowercase, parse_sex),
    normalizer!(anatom_site_general, lowercase, parse_term),
    normalizer!(anatom_site_special, parse_term),
    normalizer!(benign_malignant, lowercase, parse_term),
    normalizer!(diagnosis, parse_diagnosis),
    normalizer!(diagnosis_confirm_type, lowercase, parse_term),
    normalizer!(personal_hx_mm, parse_boolean),
    normalizer!(family_hx_mm, parse_boolean),
    normalizer!(clin_size_long_diam_mm, lowercase, parse_clinical_size),
    normalizer!(fitzpatrick_skin_type, parse_term),
    normalizer!(melanocytic, parse_boolean),
    normalizer!(concomitant_biopsy, parse_boolean),
    normalizer!(mel_class, parse_term),
    normalizer!(mel_mitotic_index, lowercase, parse_term),
    normalizer!(mel_thick_mm, lowercase, parse_measurement),
    normalizer!(mel_type, parse_term),
    normalizer!(mel_ulcer, parse_boolean),
    normalizer!(patient_id, parse_text),
    normalizer!(lesion_id, parse_text),
    normalizer!(acquisition_day, parse_integer),
    normalizer!(image_manipulation, parse_term),
    normalizer!(nevus_type, parse_term),
    normalizer!(image_type, parse_term),
    normalizer!(dermoscopic_type, parse_term),
    normalizer!(tbp_tile_type, parse_term),
    normalizer!(rcm_case_id, parse_text),
    normalizer!(marker_pen, parse_boolean),
    normalizer!(hairy, parse_boolean),
    normalizer!(blurry, parse_boolean),
    normalizer!(color_tint, parse_term),
];

pub(crate) fn normalizer(name: &str) -> Option<&'static FieldNormalizer> {
    NORMALIZERS.iter().find(|normalizer| normalizer.name == name)
}

fn parse_clinical_size(value: &Value) -> Result<f64, NormalizationError> {
    let rounded = round_to_tenth(parse_measurement(value)?);
    if rounded.is_finite() {
        Ok(rounded)
    } else {
        Err(NormalizationError::Number)
    }
}

/// Resolve a full path or terminal value to a hierarchy member.
fn parse_diagnosis(value: &Value) -> Result<Diagnosis, NormalizationError> {
    let unsupported = |value: String| NormalizationError::UnsupportedValue {
        field: "diagnosis",
        value,
    };
    let text = value.as_str().ok_or_else(|| unsupported(value.to_string()))?;
    let resolved = accept_terminal_values(text);
    if resolved != text {
        debug!("expanded terminal diagnosis value to its full path");
    }
    Diagnosis::from_path(resolved).ok_or_else(|| unsupported(text.to_string()))
}

/// Raw record after the first normalization phase.
#[derive(Debug, Default)]
pub(crate) struct PreparedRecord {
    /// Cleaned values of known fields, keyed by field name.
    pub fields: HashMap<String, Value>,
    pub unstructured: Map<String, Value>,
}

/// Clean values, divert unknown fields and resolve the diagnosis shape.
pub(crate) fn prepare(raw: &Map<String, Value>) -> PreparedRecord {
    let (known, unstructured) = partition(raw);
    let mut prepared = PreparedRecord {
        unstructured,
        ..PreparedRecord::default()
    };

    for (name, value) in known {
        let Some(cleaned) = clean(&value) else {
            trace!(field = %name, "blank value treated as absent");
            continue;
        };
        let cleaned = match normalizer(&name) {
            Some(normalizer) if normalizer.lowercase => lowercase(cleaned),
            _ => cleaned,
        };
        prepared.fields.insert(name, cleaned);
    }

    resolve_diagnosis_shape(raw, &mut prepared.fields);
    prepared
}

/// Collapse `diagnosis_1` .. `diagnosis_5` into a single `diagnosis`.
///
/// A single `diagnosis` value wins over the level fields. Otherwise the
/// levels are joined, absent levels count as empty, and trailing
/// separators are dropped.
fn resolve_diagnosis_shape(raw: &Map<String, Value>, fields: &mut HashMap<String, Value>) {
    let levels: Vec<Option<Value>> = LEVEL_FIELDS
        .iter()
        .map(|field| fields.remove(*field))
        .collect();

    let uses_levels = LEVEL_FIELDS.iter().any(|field| raw.contains_key(*field));
    if fields.contains_key("diagnosis") || !uses_levels {
        return;
    }

    let separator = SEPARATOR.to_string();
    let joined = levels
        .iter()
        .map(|level| match level {
            Some(Value::String(text)) => text.clone(),
            Some(other) => other.to_string(),
            None => String::new(),
        })
        .collect::<Vec<_>>()
        .join(separator.as_str());
    let joined = joined.trim_end_matches(SEPARATOR);

    if !joined.is_empty() {
        fields.insert("diagnosis".to_string(), Value::String(joined.to_string()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use isic_model::FIELD_REGISTRY;
    use serde_json::json;

    fn raw(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => unreachable!("test input must be an object"),
        }
    }

    #[test]
    fn every_registered_field_has_a_normalizer() {
        let names: Vec<&str> = NORMALIZERS.iter().map(|n| n.name).collect();
        let registered: Vec<&str> = FIELD_REGISTRY.iter().map(|d| d.name).collect();
        assert_eq!(names, registered);
    }

    #[test]
    fn single_diagnosis_wins() {
        let prepared = prepare(&raw(json!({
            "diagnosis": "Fibroma, Sclerotic",
            "diagnosis_1": "Benign",
            "diagnosis_2": "Benign melanocytic proliferations",
        })));
        assert_eq!(prepared.fields["diagnosis"], json!("Fibroma, Sclerotic"));
        assert!(!prepared.fields.contains_key("diagnosis_1"));
    }

    #[test]
    fn levels_are_joined() {
        let prepared = prepare(&raw(json!({
            "diagnosis_1": "Benign",
            "diagnosis_2": "Benign - Other",
            "diagnosis_3": null,
            "diagnosis_4": "",
        })));
        assert_eq!(prepared.fields["diagnosis"], json!("Benign:Benign - Other"));
    }

    #[test]
    fn blank_levels_leave_diagnosis_absent() {
        let prepared = prepare(&raw(json!({"diagnosis_1": " ", "diagnosis": ""})));
        assert!(!prepared.fields.contains_key("diagnosis"));
    }

    #[test]
    fn case_insensitive_fields_are_lowercased() {
        let prepared = prepare(&raw(json!({
            "sex": " Male ",
            "image_type": "Dermoscopic",
            "mel_thick_mm": "4.5 MM",
        })));
        assert_eq!(prepared.fields["sex"], json!("male"));
        assert_eq!(prepared.fields["image_type"], json!("Dermoscopic"));
        assert_eq!(prepared.fields["mel_thick_mm"], json!("4.5 mm"));
    }

    #[test]
    fn unknown_and_nested_fields_are_unstructured() {
        let prepared = prepare(&raw(json!({
            "hello": " world ",
            "unstructured": {"site": "vienna"},
        })));
        assert_eq!(prepared.unstructured["hello"], json!(" world "));
        assert_eq!(prepared.unstructured["site"], json!("vienna"));
        assert!(prepared.fields.is_empty());
    }
}
