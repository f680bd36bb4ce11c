//! Static descriptors for every known metadata field.
//!
//! The registry is read-only data for search and indexing consumers; the
//! validator itself only uses it to tell known fields from unstructured ones.

use serde::Serialize;
use serde_json::{Value, json};

use crate::diagnosis::LEVEL_FIELDS;

/// Semantic type of a field's canonical value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    Boolean,
    Enumerated,
    Decimal,
    Integer,
    Text,
    Identifier,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldCategory {
    /// Describes how the image was captured.
    Acquisition,
    /// Describes the patient or lesion.
    Clinical,
}

/// Search index property type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PropertyType {
    Boolean,
    Keyword,
    Float,
    Integer,
}

impl PropertyType {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Boolean => "boolean",
            Self::Keyword => "keyword",
            Self::Float => "float",
            Self::Integer => "integer",
        }
    }
}

/// Half-open numeric bucket; a missing bound is unbounded.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct NumericRange {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to: Option<f64>,
}

impl NumericRange {
    const fn between(from: f64, to: f64) -> Self {
        Self {
            from: Some(from),
            to: Some(to),
        }
    }
}

/// Aggregation used to facet a field in search results.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Facet {
    Terms { size: Option<u32> },
    Histogram { interval: u32, min: u32, max: u32 },
    Ranges(&'static [NumericRange]),
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SearchConfig {
    pub property: PropertyType,
    pub facet: Facet,
}

impl SearchConfig {
    /// Index mapping for the field, e.g. `{"type": "keyword"}`.
    pub fn es_property(&self) -> Value {
        json!({ "type": self.property.as_str() })
    }

    /// Aggregation request for the field named `key`.
    pub fn es_facet(&self, key: &str) -> Value {
        match self.facet {
            Facet::Terms { size: None } => json!({ "terms": { "field": key } }),
            Facet::Terms { size: Some(size) } => {
                json!({ "terms": { "field": key, "size": size } })
            }
            Facet::Histogram { interval, min, max } => json!({
                "histogram": {
                    "field": key,
                    "interval": interval,
                    "extended_bounds": { "min": min, "max": max },
                }
            }),
            Facet::Ranges(ranges) => json!({
                "range": { "field": key, "ranges": ranges }
            }),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FieldDescriptor {
    pub name: &'static str,
    pub kind: FieldKind,
    pub category: FieldCategory,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<SearchConfig>,
}

const MEL_THICK_RANGES: &[NumericRange] = &[
    NumericRange::between(0.0, 0.5),
    NumericRange::between(0.5, 1.0),
    NumericRange::between(1.0, 1.5),
    NumericRange::between(1.5, 2.0),
    NumericRange::between(2.0, 2.5),
    NumericRange::between(2.5, 3.0),
    NumericRange::between(3.0, 3.5),
    NumericRange::between(3.5, 4.0),
    NumericRange::between(4.0, 4.5),
    NumericRange::between(4.5, 5.0),
    NumericRange {
        from: Some(5.0),
        to: None,
    },
];

const fn terms(property: PropertyType) -> Option<SearchConfig> {
    Some(SearchConfig {
        property,
        facet: Facet::Terms { size: None },
    })
}

const fn boolean(name: &'static str, category: FieldCategory) -> FieldDescriptor {
    FieldDescriptor {
        name,
        kind: FieldKind::Boolean,
        category,
        label: None,
        search: terms(PropertyType::Boolean),
    }
}

const fn keyword(name: &'static str, kind: FieldKind, category: FieldCategory) -> FieldDescriptor {
    FieldDescriptor {
        name,
        kind,
        category,
        label: None,
        search: terms(PropertyType::Keyword),
    }
}

const fn clinical_enum(name: &'static str) -> FieldDescriptor {
    keyword(name, FieldKind::Enumerated, FieldCategory::Clinical)
}

const fn acquisition_enum(name: &'static str) -> FieldDescriptor {
    keyword(name, FieldKind::Enumerated, FieldCategory::Acquisition)
}

const fn identifier(name: &'static str) -> FieldDescriptor {
    keyword(name, FieldKind::Identifier, FieldCategory::Clinical)
}

/// One descriptor per schema field, in schema order.
pub static FIELD_REGISTRY: &[FieldDescriptor] = &[
    FieldDescriptor {
        name: "age",
        kind: FieldKind::Integer,
        category: FieldCategory::Clinical,
        label: None,
        search: Some(SearchConfig {
            property: PropertyType::Integer,
            facet: Facet::Histogram {
                interval: 5,
                min: 0,
                max: 85,
            },
        }),
    },
    clinical_enum("sex"),
    FieldDescriptor {
        label: Some("Anatomic Site"),
        ..clinical_enum("anatom_site_general")
    },
    clinical_enum("anatom_site_special"),
    clinical_enum("benign_malignant"),
    FieldDescriptor {
        name: "diagnosis",
        kind: FieldKind::Enumerated,
        category: FieldCategory::Clinical,
        label: None,
        search: Some(SearchConfig {
            property: PropertyType::Keyword,
            facet: Facet::Terms { size: Some(100) },
        }),
    },
    clinical_enum("diagnosis_confirm_type"),
    boolean("personal_hx_mm", FieldCategory::Clinical),
    boolean("family_hx_mm", FieldCategory::Clinical),
    FieldDescriptor {
        name: "clin_size_long_diam_mm",
        kind: FieldKind::Decimal,
        category: FieldCategory::Clinical,
        label: None,
        search: Some(SearchConfig {
            property: PropertyType::Float,
            facet: Facet::Histogram {
                interval: 10,
                min: 0,
                max: 100,
            },
        }),
    },
    clinical_enum("fitzpatrick_skin_type"),
    boolean("melanocytic", FieldCategory::Clinical),
    boolean("concomitant_biopsy", FieldCategory::Clinical),
    clinical_enum("mel_class"),
    clinical_enum("mel_mitotic_index"),
    FieldDescriptor {
        name: "mel_thick_mm",
        kind: FieldKind::Decimal,
        category: FieldCategory::Clinical,
        label: None,
        search: Some(SearchConfig {
            property: PropertyType::Float,
            facet: Facet::Ranges(MEL_THICK_RANGES),
        }),
    },
    clinical_enum("mel_type"),
    boolean("mel_ulcer", FieldCategory::Clinical),
    identifier("patient_id"),
    identifier("lesion_id"),
    FieldDescriptor {
        name: "acquisition_day",
        kind: FieldKind::Integer,
        category: FieldCategory::Clinical,
        label: None,
        search: None,
    },
    clinical_enum("image_manipulation"),
    clinical_enum("nevus_type"),
    acquisition_enum("image_type"),
    acquisition_enum("dermoscopic_type"),
    clinical_enum("tbp_tile_type"),
    identifier("rcm_case_id"),
    boolean("marker_pen", FieldCategory::Acquisition),
    boolean("hairy", FieldCategory::Acquisition),
    boolean("blurry", FieldCategory::Acquisition),
    acquisition_enum("color_tint"),
];

/// Descriptor for a schema field.
pub fn field(name: &str) -> Option<&'static FieldDescriptor> {
    FIELD_REGISTRY.iter().find(|descriptor| descriptor.name == name)
}

pub fn field_names() -> impl Iterator<Item = &'static str> {
    FIELD_REGISTRY.iter().map(|descriptor| descriptor.name)
}

/// True for schema fields and the split diagnosis level fields.
///
/// Anything else on an input record is unstructured.
pub fn is_known_field(name: &str) -> bool {
    field(name).is_some() || LEVEL_FIELDS.contains(&name)
}
