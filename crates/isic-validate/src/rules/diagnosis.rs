//! Rules gated on the diagnosis.

use isic_model::{BenignMalignant, Diagnosis};

use super::RowRule;
use crate::issue::Issue;
use crate::record::MetadataRow;

macro_rules! melanoma_only {
    ($name:ident, $field:ident, |$value:ident| $is_set:expr) => {
        pub(super) const $name: RowRule = RowRule {
            name: concat!(stringify!($field), " requires melanoma"),
            reads: &[stringify!($field), "diagnosis"],
            deferrable: false,
            check: |row| {
                let is_set = row.$field.is_some_and(|$value| $is_set);
                melanoma_only(stringify!($field), is_set, row.diagnosis)
            },
        };
    };
}

melanoma_only!(MEL_CLASS, mel_class, |_value| true);
melanoma_only!(MEL_MITOTIC_INDEX, mel_mitotic_index, |_value| true);
melanoma_only!(MEL_THICK_MM, mel_thick_mm, |thickness| thickness != 0.0);
melanoma_only!(MEL_TYPE, mel_type, |_value| true);
melanoma_only!(MEL_ULCER, mel_ulcer, |ulcerated| ulcerated);

/// Melanoma-only fields need a diagnosis, and that diagnosis must be a melanoma.
fn melanoma_only(
    field: &'static str,
    is_set: bool,
    diagnosis: Option<Diagnosis>,
) -> Option<Issue> {
    if !is_set {
        return None;
    }
    match diagnosis {
        None => Some(Issue::missing(field, "diagnosis")),
        Some(diagnosis) if !diagnosis.is_melanoma() => {
            Some(Issue::incompatible(field, "diagnosis", diagnosis.as_str()))
        }
        Some(_) => None,
    }
}

pub(super) const NEVUS_TYPE: RowRule = RowRule {
    name: "nevus_type requires nevus",
    reads: &["nevus_type", "diagnosis"],
    deferrable: false,
    check: nevus_type_requires_nevus,
};

fn nevus_type_requires_nevus(row: &MetadataRow) -> Option<Issue> {
    if row.nevus_type.is_none() {
        return None;
    }
    match row.diagnosis {
        None => Some(Issue::missing("nevus_type", "diagnosis")),
        Some(diagnosis) if !diagnosis.is_nevus() => Some(Issue::incompatible(
            "nevus_type",
            "diagnosis",
            diagnosis.as_str(),
        )),
        Some(_) => None,
    }
}

pub(super) const BENIGN_MALIGNANT: RowRule = RowRule {
    name: "diagnosis agrees with benign_malignant",
    reads: &["diagnosis", "benign_malignant"],
    deferrable: false,
    check: diagnosis_agrees_with_benign_malignant,
};

/// A melanoma cannot be benign, and a nevus cannot lean malignant.
fn diagnosis_agrees_with_benign_malignant(row: &MetadataRow) -> Option<Issue> {
    let diagnosis = row.diagnosis?;
    let benign_malignant = row.benign_malignant?;

    let conflicts = (diagnosis.is_melanoma() && benign_malignant == BenignMalignant::Benign)
        || (diagnosis.is_nevus() && benign_malignant.leans_malignant());

    conflicts.then(|| Issue::IncompatibleFields {
        field: "diagnosis",
        field_value: Some(diagnosis.as_str().to_string()),
        other: "benign_malignant",
        other_value: Some(benign_malignant.as_str().to_string()),
    })
}
