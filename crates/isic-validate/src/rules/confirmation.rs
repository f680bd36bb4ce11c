use isic_model::DiagnosisConfirmType;

use super::RowRule;
use crate::issue::Issue;

/// A concomitant biopsy implies the diagnosis was confirmed by histopathology.
pub(super) const CONCOMITANT_BIOPSY: RowRule = RowRule {
    name: "concomitant_biopsy requires histopathology",
    reads: &["concomitant_biopsy", "diagnosis_confirm_type"],
    deferrable: false,
    check: |row| {
        if row.concomitant_biopsy != Some(true)
            || row.diagnosis_confirm_type == Some(DiagnosisConfirmType::Histopathology)
        {
            return None;
        }
        Some(Issue::MissingField {
            field: "concomitant_biopsy",
            field_value: None,
            requires: "diagnosis_confirm_type",
            requires_value: Some(DiagnosisConfirmType::Histopathology.as_str().to_string()),
        })
    },
};
