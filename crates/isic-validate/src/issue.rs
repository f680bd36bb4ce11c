//! Validation issue types.
//!
//! Each [`Issue`] variant carries only the data it needs; the user-facing
//! message is rendered from that data and always uses literal field names.

use std::fmt;

use isic_normalization::NormalizationError;
use serde::{Serialize, Serializer};
use thiserror::Error;

/// Error taxonomy shared by record and batch validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// Value could not be parsed for its field's type.
    ParseError,
    /// Value outside the field's closed vocabulary.
    EnumError,
    /// Field requires a companion field that is absent.
    MissingField,
    /// Two present fields conflict.
    IncompatibleFields,
    /// Cardinality violation across a batch.
    AggregateViolation,
}

impl ErrorKind {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::ParseError => "parse_error",
            Self::EnumError => "enum_error",
            Self::MissingField => "missing_field",
            Self::IncompatibleFields => "incompatible_fields",
            Self::AggregateViolation => "aggregate_violation",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Batch-level rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AggregateRule {
    OneLesionMultiplePatients,
    RcmMultipleMacroscopics,
    OneRcmCaseMultipleLesions,
}

impl AggregateRule {
    pub const fn all() -> &'static [Self] {
        &[
            Self::OneLesionMultiplePatients,
            Self::RcmMultipleMacroscopics,
            Self::OneRcmCaseMultipleLesions,
        ]
    }

    /// Machine-readable code.
    pub const fn code(&self) -> &'static str {
        match self {
            Self::OneLesionMultiplePatients => "one_lesion_multiple_patients",
            Self::RcmMultipleMacroscopics => "rcm_multiple_macroscopics",
            Self::OneRcmCaseMultipleLesions => "one_rcm_case_multiple_lesions",
        }
    }

    pub const fn message(&self) -> &'static str {
        match self {
            Self::OneLesionMultiplePatients => "One or more lesions belong to multiple patients.",
            Self::RcmMultipleMacroscopics => {
                "One or more RCM cases have multiple macroscopic images."
            }
            Self::OneRcmCaseMultipleLesions => "One or more RCM cases belong to multiple lesions.",
        }
    }

    /// Fields the rule aggregates over. The first is the grouping key.
    pub const fn fields(&self) -> &'static [&'static str] {
        match self {
            Self::OneLesionMultiplePatients => &["lesion_id", "patient_id"],
            Self::RcmMultipleMacroscopics => &["rcm_case_id", "image_type"],
            Self::OneRcmCaseMultipleLesions => &["rcm_case_id", "lesion_id"],
        }
    }
}

/// Validation issue - each variant carries only its needed data.
#[derive(Debug, Clone, PartialEq)]
pub enum Issue {
    /// Value could not be parsed for its field's type.
    ParseError {
        field: &'static str,
        reason: NormalizationError,
    },
    /// Value is not a member of the field's vocabulary.
    EnumError { field: &'static str, value: String },
    /// `field` requires `requires` to be set (to `requires_value`, if given).
    MissingField {
        field: &'static str,
        field_value: Option<String>,
        requires: &'static str,
        requires_value: Option<String>,
    },
    /// `field` conflicts with the current value of `other`.
    IncompatibleFields {
        field: &'static str,
        field_value: Option<String>,
        other: &'static str,
        other_value: Option<String>,
    },
    /// A batch rule failed; `examples` lists offending ids in sorted order.
    AggregateViolation {
        rule: AggregateRule,
        examples: Vec<String>,
    },
}

impl Issue {
    /// Build the issue for a field whose value failed to normalize.
    pub fn from_normalization(field: &'static str, reason: NormalizationError) -> Self {
        match reason {
            NormalizationError::UnsupportedValue { value, .. } => Issue::EnumError { field, value },
            reason => Issue::ParseError { field, reason },
        }
    }

    pub(crate) fn missing(field: &'static str, requires: &'static str) -> Self {
        Issue::MissingField {
            field,
            field_value: None,
            requires,
            requires_value: None,
        }
    }

    pub(crate) fn incompatible(
        field: &'static str,
        other: &'static str,
        other_value: impl Into<String>,
    ) -> Self {
        Issue::IncompatibleFields {
            field,
            field_value: None,
            other,
            other_value: Some(other_value.into()),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Issue::ParseError { .. } => ErrorKind::ParseError,
            Issue::EnumError { .. } => ErrorKind::EnumError,
            Issue::MissingField { .. } => ErrorKind::MissingField,
            Issue::IncompatibleFields { .. } => ErrorKind::IncompatibleFields,
            Issue::AggregateViolation { .. } => ErrorKind::AggregateViolation,
        }
    }

    /// Field names involved, the offending field first.
    pub fn fields(&self) -> Vec<&'static str> {
        match self {
            Issue::ParseError { field, .. } | Issue::EnumError { field, .. } => vec![*field],
            Issue::MissingField {
                field, requires, ..
            } => vec![*field, *requires],
            Issue::IncompatibleFields { field, other, .. } => vec![*field, *other],
            Issue::AggregateViolation { rule, .. } => rule.fields().to_vec(),
        }
    }

    /// Offending ids of an aggregate violation; empty for row issues.
    pub fn examples(&self) -> &[String] {
        match self {
            Issue::AggregateViolation { examples, .. } => examples,
            _ => &[],
        }
    }

    /// Code of the aggregate rule, if this is a batch issue.
    pub fn code(&self) -> Option<&'static str> {
        match self {
            Issue::AggregateViolation { rule, .. } => Some(rule.code()),
            _ => None,
        }
    }

    pub fn message(&self) -> String {
        match self {
            Issue::ParseError { reason, .. } => reason.to_string(),
            Issue::EnumError { field, value } => {
                format!("Unsupported value for {field}: '{value}'.")
            }
            Issue::MissingField {
                field,
                field_value,
                requires,
                requires_value,
            } => format!(
                "Setting {field}{} requires setting {requires}{}.",
                maybe(" to ", field_value.as_deref()),
                maybe(" to ", requires_value.as_deref()),
            ),
            Issue::IncompatibleFields {
                field,
                field_value,
                other,
                other_value,
            } => format!(
                "Setting {field}{} is incompatible with {other}{}.",
                maybe(" to ", field_value.as_deref()),
                maybe(" ", other_value.as_deref()),
            ),
            Issue::AggregateViolation { rule, .. } => rule.message().to_string(),
        }
    }
}

fn maybe(prefix: &str, value: Option<&str>) -> String {
    value
        .filter(|value| !value.is_empty())
        .map(|value| format!("{prefix}{value}"))
        .unwrap_or_default()
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message())
    }
}

#[derive(Serialize)]
struct IssueRecord<'a> {
    kind: ErrorKind,
    fields: Vec<&'static str>,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    code: Option<&'static str>,
    #[serde(skip_serializing_if = "<[String]>::is_empty")]
    examples: &'a [String],
}

impl Serialize for Issue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        IssueRecord {
            kind: self.kind(),
            fields: self.fields(),
            message: self.message(),
            code: self.code(),
            examples: self.examples(),
        }
        .serialize(serializer)
    }
}

/// Every issue found while constructing a record or batch.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{} validation issue(s): {}", .issues.len(), summarize(.issues))]
pub struct ValidationError {
    issues: Vec<Issue>,
}

fn summarize(issues: &[Issue]) -> String {
    issues
        .iter()
        .map(Issue::message)
        .collect::<Vec<_>>()
        .join(" ")
}

impl ValidationError {
    pub(crate) fn new(issues: Vec<Issue>) -> Self {
        Self { issues }
    }

    pub fn issues(&self) -> &[Issue] {
        &self.issues
    }

    pub fn into_issues(self) -> Vec<Issue> {
        self.issues
    }

    pub fn len(&self) -> usize {
        self.issues.len()
    }

    pub fn is_empty(&self) -> bool {
        self.issues.is_empty()
    }
}

impl Serialize for ValidationError {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.issues.serialize(serializer)
    }
}
