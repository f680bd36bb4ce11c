//! Batch validation.
//!
//! Some invariants only make sense across records:
//!
//! - **One lesion, one patient**: a lesion id maps to a single patient id.
//! - **One macroscopic image per RCM case**.
//! - **One lesion per RCM case**: an RCM case id maps to a single lesion id.
//!
//! The checks are independent. Each one that fails contributes its own
//! aggregate issue, listing a bounded, sorted sample of offending ids.

use std::collections::{BTreeMap, BTreeSet};

use isic_model::ImageType;
use tracing::warn;

use crate::issue::{AggregateRule, Issue, ValidationError};
use crate::options::ValidationOptions;
use crate::record::MetadataRow;

/// A collection of validated rows that also satisfies the batch rules.
#[derive(Debug, Clone, PartialEq)]
pub struct MetadataBatch {
    items: Vec<MetadataRow>,
}

impl MetadataBatch {
    pub fn new(items: Vec<MetadataRow>) -> Result<Self, ValidationError> {
        Self::with_options(items, &ValidationOptions::default())
    }

    pub fn with_options(
        items: Vec<MetadataRow>,
        options: &ValidationOptions,
    ) -> Result<Self, ValidationError> {
        let issues = check_batch(&items, options.max_examples);
        if issues.is_empty() {
            Ok(Self { items })
        } else {
            Err(ValidationError::new(issues))
        }
    }

    pub fn items(&self) -> &[MetadataRow] {
        &self.items
    }

    pub fn into_items(self) -> Vec<MetadataRow> {
        self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Run every batch rule over `items`.
pub fn check_batch(items: &[MetadataRow], max_examples: usize) -> Vec<Issue> {
    let checks = [
        (
            AggregateRule::OneLesionMultiplePatients,
            lesions_with_multiple_patients(items),
        ),
        (
            AggregateRule::RcmMultipleMacroscopics,
            rcm_cases_with_multiple_macroscopics(items),
        ),
        (
            AggregateRule::OneRcmCaseMultipleLesions,
            rcm_cases_with_multiple_lesions(items),
        ),
    ];

    checks
        .into_iter()
        .filter(|(_, offenders)| !offenders.is_empty())
        .map(|(rule, offenders)| {
            warn!(
                rule = rule.code(),
                offender_count = offenders.len(),
                "batch rule failed"
            );
            Issue::AggregateViolation {
                rule,
                examples: offenders.into_iter().take(max_examples).collect(),
            }
        })
        .collect()
}

/// Keys mapped to more than one distinct value, in sorted order.
fn keys_with_multiple_values<'a>(
    pairs: impl Iterator<Item = (&'a str, &'a str)>,
) -> Vec<String> {
    let mut grouped: BTreeMap<&str, BTreeSet<&str>> = BTreeMap::new();
    for (key, value) in pairs {
        grouped.entry(key).or_default().insert(value);
    }
    grouped
        .into_iter()
        .filter(|(_, values)| values.len() > 1)
        .map(|(key, _)| key.to_string())
        .collect()
}

fn lesions_with_multiple_patients(items: &[MetadataRow]) -> Vec<String> {
    keys_with_multiple_values(
        items
            .iter()
            .filter_map(|item| Some((item.lesion_id.as_deref()?, item.patient_id.as_deref()?))),
    )
}

fn rcm_cases_with_multiple_lesions(items: &[MetadataRow]) -> Vec<String> {
    keys_with_multiple_values(
        items
            .iter()
            .filter_map(|item| Some((item.rcm_case_id.as_deref()?, item.lesion_id.as_deref()?))),
    )
}

fn rcm_cases_with_multiple_macroscopics(items: &[MetadataRow]) -> Vec<String> {
    let mut macroscopic_counts: BTreeMap<&str, usize> = BTreeMap::new();
    for item in items {
        if item.image_type == Some(ImageType::RcmMacroscopic)
            && let Some(case_id) = item.rcm_case_id.as_deref()
        {
            *macroscopic_counts.entry(case_id).or_default() += 1;
        }
    }
    macroscopic_counts
        .into_iter()
        .filter(|(_, count)| *count > 1)
        .map(|(case_id, _)| case_id.to_string())
        .collect()
}
