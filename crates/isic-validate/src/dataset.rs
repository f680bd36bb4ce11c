//! Whole-dataset validation.

use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::{Map, Value};
use tracing::debug;

use crate::batch::check_batch;
use crate::issue::Issue;
use crate::options::{ValidationMode, ValidationOptions};
use crate::record::MetadataRow;

/// Outcome of validating a dataset of raw rows.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DatasetReport {
    /// Issues per row, keyed by zero-based row index. Valid rows are absent.
    pub row_issues: BTreeMap<usize, Vec<Issue>>,
    /// Aggregate issues across the rows that could be validated.
    pub batch_issues: Vec<Issue>,
}

impl DatasetReport {
    pub fn is_valid(&self) -> bool {
        self.row_issues.is_empty() && self.batch_issues.is_empty()
    }

    pub fn issue_count(&self) -> usize {
        self.row_issues.values().map(Vec::len).sum::<usize>() + self.batch_issues.len()
    }

    pub fn invalid_row_count(&self) -> usize {
        self.row_issues.len()
    }
}

/// Validate every row, then run the batch rules over the rows that parse.
///
/// Rows are first validated in `options.mode` to collect their own issues.
/// Batch rules then run over every row that validates with the RCM case
/// rule deferred, so cross-record problems still surface for rows whose
/// RCM fields are incomplete.
pub fn validate_dataset(rows: &[Map<String, Value>], options: &ValidationOptions) -> DatasetReport {
    let mut report = DatasetReport::default();
    let mut batch_rows = Vec::with_capacity(rows.len());

    for (index, raw) in rows.iter().enumerate() {
        match MetadataRow::validate_with_mode(raw, options.mode) {
            Ok(row) => batch_rows.push(row),
            Err(err) => {
                report.row_issues.insert(index, err.into_issues());
                if options.mode == ValidationMode::Strict
                    && let Ok(row) =
                        MetadataRow::validate_with_mode(raw, ValidationMode::DeferAggregateChecks)
                {
                    batch_rows.push(row);
                }
            }
        }
    }

    report.batch_issues = check_batch(&batch_rows, options.max_examples);
    debug!(
        rows = rows.len(),
        invalid_rows = report.invalid_row_count(),
        batch_issues = report.batch_issues.len(),
        "dataset validated"
    );
    report
}
