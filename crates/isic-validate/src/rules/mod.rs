//! Cross-field consistency rules.
//!
//! Rules read normalized values only. Each rule declares the fields it
//! reads; a rule is skipped when any of them failed to normalize, so a bad
//! value is reported once rather than again by every rule that touches it.

mod acquisition;
mod anatomy;
mod confirmation;
mod diagnosis;

use std::collections::BTreeSet;

use tracing::{debug, trace};

use crate::issue::Issue;
use crate::options::ValidationMode;
use crate::record::MetadataRow;

/// A single cross-field rule.
pub(crate) struct RowRule {
    pub name: &'static str,
    /// Fields the rule reads.
    pub reads: &'static [&'static str],
    /// Skipped under [`ValidationMode::DeferAggregateChecks`].
    pub deferrable: bool,
    pub check: fn(&MetadataRow) -> Option<Issue>,
}

/// Row rules in evaluation order.
static ROW_RULES: &[RowRule] = &[
    diagnosis::MEL_CLASS,
    diagnosis::MEL_MITOTIC_INDEX,
    diagnosis::MEL_THICK_MM,
    diagnosis::MEL_TYPE,
    diagnosis::MEL_ULCER,
    diagnosis::NEVUS_TYPE,
    diagnosis::BENIGN_MALIGNANT,
    acquisition::DERMOSCOPIC_TYPE,
    acquisition::TBP_TILE_TYPE,
    acquisition::RCM_CASE_ID,
    anatomy::ANATOM_SITE_SPECIAL,
    confirmation::CONCOMITANT_BIOPSY,
];

pub(crate) struct RuleContext<'a> {
    mode: ValidationMode,
    failed: &'a BTreeSet<&'static str>,
}

impl<'a> RuleContext<'a> {
    pub fn new(mode: ValidationMode, failed: &'a BTreeSet<&'static str>) -> Self {
        Self { mode, failed }
    }

    fn any_failed(&self, fields: &[&'static str]) -> bool {
        fields.iter().any(|field| self.failed.contains(field))
    }
}

/// Run every applicable row rule, collecting one issue per violation.
pub(crate) fn run_all(row: &MetadataRow, context: &RuleContext<'_>) -> Vec<Issue> {
    let mut issues = Vec::new();
    for rule in ROW_RULES {
        if rule.deferrable && context.mode == ValidationMode::DeferAggregateChecks {
            debug!(rule = rule.name, "deferring rule until batch validation");
            continue;
        }
        if context.any_failed(rule.reads) {
            trace!(rule = rule.name, "skipping rule that reads a failed field");
            continue;
        }
        issues.extend((rule.check)(row));
    }
    issues
}
