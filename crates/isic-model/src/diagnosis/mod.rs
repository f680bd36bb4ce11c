//! Hierarchical diagnosis taxonomy.
//!
//! Every diagnosis is a colon-joined path of one to five levels, from a root
//! category (`Benign`, `Indeterminate`, `Malignant`) down to the most specific
//! term. A diagnosis can be written three ways:
//!
//! - the full path: `Benign:Benign melanocytic proliferations:Nevus`
//! - the terminal (last) segment alone: `Nevus`
//! - five discrete level fields, `diagnosis_1` .. `diagnosis_5`
//!
//! Terminal segments are unique across the hierarchy, which is what makes the
//! terminal shorthand unambiguous. The lookup tables below are built once, on
//! first use, and never change afterwards.

mod terms;

use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use serde::{Serialize, Serializer};

use crate::error::ModelError;
use terms::DIAGNOSIS_PATHS;

/// Separator between levels of a diagnosis path.
pub const SEPARATOR: char = ':';

/// Maximum depth of the hierarchy.
pub const MAX_LEVELS: usize = 5;

/// Record fields carrying the decomposed levels, in order.
pub const LEVEL_FIELDS: [&str; MAX_LEVELS] = [
    "diagnosis_1",
    "diagnosis_2",
    "diagnosis_3",
    "diagnosis_4",
    "diagnosis_5",
];

const MELANOMA_BRANCH: &str = "Malignant:Malignant melanocytic proliferations (Melanoma)";
const MALIGNANT_COLLISION: &str = "Malignant:Collision - At least one malignant proliferation";
const NEVUS_BRANCH: &str = "Benign:Benign melanocytic proliferations:Nevus";

/// Levels of a path, right-padded with `None`.
pub type Levels<'a> = [Option<&'a str>; MAX_LEVELS];

/// Split a path into its levels.
///
/// Works on any string, member of the hierarchy or not. Segments past the
/// fifth are dropped.
pub fn levels(value: &str) -> Levels<'_> {
    let mut levels = [None; MAX_LEVELS];
    if value.is_empty() {
        return levels;
    }
    for (slot, segment) in levels.iter_mut().zip(value.split(SEPARATOR)) {
        *slot = Some(segment);
    }
    levels
}

/// Project a path onto the `diagnosis_1` .. `diagnosis_5` record shape.
pub fn as_dict(value: &str) -> BTreeMap<&'static str, Option<&str>> {
    LEVEL_FIELDS.into_iter().zip(levels(value)).collect()
}

/// Expand a bare terminal value to its full path.
///
/// Input containing a separator, or matching no terminal, is returned
/// unchanged so that the later membership check reports the real problem.
pub fn accept_terminal_values(value: &str) -> &str {
    if value.contains(SEPARATOR) {
        return value;
    }
    match Diagnosis::from_terminal(value) {
        Some(diagnosis) => diagnosis.as_str(),
        None => value,
    }
}

/// True when `value` is a full path classified as melanoma.
pub fn is_melanoma(value: &str) -> bool {
    Diagnosis::from_path(value).is_some_and(|diagnosis| diagnosis.is_melanoma())
}

/// A member of the diagnosis hierarchy.
///
/// Only obtainable through lookup, so every value is a valid full path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Diagnosis(&'static str);

impl Diagnosis {
    /// Exact lookup by full path.
    pub fn from_path(path: &str) -> Option<Self> {
        HIERARCHY.by_path.get(path).copied()
    }

    /// Lookup by terminal segment.
    pub fn from_terminal(terminal: &str) -> Option<Self> {
        HIERARCHY.by_terminal.get(terminal).copied()
    }

    /// Lookup accepting either a full path or a terminal value.
    pub fn resolve(value: &str) -> Option<Self> {
        Self::from_path(accept_terminal_values(value))
    }

    /// Every diagnosis, shallowest first.
    pub fn all() -> &'static [Diagnosis] {
        &HIERARCHY.all
    }

    /// Every diagnosis, deepest first. Ties keep hierarchy order.
    pub fn deepest_first() -> &'static [Diagnosis] {
        &HIERARCHY.deepest_first
    }

    /// Diagnoses that gate the melanoma-only fields.
    pub fn melanoma_diagnoses() -> &'static [Diagnosis] {
        &HIERARCHY.melanoma
    }

    pub fn as_str(&self) -> &'static str {
        self.0
    }

    pub fn levels(&self) -> Levels<'static> {
        levels(self.0)
    }

    /// Level values paired with their record field names.
    pub fn level_fields(&self) -> [(&'static str, Option<&'static str>); MAX_LEVELS] {
        let levels = self.levels();
        std::array::from_fn(|idx| (LEVEL_FIELDS[idx], levels[idx]))
    }

    pub fn depth(&self) -> usize {
        self.0.split(SEPARATOR).count()
    }

    /// Most specific segment.
    pub fn terminal(&self) -> &'static str {
        terminal_segment(self.0)
    }

    pub fn parent(&self) -> Option<Self> {
        let (parent, _) = self.0.rsplit_once(SEPARATOR)?;
        Self::from_path(parent)
    }

    /// True for `self` or any descendant of `ancestor`.
    pub fn is_within(&self, ancestor: Diagnosis) -> bool {
        path_is_within(self.0, ancestor.0)
    }

    /// Melanocytic proliferation branch of malignant diagnoses, plus malignant collisions.
    pub fn is_melanoma(&self) -> bool {
        path_is_within(self.0, MELANOMA_BRANCH) || self.0 == MALIGNANT_COLLISION
    }

    /// The nevus subtree of benign melanocytic proliferations.
    pub fn is_nevus(&self) -> bool {
        path_is_within(self.0, NEVUS_BRANCH)
    }
}

impl fmt::Display for Diagnosis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

impl FromStr for Diagnosis {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::resolve(s).ok_or_else(|| ModelError::UnknownDiagnosis(s.to_string()))
    }
}

impl Serialize for Diagnosis {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.0)
    }
}

fn terminal_segment(path: &str) -> &str {
    path.rsplit(SEPARATOR).next().unwrap_or(path)
}

fn path_is_within(path: &str, ancestor: &str) -> bool {
    path.strip_prefix(ancestor)
        .is_some_and(|rest| rest.is_empty() || rest.starts_with(SEPARATOR))
}

struct Hierarchy {
    all: Vec<Diagnosis>,
    deepest_first: Vec<Diagnosis>,
    melanoma: Vec<Diagnosis>,
    by_path: HashMap<&'static str, Diagnosis>,
    by_terminal: HashMap<&'static str, Diagnosis>,
}

static HIERARCHY: LazyLock<Hierarchy> = LazyLock::new(Hierarchy::build);

impl Hierarchy {
    fn build() -> Self {
        let all: Vec<Diagnosis> = DIAGNOSIS_PATHS.iter().copied().map(Diagnosis).collect();

        let mut deepest_first = all.clone();
        deepest_first.sort_by_key(|diagnosis| std::cmp::Reverse(diagnosis.depth()));

        // The deepest match wins should two paths ever share a terminal.
        let mut by_terminal = HashMap::with_capacity(all.len());
        for diagnosis in &deepest_first {
            by_terminal.entry(diagnosis.terminal()).or_insert(*diagnosis);
        }

        let melanoma = all
            .iter()
            .copied()
            .filter(|diagnosis| path_is_within(diagnosis.0, MELANOMA_BRANCH))
            .chain(all.iter().copied().filter(|d| d.0 == MALIGNANT_COLLISION))
            .collect();

        let by_path = all.iter().map(|diagnosis| (diagnosis.0, *diagnosis)).collect();

        Self {
            all,
            deepest_first,
            melanoma,
            by_path,
            by_terminal,
        }
    }
}
