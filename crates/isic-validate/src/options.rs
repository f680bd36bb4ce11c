//! Validation options.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// How much of the row-level rule set runs when a record is constructed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ValidationMode {
    /// Every row-level rule runs.
    #[default]
    Strict,
    /// The RCM case rule is skipped, so rows can be collected into a batch
    /// and checked for cross-record consistency even when their RCM fields
    /// are incomplete.
    DeferAggregateChecks,
}

/// Options controlling record and batch validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationOptions {
    pub mode: ValidationMode,

    /// Maximum number of offending ids listed per aggregate violation.
    /// Default: 5.
    pub max_examples: usize,
}

impl Default for ValidationOptions {
    fn default() -> Self {
        Self {
            mode: ValidationMode::Strict,
            max_examples: 5,
        }
    }
}

impl ValidationOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_mode(mut self, mode: ValidationMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_max_examples(mut self, max_examples: usize) -> Self {
        self.max_examples = max_examples;
        self
    }

    /// Parse options from TOML. Missing keys keep their defaults.
    pub fn from_toml_str(source: &str) -> Result<Self, OptionsError> {
        Ok(toml::from_str(source)?)
    }
}

/// Errors raised while loading [`ValidationOptions`].
#[derive(Debug, Error)]
pub enum OptionsError {
    #[error("invalid validation options: {0}")]
    Toml(#[from] toml::de::Error),
}
