//! Validation for ISIC dermatology image metadata.
//!
//! Raw records are JSON objects whose values come straight from a
//! spreadsheet or API payload. [`MetadataRow::validate`] turns one into a
//! canonical row or reports every problem with it; [`MetadataBatch`] adds
//! the rules that span records; [`validate_dataset`] runs both over a whole
//! upload.
//!
//! # Example
//!
//! ```
//! use isic_validate::MetadataRow;
//! use serde_json::json;
//!
//! let raw = json!({"diagnosis": "Melanoma Invasive", "mel_thick_mm": "0.5 mm"});
//! let row = MetadataRow::validate(raw.as_object().unwrap()).unwrap();
//! assert_eq!(row.diagnosis_3(), Some("Melanoma Invasive"));
//! assert_eq!(row.mel_thick_mm(), Some(0.5));
//! ```

mod batch;
mod dataset;
mod issue;
mod normalizers;
mod options;
mod record;
mod rules;
mod unstructured;

pub use batch::{MetadataBatch, check_batch};
pub use dataset::{DatasetReport, validate_dataset};
pub use issue::{AggregateRule, ErrorKind, Issue, ValidationError};
pub use options::{OptionsError, ValidationMode, ValidationOptions};
pub use record::MetadataRow;
pub use unstructured::{RESERVED_COLUMNS, UNSTRUCTURED, get_unstructured_columns, partition};
