//! Fields outside the schema.

use std::collections::BTreeSet;

use isic_model::fields::is_known_field;
use serde_json::{Map, Value};
use tracing::debug;

/// Input key whose object value is merged into the unstructured fields.
pub const UNSTRUCTURED: &str = "unstructured";

/// Column names that identify an image rather than describe it.
pub const RESERVED_COLUMNS: [&str; 2] = ["filename", "isic_id"];

/// Split a raw record into schema fields and unstructured fields.
///
/// Unknown keys are kept verbatim. An `unstructured` key holding an object
/// is flattened into the unstructured fields, so a canonical dump splits
/// back into the same two halves.
pub fn partition(raw: &Map<String, Value>) -> (Map<String, Value>, Map<String, Value>) {
    let mut known = Map::new();
    let mut unstructured = Map::new();

    for (name, value) in raw {
        if name == UNSTRUCTURED
            && let Value::Object(nested) = value
        {
            unstructured.extend(nested.iter().map(|(key, value)| (key.clone(), value.clone())));
        } else if is_known_field(name) {
            known.insert(name.clone(), value.clone());
        } else {
            debug!(field = %name, "diverting unknown field to unstructured");
            unstructured.insert(name.clone(), value.clone());
        }
    }

    (known, unstructured)
}

/// Column names that would land in `unstructured`, sorted and de-duplicated.
///
/// Reserved columns and the `unstructured` column itself are never reported.
pub fn get_unstructured_columns<I, S>(column_names: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    column_names
        .into_iter()
        .filter(|name| {
            let name: &str = name.as_ref();
            name != UNSTRUCTURED && !is_known_field(name) && !RESERVED_COLUMNS.contains(&name)
        })
        .map(|name| name.as_ref().to_string())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}
