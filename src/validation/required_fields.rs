//! Required-field presence checking
//!
//! Walks a resource's nested attribute tree by successive key lookup. A
//! path is missing when a key is absent at any step, an intermediate
//! value is not a mapping, or the terminal value is absent or empty.

use serde_json::Value;
use thiserror::Error;

use crate::resource::Resource;

/// One or more required field paths were not found in a resource.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("required field(s) not found: {}", .missing.join(", "))]
pub struct MissingFieldsError {
    missing: Vec<String>,
}

impl MissingFieldsError {
    pub(crate) fn new(missing: Vec<String>) -> Self {
        Self { missing }
    }

    /// The missing paths, in declaration order, dotted (`spec.filter`).
    pub fn missing(&self) -> &[String] {
        &self.missing
    }
}

/// Check that every path in `paths` is present and non-empty in `resource`.
pub fn check_required_fields(
    resource: &Resource,
    paths: &[&[&str]],
) -> Result<(), MissingFieldsError> {
    let missing: Vec<String> = paths
        .iter()
        .filter(|path| !has_field(resource, path))
        .map(|path| path.join("."))
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(MissingFieldsError::new(missing))
    }
}

fn has_field(resource: &Resource, path: &[&str]) -> bool {
    let Some((first, rest)) = path.split_first() else {
        return true;
    };
    let Some(mut value) = resource.get(first) else {
        return false;
    };
    for key in rest {
        // Value::get returns None for non-mapping intermediates as well.
        match value.get(key) {
            Some(nested) => value = nested,
            None => return false,
        }
    }
    !is_empty(value)
}

fn is_empty(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(map) => map.is_empty(),
        Value::Bool(_) | Value::Number(_) => false,
    }
}
