//! Unstructured configuration resources
//!
//! Resources arrive from the platform API client as arbitrarily nested
//! attribute trees. This module wraps them for read-only access; the
//! validation layer never mutates, defaults, or normalizes a resource.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A single configuration resource as delivered by the platform API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Resource {
    object: Value,
}

impl Resource {
    /// Wrap a raw attribute tree.
    pub fn new(object: Value) -> Self {
        Self { object }
    }

    /// The resource's identifying name (`metadata.name`), or the empty
    /// string when it is not set.
    pub fn name(&self) -> &str {
        self.object
            .pointer("/metadata/name")
            .and_then(Value::as_str)
            .unwrap_or_default()
    }

    /// Look up a top-level attribute.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.object.get(key)
    }
}

/// The kinds of resource this crate validates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceKind {
    /// A DoS-protection policy definition
    Policy,
    /// A log-destination definition
    LogConf,
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Policy => write!(f, "Policy"),
            Self::LogConf => write!(f, "Log Configuration"),
        }
    }
}
