//! # Dosguard Validation
//!
//! Admission validation for DoS-protection configuration resources.
//! User-authored policy and log-destination definitions are checked
//! before they enter the configuration-generation pipeline, so that
//! downstream generation never sees an invalid shape.
//!
//! ## Features
//!
//! - **Shape checking**: policy and log-configuration resources are
//!   validated against fixed required-field sets
//! - **Annotation grammars**: name length, `host:port`/`stderr` log
//!   destinations, and monitor URLs
//! - **Structured errors**: every rejection carries a discriminated
//!   kind plus the offending resource name or value, with the
//!   underlying cause preserved
//! - **Stateless**: pure functions, safe to call concurrently
//!
//! ## Quick Start
//!
//! ```rust
//! use dosguard_validation::{Resource, validate_dos_log_dest, validate_dos_policy};
//! use serde_json::json;
//!
//! let policy = Resource::new(json!({
//!     "metadata": { "name": "dos-protected" },
//!     "spec": { "name": "dos-protected" }
//! }));
//! assert!(validate_dos_policy(&policy).is_ok());
//!
//! assert!(validate_dos_log_dest("127.0.0.1:514").is_ok());
//! assert!(validate_dos_log_dest("example.com:70000").is_err());
//! ```

#![warn(clippy::all)]

pub mod error;
pub mod resource;
pub mod validation;

// Re-export main types
pub use error::{Result, ValidationError};
pub use resource::{Resource, ResourceKind};
pub use validation::{
    MAX_NAME_LENGTH, MissingFieldsError, check_required_fields, validate_dos_log_conf,
    validate_dos_log_dest, validate_dos_monitor, validate_dos_name, validate_dos_policy,
};
