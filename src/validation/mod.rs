//! Resource validation
//!
//! This module is the validation boundary for DoS-protection
//! configuration resources: it accepts or rejects input before the
//! configuration-generation pipeline ever sees it.
//!
//! The validation is organized into several submodules:
//! - `required_fields`: presence checking over nested attribute trees
//! - `dos`: validators for policy and log-configuration resources and
//!   their annotation strings
//! - `tests`: test suite for all validators

pub mod dos;
pub mod required_fields;

pub use dos::{
    MAX_NAME_LENGTH, validate_dos_log_conf, validate_dos_log_dest, validate_dos_monitor,
    validate_dos_name, validate_dos_policy,
};
pub use required_fields::{MissingFieldsError, check_required_fields};
