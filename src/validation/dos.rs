//! Validators for DoS-protection resources
//!
//! Policy and log-configuration resources are shape-checked against
//! fixed required-field sets; name, log-destination, and monitor values
//! come from annotations and are checked as plain strings. Every
//! validator is a pure function: same input, same verdict, no state.

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;
use url::Url;

use super::required_fields::check_required_fields;
use crate::error::{Result, ValidationError};
use crate::resource::{Resource, ResourceKind};

/// Maximum length, in bytes, of a DoS resource name.
pub const MAX_NAME_LENGTH: usize = 63;

/// Fields a policy resource must carry.
pub const POLICY_REQUIRED_FIELDS: &[&[&str]] = &[&["spec"]];

/// Fields a log-configuration resource must carry.
pub const LOG_CONF_REQUIRED_FIELDS: &[&[&str]] = &[&["spec", "content"], &["spec", "filter"]];

// The digit bound admits 65536..=99999; the range stage below is what
// rejects those.
static LOG_DEST_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\S+:\d{1,5})|stderr").expect("Invalid log destination regex"));

static MONITOR_BASE: Lazy<Url> =
    Lazy::new(|| Url::parse("http://monitor.invalid/").expect("Invalid monitor base URL"));

/// Validate a DoS policy resource.
pub fn validate_dos_policy(policy: &Resource) -> Result<()> {
    debug!("Validating dos policy: {}", policy.name());

    check_required_fields(policy, POLICY_REQUIRED_FIELDS).map_err(|source| {
        ValidationError::MissingRequiredFields {
            kind: ResourceKind::Policy,
            name: policy.name().to_owned(),
            source,
        }
    })
}

/// Validate a DoS log-configuration resource.
pub fn validate_dos_log_conf(log_conf: &Resource) -> Result<()> {
    debug!("Validating dos log configuration: {}", log_conf.name());

    check_required_fields(log_conf, LOG_CONF_REQUIRED_FIELDS).map_err(|source| {
        ValidationError::MissingRequiredFields {
            kind: ResourceKind::LogConf,
            name: log_conf.name().to_owned(),
            source,
        }
    })
}

/// Validate the name of a DoS resource.
pub fn validate_dos_name(name: &str) -> Result<()> {
    if name.len() > MAX_NAME_LENGTH {
        return Err(ValidationError::NameLength {
            max: MAX_NAME_LENGTH,
        });
    }

    Ok(())
}

/// Validate a log destination annotation, either `stderr` or `host:port`.
pub fn validate_dos_log_dest(dest: &str) -> Result<()> {
    if !LOG_DEST_PATTERN.is_match(dest) {
        return Err(ValidationError::DestinationFormat {
            value: dest.to_owned(),
        });
    }
    if dest == "stderr" {
        return Ok(());
    }

    // The format match is a substring match, so the tail after the last
    // colon can still be something other than a bare port number.
    let port = dest
        .rsplit_once(':')
        .and_then(|(_, tail)| tail.parse::<u32>().ok())
        .ok_or_else(|| ValidationError::DestinationFormat {
            value: dest.to_owned(),
        })?;
    if !(1..=65535).contains(&port) {
        return Err(ValidationError::PortRange { port });
    }

    Ok(())
}

/// Validate a monitor annotation as a syntactically well-formed URL.
///
/// The check is deliberately syntax-only: scheme and reachability are
/// not inspected, and bare host/path references are accepted.
pub fn validate_dos_monitor(monitor: &str) -> Result<()> {
    Url::parse(monitor)
        .or_else(|err| match err {
            // Bare references are fine; resolve them against a fixed
            // base instead of rejecting them.
            url::ParseError::RelativeUrlWithoutBase => MONITOR_BASE.join(monitor),
            _ => Err(err),
        })
        .map(|_| ())
        .map_err(|source| ValidationError::MonitorUrl {
            value: monitor.to_owned(),
            source,
        })
}
