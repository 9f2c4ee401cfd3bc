//! Error types for resource validation
//!
//! Every rejected input maps to exactly one variant, so callers can
//! branch on the failure kind instead of parsing message text.

use thiserror::Error;

use crate::resource::ResourceKind;
use crate::validation::required_fields::MissingFieldsError;

/// Result type alias for the validation layer
pub type Result<T> = std::result::Result<T, ValidationError>;

/// One rejected input, carrying enough context to surface to an operator.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A resource is missing one or more required fields
    #[error("error validating {kind} {name}: {source}")]
    MissingRequiredFields {
        /// Kind of the rejected resource
        kind: ResourceKind,
        /// Name of the rejected resource
        name: String,
        /// The underlying presence-check failure
        #[source]
        source: MissingFieldsError,
    },

    /// A log destination does not follow the expected grammar
    #[error(
        "destination {value:?} must follow format: <ip-address | localhost | dns name>:<port> or stderr"
    )]
    DestinationFormat {
        /// The offending destination string
        value: String,
    },

    /// A log destination port is outside the valid range
    #[error("error parsing port: {port} is not a valid port number")]
    PortRange {
        /// The out-of-range port
        port: u32,
    },

    /// A name exceeds the maximum allowed length
    #[error("name max length is {max}")]
    NameLength {
        /// The maximum number of bytes a name may have
        max: usize,
    },

    /// A monitor value is not a syntactically valid URL
    #[error("monitor {value:?} must be a valid URL")]
    MonitorUrl {
        /// The offending monitor string
        value: String,
        /// The underlying parse failure
        #[source]
        source: url::ParseError,
    },
}
