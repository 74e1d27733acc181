//! Error types for quickfind
//!
//! Indexing and search never surface these to the end user: the index turns
//! them into log diagnostics. They exist so validation and mapping code can
//! use `?` and so callers that want the detail (`try_upsert`, config loading)
//! get a typed reason.
//! We use `thiserror` for automatic `Display` and `Error` trait implementations.

use std::io;
use thiserror::Error;

/// Result type alias for quickfind operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for quickfind
#[derive(Debug, Error)]
pub enum Error {
    /// Entry has a blank identifier
    #[error("Entry id is missing or blank")]
    MissingId,

    /// Entry type name is not one of the known variants
    #[error("Unknown entry type: {0:?}")]
    UnknownEntryType(String),

    /// A required field of a domain record is missing or blank
    #[error("{record}: missing required field '{field}'")]
    MissingField {
        /// Record description (family and id)
        record: String,
        /// Field name
        field: &'static str,
    },

    /// A field of a domain record holds an unusable value
    #[error("{record}: invalid field '{field}': {reason}")]
    InvalidField {
        /// Record description (family and id)
        record: String,
        /// Field name
        field: &'static str,
        /// Why the value was rejected
        reason: String,
    },

    /// Configuration value out of range
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Configuration file could not be parsed or serialized
    #[error("Configuration format error: {0}")]
    ConfigParse(String),

    /// I/O error while reading or writing configuration
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl Error {
    /// Build a `MissingField` error
    pub fn missing_field(record: impl Into<String>, field: &'static str) -> Self {
        Error::MissingField {
            record: record.into(),
            field,
        }
    }

    /// Build an `InvalidField` error
    pub fn invalid_field(
        record: impl Into<String>,
        field: &'static str,
        reason: impl Into<String>,
    ) -> Self {
        Error::InvalidField {
            record: record.into(),
            field,
            reason: reason.into(),
        }
    }
}

impl From<toml::de::Error> for Error {
    fn from(e: toml::de::Error) -> Self {
        Error::ConfigParse(e.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(e: toml::ser::Error) -> Self {
        Error::ConfigParse(e.to_string())
    }
}
