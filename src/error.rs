//! Error types for phpstan-config.
//!
//! This module defines the single error type of the crate. Only a handful of
//! operations can fail: constructing a [`Collection`](crate::Collection) with
//! an unusable delimiter, constructing an `ignoreErrors` entry without any
//! identifying field, and rendering a finished document to text.

use std::fmt;

/// Stable code of the [`ConfigError::InvalidEntry`] variant.
pub const INVALID_ENTRY_CODE: u32 = 1_745_858_010;

/// The main error type for phpstan-config operations.
#[derive(Debug)]
pub enum ConfigError {
    /// A collection was constructed with an empty or multi-character delimiter.
    InvalidDelimiter {
        /// The rejected delimiter.
        delimiter: String,
    },

    /// A configuration entry is missing all of its identifying fields.
    InvalidEntry {
        /// The kind of entry, e.g. `ignoreErrors`.
        entry: String,
        /// Description of what is missing.
        message: String,
    },

    /// A document could not be rendered into the requested format.
    SerializationError {
        /// The target format (`json`, `yaml`, `toml`).
        format: &'static str,
        /// Description of the failure.
        message: String,
        /// The underlying error.
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl ConfigError {
    /// Creates a new `InvalidDelimiter` error.
    pub fn invalid_delimiter(delimiter: impl Into<String>) -> Self {
        Self::InvalidDelimiter {
            delimiter: delimiter.into(),
        }
    }

    /// Creates the `InvalidEntry` error raised for an `ignoreErrors` entry
    /// that has neither a message nor an identifier.
    pub fn invalid_ignore_error_entry() -> Self {
        Self::InvalidEntry {
            entry: "ignoreErrors".to_string(),
            message: "Either message or identifier must be given for an ignoreError entry to be valid."
                .to_string(),
        }
    }

    /// Creates a new `SerializationError` without an underlying source.
    pub fn serialization_error(format: &'static str, message: impl Into<String>) -> Self {
        Self::SerializationError {
            format,
            message: message.into(),
            source: None,
        }
    }

    /// Returns the name of the error variant.
    pub fn name(&self) -> &'static str {
        match self {
            Self::InvalidDelimiter { .. } => "InvalidDelimiter",
            Self::InvalidEntry { .. } => "InvalidEntry",
            Self::SerializationError { .. } => "SerializationError",
        }
    }

    /// Returns the stable numeric code of the error, if it has one.
    pub fn code(&self) -> Option<u32> {
        match self {
            Self::InvalidEntry { .. } => Some(INVALID_ENTRY_CODE),
            _ => None,
        }
    }

    /// Returns suggested recovery actions for the error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidDelimiter { .. } => vec![
                "Use exactly one ASCII character as path delimiter".to_string(),
                "Omit the delimiter to use the default `/`".to_string(),
            ],
            Self::InvalidEntry { entry, .. } => vec![
                format!("Provide a message pattern for the '{}' entry", entry),
                format!("Provide an error identifier for the '{}' entry", entry),
            ],
            Self::SerializationError { format, .. } => {
                let mut s = vec![format!("Check that all parameter values can be represented as {}", format)];
                if *format == "toml" {
                    s.push("TOML cannot represent null values, render as YAML or JSON instead".to_string());
                }
                s
            }
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDelimiter { delimiter } => {
                write!(
                    f,
                    "Invalid path delimiter '{}': expected exactly one ASCII character",
                    delimiter
                )
            }
            Self::InvalidEntry { message, .. } => write!(f, "{}", message),
            Self::SerializationError {
                format, message, ..
            } => write!(f, "Failed to render {}: {}", format, message),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::SerializationError { source, .. } => source.as_ref().map(|s| s.as_ref() as _),
            Self::InvalidDelimiter { .. } | Self::InvalidEntry { .. } => None,
        }
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        Self::SerializationError {
            format: "json",
            message: err.to_string(),
            source: Some(Box::new(err)),
        }
    }
}

impl From<serde_yaml::Error> for ConfigError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::SerializationError {
            format: "yaml",
            message: err.to_string(),
            source: Some(Box::new(err)),
        }
    }
}

impl From<toml::ser::Error> for ConfigError {
    fn from(err: toml::ser::Error) -> Self {
        Self::SerializationError {
            format: "toml",
            message: err.to_string(),
            source: Some(Box::new(err)),
        }
    }
}

/// A type alias for `Result<T, ConfigError>`.
pub type Result<T> = std::result::Result<T, ConfigError>;
