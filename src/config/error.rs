//! Error types for configuration loading

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

use super::format::ConfigFormat;

/// Result type for configuration operations
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Errors that can occur while loading or writing a pipeline configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// File extension does not map to a known format
    #[error("Unsupported configuration format: {0}")]
    UnsupportedFormat(String),

    /// Malformed syntax, a missing required key or a mistyped value
    #[error("Failed to parse {format} configuration: {message}")]
    Parse {
        format: ConfigFormat,
        message: String,
    },

    /// A `${NAME}` placeholder refers to an unset environment variable
    #[error("Environment variable {name} is not set")]
    MissingEnvVar { name: String },

    /// An explicitly requested .env file could not be loaded
    #[error("Failed to load .env file: {0}")]
    Dotenv(String),

    /// A regex pattern does not compile
    #[error("Invalid regex pattern '{name}': {source}")]
    InvalidRegex {
        name: String,
        #[source]
        source: regex::Error,
    },

    /// One or more semantic checks failed
    #[error("Invalid configuration: {}", join_issues(.0))]
    Validation(Vec<ValidationIssue>),

    /// Writing the configuration back out failed
    #[error("Failed to serialize configuration as {format}: {message}")]
    Serialize {
        format: ConfigFormat,
        message: String,
    },
}

impl ConfigError {
    pub(crate) fn parse(format: ConfigFormat, err: impl fmt::Display) -> Self {
        ConfigError::Parse {
            format,
            message: err.to_string(),
        }
    }

    pub(crate) fn serialize(format: ConfigFormat, err: impl fmt::Display) -> Self {
        ConfigError::Serialize {
            format,
            message: err.to_string(),
        }
    }
}

impl From<dotenvy::Error> for ConfigError {
    fn from(err: dotenvy::Error) -> Self {
        ConfigError::Dotenv(err.to_string())
    }
}

/// A single failed semantic check, keyed by the dotted field path
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationIssue {
    /// Dotted path of the offending field, e.g. `llm.temperature`
    pub field: String,
    /// What is wrong with it
    pub reason: String,
}

impl ValidationIssue {
    pub fn new(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.reason)
    }
}

fn join_issues(issues: &[ValidationIssue]) -> String {
    issues
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
