//! Serialized forms of the configuration document

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use serde::Serialize;
use serde_json::Value;

use super::error::{ConfigError, Result};

/// Text formats a configuration document can be written in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConfigFormat {
    Yaml,
    Json,
    Toml,
}

impl ConfigFormat {
    /// Pick the format from a file extension (`yml`, `yaml`, `json`, `toml`)
    pub fn from_extension(ext: &str) -> Result<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "yml" | "yaml" => Ok(ConfigFormat::Yaml),
            "json" => Ok(ConfigFormat::Json),
            "toml" => Ok(ConfigFormat::Toml),
            other => Err(ConfigError::UnsupportedFormat(other.to_string())),
        }
    }

    /// Pick the format from a path's extension
    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .and_then(|ext| ext.to_str())
            .ok_or_else(|| ConfigError::UnsupportedFormat(path.display().to_string()))?;
        Self::from_extension(ext)
    }

    /// Get the canonical name of the format
    pub fn as_str(&self) -> &'static str {
        match self {
            ConfigFormat::Yaml => "yaml",
            ConfigFormat::Json => "json",
            ConfigFormat::Toml => "toml",
        }
    }

    /// Parse a document into an untyped value tree
    ///
    /// Every format lands in the same `serde_json::Value` representation so
    /// environment substitution and typed decoding work the same way for all
    /// of them.
    pub fn parse_value(&self, text: &str) -> Result<Value> {
        match self {
            ConfigFormat::Yaml => {
                serde_yaml_bw::from_str(text).map_err(|e| ConfigError::parse(*self, e))
            }
            ConfigFormat::Json => serde_json::from_str(text).map_err(|e| ConfigError::parse(*self, e)),
            ConfigFormat::Toml => toml::from_str(text).map_err(|e| ConfigError::parse(*self, e)),
        }
    }

    /// Serialize a value in this format
    pub fn render<T: Serialize>(&self, value: &T) -> Result<String> {
        match self {
            ConfigFormat::Yaml => {
                serde_yaml_bw::to_string(value).map_err(|e| ConfigError::serialize(*self, e))
            }
            ConfigFormat::Json => {
                serde_json::to_string_pretty(value).map_err(|e| ConfigError::serialize(*self, e))
            }
            ConfigFormat::Toml => {
                toml::to_string_pretty(value).map_err(|e| ConfigError::serialize(*self, e))
            }
        }
    }
}

impl fmt::Display for ConfigFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ConfigFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_extension(s)
    }
}
