//! Pipeline configuration
//!
//! A single document with four sections (`paths`, `processing`, `experiment`,
//! `llm`) is read from YAML, JSON or TOML, has its `${VAR}` placeholders
//! expanded, and is decoded into [`PipelineConfig`]. Missing or mistyped keys
//! and failed semantic checks are reported as [`ConfigError`] at load time.

pub mod env;
pub mod error;
pub mod format;
pub mod loader;
pub mod patterns;
pub mod schema;
pub mod types;
pub mod validate;

pub use error::{ConfigError, Result, ValidationIssue};
pub use format::ConfigFormat;
pub use loader::ConfigLoader;
pub use patterns::{CleaningRule, CleaningRules};
pub use types::{
    ExperimentConfig, LlmConfig, PathsConfig, PipelineConfig, ProcessingConfig, ResolvedPaths,
    SweepPoint,
};
