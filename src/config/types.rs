//! The typed configuration record

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Configuration of the document pipeline
///
/// Loaded once at start-up and read-only afterwards. Every section is
/// required; a document without one of them fails to load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct PipelineConfig {
    /// Input and output directories
    pub paths: PathsConfig,
    /// Text-cleaning rules
    pub processing: ProcessingConfig,
    /// Evaluation sweep parameters
    pub experiment: ExperimentConfig,
    /// Language model settings
    pub llm: LlmConfig,
}

/// Directories used by the pipeline stages
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct PathsConfig {
    /// Source directory for input PDF documents
    pub raw_pdf_dir: PathBuf,
    /// Output directory for intermediate extracted text
    pub interim_txt_dir: PathBuf,
    /// Output directory for the final cleaned corpus
    pub processed_corpus: PathBuf,
}

impl PathsConfig {
    /// Resolve every path against `root`
    ///
    /// Relative paths are joined onto `root`; absolute paths are kept.
    /// Nothing is checked for existence.
    pub fn resolve(&self, root: &Path) -> ResolvedPaths {
        ResolvedPaths {
            raw_pdf_dir: root.join(&self.raw_pdf_dir),
            interim_txt_dir: root.join(&self.interim_txt_dir),
            processed_corpus: root.join(&self.processed_corpus),
        }
    }

    pub(crate) fn entries(&self) -> [(&'static str, &Path); 3] {
        [
            ("raw_pdf_dir", self.raw_pdf_dir.as_path()),
            ("interim_txt_dir", self.interim_txt_dir.as_path()),
            ("processed_corpus", self.processed_corpus.as_path()),
        ]
    }
}

/// Paths joined onto a project root
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedPaths {
    pub raw_pdf_dir: PathBuf,
    pub interim_txt_dir: PathBuf,
    pub processed_corpus: PathBuf,
}

/// Regex cleaning rules and their substitution text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ProcessingConfig {
    /// Pattern name to regular expression
    pub regex_patterns: BTreeMap<String, String>,
    /// Pattern name to replacement text; patterns without an entry fall back
    /// to a built-in default, if any
    #[serde(default, deserialize_with = "null_as_empty")]
    #[schemars(with = "Option<BTreeMap<String, String>>")]
    pub replacements: BTreeMap<String, String>,
}

/// `replacements:` with no entries reads as null in YAML
fn null_as_empty<'de, D>(deserializer: D) -> Result<BTreeMap<String, String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(Option::<BTreeMap<String, String>>::deserialize(deserializer)?.unwrap_or_default())
}

impl ProcessingConfig {
    /// Get the replacement text configured for a pattern
    pub fn replacement_for(&self, name: &str) -> Option<&str> {
        self.replacements.get(name).map(String::as_str)
    }

    /// Replacement keys that have no pattern of the same name
    pub fn orphan_replacements(&self) -> impl Iterator<Item = &str> {
        self.replacements
            .keys()
            .filter(|name| !self.regex_patterns.contains_key(*name))
            .map(String::as_str)
    }
}

/// Parameters for the evaluation sweep
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ExperimentConfig {
    /// Depth values to sweep, in order
    pub depth_values: Vec<u32>,
    /// Names of the metrics to compute; no duplicates
    pub metrics: Vec<String>,
}

/// One point of the evaluation sweep
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SweepPoint<'a> {
    pub depth: u32,
    pub metric: &'a str,
}

impl ExperimentConfig {
    /// Every `(depth, metric)` pair, depth-major, in document order
    pub fn sweep(&self) -> impl Iterator<Item = SweepPoint<'_>> {
        self.depth_values.iter().flat_map(move |&depth| {
            self.metrics.iter().map(move |metric| SweepPoint {
                depth,
                metric: metric.as_str(),
            })
        })
    }
}

/// Settings for calls to the language model
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct LlmConfig {
    /// Model identifier sent with each request
    pub model: String,
    /// Sampling temperature (0.0-2.0)
    pub temperature: f64,
    /// Cap on response length in tokens
    pub max_tokens: u32,
    /// Instruction text sent as the system prompt
    pub system_prompt: String,
}
