//! Semantic checks run after the document has been decoded

use std::collections::HashSet;

use regex::Regex;

use super::error::{ConfigError, Result, ValidationIssue};
use super::types::{ExperimentConfig, LlmConfig, PathsConfig, PipelineConfig, ProcessingConfig};

/// Accepted sampling temperature range
pub const TEMPERATURE_RANGE: std::ops::RangeInclusive<f64> = 0.0..=2.0;

impl PipelineConfig {
    /// Check every section and report all failures together
    pub fn validate(&self) -> Result<()> {
        let mut issues = Vec::new();
        check_paths(&self.paths, &mut issues);
        check_processing(&self.processing, &mut issues);
        check_experiment(&self.experiment, &mut issues);
        check_llm(&self.llm, &mut issues);

        if issues.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Validation(issues))
        }
    }
}

fn check_paths(paths: &PathsConfig, issues: &mut Vec<ValidationIssue>) {
    for (name, path) in paths.entries() {
        if path.as_os_str().is_empty() {
            issues.push(ValidationIssue::new(format!("paths.{}", name), "must not be empty"));
        }
    }
}

fn check_processing(processing: &ProcessingConfig, issues: &mut Vec<ValidationIssue>) {
    for (name, pattern) in &processing.regex_patterns {
        if let Err(e) = Regex::new(pattern) {
            issues.push(ValidationIssue::new(
                format!("processing.regex_patterns.{}", name),
                format!("does not compile: {}", e),
            ));
        }
    }

    for name in processing.orphan_replacements() {
        tracing::warn!(
            replacement = name,
            "replacement has no regex pattern with the same name"
        );
    }
}

fn check_experiment(experiment: &ExperimentConfig, issues: &mut Vec<ValidationIssue>) {
    if experiment.depth_values.is_empty() {
        issues.push(ValidationIssue::new("experiment.depth_values", "must not be empty"));
    }
    if experiment.depth_values.contains(&0) {
        issues.push(ValidationIssue::new(
            "experiment.depth_values",
            "every depth must be a positive integer",
        ));
    }

    if experiment.metrics.is_empty() {
        issues.push(ValidationIssue::new("experiment.metrics", "must not be empty"));
    }
    let mut seen = HashSet::new();
    for metric in &experiment.metrics {
        if metric.trim().is_empty() {
            issues.push(ValidationIssue::new("experiment.metrics", "metric names must not be empty"));
        } else if !seen.insert(metric.as_str()) {
            issues.push(ValidationIssue::new(
                "experiment.metrics",
                format!("duplicate metric '{}'", metric),
            ));
        }
    }
}

fn check_llm(llm: &LlmConfig, issues: &mut Vec<ValidationIssue>) {
    if llm.model.trim().is_empty() {
        issues.push(ValidationIssue::new("llm.model", "must not be empty"));
    }
    if !llm.temperature.is_finite() || !TEMPERATURE_RANGE.contains(&llm.temperature) {
        issues.push(ValidationIssue::new(
            "llm.temperature",
            format!(
                "{} is outside {}..={}",
                llm.temperature,
                TEMPERATURE_RANGE.start(),
                TEMPERATURE_RANGE.end()
            ),
        ));
    }
    if llm.max_tokens == 0 {
        issues.push(ValidationIssue::new("llm.max_tokens", "must be greater than 0"));
    }
    if llm.system_prompt.trim().is_empty() {
        issues.push(ValidationIssue::new("llm.system_prompt", "must not be empty"));
    }
}
