//! Compiled cleaning rules

use regex::Regex;

use super::error::{ConfigError, Result};
use super::types::ProcessingConfig;

/// Patterns with a fixed position in the cleaning order
///
/// Rules named here come first, in this order; any other pattern follows,
/// sorted by name.
pub const APPLICATION_ORDER: [&str; 3] = ["whitespace", "formula", "latex_commands"];

/// Replacement used for a well-known pattern the document gives none for
pub fn default_replacement(name: &str) -> Option<&'static str> {
    match name {
        "whitespace" => Some(" "),
        "latex_commands" => Some(""),
        _ => None,
    }
}

/// A compiled pattern and its effective replacement
#[derive(Debug, Clone)]
pub struct CleaningRule {
    pub name: String,
    pub regex: Regex,
    /// The document's replacement, else [`default_replacement`]; `None` only
    /// for a pattern that has neither
    pub replacement: Option<String>,
}

/// All patterns of a `processing` section, compiled once
#[derive(Debug, Clone)]
pub struct CleaningRules {
    rules: Vec<CleaningRule>,
}

impl CleaningRules {
    /// Get a rule by pattern name
    pub fn get(&self, name: &str) -> Option<&CleaningRule> {
        self.rules.iter().find(|rule| rule.name == name)
    }

    /// Iterate over rules in application order
    pub fn iter(&self) -> impl Iterator<Item = &CleaningRule> {
        self.rules.iter()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

fn order_key(name: &str) -> (usize, &str) {
    let rank = APPLICATION_ORDER
        .iter()
        .position(|known| *known == name)
        .unwrap_or(APPLICATION_ORDER.len());
    (rank, name)
}

impl ProcessingConfig {
    /// Compile every regex pattern, pairing it with its effective replacement
    pub fn compile(&self) -> Result<CleaningRules> {
        let mut rules = self
            .regex_patterns
            .iter()
            .map(|(name, pattern)| {
                let regex = Regex::new(pattern).map_err(|source| ConfigError::InvalidRegex {
                    name: name.clone(),
                    source,
                })?;
                let replacement = self
                    .replacement_for(name)
                    .or_else(|| default_replacement(name))
                    .map(str::to_string);
                Ok(CleaningRule {
                    name: name.clone(),
                    regex,
                    replacement,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        rules.sort_by(|a, b| order_key(&a.name).cmp(&order_key(&b.name)));
        Ok(CleaningRules { rules })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn processing() -> ProcessingConfig {
        ProcessingConfig {
            regex_patterns: BTreeMap::from([
                ("whitespace".to_string(), r"\s+".to_string()),
                ("formula".to_string(), r"\$[^$]+\$".to_string()),
                (
                    "latex_commands".to_string(),
                    r"\\[a-zA-Z]+(\{[^}]*\})*".to_string(),
                ),
            ]),
            replacements: BTreeMap::from([("formula".to_string(), "[FORMULA]".to_string())]),
        }
    }

    #[test]
    fn test_compile_pairs_replacements() {
        let rules = processing().compile().unwrap();
        assert_eq!(rules.len(), 3);

        let formula = rules.get("formula").unwrap();
        assert_eq!(formula.replacement.as_deref(), Some("[FORMULA]"));
        assert_eq!(formula.regex.replace_all("a $x^2$ b", "[FORMULA]"), "a [FORMULA] b");

        assert_eq!(rules.get("whitespace").unwrap().replacement.as_deref(), Some(" "));
        assert_eq!(rules.get("latex_commands").unwrap().replacement.as_deref(), Some(""));
        assert!(rules.get("missing").is_none());
    }

    #[test]
    fn test_document_overrides_default_replacement() {
        let mut processing = processing();
        processing
            .replacements
            .insert("latex_commands".to_string(), "[CMD]".to_string());

        let rules = processing.compile().unwrap();
        assert_eq!(
            rules.get("latex_commands").unwrap().replacement.as_deref(),
            Some("[CMD]")
        );
    }

    #[test]
    fn test_unknown_pattern_without_replacement() {
        let mut processing = processing();
        processing
            .regex_patterns
            .insert("page_numbers".to_string(), r"Page \d+ of \d+".to_string());

        let rules = processing.compile().unwrap();
        assert!(rules.get("page_numbers").unwrap().replacement.is_none());
    }

    #[test]
    fn test_latex_pattern_matches_commands() {
        let rules = processing().compile().unwrap();
        let latex = &rules.get("latex_commands").unwrap().regex;
        assert!(latex.is_match(r"\textbf{bold}"));
        assert!(latex.is_match(r"\alpha"));
        assert!(!latex.is_match("plain text"));
    }

    #[test]
    fn test_iter_follows_application_order() {
        let mut processing = processing();
        processing
            .regex_patterns
            .insert("copyright".to_string(), r"©.*?\d{4}".to_string());
        processing
            .regex_patterns
            .insert("aaa_tables".to_string(), r"Table\s*\d+".to_string());

        let rules = processing.compile().unwrap();
        let names: Vec<&str> = rules.iter().map(|rule| rule.name.as_str()).collect();
        assert_eq!(
            names,
            vec!["whitespace", "formula", "latex_commands", "aaa_tables", "copyright"]
        );
    }

    #[test]
    fn test_compile_reports_bad_pattern() {
        let mut processing = processing();
        processing
            .regex_patterns
            .insert("broken".to_string(), "(".to_string());

        let err = processing.compile().unwrap_err();
        assert!(matches!(err, ConfigError::InvalidRegex { name, .. } if name == "broken"));
    }
}
