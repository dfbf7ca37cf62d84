//! `${VAR}` expansion and `.env` loading

use std::path::Path;

use serde_json::Value;

use super::error::{ConfigError, Result};

/// Replace every string of the exact form `${NAME}` using `lookup`
///
/// Only whole-string placeholders are expanded; `prefix-${NAME}` is left as
/// literal text. Maps and sequences are walked recursively.
pub fn substitute_with<F>(value: Value, lookup: &F) -> Result<Value>
where
    F: Fn(&str) -> Option<String>,
{
    match value {
        Value::Object(map) => map
            .into_iter()
            .map(|(key, value)| Ok((key, substitute_with(value, lookup)?)))
            .collect::<Result<serde_json::Map<_, _>>>()
            .map(Value::Object),
        Value::Array(items) => items
            .into_iter()
            .map(|item| substitute_with(item, lookup))
            .collect::<Result<Vec<_>>>()
            .map(Value::Array),
        Value::String(text) => match placeholder(&text) {
            Some(name) => lookup(name)
                .map(Value::String)
                .ok_or_else(|| ConfigError::MissingEnvVar {
                    name: name.to_string(),
                }),
            None => Ok(Value::String(text)),
        },
        other => Ok(other),
    }
}

fn placeholder(text: &str) -> Option<&str> {
    text.strip_prefix("${")
        .and_then(|rest| rest.strip_suffix('}'))
        .filter(|name| !name.is_empty())
}

/// Load variables from a `.env` file without overriding ones already set
///
/// Returns `Ok(false)` when the file does not exist, so a missing `.env`
/// next to the configuration is not an error.
pub fn load_dotenv(path: &Path) -> Result<bool> {
    if !path.exists() {
        tracing::debug!(path = %path.display(), "no .env file");
        return Ok(false);
    }
    dotenvy::from_path(path)?;
    tracing::debug!(path = %path.display(), "loaded .env file");
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn lookup(name: &str) -> Option<String> {
        match name {
            "MODEL" => Some("gpt-4.1-mini".to_string()),
            "PDF_DIR" => Some("/srv/pdf".to_string()),
            _ => None,
        }
    }

    #[test]
    fn test_substitutes_nested_values() {
        let value = json!({
            "paths": {"raw_pdf_dir": "${PDF_DIR}"},
            "llm": {"model": "${MODEL}", "temperature": 0.5},
            "experiment": {"metrics": ["f1", "${MODEL}"]}
        });

        let out = substitute_with(value, &lookup).unwrap();
        assert_eq!(out["paths"]["raw_pdf_dir"], "/srv/pdf");
        assert_eq!(out["llm"]["model"], "gpt-4.1-mini");
        assert_eq!(out["llm"]["temperature"], 0.5);
        assert_eq!(out["experiment"]["metrics"][1], "gpt-4.1-mini");
    }

    #[test]
    fn test_missing_variable_fails() {
        let value = json!({"llm": {"model": "${NOT_SET_ANYWHERE}"}});
        let err = substitute_with(value, &lookup).unwrap_err();
        assert!(matches!(err, ConfigError::MissingEnvVar { name } if name == "NOT_SET_ANYWHERE"));
    }

    #[test]
    fn test_partial_placeholders_are_literal() {
        let value = json!(["data/${PDF_DIR}", "${}", "$PDF_DIR", "${PDF_DIR"]);
        let out = substitute_with(value.clone(), &lookup).unwrap();
        assert_eq!(out, value);
    }

    #[test]
    fn test_regex_dollar_signs_untouched() {
        let value = json!({"formula": "\\$[^$]+\\$"});
        let out = substitute_with(value.clone(), &lookup).unwrap();
        assert_eq!(out, value);
    }

    #[test]
    fn test_load_dotenv_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let loaded = load_dotenv(&dir.path().join(".env")).unwrap();
        assert!(!loaded);
    }

    #[test]
    fn test_load_dotenv_sets_variables() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(".env");
        std::fs::write(&path, "DOCPIPE_ENV_TEST_VALUE=from-dotenv\n").unwrap();

        assert!(load_dotenv(&path).unwrap());
        assert_eq!(
            std::env::var("DOCPIPE_ENV_TEST_VALUE").unwrap(),
            "from-dotenv"
        );
    }
}
