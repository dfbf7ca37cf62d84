//! JSON Schema of the configuration document

use schemars::schema_for;

use super::types::PipelineConfig;

/// Generate the JSON Schema describing a pipeline configuration document
///
/// Field doc comments become `description`s, so the schema doubles as
/// reference documentation for editors and linters.
pub fn json_schema() -> serde_json::Value {
    let schema = schema_for!(PipelineConfig);
    serde_json::to_value(&schema)
        .expect("Failed to serialize schema - this is a bug in schemars or the JsonSchema impl")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_structure() {
        let schema = json_schema();
        let obj = schema.as_object().unwrap();
        assert!(obj.contains_key("$schema"));
        assert_eq!(obj["title"], "PipelineConfig");

        let required: Vec<&str> = obj["required"]
            .as_array()
            .unwrap()
            .iter()
            .filter_map(|v| v.as_str())
            .collect();
        for section in ["paths", "processing", "experiment", "llm"] {
            assert!(required.contains(&section), "{} should be required", section);
        }
    }

    #[test]
    fn test_schema_includes_doc_comments() {
        let schema_str = serde_json::to_string_pretty(&json_schema()).unwrap();
        assert!(schema_str.contains("Source directory for input PDF documents"));
        assert!(schema_str.contains("Sampling temperature"));
    }

    #[test]
    fn test_replacements_not_required() {
        let schema = json_schema();
        let required = &schema["definitions"]["ProcessingConfig"]["required"];
        let required: Vec<&str> = required
            .as_array()
            .unwrap()
            .iter()
            .filter_map(|v| v.as_str())
            .collect();
        assert_eq!(required, vec!["regex_patterns"]);
    }
}
