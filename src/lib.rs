// Pipeline configuration: typed record, loader and validation
pub mod config;

// LLM request parameters derived from the configuration
pub mod llm;
