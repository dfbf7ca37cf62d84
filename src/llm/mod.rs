//! LLM request parameters
//!
//! Turns the `llm` section of a [`crate::config::PipelineConfig`] into the
//! sampling parameters and request envelope a model client consumes.

pub mod config;
pub mod types;

pub use config::GenerationConfig;
pub use types::{GenerateRequest, Message, MessageRole};
