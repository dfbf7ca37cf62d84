//! Generation parameters derived from the `llm` section

use serde::{Deserialize, Serialize};

use crate::config::LlmConfig;

/// Parameters for controlling text generation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationConfig {
    /// Maximum number of tokens to generate
    pub max_tokens: u32,
    /// Randomness (0.0-2.0, higher = more random)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
}

impl GenerationConfig {
    /// Create a new configuration with the specified max tokens
    pub fn new(max_tokens: u32) -> Self {
        Self {
            max_tokens,
            temperature: None,
        }
    }

    /// Set the temperature
    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }
}

impl From<&LlmConfig> for GenerationConfig {
    fn from(llm: &LlmConfig) -> Self {
        GenerationConfig::new(llm.max_tokens).with_temperature(llm.temperature as f32)
    }
}

impl LlmConfig {
    /// Sampling parameters for a request made with these settings
    pub fn generation_config(&self) -> GenerationConfig {
        GenerationConfig::from(self)
    }
}
