//! Request envelope built from the `llm` section

use serde::{Deserialize, Serialize};

use super::config::GenerationConfig;
use crate::config::LlmConfig;

/// Request to generate content from an LLM
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerateRequest {
    /// Model identifier
    pub model: String,
    /// Conversation history
    pub messages: Vec<Message>,
    /// Generation parameters
    pub config: GenerationConfig,
    /// System prompt/instructions
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system: Option<String>,
}

/// A single message in the conversation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    /// Role of the message sender
    pub role: MessageRole,
    /// Text content
    pub content: String,
}

impl Message {
    /// Create a new user message with text content
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: MessageRole::User,
            content: text.into(),
        }
    }
}

/// Role of a message sender
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    /// Human input
    User,
    /// Model output
    Assistant,
}

impl LlmConfig {
    /// Build the request for one chunk of text
    ///
    /// The system prompt comes from the configuration and `text` is the
    /// single user message. Nothing is sent anywhere.
    pub fn request_for(&self, text: impl Into<String>) -> GenerateRequest {
        GenerateRequest {
            model: self.model.clone(),
            messages: vec![Message::user(text)],
            config: self.generation_config(),
            system: Some(self.system_prompt.clone()),
        }
    }
}
