//! Wire types for the two backend families.
//!
//! This module provides:
//! - Anthropic Messages API request/response types
//! - OpenAI Chat Completions request/response types

#![allow(clippy::missing_const_for_fn)]
#![allow(clippy::derive_partial_eq_without_eq)]

use serde::{Deserialize, Serialize};

/// A single chat message on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WireMessage {
    /// Role of the sender.
    pub role: String,
    /// Text content.
    pub content: String,
}

impl WireMessage {
    /// Create a user message.
    #[must_use]
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }

    /// Create a system message.
    #[must_use]
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: "system".to_string(),
            content: content.into(),
        }
    }
}

/// Request to the Anthropic Messages API.
#[derive(Debug, Clone, Serialize)]
pub struct MessagesRequest {
    /// Model identifier.
    pub model: String,
    /// Maximum tokens to generate.
    pub max_tokens: u32,
    /// Temperature for sampling.
    pub temperature: f32,
    /// Conversation messages.
    pub messages: Vec<WireMessage>,
}

/// Response from the Anthropic Messages API.
#[derive(Debug, Clone, Deserialize)]
pub struct MessagesResponse {
    /// Content blocks.
    #[serde(default)]
    pub content: Vec<ContentBlock>,
}

impl MessagesResponse {
    /// Join all text blocks, or `None` when no text is present.
    #[must_use]
    pub fn text(&self) -> Option<String> {
        let text = self
            .content
            .iter()
            .filter_map(|block| match block {
                ContentBlock::Text { text } => Some(text.as_str()),
                ContentBlock::Other => None,
            })
            .collect::<Vec<_>>()
            .join("\n");
        if text.trim().is_empty() {
            None
        } else {
            Some(text)
        }
    }
}

/// Content block in a Messages API response.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ContentBlock {
    /// Text content.
    Text {
        /// The text.
        text: String,
    },
    /// Thinking, tool use, and any other block kind.
    #[serde(other)]
    Other,
}

/// Request to the OpenAI Chat Completions API.
#[derive(Debug, Clone, Serialize)]
pub struct ChatCompletionRequest {
    /// Model identifier.
    pub model: String,
    /// System and user messages.
    pub messages: Vec<WireMessage>,
    /// Maximum tokens to generate.
    pub max_tokens: u32,
    /// Temperature for sampling.
    pub temperature: f32,
    /// Native response format.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_format: Option<ResponseFormat>,
}

/// Native response format selector.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResponseFormat {
    /// Format type.
    #[serde(rename = "type")]
    pub kind: String,
}

impl ResponseFormat {
    /// JSON-object mode.
    #[must_use]
    pub fn json_object() -> Self {
        Self {
            kind: "json_object".to_string(),
        }
    }
}

/// Response from the OpenAI Chat Completions API.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatCompletionResponse {
    /// Completion choices.
    #[serde(default)]
    pub choices: Vec<Choice>,
}

impl ChatCompletionResponse {
    /// Content of the first choice, or `None` when absent or blank.
    #[must_use]
    pub fn text(&self) -> Option<String> {
        self.choices
            .first()
            .and_then(|c| c.message.as_ref())
            .and_then(|m| m.content.clone())
            .filter(|c| !c.trim().is_empty())
    }
}

/// A completion choice.
#[derive(Debug, Clone, Deserialize)]
pub struct Choice {
    /// The assistant message.
    #[serde(default)]
    pub message: Option<ChoiceMessage>,
}

/// Assistant message inside a choice.
#[derive(Debug, Clone, Deserialize)]
pub struct ChoiceMessage {
    /// Text content; absent for refusals or tool calls.
    #[serde(default)]
    pub content: Option<String>,
}
