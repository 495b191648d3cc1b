//! Analyzer backends.
//!
//! This module provides:
//! - [`Provider`]: the two supported backend families
//! - [`AnthropicAdapter`]: Messages API adapter (family A)
//! - [`OpenAiAdapter`]: Chat Completions adapter (family B)
//! - [`ModelCatalog`]: models published per provider
//! - [`ClientConfig`] and [`GenerationConfig`]: HTTP and sampling settings
//!
//! Both adapters implement [`crate::traits::ProviderAdapter`]; a new backend
//! is a new adapter, not a branch in the orchestrator.

mod anthropic;
mod catalog;
mod config;
mod http;
mod openai;
mod types;

pub use anthropic::{AnthropicAdapter, ANTHROPIC_VERSION};
pub use catalog::{ModelCatalog, ModelInfo};
pub use config::{
    ClientConfig, GenerationConfig, ANTHROPIC_BASE_URL, DEFAULT_MAX_TOKENS, DEFAULT_TEMPERATURE,
    DEFAULT_TIMEOUT_MS, OPENAI_BASE_URL,
};
pub use openai::OpenAiAdapter;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// LLM backend family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Provider {
    /// Anthropic Messages API.
    #[serde(rename = "anthropic")]
    Anthropic,
    /// OpenAI Chat Completions API.
    #[serde(rename = "openai")]
    OpenAi,
}

impl Provider {
    /// Human-readable provider name.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Anthropic => "Anthropic",
            Self::OpenAi => "OpenAI",
        }
    }

    /// Every supported provider.
    #[must_use]
    pub const fn all() -> [Self; 2] {
        [Self::Anthropic, Self::OpenAi]
    }

    /// Identifier used in JSON and on the command line.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Anthropic => "anthropic",
            Self::OpenAi => "openai",
        }
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for Provider {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "anthropic" => Ok(Self::Anthropic),
            "openai" => Ok(Self::OpenAi),
            other => Err(ConfigError::InvalidValue {
                var: "provider".to_string(),
                reason: format!("unknown provider '{other}', expected anthropic or openai"),
            }),
        }
    }
}
