//! Provider client configuration.
//!
//! This module provides:
//! - Client configuration (endpoint, timeout) with defaults
//! - Generation settings shared by both backends

#![allow(clippy::missing_const_for_fn)]

/// Default base URL for the Anthropic API.
pub const ANTHROPIC_BASE_URL: &str = "https://api.anthropic.com/v1";
/// Default base URL for the OpenAI API.
pub const OPENAI_BASE_URL: &str = "https://api.openai.com/v1";
/// Default timeout in milliseconds.
pub const DEFAULT_TIMEOUT_MS: u64 = 60_000;
/// Default generation ceiling.
pub const DEFAULT_MAX_TOKENS: u32 = 4000;
/// Default sampling temperature.
pub const DEFAULT_TEMPERATURE: f32 = 0.2;

/// Client configuration for one backend.
#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    /// Base URL for the API.
    pub base_url: String,
    /// Request timeout in milliseconds.
    pub timeout_ms: u64,
    /// Generation settings sent with every request.
    pub generation: GenerationConfig,
}

impl ClientConfig {
    /// Create a configuration for the given base URL with default settings.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout_ms: DEFAULT_TIMEOUT_MS,
            generation: GenerationConfig::default(),
        }
    }

    /// Default configuration for the Anthropic API.
    #[must_use]
    pub fn anthropic() -> Self {
        Self::new(ANTHROPIC_BASE_URL)
    }

    /// Default configuration for the OpenAI API.
    #[must_use]
    pub fn openai() -> Self {
        Self::new(OPENAI_BASE_URL)
    }

    /// Set base URL.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set timeout in milliseconds.
    #[must_use]
    pub const fn with_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }

    /// Set generation settings.
    #[must_use]
    pub const fn with_generation(mut self, generation: GenerationConfig) -> Self {
        self.generation = generation;
        self
    }

    /// Endpoint URL for a path below the base URL.
    #[must_use]
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), path)
    }
}

/// Generation ceiling and sampling temperature.
#[derive(Debug, Clone, Copy, PartialEq)]
// Cannot derive Eq: f32 temperature field does not implement Eq
#[allow(clippy::derive_partial_eq_without_eq)]
pub struct GenerationConfig {
    /// Maximum tokens to generate.
    pub max_tokens: u32,
    /// Temperature for sampling.
    pub temperature: f32,
}

impl GenerationConfig {
    /// Create generation settings.
    #[must_use]
    pub const fn new(max_tokens: u32, temperature: f32) -> Self {
        Self {
            max_tokens,
            temperature,
        }
    }
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_TOKENS, DEFAULT_TEMPERATURE)
    }
}
