//! Configuration management.
//!
//! This module handles:
//! - Environment variable loading (with `.env` support)
//! - Configuration validation
//! - Default value handling
//! - Secure API key storage via [`SecretString`]
//!
//! # Example
//!
//! ```
//! use prompt_debugger::config::{Config, SecretString};
//! use prompt_debugger::providers::Provider;
//!
//! // Build a config directly (use Config::from_env() in production)
//! let config = Config::new(Some(SecretString::new("sk-ant-example-key")), None);
//!
//! assert_eq!(config.configured_providers(), vec![Provider::Anthropic]);
//! // API keys are protected from accidental logging
//! let debug = format!("{config:?}");
//! assert!(debug.contains("<REDACTED>"));
//! assert!(!debug.contains("sk-ant-example-key"));
//! ```

mod secret;
mod validation;

pub use secret::SecretString;
pub use validation::{
    validate_config, MAX_TEMPERATURE, MAX_TIMEOUT_MS, MAX_TOKENS_LIMIT, MIN_TIMEOUT_MS,
};

use tracing_subscriber::EnvFilter;

use crate::error::ConfigError;
use crate::providers::{
    ClientConfig, GenerationConfig, Provider, ANTHROPIC_BASE_URL, DEFAULT_MAX_TOKENS,
    DEFAULT_TEMPERATURE, DEFAULT_TIMEOUT_MS, OPENAI_BASE_URL,
};

/// Default log level.
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Application configuration.
///
/// Use [`Config::from_env`] to load configuration from environment variables.
/// A provider is enabled by setting its API key; at least one is required.
#[derive(Debug, Clone, PartialEq)]
// Cannot derive Eq: f32 temperature field does not implement Eq
#[allow(clippy::derive_partial_eq_without_eq)]
pub struct Config {
    /// Anthropic API key; enables the Anthropic analyzer.
    pub anthropic_api_key: Option<SecretString>,
    /// OpenAI API key; enables the OpenAI analyzer.
    pub openai_api_key: Option<SecretString>,
    /// Anthropic API base URL.
    pub anthropic_base_url: String,
    /// OpenAI API base URL.
    pub openai_base_url: String,
    /// Log level (error, warn, info, debug, trace).
    pub log_level: String,
    /// Request timeout in milliseconds.
    pub request_timeout_ms: u64,
    /// Generation ceiling for both analyzers.
    pub max_tokens: u32,
    /// Sampling temperature for both analyzers.
    pub temperature: f32,
}

impl Config {
    /// Create a configuration with the given keys and default settings.
    #[must_use]
    pub fn new(
        anthropic_api_key: Option<SecretString>,
        openai_api_key: Option<SecretString>,
    ) -> Self {
        Self {
            anthropic_api_key,
            openai_api_key,
            anthropic_base_url: ANTHROPIC_BASE_URL.to_string(),
            openai_base_url: OPENAI_BASE_URL.to_string(),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            request_timeout_ms: DEFAULT_TIMEOUT_MS,
            max_tokens: DEFAULT_MAX_TOKENS,
            temperature: DEFAULT_TEMPERATURE,
        }
    }

    /// Load configuration from environment variables.
    ///
    /// API keys (at least one required):
    /// - `ANTHROPIC_API_KEY`
    /// - `OPENAI_API_KEY`
    ///
    /// Optional environment variables (with defaults):
    /// - `ANTHROPIC_BASE_URL` (default: `https://api.anthropic.com/v1`)
    /// - `OPENAI_BASE_URL` (default: `https://api.openai.com/v1`)
    /// - `LOG_LEVEL` (default: `info`)
    /// - `REQUEST_TIMEOUT_MS` (default: `60000`)
    /// - `MAX_TOKENS` (default: `4000`)
    /// - `TEMPERATURE` (default: `0.2`)
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if no API key is set, a numeric variable
    /// does not parse, or any value fails validation (see [`validate_config`]).
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors)
        let _ = dotenvy::dotenv();

        let config = Self {
            anthropic_api_key: std::env::var("ANTHROPIC_API_KEY").ok().map(SecretString::new),
            openai_api_key: std::env::var("OPENAI_API_KEY").ok().map(SecretString::new),
            anthropic_base_url: std::env::var("ANTHROPIC_BASE_URL")
                .unwrap_or_else(|_| ANTHROPIC_BASE_URL.into()),
            openai_base_url: std::env::var("OPENAI_BASE_URL")
                .unwrap_or_else(|_| OPENAI_BASE_URL.into()),
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| DEFAULT_LOG_LEVEL.into()),
            request_timeout_ms: parse_env_u64("REQUEST_TIMEOUT_MS", DEFAULT_TIMEOUT_MS)?,
            max_tokens: parse_env_u32("MAX_TOKENS", DEFAULT_MAX_TOKENS)?,
            temperature: parse_env_f32("TEMPERATURE", DEFAULT_TEMPERATURE)?,
        };

        validate_config(&config)?;
        Ok(config)
    }

    /// API key for a provider, if configured.
    #[must_use]
    pub const fn api_key(&self, provider: Provider) -> Option<&SecretString> {
        match provider {
            Provider::Anthropic => self.anthropic_api_key.as_ref(),
            Provider::OpenAi => self.openai_api_key.as_ref(),
        }
    }

    /// Providers with an API key, in [`Provider::all`] order.
    #[must_use]
    pub fn configured_providers(&self) -> Vec<Provider> {
        Provider::all()
            .into_iter()
            .filter(|p| self.api_key(*p).is_some())
            .collect()
    }

    /// Generation settings shared by both analyzers.
    #[must_use]
    pub const fn generation(&self) -> GenerationConfig {
        GenerationConfig::new(self.max_tokens, self.temperature)
    }

    /// Log filter built from [`Config::log_level`].
    ///
    /// An unparseable level falls back to [`DEFAULT_LOG_LEVEL`].
    #[must_use]
    pub fn log_filter(&self) -> EnvFilter {
        EnvFilter::try_new(&self.log_level).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_LEVEL))
    }

    /// HTTP client configuration for a provider.
    #[must_use]
    pub fn client_config(&self, provider: Provider) -> ClientConfig {
        let base_url = match provider {
            Provider::Anthropic => &self.anthropic_base_url,
            Provider::OpenAi => &self.openai_base_url,
        };
        ClientConfig::new(base_url.as_str())
            .with_timeout_ms(self.request_timeout_ms)
            .with_generation(self.generation())
    }
}

/// Parse an environment variable as u64, using a default if not set.
fn parse_env_u64(name: &str, default: u64) -> Result<u64, ConfigError> {
    std::env::var(name).map_or(Ok(default), |val| {
        val.trim().parse().map_err(|_| ConfigError::InvalidValue {
            var: name.into(),
            reason: "must be a positive integer".into(),
        })
    })
}

/// Parse an environment variable as u32, using a default if not set.
fn parse_env_u32(name: &str, default: u32) -> Result<u32, ConfigError> {
    std::env::var(name).map_or(Ok(default), |val| {
        val.trim().parse().map_err(|_| ConfigError::InvalidValue {
            var: name.into(),
            reason: "must be a positive integer".into(),
        })
    })
}

/// Parse an environment variable as f32, using a default if not set.
fn parse_env_f32(name: &str, default: f32) -> Result<f32, ConfigError> {
    std::env::var(name).map_or(Ok(default), |val| {
        val.trim().parse().map_err(|_| ConfigError::InvalidValue {
            var: name.into(),
            reason: "must be a number".into(),
        })
    })
}
