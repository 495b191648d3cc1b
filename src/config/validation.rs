//! Configuration validation.
//!
//! Range checks for values read from the environment.

use super::Config;
use crate::error::ConfigError;

/// Minimum allowed timeout in milliseconds (1 second).
pub const MIN_TIMEOUT_MS: u64 = 1000;

/// Maximum allowed timeout in milliseconds (5 minutes).
pub const MAX_TIMEOUT_MS: u64 = 300_000;

/// Maximum allowed generation ceiling.
pub const MAX_TOKENS_LIMIT: u32 = 32_000;

/// Maximum allowed sampling temperature.
pub const MAX_TEMPERATURE: f32 = 1.0;

/// Validate configuration values.
///
/// # Errors
///
/// Returns [`ConfigError`] if:
/// - neither `ANTHROPIC_API_KEY` nor `OPENAI_API_KEY` is set
/// - a set API key is blank
/// - `REQUEST_TIMEOUT_MS` is outside 1000..=300000
/// - `MAX_TOKENS` is outside 1..=32000
/// - `TEMPERATURE` is not finite or outside 0.0..=1.0
pub fn validate_config(config: &Config) -> Result<(), ConfigError> {
    if config.anthropic_api_key.is_none() && config.openai_api_key.is_none() {
        return Err(ConfigError::MissingRequired {
            var: "ANTHROPIC_API_KEY or OPENAI_API_KEY".into(),
        });
    }

    for (var, key) in [
        ("ANTHROPIC_API_KEY", &config.anthropic_api_key),
        ("OPENAI_API_KEY", &config.openai_api_key),
    ] {
        if key.as_ref().is_some_and(super::SecretString::is_blank) {
            return Err(ConfigError::InvalidValue {
                var: var.into(),
                reason: "must not be empty".into(),
            });
        }
    }

    if !(MIN_TIMEOUT_MS..=MAX_TIMEOUT_MS).contains(&config.request_timeout_ms) {
        return Err(ConfigError::InvalidValue {
            var: "REQUEST_TIMEOUT_MS".into(),
            reason: format!("must be between {MIN_TIMEOUT_MS} and {MAX_TIMEOUT_MS} ms"),
        });
    }

    if !(1..=MAX_TOKENS_LIMIT).contains(&config.max_tokens) {
        return Err(ConfigError::InvalidValue {
            var: "MAX_TOKENS".into(),
            reason: format!("must be between 1 and {MAX_TOKENS_LIMIT}"),
        });
    }

    if !config.temperature.is_finite() || !(0.0..=MAX_TEMPERATURE).contains(&config.temperature) {
        return Err(ConfigError::InvalidValue {
            var: "TEMPERATURE".into(),
            reason: format!("must be between 0.0 and {MAX_TEMPERATURE}"),
        });
    }

    Ok(())
}
