//! Error types for the prompt debugger.
//!
//! This module defines a hierarchical error system:
//! - [`AppError`]: Top-level application errors
//! - [`ProviderError`]: Analyzer backend errors (transport and envelope)
//! - [`ValidationError`]: Analysis request validation errors
//! - [`ExtractionError`]: Diagnosis parsing errors
//! - [`HistoryError`]: History lookup errors
//! - [`ConfigError`]: Configuration errors
//!
//! All errors implement `Send + Sync` for async compatibility.

use thiserror::Error;

use crate::providers::Provider;

/// Top-level application error.
///
/// Only the binary and configuration paths surface this type; analysis
/// failures are folded into degraded diagnoses before they reach a caller.
#[derive(Debug, Error)]
pub enum AppError {
    /// Provider error.
    #[error("Provider error: {0}")]
    Provider(#[from] ProviderError),

    /// Validation error.
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Extraction error.
    #[error("Extraction error: {0}")]
    Extraction(#[from] ExtractionError),

    /// History error.
    #[error("History error: {0}")]
    History(#[from] HistoryError),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Input could not be read or decoded.
    #[error("Invalid input: {message}")]
    Input {
        /// Description of the input problem.
        message: String,
    },

    /// Output could not be encoded or written.
    #[error("Output error: {message}")]
    Output {
        /// Description of the output problem.
        message: String,
    },
}

/// Broad classification of a [`ProviderError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FailureKind {
    /// The backend could not be reached or refused the call.
    Transport,
    /// The backend answered but no usable text payload was found.
    Extraction,
}

/// Analyzer backend errors.
///
/// These errors represent failures when communicating with a provider.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ProviderError {
    /// Authentication failed due to an invalid API key.
    #[error("Authentication failed for {provider}: invalid API key")]
    AuthenticationFailed {
        /// The provider that rejected the key.
        provider: Provider,
    },

    /// Request was rate limited.
    #[error("Rate limited: retry after {retry_after_seconds}s")]
    RateLimited {
        /// Seconds to wait before retrying.
        retry_after_seconds: u64,
    },

    /// The requested model is overloaded.
    #[error("Model overloaded: {model}")]
    ModelOverloaded {
        /// The model that is overloaded.
        model: String,
    },

    /// Request timed out.
    #[error("Request timeout after {timeout_ms}ms")]
    Timeout {
        /// Timeout duration in milliseconds.
        timeout_ms: u64,
    },

    /// Network communication error.
    #[error("Network error: {message}")]
    Network {
        /// Description of the network error.
        message: String,
    },

    /// Unexpected response from the backend.
    #[error("Unexpected response: {message}")]
    UnexpectedResponse {
        /// Description of what was unexpected.
        message: String,
    },

    /// The response envelope carried no text payload.
    #[error("No text payload in {provider} response")]
    NoTextPayload {
        /// The provider whose response was empty.
        provider: Provider,
    },

    /// No adapter is registered for the provider.
    #[error("Provider not configured: {provider}")]
    NotConfigured {
        /// The provider that has no adapter.
        provider: Provider,
    },
}

impl ProviderError {
    /// Classify this error.
    ///
    /// Envelope problems (no payload, undecodable body) are extraction
    /// failures; everything else failed before a response was available.
    #[must_use]
    pub const fn kind(&self) -> FailureKind {
        match self {
            Self::NoTextPayload { .. } | Self::UnexpectedResponse { .. } => {
                FailureKind::Extraction
            }
            Self::AuthenticationFailed { .. }
            | Self::RateLimited { .. }
            | Self::ModelOverloaded { .. }
            | Self::Timeout { .. }
            | Self::Network { .. }
            | Self::NotConfigured { .. } => FailureKind::Transport,
        }
    }
}

/// Analysis request validation errors.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field is empty.
    #[error("Missing required field: {field}")]
    MissingField {
        /// The empty field name.
        field: String,
    },

    /// The model is not published for the provider.
    #[error("Unknown model {model} for provider {provider}")]
    UnknownModel {
        /// The selected provider.
        provider: Provider,
        /// The rejected model id.
        model: String,
    },
}

/// Diagnosis extraction errors.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ExtractionError {
    /// The text is not a JSON document.
    #[error("Response is not valid JSON: {preview}")]
    NotJson {
        /// Truncated preview of the offending text.
        preview: String,
    },

    /// The JSON document is not an object.
    #[error("Response JSON is not an object")]
    NotObject,

    /// The object carries none of the diagnosis sections, or a section is
    /// not an object.
    #[error("Response JSON does not match the diagnosis schema")]
    SchemaMismatch,
}

/// History lookup errors.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum HistoryError {
    /// No entry exists at the index.
    #[error("History entry not found: index {index} (history holds {len})")]
    NotFound {
        /// The requested index.
        index: usize,
        /// Number of stored entries.
        len: usize,
    },
}

/// Configuration errors.
///
/// These errors represent failures in configuration loading and validation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Required configuration is missing.
    #[error("Missing required: {var}")]
    MissingRequired {
        /// The missing variable name.
        var: String,
    },

    /// Configuration value is invalid.
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue {
        /// The variable name.
        var: String,
        /// Why the value is invalid.
        reason: String,
    },
}
