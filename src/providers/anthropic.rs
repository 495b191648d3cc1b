//! Anthropic Messages API adapter.
//!
//! The rendered prompt goes out as a single user message. JSON output is
//! enforced through prompt wording only; the Messages API has no native
//! JSON mode.

use async_trait::async_trait;
use reqwest::Client;

use super::config::ClientConfig;
use super::http::{build_client, send_json};
use super::types::{MessagesRequest, MessagesResponse, WireMessage};
use super::Provider;
use crate::config::SecretString;
use crate::error::ProviderError;
use crate::prompts::wrap_json_only;
use crate::traits::{ProviderAdapter, ProviderCall};

/// Anthropic API version header value.
pub const ANTHROPIC_VERSION: &str = "2023-06-01";

/// Adapter for the Anthropic Messages API.
#[derive(Debug)]
pub struct AnthropicAdapter {
    client: Client,
    api_key: SecretString,
    config: ClientConfig,
}

impl AnthropicAdapter {
    /// Create a new adapter.
    ///
    /// # Errors
    ///
    /// Returns [`ProviderError::Network`] if the HTTP client cannot be built.
    pub fn new(api_key: impl Into<SecretString>, config: ClientConfig) -> Result<Self, ProviderError> {
        Ok(Self {
            client: build_client(&config)?,
            api_key: api_key.into(),
            config,
        })
    }

    /// Get the client configuration.
    #[must_use]
    pub const fn config(&self) -> &ClientConfig {
        &self.config
    }

    fn build_request(&self, call: ProviderCall) -> MessagesRequest {
        let content = if call.json_mode.is_enforced() {
            wrap_json_only(&call.prompt)
        } else {
            call.prompt
        };
        MessagesRequest {
            model: call.model,
            max_tokens: self.config.generation.max_tokens,
            temperature: self.config.generation.temperature,
            messages: vec![WireMessage::user(content)],
        }
    }
}

#[async_trait]
impl ProviderAdapter for AnthropicAdapter {
    fn provider(&self) -> Provider {
        Provider::Anthropic
    }

    async fn invoke(&self, call: ProviderCall) -> Result<String, ProviderError> {
        let url = self.config.endpoint("messages");
        let body = self.build_request(call);

        let request = self
            .client
            .post(&url)
            .header("x-api-key", self.api_key.expose())
            .header("anthropic-version", ANTHROPIC_VERSION)
            .header("content-type", "application/json")
            .json(&body);

        let response: MessagesResponse = send_json(
            request,
            Provider::Anthropic,
            &body.model,
            &url,
            self.config.timeout_ms,
        )
        .await?;

        response.text().ok_or(ProviderError::NoTextPayload {
            provider: Provider::Anthropic,
        })
    }
}
