//! OpenAI Chat Completions adapter.
//!
//! The rendered prompt follows a short system-role instruction. Models
//! that support it are asked for native JSON-object output through
//! `response_format`.

use async_trait::async_trait;
use reqwest::Client;

use super::config::ClientConfig;
use super::http::{build_client, send_json};
use super::types::{ChatCompletionRequest, ChatCompletionResponse, ResponseFormat, WireMessage};
use super::Provider;
use crate::config::SecretString;
use crate::error::ProviderError;
use crate::prompts::ANALYZER_SYSTEM_PROMPT;
use crate::traits::{JsonMode, ProviderAdapter, ProviderCall};

/// Adapter for the OpenAI Chat Completions API.
#[derive(Debug)]
pub struct OpenAiAdapter {
    client: Client,
    api_key: SecretString,
    config: ClientConfig,
}

impl OpenAiAdapter {
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

    fn build_request(&self, call: ProviderCall) -> ChatCompletionRequest {
        ChatCompletionRequest {
            model: call.model,
            messages: vec![
                WireMessage::system(ANALYZER_SYSTEM_PROMPT),
                WireMessage::user(call.prompt),
            ],
            max_tokens: self.config.generation.max_tokens,
            temperature: self.config.generation.temperature,
            response_format: (call.json_mode == JsonMode::Native)
                .then(ResponseFormat::json_object),
        }
    }
}

#[async_trait]
impl ProviderAdapter for OpenAiAdapter {
    fn provider(&self) -> Provider {
        Provider::OpenAi
    }

    async fn invoke(&self, call: ProviderCall) -> Result<String, ProviderError> {
        let url = self.config.endpoint("chat/completions");
        let body = self.build_request(call);

        let request = self
            .client
            .post(&url)
            .bearer_auth(self.api_key.expose())
            .json(&body);

        let response: ChatCompletionResponse = send_json(
            request,
            Provider::OpenAi,
            &body.model,
            &url,
            self.config.timeout_ms,
        )
        .await?;

        response.text().ok_or(ProviderError::NoTextPayload {
            provider: Provider::OpenAi,
        })
    }
}
