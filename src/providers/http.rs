//! Single-attempt JSON POST shared by both adapters.
//!
//! Status handling:
//! - 401 -> [`ProviderError::AuthenticationFailed`]
//! - 429 -> [`ProviderError::RateLimited`]
//! - 529 -> [`ProviderError::ModelOverloaded`]
//! - other non-2xx -> [`ProviderError::UnexpectedResponse`]

#![allow(clippy::missing_errors_doc)]

use std::time::{Duration, Instant};

use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;

use super::config::ClientConfig;
use super::Provider;
use crate::error::ProviderError;
use crate::text::truncate;

/// Seconds to wait when a 429 carries no usable `retry-after` header.
const DEFAULT_RETRY_AFTER_SECS: u64 = 60;
/// Maximum characters of an error body kept in messages.
const MAX_ERROR_BODY_CHARS: usize = 300;

/// Build an HTTP client honoring the configured timeout.
pub fn build_client(config: &ClientConfig) -> Result<Client, ProviderError> {
    Client::builder()
        .timeout(Duration::from_millis(config.timeout_ms))
        .build()
        .map_err(|e| ProviderError::Network {
            message: format!("Failed to create HTTP client: {e}"),
        })
}

/// Send a prepared request once and decode the JSON envelope.
pub async fn send_json<T: DeserializeOwned>(
    request: RequestBuilder,
    provider: Provider,
    model: &str,
    url: &str,
    timeout_ms: u64,
) -> Result<T, ProviderError> {
    let start = Instant::now();

    tracing::debug!(%provider, url = %url, model = %model, timeout_ms, "Sending analysis request");

    let response = request.send().await.map_err(|e| {
        let elapsed_ms = elapsed_ms(start);
        if e.is_timeout() {
            tracing::error!(%provider, url = %url, elapsed_ms, timeout_ms, "Analysis request timed out");
            ProviderError::Timeout { timeout_ms }
        } else {
            tracing::error!(%provider, url = %url, elapsed_ms, error = %e, "Analysis request failed");
            ProviderError::Network {
                message: e.to_string(),
            }
        }
    })?;

    let status = response.status();
    tracing::debug!(
        %provider,
        url = %url,
        status = %status,
        elapsed_ms = elapsed_ms(start),
        "Analysis response received"
    );

    match status.as_u16() {
        401 => return Err(ProviderError::AuthenticationFailed { provider }),
        429 => {
            let retry_after = response
                .headers()
                .get("retry-after")
                .and_then(|v| v.to_str().ok())
                .and_then(|v| v.trim().parse().ok())
                .unwrap_or(DEFAULT_RETRY_AFTER_SECS);
            return Err(ProviderError::RateLimited {
                retry_after_seconds: retry_after,
            });
        }
        529 => {
            return Err(ProviderError::ModelOverloaded {
                model: model.to_string(),
            })
        }
        _ => {}
    }

    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(ProviderError::UnexpectedResponse {
            message: format!("Status {status}: {}", truncate(&body, MAX_ERROR_BODY_CHARS)),
        });
    }

    response
        .json::<T>()
        .await
        .map_err(|e| ProviderError::UnexpectedResponse {
            message: format!("Failed to parse {provider} response: {e}"),
        })
}

#[allow(clippy::cast_possible_truncation)]
fn elapsed_ms(start: Instant) -> u64 {
    start.elapsed().as_millis() as u64
}
