//! Test utilities and mock factories.
//!
//! This module provides shared testing infrastructure:
//! - Mock adapter factories
//! - Request and response fixtures
//! - A fixed clock
//!
//! Only compiled for tests (`#[cfg(test)]`).

#![allow(clippy::unwrap_used, clippy::expect_used)]

use chrono::{DateTime, TimeZone, Utc};

use crate::analysis::AnalysisRequest;
use crate::error::ProviderError;
use crate::providers::Provider;
use crate::traits::{MockProviderAdapter, MockTimeProvider};

/// Create a mock adapter for `provider` expecting exactly `times` invocations.
///
/// # Example
///
/// ```ignore
/// let mock = mock_adapter(Provider::OpenAi, 1, Ok("{}".to_string()));
/// let text = mock.invoke(ProviderCall::new("p", "gpt-4o")).await;
/// assert_eq!(text.unwrap(), "{}");
/// ```
#[must_use]
pub fn mock_adapter(
    provider: Provider,
    times: usize,
    response: Result<String, ProviderError>,
) -> MockProviderAdapter {
    let mut mock = MockProviderAdapter::new();
    mock.expect_provider().return_const(provider);
    mock.expect_invoke()
        .times(times)
        .returning(move |_| response.clone());
    mock
}

/// Create a mock clock that always returns `time`.
#[must_use]
pub fn mock_time(time: DateTime<Utc>) -> MockTimeProvider {
    let mut mock = MockTimeProvider::new();
    mock.expect_now().return_const(time);
    mock
}

/// A fixed, readable timestamp.
#[must_use]
pub fn fixed_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap()
}

/// A request with every required field set to `"x"` and an empty history.
#[must_use]
pub fn filled_request(provider: Provider, model: &str) -> AnalysisRequest {
    AnalysisRequest::new(provider, model)
        .with_system_prompt("x")
        .with_behavioral_guidelines("x")
        .with_defective_user_message("x")
        .with_defective_agent_response("x")
        .with_defective_description("x")
        .with_agent_interpretation("x")
        .with_expected_behavior("x")
}

/// Analyzer output with every leaf set to `"none"`.
#[must_use]
pub fn all_none_json() -> String {
    serde_json::json!({
        "error_source_analysis": {
            "system_prompt_error": "none",
            "behavioral_guidelines_error": "none"
        },
        "prompt_suggestions": {
            "system_prompt_modifications": "none",
            "behavioral_guidelines_modifications": "none"
        },
        "agent_interpretation_change": "none"
    })
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::{ProviderAdapter, ProviderCall, TimeProvider};

    #[tokio::test]
    async fn test_mock_adapter_returns_response() {
        let mock = mock_adapter(Provider::OpenAi, 1, Ok("{}".to_string()));
        assert_eq!(mock.provider(), Provider::OpenAi);
        let text = mock.invoke(ProviderCall::new("p", "gpt-4o")).await;
        assert_eq!(text.unwrap(), "{}");
    }

    #[test]
    fn test_mock_time() {
        assert_eq!(mock_time(fixed_time()).now(), fixed_time());
    }

    #[test]
    fn test_all_none_json_parses() {
        let value: serde_json::Value = serde_json::from_str(&all_none_json()).unwrap();
        assert_eq!(value["agent_interpretation_change"], "none");
    }
}
