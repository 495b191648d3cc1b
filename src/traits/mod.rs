//! Trait definitions for mockable dependencies.
//!
//! This module defines traits for:
//! - [`ProviderAdapter`]: Analyzer backend abstraction
//! - [`TimeProvider`]: Time abstraction for testing
//!
//! It also re-exports shared types from the `types` submodule.
//!
//! # Mocking
//!
//! All traits are annotated with `#[cfg_attr(test, mockall::automock)]`
//! which generates mock implementations automatically for testing.
//!
//! # Example
//!
//! ```
//! use prompt_debugger::traits::{TimeProvider, RealTimeProvider};
//!
//! let time_provider = RealTimeProvider;
//! let now = time_provider.now();
//! println!("Current time: {now}");
//! ```

mod types;

pub use types::{JsonMode, ProviderCall};

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::error::ProviderError;
use crate::providers::Provider;

/// Analyzer backend adapter.
///
/// An adapter translates a rendered analysis prompt into one backend's
/// native call shape and reaches into the response envelope for the
/// single text payload.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProviderAdapter: Send + Sync {
    /// The provider family this adapter talks to.
    fn provider(&self) -> Provider;

    /// Issue one completion call and return the raw text payload.
    ///
    /// # Errors
    ///
    /// Returns [`ProviderError`] if the backend cannot be reached, rejects
    /// the call, or answers without a text payload.
    async fn invoke(&self, call: ProviderCall) -> Result<String, ProviderError>;
}

/// Time provider trait for deterministic testing.
#[cfg_attr(test, mockall::automock)]
pub trait TimeProvider: Send + Sync {
    /// Get the current time.
    fn now(&self) -> DateTime<Utc>;
}

/// Real time provider using system clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct RealTimeProvider;

impl TimeProvider for RealTimeProvider {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use static_assertions::assert_impl_all;

    assert_impl_all!(RealTimeProvider: Send, Sync, Clone, Copy, Default);
    assert_impl_all!(MockProviderAdapter: Send, Sync);

    #[test]
    fn test_real_time_provider_default() {
        let provider = RealTimeProvider;
        let now = provider.now();
        let diff = Utc::now() - now;
        assert!(diff.num_seconds() < 1);
    }

    #[test]
    fn test_mock_time_provider() {
        let fixed = Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap();
        let mut mock = MockTimeProvider::new();
        mock.expect_now().return_const(fixed);
        assert_eq!(mock.now(), fixed);
    }

    #[tokio::test]
    async fn test_mock_provider_adapter() {
        let mut mock = MockProviderAdapter::new();
        mock.expect_provider().return_const(Provider::OpenAi);
        mock.expect_invoke()
            .withf(|call| call.model == "gpt-4o")
            .times(1)
            .returning(|_| Ok("{}".to_string()));

        assert_eq!(mock.provider(), Provider::OpenAi);
        let text = mock
            .invoke(ProviderCall::new("prompt", "gpt-4o"))
            .await
            .unwrap();
        assert_eq!(text, "{}");
    }
}
