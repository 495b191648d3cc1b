//! One request/response analysis cycle.
//!
//! [`AnalysisOrchestrator`] validates a request, renders the prompt, picks
//! the adapter registered for the request's provider, invokes it once, and
//! extracts a [`Diagnosis`]. Backend and extraction failures never reach
//! the caller as errors; they come back as degraded diagnoses. Only
//! validation failures are returned as `Err`.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use super::diagnosis::Diagnosis;
use super::extractor::try_extract;
use super::request::AnalysisRequest;
use crate::config::Config;
use crate::error::{ExtractionError, ProviderError, ValidationError};
use crate::prompts::render;
use crate::providers::{AnthropicAdapter, ModelCatalog, OpenAiAdapter, Provider};
use crate::traits::{JsonMode, ProviderAdapter, ProviderCall};

/// How a diagnosis was produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnalysisStatus {
    /// The analyzer answered with a readable diagnosis.
    Complete,
    /// The analyzer answered but its text could not be read.
    Degraded {
        /// Why the text was rejected.
        reason: ExtractionError,
    },
    /// The analyzer call failed.
    Failed {
        /// The provider failure.
        error: ProviderError,
    },
}

impl AnalysisStatus {
    /// Returns true if the diagnosis carries real analysis.
    #[must_use]
    pub const fn is_complete(&self) -> bool {
        matches!(self, Self::Complete)
    }
}

/// A diagnosis together with how it was produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisOutcome {
    /// The diagnosis; always schema-complete.
    pub diagnosis: Diagnosis,
    /// How the diagnosis was produced.
    pub status: AnalysisStatus,
}

impl AnalysisOutcome {
    fn complete(diagnosis: Diagnosis) -> Self {
        Self {
            diagnosis,
            status: AnalysisStatus::Complete,
        }
    }

    fn degraded(reason: ExtractionError) -> Self {
        Self {
            diagnosis: Diagnosis::fallback(),
            status: AnalysisStatus::Degraded { reason },
        }
    }

    fn failed(error: ProviderError) -> Self {
        Self {
            diagnosis: Diagnosis::from_failure(&error),
            status: AnalysisStatus::Failed { error },
        }
    }

    /// Returns true if the diagnosis carries real analysis.
    #[must_use]
    pub const fn is_complete(&self) -> bool {
        self.status.is_complete()
    }
}

/// Composes prompt rendering, provider dispatch, and extraction.
#[derive(Clone)]
pub struct AnalysisOrchestrator {
    catalog: ModelCatalog,
    adapters: HashMap<Provider, Arc<dyn ProviderAdapter>>,
}

impl fmt::Debug for AnalysisOrchestrator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut providers: Vec<_> = self.adapters.keys().collect();
        providers.sort_by_key(|p| p.as_str());
        f.debug_struct("AnalysisOrchestrator")
            .field("catalog", &self.catalog)
            .field("adapters", &providers)
            .finish()
    }
}

impl Default for AnalysisOrchestrator {
    fn default() -> Self {
        Self::new()
    }
}

impl AnalysisOrchestrator {
    /// Create an orchestrator with the builtin catalog and no adapters.
    #[must_use]
    pub fn new() -> Self {
        Self {
            catalog: ModelCatalog::builtin(),
            adapters: HashMap::new(),
        }
    }

    /// Build an orchestrator with an adapter for every configured API key.
    ///
    /// # Errors
    ///
    /// Returns [`ProviderError::Network`] if an HTTP client cannot be built.
    pub fn from_config(config: &Config) -> Result<Self, ProviderError> {
        let mut orchestrator = Self::new();
        if let Some(key) = &config.anthropic_api_key {
            let adapter =
                AnthropicAdapter::new(key.clone(), config.client_config(Provider::Anthropic))?;
            orchestrator = orchestrator.with_adapter(Arc::new(adapter));
        }
        if let Some(key) = &config.openai_api_key {
            let adapter = OpenAiAdapter::new(key.clone(), config.client_config(Provider::OpenAi))?;
            orchestrator = orchestrator.with_adapter(Arc::new(adapter));
        }
        Ok(orchestrator)
    }

    /// Replace the model catalog.
    #[must_use]
    pub fn with_catalog(mut self, catalog: ModelCatalog) -> Self {
        self.catalog = catalog;
        self
    }

    /// Register an adapter under its own provider, replacing any earlier one.
    #[must_use]
    pub fn with_adapter(mut self, adapter: Arc<dyn ProviderAdapter>) -> Self {
        self.adapters.insert(adapter.provider(), adapter);
        self
    }

    /// The model catalog requests are validated against.
    #[must_use]
    pub const fn catalog(&self) -> &ModelCatalog {
        &self.catalog
    }

    /// Returns true if an adapter is registered for the provider.
    #[must_use]
    pub fn has_adapter(&self, provider: Provider) -> bool {
        self.adapters.contains_key(&provider)
    }

    /// Validate a request against this orchestrator's catalog.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError`] for a blank required field or unknown model.
    pub fn validate(&self, request: &AnalysisRequest) -> Result<(), ValidationError> {
        request.validate(&self.catalog)
    }

    /// Run one analysis and report how the diagnosis was produced.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError`] before any adapter is invoked if the
    /// request is incomplete or names an unpublished model.
    pub async fn analyze_outcome(
        &self,
        request: &AnalysisRequest,
    ) -> Result<AnalysisOutcome, ValidationError> {
        self.validate(request)?;

        let json_mode = if self
            .catalog
            .find(request.provider, &request.model)
            .is_some_and(|m| m.native_json_mode)
        {
            JsonMode::Native
        } else {
            JsonMode::Instructed
        };
        let call = ProviderCall::new(render(request), request.model.as_str()).with_json_mode(json_mode);

        tracing::debug!(
            provider = %request.provider,
            model = %request.model,
            json_mode = ?json_mode,
            prompt_chars = call.prompt.chars().count(),
            "Dispatching analysis"
        );

        let raw = match self.adapters.get(&request.provider) {
            Some(adapter) => adapter.invoke(call).await,
            None => Err(ProviderError::NotConfigured {
                provider: request.provider,
            }),
        };

        let outcome = match raw {
            Ok(text) => match try_extract(&text) {
                Ok(diagnosis) => AnalysisOutcome::complete(diagnosis),
                Err(reason) => {
                    tracing::warn!(
                        provider = %request.provider,
                        model = %request.model,
                        reason = %reason,
                        "Analyzer output unreadable, returning fallback diagnosis"
                    );
                    AnalysisOutcome::degraded(reason)
                }
            },
            Err(error) => {
                tracing::warn!(
                    provider = %request.provider,
                    model = %request.model,
                    kind = ?error.kind(),
                    error = %error,
                    "Analyzer call failed, returning degraded diagnosis"
                );
                AnalysisOutcome::failed(error)
            }
        };

        Ok(outcome)
    }

    /// Run one analysis.
    ///
    /// The returned diagnosis is always schema-complete, even when the
    /// backend failed or answered with unreadable text.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError`] before any adapter is invoked if the
    /// request is incomplete or names an unpublished model.
    pub async fn analyze(&self, request: &AnalysisRequest) -> Result<Diagnosis, ValidationError> {
        self.analyze_outcome(request).await.map(|o| o.diagnosis)
    }
}
