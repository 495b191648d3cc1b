//! Published model sets per provider.
//!
//! A request may only name a model that its provider publishes. The
//! builtin catalog mirrors the models offered in the analyzer picker;
//! deployments can publish their own set instead.

use std::collections::HashMap;

use super::Provider;

/// A model published for a provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelInfo {
    /// Model identifier sent to the backend.
    pub id: String,
    /// Human-readable name.
    pub display_name: String,
    /// Whether the backend offers a native JSON-only response mode for it.
    pub native_json_mode: bool,
}

impl ModelInfo {
    /// Create a model entry without native JSON mode.
    #[must_use]
    pub fn new(id: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            display_name: display_name.into(),
            native_json_mode: false,
        }
    }

    /// Mark the model as supporting native JSON mode.
    #[must_use]
    pub const fn with_native_json_mode(mut self) -> Self {
        self.native_json_mode = true;
        self
    }
}

/// Model sets keyed by provider, in publication order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModelCatalog {
    models: HashMap<Provider, Vec<ModelInfo>>,
}

impl ModelCatalog {
    /// Create a catalog with no models.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// The builtin catalog.
    #[must_use]
    pub fn builtin() -> Self {
        Self::empty()
            .with_model(
                Provider::Anthropic,
                ModelInfo::new("claude-3-opus-20240229", "Claude 3 Opus"),
            )
            .with_model(
                Provider::Anthropic,
                ModelInfo::new("claude-3-sonnet-20240229", "Claude 3 Sonnet"),
            )
            .with_model(
                Provider::Anthropic,
                ModelInfo::new("claude-3-haiku-20240307", "Claude 3 Haiku"),
            )
            .with_model(
                Provider::Anthropic,
                ModelInfo::new("claude-3-5-haiku-latest", "Claude 3.5 Haiku"),
            )
            .with_model(
                Provider::Anthropic,
                ModelInfo::new("claude-3-5-sonnet-latest", "Claude 3.5 Sonnet"),
            )
            .with_model(
                Provider::OpenAi,
                ModelInfo::new("gpt-4-0125-preview", "GPT-4 Turbo").with_native_json_mode(),
            )
            .with_model(Provider::OpenAi, ModelInfo::new("gpt-4", "GPT-4"))
            .with_model(
                Provider::OpenAi,
                ModelInfo::new("gpt-3.5-turbo", "GPT-3.5 Turbo").with_native_json_mode(),
            )
            .with_model(
                Provider::OpenAi,
                ModelInfo::new("gpt-4o", "GPT-4o").with_native_json_mode(),
            )
    }

    /// Publish a model for a provider.
    ///
    /// Re-publishing an id replaces the earlier entry in place.
    #[must_use]
    pub fn with_model(mut self, provider: Provider, info: ModelInfo) -> Self {
        let models = self.models.entry(provider).or_default();
        match models.iter_mut().find(|m| m.id == info.id) {
            Some(existing) => *existing = info,
            None => models.push(info),
        }
        self
    }

    /// Models published for a provider.
    #[must_use]
    pub fn models(&self, provider: Provider) -> &[ModelInfo] {
        self.models.get(&provider).map_or(&[], Vec::as_slice)
    }

    /// Look up a model by id.
    #[must_use]
    pub fn find(&self, provider: Provider, id: &str) -> Option<&ModelInfo> {
        self.models(provider).iter().find(|m| m.id == id)
    }

    /// Whether the provider publishes the model.
    #[must_use]
    pub fn contains(&self, provider: Provider, id: &str) -> bool {
        self.find(provider, id).is_some()
    }

    /// First published model for a provider.
    #[must_use]
    pub fn default_model(&self, provider: Provider) -> Option<&ModelInfo> {
        self.models(provider).first()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test]
    fn test_builtin_counts() {
        let catalog = ModelCatalog::builtin();
        assert_eq!(catalog.models(Provider::Anthropic).len(), 5);
        assert_eq!(catalog.models(Provider::OpenAi).len(), 4);
    }

    #[test_case(Provider::Anthropic, "claude-3-opus-20240229", false ; "opus")]
    #[test_case(Provider::Anthropic, "claude-3-5-sonnet-latest", false ; "sonnet 3.5")]
    #[test_case(Provider::OpenAi, "gpt-4o", true ; "gpt-4o")]
    #[test_case(Provider::OpenAi, "gpt-4", false ; "gpt-4 has no json mode")]
    #[test_case(Provider::OpenAi, "gpt-3.5-turbo", true ; "gpt-3.5")]
    fn test_builtin_json_mode(provider: Provider, id: &str, native: bool) {
        let catalog = ModelCatalog::builtin();
        let info = catalog.find(provider, id).unwrap();
        assert_eq!(info.native_json_mode, native);
    }

    #[test]
    fn test_models_are_scoped_to_provider() {
        let catalog = ModelCatalog::builtin();
        assert!(!catalog.contains(Provider::Anthropic, "gpt-4o"));
        assert!(!catalog.contains(Provider::OpenAi, "claude-3-opus-20240229"));
    }

    #[test]
    fn test_default_model_is_first_published() {
        let catalog = ModelCatalog::builtin();
        assert_eq!(
            catalog.default_model(Provider::OpenAi).unwrap().display_name,
            "GPT-4 Turbo"
        );
    }

    #[test]
    fn test_empty_catalog() {
        let catalog = ModelCatalog::empty();
        assert!(catalog.models(Provider::Anthropic).is_empty());
        assert!(catalog.default_model(Provider::OpenAi).is_none());
    }

    #[test]
    fn test_with_model_replaces_same_id() {
        let catalog = ModelCatalog::empty()
            .with_model(Provider::Anthropic, ModelInfo::new("m1", "First"))
            .with_model(Provider::Anthropic, ModelInfo::new("m2", "Second"))
            .with_model(Provider::Anthropic, ModelInfo::new("m1", "Renamed"));
        let models = catalog.models(Provider::Anthropic);
        assert_eq!(models.len(), 2);
        assert_eq!(models[0].display_name, "Renamed");
    }
}
