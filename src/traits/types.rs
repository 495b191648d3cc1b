//! Shared types for the traits module.
//!
//! - [`ProviderCall`]: one provider-agnostic completion call
//! - [`JsonMode`]: how strongly the call asks for JSON-only output

/// JSON enforcement for a provider call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum JsonMode {
    /// No enforcement; the prompt is sent as rendered.
    #[default]
    Off,
    /// Enforce through prompt wording only.
    Instructed,
    /// Enforce, and the model supports the backend's native JSON mode.
    Native,
}

impl JsonMode {
    /// Returns true if JSON output is being enforced at all.
    #[must_use]
    pub const fn is_enforced(self) -> bool {
        !matches!(self, Self::Off)
    }
}

/// A provider-agnostic completion call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderCall {
    /// Rendered analysis prompt.
    pub prompt: String,
    /// Model identifier.
    pub model: String,
    /// JSON enforcement.
    pub json_mode: JsonMode,
}

impl ProviderCall {
    /// Create a call without JSON enforcement.
    #[must_use]
    pub fn new(prompt: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            model: model.into(),
            json_mode: JsonMode::Off,
        }
    }

    /// Set JSON enforcement.
    #[must_use]
    pub const fn with_json_mode(mut self, json_mode: JsonMode) -> Self {
        self.json_mode = json_mode;
        self
    }
}
