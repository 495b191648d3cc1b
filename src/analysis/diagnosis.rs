//! Diagnosis schema and degraded diagnoses.
//!
//! # Output Schema
//!
//! ```text
//! {
//!   "error_source_analysis": {
//!     "system_prompt_error": "...",
//!     "behavioral_guidelines_error": "..."
//!   },
//!   "prompt_suggestions": {
//!     "system_prompt_modifications": "...",
//!     "behavioral_guidelines_modifications": "..."
//!   },
//!   "agent_interpretation_change": "..."
//! }
//! ```
//!
//! Every leaf is a non-empty string. When no real analysis is available the
//! leaves carry generic guidance instead.

use serde::{Deserialize, Serialize};

use crate::error::ProviderError;

/// Shown when the analyzer reports no system prompt error.
pub const NO_SYSTEM_PROMPT_ERROR: &str = "No issues found";
/// Shown when the analyzer reports no guidelines error.
pub const NO_GUIDELINES_ERROR: &str = "No issues found";
/// Shown when the analyzer suggests no system prompt change.
pub const NO_SYSTEM_PROMPT_MODIFICATIONS: &str = "No modifications needed";
/// Shown when the analyzer suggests no guidelines change.
pub const NO_GUIDELINES_MODIFICATIONS: &str = "No modifications needed";
/// Shown when the analyzer reports no interpretation change.
pub const NO_INTERPRETATION_CHANGE: &str = "No changes in interpretation";

const FALLBACK_SYSTEM_PROMPT_ERROR: &str = "The analyzer's response could not be read as a \
structured diagnosis, so no system prompt errors could be identified. Try again, or shorten \
the system prompt to the sections relevant to the defect.";
const FALLBACK_GUIDELINES_ERROR: &str = "No behavioral guideline errors could be identified \
from the analyzer's response. Try again with the guidelines reduced to the rules the agent \
broke.";
const FALLBACK_SYSTEM_PROMPT_MODIFICATIONS: &str = "Rephrase the defect description as one \
concrete sentence (what the agent said versus what it should have said) and run the analysis \
again.";
const FALLBACK_GUIDELINES_MODIFICATIONS: &str = "Simplify the inputs: trim the conversation \
history to the exchanges leading up to the defect and remove unrelated guidelines, then retry.";
const FALLBACK_INTERPRETATION_CHANGE: &str = "No interpretation change is available. If the \
problem persists, try a different analyzer model.";

/// Where the error originates.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ErrorSourceAnalysis {
    /// Problems found in the system prompt.
    pub system_prompt_error: String,
    /// Problems found in the behavioral guidelines.
    pub behavioral_guidelines_error: String,
}

/// Suggested prompt changes.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PromptSuggestions {
    /// Suggested system prompt changes.
    pub system_prompt_modifications: String,
    /// Suggested behavioral guideline changes.
    pub behavioral_guidelines_modifications: String,
}

/// Structured analyzer output.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Diagnosis {
    /// Error source analysis.
    pub error_source_analysis: ErrorSourceAnalysis,
    /// Prompt suggestions.
    pub prompt_suggestions: PromptSuggestions,
    /// How the agent's reasoning changes.
    pub agent_interpretation_change: String,
}

impl Diagnosis {
    /// Create a diagnosis from its five leaves.
    #[must_use]
    pub fn new(
        system_prompt_error: impl Into<String>,
        behavioral_guidelines_error: impl Into<String>,
        system_prompt_modifications: impl Into<String>,
        behavioral_guidelines_modifications: impl Into<String>,
        agent_interpretation_change: impl Into<String>,
    ) -> Self {
        Self {
            error_source_analysis: ErrorSourceAnalysis {
                system_prompt_error: system_prompt_error.into(),
                behavioral_guidelines_error: behavioral_guidelines_error.into(),
            },
            prompt_suggestions: PromptSuggestions {
                system_prompt_modifications: system_prompt_modifications.into(),
                behavioral_guidelines_modifications: behavioral_guidelines_modifications.into(),
            },
            agent_interpretation_change: agent_interpretation_change.into(),
        }
    }

    /// Degraded diagnosis for analyzer output that could not be parsed.
    #[must_use]
    pub fn fallback() -> Self {
        Self::new(
            FALLBACK_SYSTEM_PROMPT_ERROR,
            FALLBACK_GUIDELINES_ERROR,
            FALLBACK_SYSTEM_PROMPT_MODIFICATIONS,
            FALLBACK_GUIDELINES_MODIFICATIONS,
            FALLBACK_INTERPRETATION_CHANGE,
        )
    }

    /// Degraded diagnosis for a failed analyzer call.
    ///
    /// The failure's cause appears in both error-source fields.
    #[must_use]
    pub fn from_failure(error: &ProviderError) -> Self {
        let cause = error.to_string();
        Self::new(
            format!(
                "Analysis could not be completed ({cause}). The system prompt was not analyzed."
            ),
            format!(
                "Analysis could not be completed ({cause}). The behavioral guidelines were not analyzed."
            ),
            FALLBACK_SYSTEM_PROMPT_MODIFICATIONS,
            FALLBACK_GUIDELINES_MODIFICATIONS,
            FALLBACK_INTERPRETATION_CHANGE,
        )
    }

    /// The five leaves in schema order.
    #[must_use]
    pub fn leaves(&self) -> [&str; 5] {
        [
            self.error_source_analysis.system_prompt_error.as_str(),
            self.error_source_analysis.behavioral_guidelines_error.as_str(),
            self.prompt_suggestions.system_prompt_modifications.as_str(),
            self.prompt_suggestions
                .behavioral_guidelines_modifications
                .as_str(),
            self.agent_interpretation_change.as_str(),
        ]
    }
}
