//! Analysis request model and validation.

#![allow(clippy::missing_const_for_fn)]

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::providers::{ModelCatalog, Provider};

/// Kind of agent being debugged.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BotType {
    /// Text chat agent.
    #[default]
    Text,
    /// Voice agent.
    Voice,
}

impl BotType {
    /// Label shown to the analyzer.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Text => "Text Bot",
            Self::Voice => "Voice Bot",
        }
    }
}

/// Speaker of a conversation turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// The end user.
    User,
    /// The agent under analysis.
    Assistant,
}

/// One turn of the transcript leading up to the defect.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ConversationTurn {
    /// Who spoke.
    pub role: Role,
    /// What was said.
    pub content: String,
}

impl ConversationTurn {
    /// Create a turn.
    #[must_use]
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }

    /// Create a user turn.
    #[must_use]
    pub fn user(content: impl Into<String>) -> Self {
        Self::new(Role::User, content)
    }

    /// Create an assistant turn.
    #[must_use]
    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(Role::Assistant, content)
    }
}

/// Everything the analyzer needs to diagnose one defective response.
///
/// Equality is by value over every field; the history store relies on it
/// to deduplicate submissions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AnalysisRequest {
    /// Kind of agent.
    #[serde(default)]
    pub bot_type: BotType,
    /// The agent's system prompt.
    pub system_prompt: String,
    /// The agent's behavioral guidelines.
    pub behavioral_guidelines: String,
    /// Transcript before the defective exchange; may be empty.
    #[serde(default)]
    pub conversation_history: Vec<ConversationTurn>,
    /// User message that triggered the defect.
    pub defective_user_message: String,
    /// The defective agent response.
    pub defective_agent_response: String,
    /// Why the response was a defect.
    pub defective_description: String,
    /// How the agent understood its instructions.
    pub agent_interpretation: String,
    /// What the agent should have done.
    pub expected_behavior: String,
    /// Analyzer backend.
    pub provider: Provider,
    /// Analyzer model.
    pub model: String,
}

impl AnalysisRequest {
    /// Create a request for a provider and model with all text fields empty.
    #[must_use]
    pub fn new(provider: Provider, model: impl Into<String>) -> Self {
        Self {
            bot_type: BotType::default(),
            system_prompt: String::new(),
            behavioral_guidelines: String::new(),
            conversation_history: Vec::new(),
            defective_user_message: String::new(),
            defective_agent_response: String::new(),
            defective_description: String::new(),
            agent_interpretation: String::new(),
            expected_behavior: String::new(),
            provider,
            model: model.into(),
        }
    }

    /// Set bot type.
    #[must_use]
    pub const fn with_bot_type(mut self, bot_type: BotType) -> Self {
        self.bot_type = bot_type;
        self
    }

    /// Set system prompt.
    #[must_use]
    pub fn with_system_prompt(mut self, value: impl Into<String>) -> Self {
        self.system_prompt = value.into();
        self
    }

    /// Set behavioral guidelines.
    #[must_use]
    pub fn with_behavioral_guidelines(mut self, value: impl Into<String>) -> Self {
        self.behavioral_guidelines = value.into();
        self
    }

    /// Set the defective user message.
    #[must_use]
    pub fn with_defective_user_message(mut self, value: impl Into<String>) -> Self {
        self.defective_user_message = value.into();
        self
    }

    /// Set the defective agent response.
    #[must_use]
    pub fn with_defective_agent_response(mut self, value: impl Into<String>) -> Self {
        self.defective_agent_response = value.into();
        self
    }

    /// Set the description of the defect.
    #[must_use]
    pub fn with_defective_description(mut self, value: impl Into<String>) -> Self {
        self.defective_description = value.into();
        self
    }

    /// Set the agent's interpretation.
    #[must_use]
    pub fn with_agent_interpretation(mut self, value: impl Into<String>) -> Self {
        self.agent_interpretation = value.into();
        self
    }

    /// Set the expected behavior.
    #[must_use]
    pub fn with_expected_behavior(mut self, value: impl Into<String>) -> Self {
        self.expected_behavior = value.into();
        self
    }

    /// Switch analyzer backend and model.
    #[must_use]
    pub fn with_model(mut self, provider: Provider, model: impl Into<String>) -> Self {
        self.provider = provider;
        self.model = model.into();
        self
    }

    /// Append a transcript turn.
    #[must_use]
    pub fn with_turn(mut self, turn: ConversationTurn) -> Self {
        self.conversation_history.push(turn);
        self
    }

    /// Append one user/agent exchange, skipping a blank side.
    pub fn push_exchange(&mut self, user: &str, agent: &str) {
        if !user.trim().is_empty() {
            self.conversation_history.push(ConversationTurn::user(user));
        }
        if !agent.trim().is_empty() {
            self.conversation_history
                .push(ConversationTurn::assistant(agent));
        }
    }

    /// Required text fields, in form order.
    fn required_fields(&self) -> [(&'static str, &str); 8] {
        [
            ("system_prompt", self.system_prompt.as_str()),
            ("behavioral_guidelines", self.behavioral_guidelines.as_str()),
            ("defective_user_message", self.defective_user_message.as_str()),
            ("defective_agent_response", self.defective_agent_response.as_str()),
            ("defective_description", self.defective_description.as_str()),
            ("agent_interpretation", self.agent_interpretation.as_str()),
            ("expected_behavior", self.expected_behavior.as_str()),
            ("model", self.model.as_str()),
        ]
    }

    /// Check the request is ready for dispatch.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::MissingField`] for the first blank required
    /// field, or [`ValidationError::UnknownModel`] if the catalog does not
    /// publish the model for the provider.
    pub fn validate(&self, catalog: &ModelCatalog) -> Result<(), ValidationError> {
        if let Some((field, _)) = self
            .required_fields()
            .into_iter()
            .find(|(_, value)| value.trim().is_empty())
        {
            return Err(ValidationError::MissingField {
                field: field.to_string(),
            });
        }

        if !catalog.contains(self.provider, &self.model) {
            return Err(ValidationError::UnknownModel {
                provider: self.provider,
                model: self.model.clone(),
            });
        }

        Ok(())
    }
}
