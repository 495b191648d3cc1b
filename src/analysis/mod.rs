//! Analysis pipeline.
//!
//! This module provides:
//! - [`AnalysisRequest`]: the debugging inputs and their validation
//! - [`Diagnosis`]: the structured analyzer output
//! - [`extract`] / [`try_extract`]: raw analyzer text to [`Diagnosis`]
//! - [`AnalysisOrchestrator`]: one validate, render, dispatch, extract cycle
//!
//! # Example
//!
//! ```no_run
//! use prompt_debugger::analysis::{AnalysisOrchestrator, AnalysisRequest};
//! use prompt_debugger::config::Config;
//! use prompt_debugger::providers::Provider;
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let orchestrator = AnalysisOrchestrator::from_config(&Config::from_env()?)?;
//! let request = AnalysisRequest::new(Provider::OpenAi, "gpt-4o")
//!     .with_system_prompt("You are a booking assistant.")
//!     .with_behavioral_guidelines("Never quote prices.")
//!     .with_defective_user_message("How much is a room?")
//!     .with_defective_agent_response("It's $120 a night.")
//!     .with_defective_description("The agent quoted a price.")
//!     .with_agent_interpretation("Answer every question directly.")
//!     .with_expected_behavior("Refer the user to the pricing page.");
//! let diagnosis = orchestrator.analyze(&request).await?;
//! println!("{}", diagnosis.agent_interpretation_change);
//! # Ok(())
//! # }
//! ```

mod diagnosis;
mod extractor;
mod orchestrator;
mod request;

pub use diagnosis::{
    Diagnosis, ErrorSourceAnalysis, PromptSuggestions, NO_GUIDELINES_ERROR,
    NO_GUIDELINES_MODIFICATIONS, NO_INTERPRETATION_CHANGE, NO_SYSTEM_PROMPT_ERROR,
    NO_SYSTEM_PROMPT_MODIFICATIONS,
};
pub use extractor::{extract, try_extract};
pub use orchestrator::{AnalysisOrchestrator, AnalysisOutcome, AnalysisStatus};
pub use request::{AnalysisRequest, BotType, ConversationTurn, Role};
