//! Analysis prompt template.
//!
//! [`render`] turns an [`AnalysisRequest`] into the single instruction block
//! sent to the analyzer. The provider framing lives next to it:
//! - [`wrap_json_only`]: JSON-only wrapper used by the Anthropic adapter
//! - [`ANALYZER_SYSTEM_PROMPT`]: system-role instruction used by the OpenAI adapter
//!
//! # Example
//!
//! ```
//! use prompt_debugger::analysis::AnalysisRequest;
//! use prompt_debugger::prompts::render;
//! use prompt_debugger::providers::Provider;
//!
//! let request = AnalysisRequest::new(Provider::Anthropic, "claude-3-opus-20240229")
//!     .with_system_prompt("You are a travel agent.");
//! let prompt = render(&request);
//! assert!(prompt.contains("You are a travel agent."));
//! assert!(prompt.contains("\"error_source_analysis\""));
//! ```

use crate::analysis::AnalysisRequest;

/// System-role instruction for backends that take one.
pub const ANALYZER_SYSTEM_PROMPT: &str = "You are an expert in AI prompt debugging and analysis.";

/// Literal description of the required output, with per-field guidance.
pub const OUTPUT_SCHEMA: &str = r#"{
    "error_source_analysis": {
        "system_prompt_error": "Detailed explanation of errors in the system prompt (if any)",
        "behavioral_guidelines_error": "Detailed explanation of errors in the behavioral guidelines (if any)"
    },
    "prompt_suggestions": {
        "system_prompt_modifications": "Suggested changes for the system prompt (if applicable)",
        "behavioral_guidelines_modifications": "Suggested changes for the behavioral guidelines (if applicable)"
    },
    "agent_interpretation_change": "Explanation of how the agent's reasoning changes relative to its previous interpretation"
}"#;

const JSON_ONLY_INSTRUCTION: &str = "Respond with ONLY a single JSON object matching the schema above. \
Do not include any text before or after the JSON, and do not wrap it in markdown code fences. \
Every value must be a string.";

/// Render the analysis prompt for a request.
#[must_use]
pub fn render(request: &AnalysisRequest) -> String {
    let history = serde_json::to_string_pretty(&request.conversation_history)
        .unwrap_or_else(|_| "[]".to_string());

    format!(
        r"You are an expert in AI system prompt debugging and analysis.

The following inputs are provided from a prompt debugging session for an AI conversational agent:

Bot Type: {bot_type}

1. System Prompt:
{system_prompt}

2. Conversational History:
{history}

3. Defective Interaction:
   - User Message: {user_message}
   - Agent Response: {agent_response}

4. User's Description of the Defective Agent Response:
{description}

5. Agent's Interpretation of the Prompt:
{interpretation}

6. Expected Behavior from the Bot:
{expected}

7. Behavioral Guidelines:
{guidelines}

Analyze the above information to determine:

A. The location of the error source: Identify if the error originates in the System Prompt, the Behavioral Guidelines, or both. Highlight the problematic sections from the respective inputs.

B. Suggest changes to improve the prompt: Provide modifications for the System Prompt and/or the Behavioral Guidelines if applicable.

C. Explain how the agent's reasoning or interpretation changes compared to its previous interpretation.

Provide your output in a JSON format with the following keys:
{schema}",
        bot_type = request.bot_type.label(),
        system_prompt = request.system_prompt,
        history = history,
        user_message = request.defective_user_message,
        agent_response = request.defective_agent_response,
        description = request.defective_description,
        interpretation = request.agent_interpretation,
        expected = request.expected_behavior,
        guidelines = request.behavioral_guidelines,
        schema = OUTPUT_SCHEMA,
    )
}

/// Append the JSON-only instruction to a rendered prompt.
#[must_use]
pub fn wrap_json_only(prompt: &str) -> String {
    format!("{prompt}\n\n{JSON_ONLY_INSTRUCTION}")
}
