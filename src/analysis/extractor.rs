//! Diagnosis extraction from raw analyzer text.
//!
//! Accepted shapes:
//! 1. The whole text is a JSON object
//! 2. The whole text is one markdown code block (```` ```json ```` or bare
//!    ```` ``` ````) holding a JSON object
//!
//! Anything else, including JSON buried in prose, is an extraction failure
//! and [`extract`] answers with [`Diagnosis::fallback`].
//!
//! # Examples
//!
//! ```
//! use prompt_debugger::analysis::{extract, Diagnosis};
//!
//! let diagnosis = extract("not json");
//! assert_eq!(diagnosis, Diagnosis::fallback());
//! ```

use serde_json::{Map, Value};

use super::diagnosis::{
    Diagnosis, NO_GUIDELINES_ERROR, NO_GUIDELINES_MODIFICATIONS, NO_INTERPRETATION_CHANGE,
    NO_SYSTEM_PROMPT_ERROR, NO_SYSTEM_PROMPT_MODIFICATIONS,
};
use crate::error::ExtractionError;
use crate::text::truncate;

const ERROR_SOURCE_KEY: &str = "error_source_analysis";
const SUGGESTIONS_KEY: &str = "prompt_suggestions";
const INTERPRETATION_KEY: &str = "agent_interpretation_change";

/// Characters of rejected text kept in [`ExtractionError::NotJson`].
const PREVIEW_CHARS: usize = 100;

/// Parse analyzer text into a diagnosis, never failing.
///
/// Extraction failures are logged and replaced by [`Diagnosis::fallback`].
#[must_use]
pub fn extract(raw: &str) -> Diagnosis {
    match try_extract(raw) {
        Ok(diagnosis) => diagnosis,
        Err(e) => {
            tracing::warn!(error = %e, "Analyzer output rejected, using fallback diagnosis");
            Diagnosis::fallback()
        }
    }
}

/// Parse analyzer text into a diagnosis.
///
/// Missing, null, or blank leaves take their "nothing found" defaults;
/// non-string leaves are kept as compact JSON text.
///
/// # Errors
///
/// Returns [`ExtractionError`] if the text is not a JSON object (bare or in
/// a single code block), the object has none of the diagnosis sections, or
/// a section is present but is not an object.
pub fn try_extract(raw: &str) -> Result<Diagnosis, ExtractionError> {
    let trimmed = raw.trim();
    let json_text = strip_code_fence(trimmed).unwrap_or(trimmed);

    let value: Value = serde_json::from_str(json_text).map_err(|_| ExtractionError::NotJson {
        preview: truncate(trimmed, PREVIEW_CHARS),
    })?;

    let Value::Object(root) = value else {
        return Err(ExtractionError::NotObject);
    };

    if ![ERROR_SOURCE_KEY, SUGGESTIONS_KEY, INTERPRETATION_KEY]
        .iter()
        .any(|key| root.contains_key(*key))
    {
        return Err(ExtractionError::SchemaMismatch);
    }

    let error_source = section(&root, ERROR_SOURCE_KEY)?;
    let suggestions = section(&root, SUGGESTIONS_KEY)?;

    Ok(Diagnosis::new(
        leaf(error_source, "system_prompt_error", NO_SYSTEM_PROMPT_ERROR),
        leaf(error_source, "behavioral_guidelines_error", NO_GUIDELINES_ERROR),
        leaf(
            suggestions,
            "system_prompt_modifications",
            NO_SYSTEM_PROMPT_MODIFICATIONS,
        ),
        leaf(
            suggestions,
            "behavioral_guidelines_modifications",
            NO_GUIDELINES_MODIFICATIONS,
        ),
        leaf(Some(&root), INTERPRETATION_KEY, NO_INTERPRETATION_CHANGE),
    ))
}

/// Return the body of a text that is exactly one code block.
fn strip_code_fence(text: &str) -> Option<&str> {
    let rest = text.strip_prefix("```")?;
    let body = rest.strip_suffix("```")?;
    // Skip a language tag such as `json` on the opening line
    let body = match body.find('\n') {
        Some(newline) if !body[..newline].trim_start().starts_with('{') => &body[newline + 1..],
        _ => body,
    };
    Some(body.trim())
}

/// A nested section; absent and null both mean "nothing found".
fn section<'a>(
    root: &'a Map<String, Value>,
    key: &str,
) -> Result<Option<&'a Map<String, Value>>, ExtractionError> {
    match root.get(key) {
        Some(Value::Object(map)) => Ok(Some(map)),
        Some(Value::Null) | None => Ok(None),
        Some(_) => Err(ExtractionError::SchemaMismatch),
    }
}

fn leaf(section: Option<&Map<String, Value>>, key: &str, default: &str) -> String {
    match section.and_then(|s| s.get(key)) {
        Some(Value::String(s)) if !s.trim().is_empty() => s.clone(),
        Some(Value::String(_) | Value::Null) | None => default.to_string(),
        Some(other) => other.to_string(),
    }
}
