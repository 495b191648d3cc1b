//! Secret string wrapper for API keys.
//!
//! Keys travel from the environment to the adapters inside [`SecretString`]
//! so that no `Debug` or `Display` of a config or adapter leaks them.

use std::fmt;

/// A string whose value is redacted in `Debug`/`Display` output.
///
/// # Example
///
/// ```
/// use prompt_debugger::config::SecretString;
///
/// let secret = SecretString::new("sk-proj-123");
/// assert_eq!(format!("{secret:?}"), "<REDACTED>");
/// assert_eq!(secret.expose(), "sk-proj-123");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct SecretString(String);

impl SecretString {
    /// Wrap a secret value.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Expose the underlying value, only at the point of use.
    #[must_use]
    pub fn expose(&self) -> &str {
        &self.0
    }

    /// Returns true if the secret is empty or only whitespace.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl fmt::Debug for SecretString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("<REDACTED>")
    }
}

impl fmt::Display for SecretString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("<REDACTED>")
    }
}

impl From<String> for SecretString {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

impl From<&str> for SecretString {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}
