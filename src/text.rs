//! Text helpers shared across modules.

/// Truncate to `max_chars` characters, appending `...` when cut.
///
/// Cuts on a character boundary, so multi-byte text never panics.
pub fn truncate(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => format!("{}...", &text[..idx]),
        None => text.to_string(),
    }
}
