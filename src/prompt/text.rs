//! Text helpers shared by the prompt producers.

/// Keep at most `max_chars` characters of `text`.
///
/// Counts `char`s, not bytes, so multi-byte characters are never split.
pub fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

/// Split a comma-separated path list, dropping blank entries.
pub fn split_paths(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}
