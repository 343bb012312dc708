//! Character-count measurement and slicing.

/// Number of `char`s in `text`.
///
/// This is the engine's only notion of width; terminal cell width of
/// wide glyphs is deliberately not modeled.
pub fn display_width(text: &str) -> usize {
    text.chars().count()
}

/// Truncate `text` to at most `width` chars.
pub fn truncate_chars(text: &str, width: usize) -> String {
    match text.char_indices().nth(width) {
        Some((cut, _)) => text[..cut].to_string(),
        None => text.to_string(),
    }
}

/// Split `text` into chunks of at most `width` chars.
///
/// Fixed-width slicing, not word-aware; the final chunk may be
/// shorter. Empty input yields no chunks.
pub fn chunk_chars(text: &str, width: usize) -> Vec<String> {
    debug_assert!(width > 0, "chunk width must be non-zero");
    let chars: Vec<char> = text.chars().collect();
    chars
        .chunks(width.max(1))
        .map(|chunk| chunk.iter().collect())
        .collect()
}
