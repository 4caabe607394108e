//! Word tokenization
//!
//! Content is split on runs of separator characters (see [`is_separator`]).
//! Each raw token is lower-cased, every character in [`STRIP_CHARS`] is removed
//! from it (anywhere, not only at the edges) and the result is trimmed. Empty
//! results are dropped.
//!
//! No-break spaces (U+00A0, U+2007, U+202F) do not separate words.
//!
//! Other punctuation (`;`, `!`, quotes, parentheses, apostrophes) stays embedded
//! in the word.

use once_cell::sync::Lazy;
use regex::Regex;

/// Characters removed from every token
pub const STRIP_CHARS: &[char] = &['-', '+', '.', '^', ':', ',', '`', '*', '?'];

/// Character class matching any of [`STRIP_CHARS`]
static STRIP_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[-+.^:,`*?]").expect("Invalid STRIP_RE regex"));

/// Whether `c` separates two tokens
///
/// Unicode whitespace minus the no-break spaces and NEL, plus the ASCII
/// information separators U+001C..=U+001F.
pub fn is_separator(c: char) -> bool {
    match c {
        '\u{a0}' | '\u{2007}' | '\u{202f}' | '\u{85}' => false,
        '\u{1c}'..='\u{1f}' => true,
        _ => c.is_whitespace(),
    }
}

/// Trim control characters and ASCII spaces from both ends of `word`
pub fn trim_word(word: &str) -> &str {
    word.trim_matches(|c: char| c <= ' ')
}

/// Normalize a single raw token. May return an empty string.
pub fn normalize_word(raw: &str) -> String {
    let lowered = raw.to_lowercase();
    trim_word(&STRIP_RE.replace_all(&lowered, "")).to_string()
}

/// Normalized, non-empty words of `text` in reading order
pub fn tokens(text: &str) -> impl Iterator<Item = String> + '_ {
    text.split(is_separator)
        .filter(|raw| !raw.is_empty())
        .map(normalize_word)
        .filter(|word| !word.is_empty())
}
