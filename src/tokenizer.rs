use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Everything outside Latin letters, Cyrillic letters (incl. ё), digits and
    // whitespace is stripped before token extraction, so "don't" becomes "dont".
    static ref STRIP_PATTERN: Regex = Regex::new(r"[^a-zа-яё0-9\s]").unwrap();
    static ref TOKEN_PATTERN: Regex = Regex::new(r"[a-zа-яё]+|[0-9]+").unwrap();
}

/// Normalize raw text and split it into lowercase word/number tokens.
///
/// Pure function: identical input always yields the identical token sequence.
/// Punctuation and standalone symbols are discarded, never emitted as tokens.
pub fn tokenize(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    let stripped = STRIP_PATTERN.replace_all(lowered.trim(), "");
    TOKEN_PATTERN
        .find_iter(&stripped)
        .map(|m| m.as_str().to_string())
        .collect()
}
