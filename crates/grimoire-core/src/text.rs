//! Shared text normalization for keyword scoring and hashed embeddings.

use crate::constants::MIN_TOKEN_LEN;

/// Tokenize text into lowercase alphanumeric terms.
///
/// Underscores bind into their token; everything else splits. Terms shorter
/// than [`MIN_TOKEN_LEN`] are dropped.
pub fn tokenize(text: &str) -> Vec<String> {
    text.split(|c: char| !c.is_alphanumeric() && c != '_')
        .filter(|s| s.len() >= MIN_TOKEN_LEN)
        .map(|s| s.to_lowercase())
        .collect()
}

/// Whether `term` appears as a whole token in `text` (case-insensitive).
/// Multi-word terms fall back to a substring match on the lowercased text.
pub fn contains_term(text: &str, term: &str) -> bool {
    let term = term.to_lowercase();
    if term.contains(' ') {
        text.to_lowercase().contains(&term)
    } else {
        tokenize(text).iter().any(|t| *t == term)
    }
}
