//! Sentence-level checking on top of single-word correction.
//!
//! Text is split on whitespace and every token is corrected on its own. Only
//! tokens that have at least one suggestion are reported; a token with no
//! known neighbor is left alone.

use crate::checker::SpellChecker;
use serde::Serialize;

/// A token that has suggestions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Misspelling {
    /// Position of the token in the whitespace-split text.
    pub index: usize,
    /// The token as typed.
    pub token: String,
    pub suggestions: Vec<String>,
}

pub fn tokenize(text: &str) -> Vec<&str> {
    text.split_whitespace().collect()
}

/// Find every misspelled token of `text`.
pub fn find_misspellings(checker: &SpellChecker, text: &str) -> Vec<Misspelling> {
    let tokens = tokenize(text);
    checker
        .correct_all(tokens.iter().copied())
        .into_iter()
        .zip(tokens)
        .enumerate()
        .filter(|(_, (result, _))| !result.is_empty())
        .map(|(index, (result, token))| Misspelling {
            index,
            token: token.to_string(),
            suggestions: result.suggestions,
        })
        .collect()
}

/// Rebuild the text with `replacements` applied, joined by single spaces.
///
/// Each replacement is `(token index, new text)`; out-of-range indices are ignored.
pub fn apply(tokens: &[&str], replacements: &[(usize, String)]) -> String {
    let mut corrected: Vec<&str> = tokens.to_vec();
    for (index, replacement) in replacements {
        if let Some(slot) = corrected.get_mut(*index) {
            *slot = replacement.as_str();
        }
    }
    corrected.join(" ")
}
