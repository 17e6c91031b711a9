//! Staged candidate search and frequency ranking.
//!
//! # Algorithm
//!
//! ```text
//! word ──► normalize ──► known? ──yes──► Known, no suggestions
//!                          │
//!                          no
//!                          ▼
//!               D1 = neighbors(word) ∩ dictionary ──non-empty──► rank(D1)
//!                          │
//!                        empty
//!                          ▼
//!               D2 = ⋃ neighbors(n) for n in neighbors(word), ∩ dictionary ──► rank(D2)
//! ```
//!
//! The distance-2 expansion squares the candidate count, so it only runs
//! when distance 1 found nothing.
//!
//! # Ranking
//!
//! Suggestions are ordered by descending corpus frequency. Equal frequencies
//! fall back to ascending lexicographic order so repeated queries against the
//! same dictionary return the same list.

use crate::candidates::CandidateGenerator;
use crate::dictionary::{normalize, Dictionary};
use ahash::AHashSet;
use serde::Serialize;
use std::cmp::Ordering;

/// Which stage of the search produced the suggestions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum MatchKind {
    /// The word itself is in the dictionary.
    Known,
    /// Suggestions are one edit away.
    EditDistance1,
    /// Suggestions are two edits away.
    EditDistance2,
    /// Nothing within two edits is in the dictionary.
    NoMatch,
}

/// Outcome of correcting a single word.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Suggestions {
    /// The normalized input word.
    pub word: String,
    pub kind: MatchKind,
    /// Dictionary words ranked by descending frequency.
    pub suggestions: Vec<String>,
}

impl Suggestions {
    /// Whether the word was found in the dictionary as-is.
    pub fn is_correct(&self) -> bool {
        self.kind == MatchKind::Known
    }

    /// The highest-ranked suggestion, if any.
    pub fn best(&self) -> Option<&str> {
        self.suggestions.first().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.suggestions.is_empty()
    }
}

/// Read-only correction engine over a dictionary snapshot.
///
/// Holding a shared borrow for the whole call guarantees both search stages
/// see the same dictionary contents.
pub struct Corrector<'a> {
    dictionary: &'a Dictionary,
    generator: CandidateGenerator,
}

impl<'a> Corrector<'a> {
    pub fn new(dictionary: &'a Dictionary) -> Self {
        Self {
            dictionary,
            generator: CandidateGenerator::new(),
        }
    }

    /// Normalize a query: lowercase, and empty when it contains no `a`-`z` letter.
    pub fn normalize_query(word: &str) -> String {
        let normalized = normalize(word);
        if normalized.chars().any(|c| c.is_ascii_alphabetic()) {
            normalized
        } else {
            String::new()
        }
    }

    /// Correct one word.
    ///
    /// # Example
    /// ```rust
    /// use spellcheck::{Corrector, Dictionary};
    ///
    /// let dict = Dictionary::build("the cat sat on the mat");
    /// let result = Corrector::new(&dict).correct("teh");
    /// assert_eq!(result.suggestions, vec!["the".to_string()]);
    /// ```
    pub fn correct(&self, word: &str) -> Suggestions {
        // explicitly added words may carry no letters at all
        let lowered = normalize(word);
        if self.dictionary.get(&lowered).is_some() {
            return Suggestions {
                word: lowered,
                kind: MatchKind::Known,
                suggestions: Vec::new(),
            };
        }

        let word = Self::normalize_query(word);
        if self.dictionary.get(&word).is_some() {
            return Suggestions {
                word,
                kind: MatchKind::Known,
                suggestions: Vec::new(),
            };
        }

        let distance1 = self.generator.generate(&word);
        let hits: AHashSet<&str> = distance1
            .iter()
            .map(String::as_str)
            .filter(|candidate| self.dictionary.get(candidate).is_some())
            .collect();

        log::debug!(
            "'{}': {} distance-1 candidates, {} hits",
            word,
            distance1.len(),
            hits.len()
        );

        if !hits.is_empty() {
            let suggestions = self.rank(hits);
            return Suggestions {
                word,
                kind: MatchKind::EditDistance1,
                suggestions,
            };
        }

        let hits = self.distance2_hits(&distance1);
        log::debug!("'{}': {} distance-2 hits", word, hits.len());

        let kind = if hits.is_empty() {
            MatchKind::NoMatch
        } else {
            MatchKind::EditDistance2
        };
        let suggestions = self.rank(hits.iter().map(String::as_str).collect());

        Suggestions {
            word,
            kind,
            suggestions,
        }
    }

    /// Dictionary words among the neighbors of every distance-1 candidate.
    fn distance2_hits(&self, distance1: &AHashSet<String>) -> AHashSet<String> {
        let mut hits = AHashSet::new();
        for candidate in distance1.iter() {
            for neighbor in self.generator.generate(candidate) {
                if self.dictionary.get(&neighbor).is_some() {
                    hits.insert(neighbor);
                }
            }
        }
        hits
    }

    /// Order words by descending frequency, then ascending lexicographically.
    fn rank(&self, words: AHashSet<&str>) -> Vec<String> {
        let mut ranked: Vec<(&str, u64)> = words
            .into_iter()
            .map(|word| (word, self.dictionary.get(word).unwrap_or(0)))
            .collect();

        ranked.sort_by(|a, b| match b.1.cmp(&a.1) {
            Ordering::Equal => a.0.cmp(b.0),
            other => other,
        });

        ranked.into_iter().map(|(word, _)| word.to_string()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Dictionary {
        Dictionary::build("the cat sat on the mat")
    }

    #[test]
    fn test_known_word_is_correct() {
        let dict = sample();
        let corrector = Corrector::new(&dict);
        for variant in ["the", "THE", "The", "tHE"] {
            let result = corrector.correct(variant);
            assert!(result.is_correct());
            assert_eq!(result.word, "the");
            assert!(result.suggestions.is_empty());
        }
    }

    #[test]
    fn test_transposition() {
        let dict = sample();
        let result = Corrector::new(&dict).correct("teh");
        assert_eq!(result.word, "teh");
        assert_eq!(result.kind, MatchKind::EditDistance1);
        assert_eq!(result.suggestions, vec!["the"]);
    }

    #[test]
    fn test_extra_letter() {
        let dict = sample();
        let result = Corrector::new(&dict).correct("caxt");
        assert_eq!(result.suggestions, vec!["cat"]);
        assert_eq!(result.best(), Some("cat"));
    }

    #[test]
    fn test_no_match() {
        let dict = sample();
        let result = Corrector::new(&dict).correct("xyz");
        assert_eq!(result.kind, MatchKind::NoMatch);
        assert!(result.suggestions.is_empty());
        assert!(!result.is_correct());
    }

    #[test]
    fn test_falls_back_to_distance_two() {
        let dict = sample();
        let result = Corrector::new(&dict).correct("tehh");
        assert_eq!(result.kind, MatchKind::EditDistance2);
        assert_eq!(result.suggestions, vec!["the"]);
    }

    #[test]
    fn test_distance_two_skipped_when_distance_one_hits() {
        // "cast" is two edits from "ct" and more frequent, but never considered
        let dict = Dictionary::build("cat at cast cast cast");
        let result = Corrector::new(&dict).correct("ct");
        assert_eq!(result.kind, MatchKind::EditDistance1);
        assert_eq!(result.suggestions, vec!["at", "cat"]);
    }

    #[test]
    fn test_ranked_by_frequency() {
        let dict = Dictionary::build("bat bat bat cat cat hat");
        let result = Corrector::new(&dict).correct("xat");
        assert_eq!(result.suggestions, vec!["bat", "cat", "hat"]);
    }

    #[test]
    fn test_ties_break_lexicographically() {
        let dict = sample();
        let corrector = Corrector::new(&dict);
        let first = corrector.correct("at");
        assert_eq!(first.suggestions, vec!["cat", "mat", "sat"]);
        for _ in 0..5 {
            assert_eq!(corrector.correct("at"), first);
        }
    }

    #[test]
    fn test_suggestions_non_increasing_frequency() {
        let dict = Dictionary::build("a a a an an and the then than than thin");
        let result = Corrector::new(&dict).correct("tha");
        let counts: Vec<u64> = result
            .suggestions
            .iter()
            .map(|word| dict.frequency_of(word))
            .collect();
        assert!(!counts.is_empty());
        assert!(counts.windows(2).all(|pair| pair[0] >= pair[1]));
    }

    #[test]
    fn test_non_alphabetic_input_normalizes_to_empty() {
        let dict = sample();
        let result = Corrector::new(&dict).correct("123");
        assert_eq!(result.word, "");
        // every two-letter word is two insertions from the empty query
        assert_eq!(result.kind, MatchKind::EditDistance2);
        assert_eq!(result.suggestions, vec!["on"]);

        let dict = Dictionary::build("the cat sat");
        let result = Corrector::new(&dict).correct("!!");
        assert_eq!(result.word, "");
        assert_eq!(result.kind, MatchKind::NoMatch);

        let dict = Dictionary::build("a i");
        let result = Corrector::new(&dict).correct("");
        assert_eq!(result.kind, MatchKind::EditDistance1);
        assert_eq!(result.suggestions, vec!["a", "i"]);
    }

    #[test]
    fn test_non_ascii_letters_do_not_count_as_letters() {
        let dict = Dictionary::build("the cat sat");
        let result = Corrector::new(&dict).correct("é");
        assert_eq!(result.word, "");
        assert_eq!(result.kind, MatchKind::NoMatch);

        let result = Corrector::new(&dict).correct("Caté");
        assert_eq!(result.word, "caté");
        assert_eq!(result.suggestions, vec!["cat"]);
    }

    #[test]
    fn test_added_word_without_letters_is_correct() {
        let mut dict = sample();
        assert_eq!(dict.add("42"), crate::dictionary::EditOutcome::Added);

        let result = Corrector::new(&dict).correct("42");
        assert!(result.is_correct());
        assert_eq!(result.word, "42");
        assert!(result.suggestions.is_empty());
    }

    #[test]
    fn test_trailing_punctuation_is_deleted() {
        let dict = sample();
        let result = Corrector::new(&dict).correct("Cat,");
        assert_eq!(result.word, "cat,");
        assert_eq!(result.suggestions, vec!["cat"]);
    }

    #[test]
    fn test_empty_dictionary() {
        let dict = Dictionary::new();
        let result = Corrector::new(&dict).correct("anything");
        assert_eq!(result.kind, MatchKind::NoMatch);
    }
}
