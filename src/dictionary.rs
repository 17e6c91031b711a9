//! Word frequency table backing every correction.
//!
//! The dictionary maps lowercase words to the number of times they were seen
//! in a reference corpus. It is built once from corpus text and then edited in
//! place through [`Dictionary::add`], [`Dictionary::remove`] and
//! [`Dictionary::rename`].
//!
//! # Corpus Counting
//!
//! A corpus is any text. Maximal runs of the letters `a`-`z` (either case) are
//! words; every other character is a separator:
//! ```text
//! "The cat sat on the mat."  ->  the:2 cat:1 sat:1 on:1 mat:1
//! "don't"                    ->  don:1 t:1
//! ```
//!
//! # Edit Outcomes
//!
//! Mutations never fail. A conflicting edit (adding a word that is already
//! known, removing a word that is not) leaves the table untouched and is
//! reported back as an [`EditOutcome`] for the caller to show or ignore.

use ahash::AHashMap;
use serde::Serialize;
use std::fmt;

/// Result of a dictionary edit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum EditOutcome {
    /// The word was inserted with a count of 1.
    Added,
    /// The word was already present; nothing changed.
    #[serde(rename = "already-existed")]
    AlreadyExists,
    /// The word was deleted.
    Removed,
    /// The word was not present; nothing changed.
    NotFound,
    /// The old word's count now lives under the new word.
    Renamed,
    /// The word was empty after normalization; nothing changed.
    Empty,
}

impl EditOutcome {
    /// Whether the edit changed the dictionary.
    pub fn is_change(self) -> bool {
        matches!(self, Self::Added | Self::Removed | Self::Renamed)
    }
}

impl fmt::Display for EditOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Added => "added",
            Self::AlreadyExists => "already-existed",
            Self::Removed => "removed",
            Self::NotFound => "not-found",
            Self::Renamed => "renamed",
            Self::Empty => "empty",
        };
        f.write_str(label)
    }
}

/// Lowercase a word for lookup or mutation.
///
/// Idempotent: `normalize(&normalize(w)) == normalize(w)`.
pub fn normalize(word: &str) -> String {
    word.to_lowercase()
}

/// In-memory frequency table over known words.
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    /// word -> occurrence count
    words: AHashMap<String, u64>,
}

impl Dictionary {
    /// Create an empty dictionary.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a dictionary by counting the alphabetic runs of `corpus`.
    ///
    /// Never fails; a corpus without letters yields an empty dictionary.
    ///
    /// # Example
    /// ```rust
    /// use spellcheck::Dictionary;
    ///
    /// let dict = Dictionary::build("the cat sat on the mat");
    /// assert_eq!(dict.frequency_of("the"), 2);
    /// assert_eq!(dict.len(), 5);
    /// ```
    pub fn build(corpus: &str) -> Self {
        let mut words: AHashMap<String, u64> = AHashMap::new();

        for run in corpus
            .split(|c: char| !c.is_ascii_alphabetic())
            .filter(|run| !run.is_empty())
        {
            *words.entry(run.to_ascii_lowercase()).or_insert(0) += 1;
        }

        log::info!("Dictionary built: {} distinct words", words.len());
        Self { words }
    }

    /// Case-insensitive membership test.
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains_key(normalize(word).as_str())
    }

    /// Stored count for `word`, or 0 when it is absent.
    ///
    /// Callers that need to tell "absent" from "count 0" should check
    /// [`contains`](Self::contains) first.
    pub fn frequency_of(&self, word: &str) -> u64 {
        self.words
            .get(normalize(word).as_str())
            .copied()
            .unwrap_or(0)
    }

    /// Count lookup for an already-normalized word.
    pub(crate) fn get(&self, normalized: &str) -> Option<u64> {
        self.words.get(normalized).copied()
    }

    /// Insert `word` with a count of 1 unless it is already known.
    pub fn add(&mut self, word: &str) -> EditOutcome {
        let word = normalize(word);
        if word.is_empty() {
            return EditOutcome::Empty;
        }

        if self.words.contains_key(&word) {
            return EditOutcome::AlreadyExists;
        }

        self.words.insert(word, 1);
        EditOutcome::Added
    }

    /// Delete `word` if present.
    pub fn remove(&mut self, word: &str) -> EditOutcome {
        match self.words.remove(normalize(word).as_str()) {
            Some(_) => EditOutcome::Removed,
            None => EditOutcome::NotFound,
        }
    }

    /// Move `old_word`'s count to `new_word` and delete `old_word`.
    ///
    /// An existing `new_word` entry is overwritten, not merged. When
    /// `old_word` is absent nothing changes.
    pub fn rename(&mut self, old_word: &str, new_word: &str) -> EditOutcome {
        let old_word = normalize(old_word);
        let new_word = normalize(new_word);

        if !self.words.contains_key(&old_word) {
            return EditOutcome::NotFound;
        }
        if new_word.is_empty() {
            return EditOutcome::Empty;
        }

        if let Some(count) = self.words.remove(&old_word) {
            self.words.insert(new_word, count);
        }
        EditOutcome::Renamed
    }

    /// Number of distinct words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
