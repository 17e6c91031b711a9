//! Thread-safe handle tying a dictionary to its corrector and mutator.
//!
//! Corrections take the read lock for the whole two-stage search, so a
//! concurrent edit can never land between the distance-1 and distance-2
//! passes. Edits take the write lock.
//!
//! Uses `parking_lot::RwLock` for fast, compact locking without poisoning.

use crate::corrector::{Corrector, Suggestions};
use crate::dictionary::{Dictionary, EditOutcome};
use crate::mutator::DictionaryMutator;
use parking_lot::RwLock;
use std::sync::Arc;

/// Shared spell checker. Cloning yields another handle to the same dictionary.
#[derive(Debug, Clone, Default)]
pub struct SpellChecker {
    dictionary: Arc<RwLock<Dictionary>>,
}

impl SpellChecker {
    pub fn new(dictionary: Dictionary) -> Self {
        Self {
            dictionary: Arc::new(RwLock::new(dictionary)),
        }
    }

    /// Build a checker straight from corpus text.
    pub fn from_corpus(corpus: &str) -> Self {
        Self::new(Dictionary::build(corpus))
    }

    pub fn correct(&self, word: &str) -> Suggestions {
        let dictionary = self.dictionary.read();
        Corrector::new(&dictionary).correct(word)
    }

    /// Correct several words against one dictionary snapshot.
    pub fn correct_all<'w, I>(&self, words: I) -> Vec<Suggestions>
    where
        I: IntoIterator<Item = &'w str>,
    {
        let dictionary = self.dictionary.read();
        let corrector = Corrector::new(&dictionary);
        words.into_iter().map(|word| corrector.correct(word)).collect()
    }

    pub fn contains(&self, word: &str) -> bool {
        self.dictionary.read().contains(word)
    }

    pub fn frequency_of(&self, word: &str) -> u64 {
        self.dictionary.read().frequency_of(word)
    }

    pub fn word_count(&self) -> usize {
        self.dictionary.read().len()
    }

    pub fn add(&self, word: &str) -> EditOutcome {
        let mut dictionary = self.dictionary.write();
        DictionaryMutator::new(&mut dictionary).add(word)
    }

    pub fn remove(&self, word: &str) -> EditOutcome {
        let mut dictionary = self.dictionary.write();
        DictionaryMutator::new(&mut dictionary).remove(word)
    }

    pub fn rename(&self, old_word: &str, new_word: &str) -> EditOutcome {
        let mut dictionary = self.dictionary.write();
        DictionaryMutator::new(&mut dictionary).rename(old_word, new_word)
    }
}
