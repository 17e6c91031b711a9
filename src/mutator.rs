//! Write access to a dictionary for editing front ends.

use crate::dictionary::{Dictionary, EditOutcome};

/// Add, remove and rename words in a borrowed dictionary.
pub struct DictionaryMutator<'a> {
    dictionary: &'a mut Dictionary,
}

impl<'a> DictionaryMutator<'a> {
    pub fn new(dictionary: &'a mut Dictionary) -> Self {
        Self { dictionary }
    }

    pub fn add(&mut self, word: &str) -> EditOutcome {
        let outcome = self.dictionary.add(word);
        log::info!("add '{}': {}", word, outcome);
        outcome
    }

    pub fn remove(&mut self, word: &str) -> EditOutcome {
        let outcome = self.dictionary.remove(word);
        log::info!("remove '{}': {}", word, outcome);
        outcome
    }

    pub fn rename(&mut self, old_word: &str, new_word: &str) -> EditOutcome {
        let outcome = self.dictionary.rename(old_word, new_word);
        log::info!("rename '{}' -> '{}': {}", old_word, new_word, outcome);
        outcome
    }
}
