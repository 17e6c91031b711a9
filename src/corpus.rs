//! Corpus loading.
//!
//! A dictionary is built from a plain-text corpus file when one is given,
//! otherwise from the corpus embedded in the binary at compile time.

use crate::dictionary::Dictionary;
use crate::error::{Result, SpellcheckError};
use std::fs;
use std::path::Path;

/// Corpus compiled into the binary.
pub const EMBEDDED_CORPUS: &str = include_str!("../corpus/corpus.txt");

/// Build a dictionary from `path`, or from the embedded corpus when `None`.
///
/// # Errors
/// Returns [`SpellcheckError::Corpus`] if the file cannot be read.
pub fn load(path: Option<&Path>) -> Result<Dictionary> {
    match path {
        Some(path) => load_file(path),
        None => {
            let dictionary = Dictionary::build(EMBEDDED_CORPUS);
            log::info!("Loaded embedded corpus: {} words", dictionary.len());
            Ok(dictionary)
        }
    }
}

/// Build a dictionary from the corpus file at `path`.
pub fn load_file(path: &Path) -> Result<Dictionary> {
    let text = fs::read_to_string(path).map_err(|source| SpellcheckError::Corpus {
        path: path.to_path_buf(),
        source,
    })?;

    let dictionary = Dictionary::build(&text);
    log::info!(
        "Loaded corpus from {}: {} words",
        path.display(),
        dictionary.len()
    );
    Ok(dictionary)
}
