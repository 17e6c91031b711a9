//! Errors raised by the layers around the correction core.
//!
//! Correction and dictionary edits never fail; only reading a corpus, loading
//! configuration and talking to the terminal can.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SpellcheckError {
    /// The corpus file could not be read.
    #[error("failed to read corpus {}: {source}", .path.display())]
    Corpus {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("configuration error: {0}")]
    Config(#[from] confy::ConfyError),

    /// Terminal read/write failure during an interactive session.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, SpellcheckError>;
