//! Spellcheck - frequency-ranked spelling correction.
//!
//! # Overview
//!
//! A misspelled word is corrected by proposing dictionary words that are one
//! or two single-character edits away, ranked by how often they appear in a
//! reference corpus.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │ Session / CLI   │ ← Menu loop and command line (session.rs, main.rs)
//! └────────┬────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  SpellChecker   │ ← Shared, locked dictionary handle (checker.rs)
//! └────────┬────────┘
//!          │
//!     ┌────┴─────┐
//!     ▼          ▼
//! ┌────────┐ ┌─────────┐
//! │Corrector│ │ Mutator │ ← Read path / write path (corrector.rs, mutator.rs)
//! └────┬───┘ └────┬────┘
//!      │          │
//!      ▼          ▼
//! ┌─────────────────┐
//! │ CandidateGen /  │ ← Edit neighborhoods, frequency table
//! │  Dictionary     │   (candidates.rs, dictionary.rs)
//! └─────────────────┘
//! ```
//!
//! # Example
//!
//! ```rust
//! use spellcheck::SpellChecker;
//!
//! let checker = SpellChecker::from_corpus("the cat sat on the mat");
//! assert!(checker.correct("The").is_correct());
//! assert_eq!(checker.correct("caxt").suggestions, vec!["cat".to_string()]);
//! ```

pub mod candidates;
pub mod checker;
pub mod config;
pub mod corpus;
pub mod corrector;
pub mod dictionary;
pub mod error;
pub mod mutator;
pub mod review;
pub mod session;

pub use candidates::CandidateGenerator;
pub use checker::SpellChecker;
pub use config::Config;
pub use corrector::{Corrector, MatchKind, Suggestions};
pub use dictionary::{Dictionary, EditOutcome};
pub use error::{Result, SpellcheckError};
pub use mutator::DictionaryMutator;
