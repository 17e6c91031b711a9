use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

const APP_NAME: &str = "spellcheck";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Corpus file the dictionary is built from; the embedded corpus when unset.
    pub corpus_path: Option<PathBuf>,
    /// How many suggestions to show per word; 0 shows all of them.
    pub max_suggestions: usize,
    /// Ask before walking through misspellings in interactive mode.
    pub confirm_corrections: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            corpus_path: None,
            max_suggestions: 0,
            confirm_corrections: true,
        }
    }
}

impl Config {
    /// Load from the platform config directory, falling back to defaults.
    pub fn load() -> Result<Self> {
        match confy::load(APP_NAME, Some("config")) {
            Ok(config) => Ok(config),
            Err(err) => {
                log::warn!("Failed to load config, using defaults: {err}");
                Ok(Self::default())
            }
        }
    }

    /// Load from an explicit file, creating it with defaults if missing.
    pub fn load_from(path: &Path) -> Result<Self> {
        match confy::load_path(path) {
            Ok(config) => Ok(config),
            Err(err) => {
                log::warn!(
                    "Failed to load config from {}, using defaults: {err}",
                    path.display()
                );
                Ok(Self::default())
            }
        }
    }

    pub fn save(&self) -> Result<()> {
        confy::store(APP_NAME, Some("config"), self)?;
        Ok(())
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        confy::store_path(path, self)?;
        Ok(())
    }

    /// Trim a suggestion list to the configured display limit.
    pub fn limit<'a>(&self, suggestions: &'a [String]) -> &'a [String] {
        if self.max_suggestions == 0 || suggestions.len() <= self.max_suggestions {
            suggestions
        } else {
            &suggestions[..self.max_suggestions]
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let config = Config {
            corpus_path: Some(PathBuf::from("/tmp/corpus.txt")),
            max_suggestions: 3,
            confirm_corrections: false,
        };
        config.save_to(&path).unwrap();

        assert_eq!(Config::load_from(&path).unwrap(), config);
    }

    #[test]
    fn test_save_into_missing_directory_is_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("not_a_dir");
        std::fs::write(&blocker, "").unwrap();

        let err = Config::default()
            .save_to(&blocker.join("config.toml"))
            .unwrap_err();
        assert!(matches!(err, crate::error::SpellcheckError::Config(_)));
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("fresh.toml");

        assert_eq!(Config::load_from(&path).unwrap(), Config::default());
    }

    #[test]
    fn test_unreadable_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.toml");
        std::fs::write(&path, "max_suggestions = \"many\"").unwrap();

        assert_eq!(Config::load_from(&path).unwrap(), Config::default());
    }

    #[test]
    fn test_limit() {
        let words: Vec<String> = ["a", "b", "c"].iter().map(|w| w.to_string()).collect();

        let all = Config::default();
        assert_eq!(all.limit(&words).len(), 3);

        let two = Config {
            max_suggestions: 2,
            ..Config::default()
        };
        assert_eq!(two.limit(&words), &words[..2]);
    }
}
