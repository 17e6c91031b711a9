//! Interactive menu for checking sentences and editing the dictionary.
//!
//! The session is generic over its input and output so the same loop drives
//! a terminal (`stdin().lock()` / `stdout()`) or an in-memory script in tests.
//! Reaching end of input at any prompt ends the session cleanly.

use crate::checker::SpellChecker;
use crate::config::Config;
use crate::dictionary::EditOutcome;
use crate::error::Result;
use crate::review::{self, Misspelling};
use std::io::{BufRead, Write};

/// What happens to one misspelled token.
enum Resolution {
    Replace(String),
    Skip,
}

pub struct Session<R, W> {
    checker: SpellChecker,
    config: Config,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(checker: SpellChecker, config: Config, input: R, output: W) -> Self {
        Self {
            checker,
            config,
            input,
            output,
        }
    }

    /// Give back the output sink, e.g. to inspect a test transcript.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Run the menu loop until the user exits or input ends.
    pub fn run(&mut self) -> Result<()> {
        writeln!(
            self.output,
            "Spellcheck ready: {} words in dictionary.",
            self.checker.word_count()
        )?;

        loop {
            self.show_menu()?;
            let Some(option) = self.prompt("\nSelect an option: ")? else {
                break;
            };

            let keep_going = match option.as_str() {
                "1" => self.check_sentence()?,
                "2" => self.add_word()?,
                "3" => self.remove_word()?,
                "4" => self.edit_word()?,
                "5" => {
                    writeln!(self.output, "\nExiting...")?;
                    false
                }
                _ => {
                    writeln!(self.output, "\nInvalid option! Please try again.")?;
                    true
                }
            };

            if !keep_going {
                break;
            }
        }

        self.output.flush()?;
        Ok(())
    }

    fn show_menu(&mut self) -> Result<()> {
        writeln!(self.output, "\nOptions:")?;
        writeln!(self.output, "1. Check spelling of a sentence")?;
        writeln!(self.output, "2. Add a new word to the dictionary")?;
        writeln!(self.output, "3. Remove a word from the dictionary")?;
        writeln!(self.output, "4. Edit an existing word")?;
        writeln!(self.output, "5. Exit")?;
        Ok(())
    }

    /// Print `text`, then read one trimmed line. `None` at end of input.
    fn prompt(&mut self, text: &str) -> Result<Option<String>> {
        write!(self.output, "{text}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    fn check_sentence(&mut self) -> Result<bool> {
        let Some(sentence) = self.prompt("\nEnter a sentence: ")? else {
            return Ok(false);
        };

        let misspellings = review::find_misspellings(&self.checker, &sentence);
        if misspellings.is_empty() {
            writeln!(self.output, "\nAll words are spelled correctly.")?;
            return Ok(true);
        }

        writeln!(
            self.output,
            "\nFound {} misspelled word(s).",
            misspellings.len()
        )?;

        if self.config.confirm_corrections {
            let Some(answer) = self.prompt("\nDo you want to correct them? (yes/no): ")? else {
                return Ok(false);
            };
            if !answer.eq_ignore_ascii_case("yes") {
                writeln!(self.output, "\nCorrection skipped.")?;
                return Ok(true);
            }
        }

        writeln!(self.output, "\nStarting correction process...")?;
        let mut replacements = Vec::new();
        for misspelling in &misspellings {
            match self.resolve(misspelling)? {
                Some(Resolution::Replace(word)) => replacements.push((misspelling.index, word)),
                Some(Resolution::Skip) => {}
                None => return Ok(false),
            }
        }

        let tokens = review::tokenize(&sentence);
        writeln!(
            self.output,
            "\nCorrected sentence:\n{}",
            review::apply(&tokens, &replacements)
        )?;
        Ok(true)
    }

    /// Ask how to fix one token. `None` at end of input.
    fn resolve(&mut self, misspelling: &Misspelling) -> Result<Option<Resolution>> {
        let shown = self.config.limit(&misspelling.suggestions).to_vec();

        writeln!(
            self.output,
            "\n\"{}\" is misspelled. Suggestions: {}",
            misspelling.token,
            shown.join(", ")
        )?;
        writeln!(self.output, "Options:")?;
        writeln!(self.output, "1. Choose a suggestion")?;
        writeln!(self.output, "2. Enter a custom replacement")?;
        writeln!(self.output, "3. Skip correction")?;

        let Some(option) = self.prompt("Select an option (1/2/3): ")? else {
            return Ok(None);
        };

        let resolution = match option.as_str() {
            "1" => {
                writeln!(self.output, "\nSuggestions:")?;
                for (i, suggestion) in shown.iter().enumerate() {
                    writeln!(self.output, "{}. {}", i + 1, suggestion)?;
                }
                let Some(choice) = self.prompt("Select a suggestion: ")? else {
                    return Ok(None);
                };
                match choice
                    .parse::<usize>()
                    .ok()
                    .and_then(|n| n.checked_sub(1))
                    .and_then(|i| shown.get(i))
                {
                    Some(word) => Resolution::Replace(word.clone()),
                    None => {
                        writeln!(self.output, "Invalid choice. Skipping correction.")?;
                        Resolution::Skip
                    }
                }
            }
            "2" => {
                let Some(replacement) = self.prompt("Enter your replacement word: ")? else {
                    return Ok(None);
                };
                Resolution::Replace(replacement)
            }
            "3" => Resolution::Skip,
            _ => {
                writeln!(self.output, "Invalid option. Skipping correction.")?;
                Resolution::Skip
            }
        };

        Ok(Some(resolution))
    }

    fn add_word(&mut self) -> Result<bool> {
        let Some(word) = self.prompt("\nEnter a word to add: ")? else {
            return Ok(false);
        };
        let outcome = self.checker.add(&word);
        self.report(outcome, &word, None)?;
        Ok(true)
    }

    fn remove_word(&mut self) -> Result<bool> {
        let Some(word) = self.prompt("\nEnter a word to remove: ")? else {
            return Ok(false);
        };
        let outcome = self.checker.remove(&word);
        self.report(outcome, &word, None)?;
        Ok(true)
    }

    fn edit_word(&mut self) -> Result<bool> {
        let Some(old_word) = self.prompt("\nEnter the word to edit: ")? else {
            return Ok(false);
        };
        let Some(new_word) = self.prompt("Enter the new word: ")? else {
            return Ok(false);
        };
        let outcome = self.checker.rename(&old_word, &new_word);
        self.report(outcome, &old_word, Some(&new_word))?;
        Ok(true)
    }

    fn report(&mut self, outcome: EditOutcome, word: &str, new_word: Option<&str>) -> Result<()> {
        let word = word.to_lowercase();
        let new_word = new_word.map(str::to_lowercase).unwrap_or_default();

        let message = match outcome {
            EditOutcome::Added => format!("Added \"{word}\" to the dictionary."),
            EditOutcome::AlreadyExists => format!("\"{word}\" already exists in the dictionary."),
            EditOutcome::Removed => format!("Removed \"{word}\" from the dictionary."),
            EditOutcome::NotFound => format!("\"{word}\" not found in the dictionary."),
            EditOutcome::Renamed => {
                format!("Edited \"{word}\" to \"{new_word}\" in the dictionary.")
            }
            EditOutcome::Empty => "No word given; dictionary unchanged.".to_string(),
        };
        writeln!(self.output, "{message}")?;
        if outcome.is_change() {
            writeln!(
                self.output,
                "Dictionary now has {} words.",
                self.checker.word_count()
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn run_script(script: &str, config: Config) -> (SpellChecker, String) {
        let checker = SpellChecker::from_corpus("the cat sat on the mat");
        let mut session = Session::new(
            checker.clone(),
            config,
            Cursor::new(script.as_bytes().to_vec()),
            Vec::new(),
        );
        session.run().unwrap();
        let transcript = String::from_utf8(session.into_output()).unwrap();
        (checker, transcript)
    }

    #[test]
    fn test_exit() {
        let (_, out) = run_script("5\n", Config::default());
        assert!(out.contains("1. Check spelling of a sentence"));
        assert!(out.contains("Exiting..."));
    }

    #[test]
    fn test_end_of_input_ends_session() {
        let (_, out) = run_script("", Config::default());
        assert!(out.contains("Select an option"));
        assert!(!out.contains("Exiting..."));
    }

    #[test]
    fn test_invalid_option() {
        let (_, out) = run_script("9\n5\n", Config::default());
        assert!(out.contains("Invalid option! Please try again."));
        assert!(out.contains("Exiting..."));
    }

    #[test]
    fn test_all_correct_sentence() {
        let (_, out) = run_script("1\nThe cat sat\n5\n", Config::default());
        assert!(out.contains("All words are spelled correctly."));
    }

    #[test]
    fn test_choose_suggestion() {
        let (_, out) = run_script("1\nteh cat\nyes\n1\n1\n5\n", Config::default());
        assert!(out.contains("Found 1 misspelled word(s)."));
        assert!(out.contains("\"teh\" is misspelled. Suggestions: the"));
        assert!(out.contains("Corrected sentence:\nthe cat"));
    }

    #[test]
    fn test_custom_replacement_and_skip() {
        let (_, out) = run_script(
            "1\nteh caxt\nyes\n2\nThe\n3\n5\n",
            Config::default(),
        );
        assert!(out.contains("Found 2 misspelled word(s)."));
        assert!(out.contains("Corrected sentence:\nThe caxt"));
    }

    #[test]
    fn test_invalid_suggestion_choice_skips() {
        let (_, out) = run_script("1\nteh\nyes\n1\n7\n5\n", Config::default());
        assert!(out.contains("Invalid choice. Skipping correction."));
        assert!(out.contains("Corrected sentence:\nteh"));
    }

    #[test]
    fn test_decline_corrections() {
        let (_, out) = run_script("1\nteh\nno\n5\n", Config::default());
        assert!(out.contains("Correction skipped."));
        assert!(!out.contains("Corrected sentence"));
    }

    #[test]
    fn test_no_confirmation_when_disabled() {
        let config = Config {
            confirm_corrections: false,
            ..Config::default()
        };
        let (_, out) = run_script("1\nteh\n1\n1\n5\n", config);
        assert!(!out.contains("Do you want to correct them?"));
        assert!(out.contains("Corrected sentence:\nthe"));
    }

    #[test]
    fn test_suggestion_limit() {
        let config = Config {
            max_suggestions: 2,
            ..Config::default()
        };
        let (_, out) = run_script("1\nat\nyes\n3\n5\n", config);
        assert!(out.contains("Suggestions: cat, mat\n"));
    }

    #[test]
    fn test_dictionary_edits() {
        let (checker, out) = run_script(
            "2\nDog\n2\ncat\n3\nmat\n3\nmat\n4\ndog\ndig\n4\ncow\nbull\n5\n",
            Config::default(),
        );
        assert!(out.contains("Added \"dog\" to the dictionary."));
        assert!(out.contains("\"cat\" already exists in the dictionary."));
        assert!(out.contains("Removed \"mat\" from the dictionary."));
        assert!(out.contains("\"mat\" not found in the dictionary."));
        assert!(out.contains("Edited \"dog\" to \"dig\" in the dictionary."));
        assert!(out.contains("\"cow\" not found in the dictionary."));
        // added dog (6), removed mat (5); rejected edits print no count
        assert!(out.contains("Dictionary now has 6 words."));
        assert!(out.contains("Dictionary now has 5 words."));
        assert_eq!(out.matches("Dictionary now has").count(), 3);

        assert!(checker.contains("dig"));
        assert!(!checker.contains("dog"));
        assert!(!checker.contains("mat"));
    }
}
