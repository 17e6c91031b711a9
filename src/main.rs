//! Spellcheck command-line front end.
//!
//! # Commands
//!
//! - `suggest WORD...`: print ranked suggestions for each word
//! - `check TEXT`: list the misspelled tokens of a sentence
//! - `interactive` (default): menu loop for checking sentences and editing
//!   the dictionary
//!
//! The dictionary is built at startup from `--corpus`, the configured
//! `corpus_path`, or the embedded corpus, in that order. Dictionary edits last
//! for the current run only.

use clap::{Parser, Subcommand};
use env_logger::Builder;
use log::LevelFilter;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process;

use spellcheck::config::Config;
use spellcheck::corpus;
use spellcheck::review;
use spellcheck::session::Session;
use spellcheck::SpellChecker;

#[derive(Parser, Debug)]
#[command(name = "spellcheck")]
#[command(about = "Frequency-ranked spelling correction")]
#[command(version)]
struct Args {
    /// Corpus file to build the dictionary from
    #[arg(short, long)]
    corpus: Option<PathBuf>,

    /// Config file path (defaults to the platform config directory)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Only log errors
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    /// Write the effective settings (including --corpus) back to the config file
    #[arg(long)]
    save_config: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print suggestions for each word
    Suggest {
        #[arg(required = true)]
        words: Vec<String>,

        /// Print only the top suggestion for each word
        #[arg(long, conflicts_with = "json")]
        best: bool,

        /// Print results as JSON
        #[arg(long)]
        json: bool,
    },
    /// List misspelled words in a sentence
    Check {
        text: String,

        /// Print results as JSON
        #[arg(long)]
        json: bool,
    },
    /// Menu for checking sentences and editing the dictionary
    Interactive,
}

fn main() {
    let args = Args::parse();

    let log_level = if args.quiet {
        LevelFilter::Error
    } else {
        match args.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            _ => LevelFilter::Debug,
        }
    };

    Builder::new()
        .filter_level(log_level)
        .format(|buf, record| writeln!(buf, "[{}] {}", record.level(), record.args()))
        .init();

    if let Err(e) = run(args) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn run(args: Args) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = match &args.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    if let Some(corpus) = &args.corpus {
        config.corpus_path = Some(corpus.clone());
    }

    if args.save_config {
        match &args.config {
            Some(path) => config.save_to(path)?,
            None => config.save()?,
        }
        log::info!("Saved configuration");
    }

    let dictionary = corpus::load(config.corpus_path.as_deref())?;
    let checker = SpellChecker::new(dictionary);

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match args.command.unwrap_or(Command::Interactive) {
        Command::Suggest { words, best, json } => {
            let results = checker.correct_all(words.iter().map(String::as_str));
            if json {
                serde_json::to_writer_pretty(&mut out, &results)?;
                writeln!(out)?;
            } else {
                for result in &results {
                    if result.is_correct() {
                        writeln!(out, "{}: correct", result.word)?;
                    } else if result.is_empty() {
                        writeln!(out, "{}: no suggestions", result.word)?;
                    } else if best {
                        writeln!(out, "{}: {}", result.word, result.best().unwrap_or_default())?;
                    } else {
                        let shown = config.limit(&result.suggestions);
                        writeln!(out, "{}: {}", result.word, shown.join(", "))?;
                    }
                }
            }
        }
        Command::Check { text, json } => {
            let misspellings = review::find_misspellings(&checker, &text);
            if json {
                serde_json::to_writer_pretty(&mut out, &misspellings)?;
                writeln!(out)?;
            } else if misspellings.is_empty() {
                writeln!(out, "All words are spelled correctly.")?;
            } else {
                for misspelling in &misspellings {
                    let shown = config.limit(&misspelling.suggestions);
                    writeln!(
                        out,
                        "{} (word {}): {}",
                        misspelling.token,
                        misspelling.index + 1,
                        shown.join(", ")
                    )?;
                }
            }
        }
        Command::Interactive => {
            let stdin = io::stdin();
            let mut session = Session::new(checker, config, stdin.lock(), out);
            session.run()?;
        }
    }

    Ok(())
}
