//! Wordle - CLI
//!
//! Play Wordle in the terminal against words from the embedded list, a file or stdin.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};
use wordle_engine::{
    commands::{PlayConfig, hint_word, pick_words, run_play},
    core::DEFAULT_ATTEMPTS_LIMIT,
    logging::init_tracing,
    output::print_guess_hint,
    wordlists::RandomWordPicker,
};

#[derive(Parser)]
#[command(
    name = "wordle",
    about = "Play Wordle in the terminal",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Word list file, one word per line ('-' reads stdin). Defaults to the embedded list
    #[arg(short = 'w', long, global = true)]
    wordlist: Option<PathBuf>,

    /// Log level used when RUST_LOG is not set
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Play interactively (default)
    Play {
        /// Attempts allowed per game
        #[arg(short, long, default_value_t = DEFAULT_ATTEMPTS_LIMIT, conflicts_with = "unlimited")]
        attempts: usize,

        /// Allow unlimited attempts
        #[arg(long)]
        unlimited: bool,

        /// Keep previous output instead of clearing the screen
        #[arg(long)]
        no_clear: bool,
    },

    /// Score a single guess against a target word
    Hint {
        /// The word to guess
        target: String,

        /// The guessed word
        guess: String,
    },

    /// Print picked words from the word list
    Pick {
        /// Number of words to pick
        #[arg(short = 'n', long, default_value = "1")]
        count: usize,

        /// Seed for reproducible picks
        #[arg(long)]
        seed: Option<u64>,
    },
}

/// Load the word picker based on the -w flag
fn load_picker(wordlist: Option<&Path>) -> Result<RandomWordPicker> {
    match wordlist {
        None => Ok(RandomWordPicker::embedded()),
        Some(path) if path == Path::new("-") => RandomWordPicker::from_reader(io::stdin().lock())
            .context("could not load words from stdin"),
        Some(path) => RandomWordPicker::from_path(path)
            .with_context(|| format!("could not load word list {}", path.display())),
    }
}

/// Source of guesses: the terminal when stdin already carried the word list
fn guess_input(words_from_stdin: bool) -> Result<Box<dyn BufRead>> {
    if words_from_stdin {
        let tty = File::open("/dev/tty")
            .context("words were read from stdin, guesses need a terminal")?;
        Ok(Box::new(BufReader::new(tty)))
    } else {
        Ok(Box::new(io::stdin().lock()))
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli.log_level);

    let wordlist = cli.wordlist.as_deref();

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play {
        attempts: DEFAULT_ATTEMPTS_LIMIT,
        unlimited: false,
        no_clear: false,
    });

    match command {
        Commands::Play {
            attempts,
            unlimited,
            no_clear,
        } => {
            let config = PlayConfig {
                attempts_limit: (!unlimited).then_some(attempts),
                clear_screen: !no_clear,
            };
            let picker = load_picker(wordlist)?;
            let words_from_stdin = wordlist == Some(Path::new("-"));
            run_play(picker, &config, guess_input(words_from_stdin)?)?;
            Ok(())
        }
        Commands::Hint { target, guess } => {
            let hint = hint_word(&target, &guess)?;
            print_guess_hint(&hint);
            println!("{}", hint.to_emoji());
            Ok(())
        }
        Commands::Pick { count, seed } => {
            let mut picker = load_picker(wordlist)?;
            let words = match seed {
                Some(seed) => {
                    let mut seeded = picker.with_rng(StdRng::seed_from_u64(seed));
                    pick_words(&mut seeded, count)
                }
                None => pick_words(&mut picker, count),
            };
            for word in words {
                println!("{word}");
            }
            Ok(())
        }
    }
}
