//! Interactive terminal game
//!
//! Plays consecutive games against picked words, reading guesses line by line.

use crate::core::DEFAULT_ATTEMPTS_LIMIT;
use crate::output::{print_board, print_guess_error, print_keyboard, print_state, print_statistics};
use crate::session::{Session, Statistics};
use crate::wordlists::WordPicker;
use anyhow::{Context, Result};
use crossterm::{
    cursor::MoveTo,
    execute,
    terminal::{Clear, ClearType},
};
use std::io::{self, BufRead, Write};
use tracing::debug;

/// Configuration for interactive play
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayConfig {
    /// Attempts per game, `None` for unlimited
    pub attempts_limit: Option<usize>,
    /// Clear the terminal between guesses
    pub clear_screen: bool,
}

impl PlayConfig {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            attempts_limit: Some(DEFAULT_ATTEMPTS_LIMIT),
            clear_screen: true,
        }
    }
}

impl Default for PlayConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// How a single game ended from the player's side
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum GameOutcome {
    Finished,
    Quit,
}

/// Run the interactive game loop until the player quits or input ends
///
/// Returns the statistics of the session.
///
/// # Errors
///
/// Returns an error if reading input or writing to the terminal fails, or if the picker
/// yields a word no game can be played with.
pub fn run_play<P: WordPicker, R: BufRead>(
    picker: P,
    config: &PlayConfig,
    mut input: R,
) -> Result<Statistics> {
    let mut session =
        Session::new(picker, config.attempts_limit).context("could not start a game")?;

    println!("\n╔══════════════════════════════════════╗");
    println!("║          Welcome to WORDLE           ║");
    println!("╚══════════════════════════════════════╝\n");
    println!("Type a guess and press enter. 'quit' to exit.\n");

    loop {
        if play_one_game(&mut session, config, &mut input)? == GameOutcome::Quit {
            break;
        }
        if !ask_keep_playing(&mut input)? {
            break;
        }
        session.new_game().context("could not start a new game")?;
    }

    print_statistics(session.statistics());
    println!("\nThanks for playing WORDLE. See you soon!\n");
    Ok(session.statistics().clone())
}

fn play_one_game<P: WordPicker, R: BufRead>(
    session: &mut Session<P>,
    config: &PlayConfig,
    input: &mut R,
) -> Result<GameOutcome> {
    clear_screen(config)?;
    println!("Playing one game of WORDLE\n");
    print_board(session.game());

    // A zero attempt limit ends the game before the first guess
    let state = session.game().state();
    if state.is_over() {
        print_state(session.game(), state);
        return Ok(GameOutcome::Finished);
    }

    loop {
        let Some(line) = read_line(input, "Your guess")? else {
            return Ok(GameOutcome::Quit);
        };
        let guess = line.trim();
        if guess.is_empty() {
            println!("Please provide a guess word.");
            continue;
        }
        if matches!(guess.to_lowercase().as_str(), "quit" | "q" | "exit") {
            return Ok(GameOutcome::Quit);
        }

        match session.guess(guess) {
            Err(error) => {
                debug!(%error, "guess rejected");
                print_guess_error(&error);
            }
            Ok(state) => {
                clear_screen(config)?;
                print_board(session.game());
                print_keyboard(session.game());
                print_state(session.game(), state);
                if state.is_over() {
                    return Ok(GameOutcome::Finished);
                }
            }
        }
    }
}

fn ask_keep_playing<R: BufRead>(input: &mut R) -> Result<bool> {
    loop {
        let Some(answer) = read_line(input, "\nDo you want to keep playing? (y/n)")? else {
            return Ok(false);
        };
        match answer.trim().to_lowercase().as_str() {
            "y" | "yes" => return Ok(true),
            "n" | "no" | "quit" | "q" => return Ok(false),
            _ => {}
        }
    }
}

/// Prompt and read one line, `None` at end of input
fn read_line<R: BufRead>(input: &mut R, prompt: &str) -> Result<Option<String>> {
    print!("{prompt}: ");
    io::stdout().flush().context("could not write prompt")?;

    let mut line = String::new();
    let read = input.read_line(&mut line).context("could not read input")?;
    Ok((read > 0).then_some(line))
}

fn clear_screen(config: &PlayConfig) -> Result<()> {
    if config.clear_screen {
        execute!(io::stdout(), Clear(ClearType::All), MoveTo(0, 0))
            .context("could not clear the terminal")?;
    }
    Ok(())
}
