//! Single hint command
//!
//! Scores one guess against a given target without playing a full game.

use crate::core::{Game, GuessHint};
use anyhow::{Context, Result};

/// Calculate the hint for `guess` against `target`
///
/// Goes through [`Game::guess`], so the same validation applies as in play.
///
/// # Errors
///
/// Returns an error if the target is empty or the guess does not have as many
/// letters as the target.
pub fn hint_word(target: &str, guess: &str) -> Result<GuessHint> {
    let mut game = Game::new(target, None).context("invalid target word")?;
    game.guess(guess)
        .with_context(|| format!("cannot score {guess:?} against {target:?}"))?;

    game.last_guess_hint()
        .cloned()
        .context("accepted guess left no hint")
}
