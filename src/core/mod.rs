//! Core domain types for Wordle
//!
//! This module contains the game engine with no I/O: word normalization, hint calculation
//! and the game state machine. Everything here is pure and deterministic.

mod game;
mod hint;
mod word;

pub use game::{DEFAULT_ATTEMPTS_LIMIT, Game, GameState, GuessError, NewGameError};
pub use hint::{GuessHint, LetterHint};
pub use word::Word;
