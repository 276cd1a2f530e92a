//! Wordle Engine
//!
//! A single-player word guessing game: a target word is picked, guesses of the same length
//! are scored letter by letter, and the game is won or lost against an attempt limit.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_engine::core::{Game, GameState, LetterHint};
//! use wordle_engine::wordlists::{RandomWordPicker, WordPicker};
//!
//! let mut picker = RandomWordPicker::from_list(["speed"]).unwrap();
//! let mut game = Game::classic(&picker.pick_word()).unwrap();
//!
//! game.guess("erase").unwrap();
//! let hint = game.last_guess_hint().unwrap();
//! assert_eq!(hint.letter_hints()[0], LetterHint::PlacementIncorrect);
//!
//! assert_eq!(game.guess("speed"), Ok(GameState::Won { attempts: 2 }));
//! ```

// Core domain types
pub mod core;

// Word lists and pickers
pub mod wordlists;

// Consecutive games with statistics
pub mod session;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Tracing setup
pub mod logging;
