//! Game state machine
//!
//! A game owns the target word, an optional attempt limit and the ordered hints of every
//! accepted guess. Its state is derived from those three, never stored.

use super::{GuessHint, LetterHint, Word};
use rustc_hash::FxHashMap;
use std::fmt;
use thiserror::Error;
use tracing::debug;

/// Attempts allowed in a classic game
pub const DEFAULT_ATTEMPTS_LIMIT: usize = 6;

/// Wordle game state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    /// The game is not done yet
    Pending {
        /// Attempts left before losing, `None` when unlimited
        attempts_remaining: Option<usize>,
    },
    /// The last guess was the target word
    Won {
        /// Number of guesses performed to win
        attempts: usize,
    },
    /// The attempt limit was reached without finding the word
    Lost,
}

impl GameState {
    /// Check if no further guesses can be accepted
    #[must_use]
    pub const fn is_over(self) -> bool {
        !matches!(self, Self::Pending { .. })
    }
}

impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pending {
                attempts_remaining: Some(n),
            } => write!(f, "pending ({n} remaining)"),
            Self::Pending {
                attempts_remaining: None,
            } => write!(f, "pending"),
            Self::Won { attempts } => write!(f, "won in {attempts}"),
            Self::Lost => write!(f, "lost"),
        }
    }
}

/// A new game could not be created
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NewGameError {
    #[error("word to guess must not be empty")]
    EmptyTarget,
}

/// A guess was rejected; the game is left untouched
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GuessError {
    #[error("game is already over ({0})")]
    GameOver(GameState),
    #[error("guessed word has {given} letters, expected {expected}")]
    LengthInvalid { given: usize, expected: usize },
    #[error("word has already been played")]
    AlreadyPlayed,
}

/// Wordle game
///
/// # Examples
/// ```
/// use wordle_engine::core::{Game, GameState, GuessError};
///
/// let mut game = Game::new("speed", Some(3)).unwrap();
/// assert_eq!(
///     game.guess("erase"),
///     Ok(GameState::Pending { attempts_remaining: Some(2) })
/// );
/// assert_eq!(game.guess("ERASE"), Err(GuessError::AlreadyPlayed));
/// assert_eq!(game.guess("Speed"), Ok(GameState::Won { attempts: 2 }));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    target: Word,
    attempts_limit: Option<usize>,
    history: Vec<GuessHint>,
}

impl Game {
    /// New game whose goal is to guess `target`
    ///
    /// The target is upper-cased. `attempts_limit` of `None` means unlimited guesses;
    /// `Some(0)` creates a game that is lost from the start.
    ///
    /// # Errors
    ///
    /// Returns `NewGameError::EmptyTarget` if `target` is empty.
    pub fn new(target: &str, attempts_limit: Option<usize>) -> Result<Self, NewGameError> {
        let target = Word::new(target);
        if target.is_empty() {
            return Err(NewGameError::EmptyTarget);
        }

        Ok(Self {
            target,
            attempts_limit,
            history: Vec::new(),
        })
    }

    /// New game with the classic limit of [`DEFAULT_ATTEMPTS_LIMIT`] attempts
    ///
    /// # Errors
    ///
    /// Returns `NewGameError::EmptyTarget` if `target` is empty.
    pub fn classic(target: &str) -> Result<Self, NewGameError> {
        Self::new(target, Some(DEFAULT_ATTEMPTS_LIMIT))
    }

    /// Current game state
    #[must_use]
    pub fn state(&self) -> GameState {
        let attempts = self.history.len();

        if self
            .history
            .last()
            .is_some_and(|hint| hint.guessed() == self.target.text())
        {
            GameState::Won { attempts }
        } else if self.attempts_limit.is_some_and(|limit| attempts >= limit) {
            GameState::Lost
        } else {
            GameState::Pending {
                attempts_remaining: self.attempts_limit.map(|limit| limit - attempts),
            }
        }
    }

    /// Submit a guess
    ///
    /// The guess is upper-cased before any check. Checks run in this order and the
    /// first failure is returned without changing the game:
    /// 1. the game must still be pending (`GameOver`)
    /// 2. the guess must have as many letters as the target (`LengthInvalid`)
    /// 3. the guess must not have been played before (`AlreadyPlayed`)
    ///
    /// On success the hint is recorded and the new state is returned.
    ///
    /// # Errors
    ///
    /// Returns the `GuessError` of the first failed check.
    pub fn guess(&mut self, guess: &str) -> Result<GameState, GuessError> {
        let state = self.state();
        if state.is_over() {
            return Err(GuessError::GameOver(state));
        }

        let guess = Word::new(guess);
        if guess.len() != self.target.len() {
            return Err(GuessError::LengthInvalid {
                given: guess.len(),
                expected: self.target.len(),
            });
        }

        if self
            .history
            .iter()
            .any(|hint| hint.guessed() == guess.text())
        {
            return Err(GuessError::AlreadyPlayed);
        }

        let hint = GuessHint::calculate(&guess, &self.target);
        self.history.push(hint);

        let state = self.state();
        debug!(guess = %guess, attempts = self.history.len(), %state, "guess accepted");
        Ok(state)
    }

    /// The word to guess, upper-cased
    #[must_use]
    pub fn target(&self) -> &str {
        self.target.text()
    }

    /// Number of letters in the word to guess
    #[must_use]
    pub fn word_length(&self) -> usize {
        self.target.len()
    }

    /// Number of accepted guesses so far
    #[must_use]
    pub fn attempts(&self) -> usize {
        self.history.len()
    }

    #[must_use]
    pub const fn attempts_limit(&self) -> Option<usize> {
        self.attempts_limit
    }

    /// Hints for the newest guess, if any
    #[must_use]
    pub fn last_guess_hint(&self) -> Option<&GuessHint> {
        self.history.last()
    }

    /// Hints for every accepted guess, oldest first
    #[must_use]
    pub fn guess_hints(&self) -> &[GuessHint] {
        &self.history
    }

    /// Best hint known so far for every guessed letter
    ///
    /// A letter seen as `Correct` anywhere stays `Correct`, otherwise `PlacementIncorrect`
    /// wins over `Incorrect`.
    #[must_use]
    pub fn letter_states(&self) -> FxHashMap<char, LetterHint> {
        let mut states: FxHashMap<char, LetterHint> = FxHashMap::default();
        for &(letter, hint) in self.history.iter().flat_map(GuessHint::letters) {
            states
                .entry(letter)
                .and_modify(|best| *best = (*best).max(hint))
                .or_insert(hint);
        }
        states
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn new_game_empty_target() {
        assert_eq!(Game::new("", None), Err(NewGameError::EmptyTarget));
        assert_eq!(Game::classic(""), Err(NewGameError::EmptyTarget));
    }

    #[test]
    fn new_game_is_pending() {
        let game = Game::classic("speed").unwrap();
        assert_eq!(game.target(), "SPEED");
        assert_eq!(game.word_length(), 5);
        assert_eq!(game.attempts(), 0);
        assert_eq!(game.attempts_limit(), Some(DEFAULT_ATTEMPTS_LIMIT));
        assert_eq!(
            game.state(),
            GameState::Pending {
                attempts_remaining: Some(6)
            }
        );
        assert!(game.last_guess_hint().is_none());
        assert!(game.guess_hints().is_empty());
    }

    #[test]
    fn unlimited_game_never_lost() {
        let mut game = Game::new("speed", None).unwrap();
        for guess in ["crane", "slate", "audio", "moist", "lucky", "night", "bread"] {
            assert_eq!(
                game.guess(guess),
                Ok(GameState::Pending {
                    attempts_remaining: None
                })
            );
        }
        assert_eq!(game.attempts(), 7);
    }

    #[test]
    fn zero_limit_is_lost_immediately() {
        let mut game = Game::new("speed", Some(0)).unwrap();
        assert_eq!(game.state(), GameState::Lost);
        assert_eq!(
            game.guess("speed"),
            Err(GuessError::GameOver(GameState::Lost))
        );
        assert!(game.guess_hints().is_empty());
    }

    #[test]
    fn guess_correct_wins() {
        let mut game = Game::classic("speed").unwrap();
        assert_eq!(game.guess("speed"), Ok(GameState::Won { attempts: 1 }));
        assert!(game.last_guess_hint().unwrap().is_correct());
    }

    #[test]
    fn guess_is_case_normalized() {
        let mut game = Game::classic("Speed").unwrap();
        assert_eq!(game.guess("sPEEd"), Ok(GameState::Won { attempts: 1 }));
        assert_eq!(game.last_guess_hint().unwrap().guessed(), "SPEED");
    }

    #[test]
    fn guess_length_invalid() {
        let mut game = Game::classic("speed").unwrap();
        assert_eq!(
            game.guess("spee"),
            Err(GuessError::LengthInvalid {
                given: 4,
                expected: 5
            })
        );
        assert_eq!(
            game.guess(""),
            Err(GuessError::LengthInvalid {
                given: 0,
                expected: 5
            })
        );
        assert_eq!(
            game.guess("speeds"),
            Err(GuessError::LengthInvalid {
                given: 6,
                expected: 5
            })
        );
        assert_eq!(game.attempts(), 0);
    }

    #[test]
    fn guess_length_counts_characters() {
        let mut game = Game::classic("éclat").unwrap();
        assert_eq!(
            game.guess("plate"),
            Ok(GameState::Pending {
                attempts_remaining: Some(5)
            })
        );
    }

    #[test]
    fn guess_already_played() {
        let mut game = Game::classic("speed").unwrap();
        game.guess("erase").unwrap();
        assert_eq!(game.guess("erase"), Err(GuessError::AlreadyPlayed));
        assert_eq!(game.guess("ERASE"), Err(GuessError::AlreadyPlayed));
        assert_eq!(game.attempts(), 1);
    }

    #[test]
    fn length_checked_before_already_played() {
        let mut game = Game::classic("speed").unwrap();
        game.guess("erase").unwrap();
        assert!(matches!(
            game.guess("eras"),
            Err(GuessError::LengthInvalid { .. })
        ));
    }

    #[test]
    fn three_misses_with_limit_three_lose() {
        let mut game = Game::new("speed", Some(3)).unwrap();
        assert_eq!(
            game.guess("crane"),
            Ok(GameState::Pending {
                attempts_remaining: Some(2)
            })
        );
        assert_eq!(
            game.guess("slate"),
            Ok(GameState::Pending {
                attempts_remaining: Some(1)
            })
        );
        assert_eq!(game.guess("audio"), Ok(GameState::Lost));
        assert_eq!(game.attempts(), 3);
    }

    #[test]
    fn win_on_last_attempt() {
        let mut game = Game::new("speed", Some(2)).unwrap();
        game.guess("crane").unwrap();
        assert_eq!(game.guess("speed"), Ok(GameState::Won { attempts: 2 }));
    }

    #[test]
    fn no_guess_after_win() {
        let mut game = Game::classic("speed").unwrap();
        game.guess("speed").unwrap();
        assert_eq!(
            game.guess("crane"),
            Err(GuessError::GameOver(GameState::Won { attempts: 1 }))
        );
        assert_eq!(game.attempts(), 1);
        assert_eq!(game.state(), GameState::Won { attempts: 1 });
    }

    #[test]
    fn no_guess_after_loss() {
        let mut game = Game::new("speed", Some(1)).unwrap();
        assert_eq!(game.guess("crane"), Ok(GameState::Lost));
        assert_eq!(
            game.guess("speed"),
            Err(GuessError::GameOver(GameState::Lost))
        );
        assert_eq!(game.attempts(), 1);
    }

    #[test]
    fn game_over_checked_before_length() {
        let mut game = Game::new("speed", Some(1)).unwrap();
        game.guess("crane").unwrap();
        assert_eq!(game.guess("x"), Err(GuessError::GameOver(GameState::Lost)));
    }

    #[test]
    fn history_in_submission_order() {
        let mut game = Game::classic("speed").unwrap();
        game.guess("crane").unwrap();
        game.guess("erase").unwrap();
        let guessed: Vec<&str> = game.guess_hints().iter().map(GuessHint::guessed).collect();
        assert_eq!(guessed, vec!["CRANE", "ERASE"]);
        assert_eq!(game.last_guess_hint().unwrap().guessed(), "ERASE");
    }

    #[test]
    fn letter_states_keep_best_hint() {
        let mut game = Game::classic("speed").unwrap();
        game.guess("erase").unwrap();
        game.guess("steep").unwrap();

        let states = game.letter_states();
        assert_eq!(states.get(&'S'), Some(&LetterHint::Correct));
        assert_eq!(states.get(&'E'), Some(&LetterHint::Correct));
        assert_eq!(states.get(&'P'), Some(&LetterHint::PlacementIncorrect));
        assert_eq!(states.get(&'R'), Some(&LetterHint::Incorrect));
        assert_eq!(states.get(&'Z'), None);
    }

    #[test]
    fn state_display() {
        assert_eq!(GameState::Lost.to_string(), "lost");
        assert_eq!(GameState::Won { attempts: 3 }.to_string(), "won in 3");
        assert_eq!(
            GameState::Pending {
                attempts_remaining: Some(2)
            }
            .to_string(),
            "pending (2 remaining)"
        );
    }
}
