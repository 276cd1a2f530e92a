//! Consecutive games sharing one word picker
//!
//! A session owns the picker and the current game, starts a fresh game on request and keeps
//! win/loss statistics across games.

use crate::core::{Game, GameState, GuessError, NewGameError};
use crate::wordlists::WordPicker;
use std::collections::BTreeMap;
use tracing::{debug, info};

/// Results of the finished games of a session
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Statistics {
    pub games_played: usize,
    pub games_won: usize,
    /// Number of won games per attempt count
    pub guess_distribution: BTreeMap<usize, usize>,
}

impl Statistics {
    /// Percentage of played games that were won
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.games_played == 0 {
            0.0
        } else {
            self.games_won as f64 / self.games_played as f64 * 100.0
        }
    }

    fn record(&mut self, state: GameState) {
        self.games_played += 1;
        if let GameState::Won { attempts } = state {
            self.games_won += 1;
            *self.guess_distribution.entry(attempts).or_insert(0) += 1;
        }
    }
}

/// A picker, the game in progress and the statistics of previous games
#[derive(Debug)]
pub struct Session<P> {
    picker: P,
    attempts_limit: Option<usize>,
    game: Game,
    recorded: bool,
    stats: Statistics,
}

impl<P: WordPicker> Session<P> {
    /// Start a session with a first game
    ///
    /// # Errors
    ///
    /// Returns `NewGameError` if the picker yields an unusable word.
    pub fn new(mut picker: P, attempts_limit: Option<usize>) -> Result<Self, NewGameError> {
        let game = Game::new(&picker.pick_word(), attempts_limit)?;
        debug!(word_length = game.word_length(), "session started");

        let mut session = Self {
            picker,
            attempts_limit,
            game,
            recorded: false,
            stats: Statistics::default(),
        };
        // A zero attempt limit makes a game that is over before any guess
        session.record_if_over();
        Ok(session)
    }

    /// The game in progress, or the one that just finished
    #[must_use]
    pub const fn game(&self) -> &Game {
        &self.game
    }

    #[must_use]
    pub const fn statistics(&self) -> &Statistics {
        &self.stats
    }

    /// Submit a guess to the current game
    ///
    /// A game is counted in the statistics once, when it ends.
    ///
    /// # Errors
    ///
    /// Returns the `GuessError` reported by [`Game::guess`].
    pub fn guess(&mut self, guess: &str) -> Result<GameState, GuessError> {
        let state = self.game.guess(guess)?;
        self.record_if_over();
        Ok(state)
    }

    /// Discard the current game and start one with a newly picked word
    ///
    /// An unfinished game counts as played and not won, even without any guess.
    ///
    /// # Errors
    ///
    /// Returns `NewGameError` if the picker yields an unusable word; the current game is
    /// kept in that case.
    pub fn new_game(&mut self) -> Result<&Game, NewGameError> {
        let game = Game::new(&self.picker.pick_word(), self.attempts_limit)?;

        if !self.recorded {
            self.stats.record(GameState::Lost);
            debug!(attempts = self.game.attempts(), "abandoned game counted as lost");
        }

        self.game = game;
        self.recorded = false;
        debug!(word_length = self.game.word_length(), "new game started");
        self.record_if_over();
        Ok(&self.game)
    }

    fn record_if_over(&mut self) {
        let state = self.game.state();
        if state.is_over() && !self.recorded {
            self.stats.record(state);
            self.recorded = true;
            info!(
                %state,
                played = self.stats.games_played,
                won = self.stats.games_won,
                "game over"
            );
        }
    }
}
