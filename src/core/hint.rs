//! Wordle feedback calculation and representation
//!
//! Each guessed letter gets exactly one classification:
//! - `Correct`: same letter at the same position in the target (green)
//! - `PlacementIncorrect`: letter still unaccounted for elsewhere in the target (yellow)
//! - `Incorrect`: letter contributes to no unmatched target position (gray)

use super::Word;
use std::fmt;

/// Classification of a single guessed letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum LetterHint {
    /// The letter does not contribute to any unmatched target position
    Incorrect,
    /// The letter appears in the target but not at this position
    PlacementIncorrect,
    /// The letter matches the target at this position
    Correct,
}

impl LetterHint {
    /// Emoji square for this hint
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::PlacementIncorrect => '🟨',
            Self::Incorrect => '⬜',
        }
    }
}

/// Hints for one guessed word
///
/// Owns a copy of the guessed word and one `(letter, hint)` pair per position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessHint {
    guessed: String,
    letters: Vec<(char, LetterHint)>,
}

impl GuessHint {
    /// Calculate the hint when `guess` is guessed and `target` is the word to find
    ///
    /// Both words must have the same length; enforcing this is the caller's job
    /// (see [`crate::core::Game::guess`]).
    ///
    /// # Algorithm
    /// 1. First pass: mark all exact matches and remove them from the available target letters
    /// 2. Second pass, left to right: mark a letter misplaced if one occurrence is still
    ///    available, consuming it; otherwise mark it incorrect
    ///
    /// Repeated guessed letters are therefore credited earliest position first, and a letter
    /// is never credited more often than it appears in the target.
    ///
    /// # Examples
    /// ```
    /// use wordle_engine::core::{GuessHint, LetterHint, Word};
    ///
    /// let hint = GuessHint::calculate(&Word::new("crane"), &Word::new("slate"));
    /// assert_eq!(
    ///     hint.letter_hints(),
    ///     vec![
    ///         LetterHint::Incorrect,
    ///         LetterHint::Incorrect,
    ///         LetterHint::Correct,
    ///         LetterHint::Incorrect,
    ///         LetterHint::Correct,
    ///     ]
    /// );
    /// ```
    #[must_use]
    pub fn calculate(guess: &Word, target: &Word) -> Self {
        debug_assert_eq!(
            guess.len(),
            target.len(),
            "guess and target must have the same length"
        );

        let guess_letters = guess.letters();
        let target_letters = target.letters();
        let mut result = vec![LetterHint::Incorrect; guess_letters.len()];
        let mut available = target.letter_counts();

        // First pass: exact position matches
        for (i, (guessed, expected)) in guess_letters.iter().zip(target_letters).enumerate() {
            if guessed == expected {
                result[i] = LetterHint::Correct;
                if let Some(count) = available.get_mut(guessed) {
                    *count = count.saturating_sub(1);
                }
            }
        }

        // Second pass: misplaced letters, consumed in position order
        for (hint, letter) in result.iter_mut().zip(guess_letters) {
            if *hint == LetterHint::Correct {
                continue;
            }
            if let Some(count) = available.get_mut(letter)
                && *count > 0
            {
                *hint = LetterHint::PlacementIncorrect;
                *count -= 1;
            }
        }

        Self {
            guessed: guess.text().to_string(),
            letters: guess_letters.iter().copied().zip(result).collect(),
        }
    }

    /// The guessed word, upper-cased
    #[inline]
    #[must_use]
    pub fn guessed(&self) -> &str {
        &self.guessed
    }

    /// Each guessed letter along with its hint, in position order
    #[inline]
    #[must_use]
    pub fn letters(&self) -> &[(char, LetterHint)] {
        &self.letters
    }

    /// Hints only, in position order
    #[must_use]
    pub fn letter_hints(&self) -> Vec<LetterHint> {
        self.letters.iter().map(|&(_, hint)| hint).collect()
    }

    /// Count the positions with the given hint
    #[must_use]
    pub fn count(&self, hint: LetterHint) -> usize {
        self.letters.iter().filter(|&&(_, h)| h == hint).count()
    }

    /// Check if every position is correct
    #[must_use]
    pub fn is_correct(&self) -> bool {
        self.letters
            .iter()
            .all(|&(_, hint)| hint == LetterHint::Correct)
    }

    /// Convert the hints to an emoji string like "🟩🟨⬜🟩🟨"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.letters.iter().map(|&(_, hint)| hint.emoji()).collect()
    }
}

impl fmt::Display for GuessHint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.guessed, self.to_emoji())
    }
}
