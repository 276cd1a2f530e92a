//! Wordle word representation
//!
//! A Word stores upper-case normalized text along with its letters, so targets and guesses
//! compare per character rather than per byte.

use rustc_hash::FxHashMap;
use std::fmt;

/// An upper-case normalized word of any length
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Word {
    text: String,
    letters: Vec<char>,
}

impl Word {
    /// Create a new Word, normalizing it to upper case
    ///
    /// No other transformation is applied: whitespace and punctuation are kept as given.
    ///
    /// # Examples
    /// ```
    /// use wordle_engine::core::Word;
    ///
    /// let word = Word::new("crane");
    /// assert_eq!(word.text(), "CRANE");
    /// assert_eq!(word.len(), 5);
    /// ```
    #[must_use]
    pub fn new(text: &str) -> Self {
        let text = text.to_uppercase();
        let letters = text.chars().collect();
        Self { text, letters }
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the letters of the word, in order
    #[inline]
    #[must_use]
    pub fn letters(&self) -> &[char] {
        &self.letters
    }

    /// Number of letters (characters, not bytes)
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    /// Get the count of each letter in the word
    ///
    /// Used for hint calculation with duplicate letters.
    pub(crate) fn letter_counts(&self) -> FxHashMap<char, usize> {
        let mut counts = FxHashMap::default();
        for &letter in &self.letters {
            *counts.entry(letter).or_insert(0) += 1;
        }
        counts
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}
