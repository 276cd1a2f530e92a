//! Target word selection
//!
//! A picker holds a fixed set of candidate words, loaded once, and hands out one owned copy
//! per request. Leading and trailing whitespace is stripped from every candidate and entries
//! left empty are skipped, so a successfully built picker never yields an empty word.

use super::WORDS;
use rand::Rng;
use rand::rngs::ThreadRng;
use rand::seq::IndexedRandom;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Read};
use std::path::Path;
use thiserror::Error;
use tracing::{debug, info, trace};

/// Choose target words
pub trait WordPicker {
    /// Choose a single word to play
    fn pick_word(&mut self) -> String;

    /// Endless iterator of picked words
    fn picks(&mut self) -> PickedWords<'_, Self>
    where
        Self: Sized,
    {
        PickedWords { picker: self }
    }
}

/// Infinite iterator over the words of a picker
///
/// See [`WordPicker::picks`].
pub struct PickedWords<'a, P> {
    picker: &'a mut P,
}

impl<P: WordPicker> Iterator for PickedWords<'_, P> {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        Some(self.picker.pick_word())
    }
}

/// Owning infinite iterator over the words of a picker
///
/// Created by the `IntoIterator` implementations of the pickers.
#[derive(Debug, Clone)]
pub struct WordPickerIter<P> {
    picker: P,
}

impl<P: WordPicker> Iterator for WordPickerIter<P> {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        Some(self.picker.pick_word())
    }
}

/// A picker could not be built
#[derive(Debug, Error)]
pub enum PickerError {
    #[error("could not read word list: {0}")]
    Io(#[from] io::Error),
    #[error("word list does not contain any word")]
    NoWords,
}

/// Strip surrounding whitespace from candidates and drop the empty ones
///
/// # Errors
///
/// Returns `PickerError::NoWords` if nothing is left.
fn candidate_words<I, S>(words: I) -> Result<Vec<String>, PickerError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut skipped = 0usize;
    let candidates: Vec<String> = words
        .into_iter()
        .filter_map(|word| {
            let trimmed = word.as_ref().trim();
            if trimmed.is_empty() {
                skipped += 1;
                None
            } else {
                Some(trimmed.to_string())
            }
        })
        .collect();

    if skipped > 0 {
        debug!(skipped, "skipped empty word list entries");
    }

    if candidates.is_empty() {
        Err(PickerError::NoWords)
    } else {
        Ok(candidates)
    }
}

/// Pick a uniformly random word, with replacement
///
/// Duplicated candidates are kept, so they are proportionally more likely to be picked.
///
/// # Examples
/// ```
/// use wordle_engine::wordlists::{RandomWordPicker, WordPicker};
///
/// let mut picker = RandomWordPicker::from_list(["crane", "slate"]).unwrap();
/// let word = picker.pick_word();
/// assert!(word == "crane" || word == "slate");
/// ```
#[derive(Debug, Clone)]
pub struct RandomWordPicker<R = ThreadRng> {
    words: Vec<String>,
    rng: R,
}

impl RandomWordPicker<ThreadRng> {
    /// Build a picker from a list of words
    ///
    /// Surrounding whitespace is stripped from each word and empty words are skipped.
    ///
    /// # Errors
    ///
    /// Returns `PickerError::NoWords` if the list holds no non-empty word.
    pub fn from_list<I, S>(words: I) -> Result<Self, PickerError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Ok(Self {
            words: candidate_words(words)?,
            rng: rand::rng(),
        })
    }

    /// Load words from a file, one word per line
    ///
    /// The file is read once; later picks never touch it again. Lines are handled as in
    /// [`Self::from_reader`].
    ///
    /// # Errors
    ///
    /// Returns `PickerError::Io` if the file cannot be opened or read, and
    /// `PickerError::NoWords` if it holds no non-empty line.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, PickerError> {
        let path = path.as_ref();
        let picker = Self::from_reader(File::open(path)?)?;
        info!(path = %path.display(), words = picker.len(), "loaded word list");
        Ok(picker)
    }

    /// Load words from a reader, one word per line
    ///
    /// Leading and trailing whitespace (including a `\r` line ending) is stripped from each
    /// line, and lines left empty are skipped.
    ///
    /// # Errors
    ///
    /// Returns `PickerError::Io` if reading fails, and `PickerError::NoWords` if the
    /// input holds no non-empty line.
    pub fn from_reader<Rd: Read>(reader: Rd) -> Result<Self, PickerError> {
        let lines = BufReader::new(reader)
            .lines()
            .collect::<io::Result<Vec<String>>>()?;
        Self::from_list(lines)
    }

    /// Picker over the embedded default word list
    #[must_use]
    pub fn embedded() -> Self {
        Self {
            words: WORDS.iter().map(|&word| word.to_string()).collect(),
            rng: rand::rng(),
        }
    }
}

impl<R> RandomWordPicker<R> {
    /// Replace the random number generator, e.g. with a seeded one
    #[must_use]
    pub fn with_rng<R2: Rng>(self, rng: R2) -> RandomWordPicker<R2> {
        RandomWordPicker {
            words: self.words,
            rng,
        }
    }

    /// Candidate words, in load order
    #[must_use]
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Number of candidate words
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Always false: a picker holds at least one word
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl<R: Rng> WordPicker for RandomWordPicker<R> {
    fn pick_word(&mut self) -> String {
        // Construction guarantees at least one candidate
        let word = self
            .words
            .choose(&mut self.rng)
            .cloned()
            .unwrap_or_default();
        trace!(%word, "picked word");
        word
    }
}

impl<R: Rng> IntoIterator for RandomWordPicker<R> {
    type Item = String;
    type IntoIter = WordPickerIter<Self>;

    fn into_iter(self) -> Self::IntoIter {
        WordPickerIter { picker: self }
    }
}

/// Pick words in list order, wrapping to the first word after the last
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SequentialWordPicker {
    words: Vec<String>,
    next_index: usize,
}

impl SequentialWordPicker {
    /// Build a picker from a list of words
    ///
    /// Surrounding whitespace is stripped from each word and empty words are skipped.
    ///
    /// # Errors
    ///
    /// Returns `PickerError::NoWords` if the list holds no non-empty word.
    pub fn from_list<I, S>(words: I) -> Result<Self, PickerError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Ok(Self {
            words: candidate_words(words)?,
            next_index: 0,
        })
    }
}

impl WordPicker for SequentialWordPicker {
    fn pick_word(&mut self) -> String {
        let word = self.words[self.next_index].clone();
        self.next_index = (self.next_index + 1) % self.words.len();
        trace!(%word, "picked word");
        word
    }
}

impl IntoIterator for SequentialWordPicker {
    type Item = String;
    type IntoIter = WordPickerIter<Self>;

    fn into_iter(self) -> Self::IntoIter {
        WordPickerIter { picker: self }
    }
}
