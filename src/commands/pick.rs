//! Pick command
//!
//! Draws target words from a picker, e.g. to check a word list.

use crate::wordlists::WordPicker;

/// Pick `count` words, each an independent draw
#[must_use]
pub fn pick_words<P: WordPicker>(picker: &mut P, count: usize) -> Vec<String> {
    picker.picks().take(count).collect()
}
