//! Word lists and word pickers
//!
//! Provides an embedded default list compiled into the binary, plus pickers that choose the
//! target word of each game from a list, a file or any reader.

mod embedded;
pub mod picker;

pub use embedded::{WORDS, WORDS_COUNT};
pub use picker::{
    PickedWords, PickerError, RandomWordPicker, SequentialWordPicker, WordPicker, WordPickerIter,
};
