//! Command implementations

pub mod hint;
pub mod pick;
pub mod play;

pub use hint::hint_word;
pub use pick::pick_words;
pub use play::{PlayConfig, run_play};
