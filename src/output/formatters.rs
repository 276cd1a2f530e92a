//! Formatting utilities for terminal output

use crate::core::{Game, LetterHint};
use colored::{ColoredString, Colorize};

/// Keyboard rows used for the letter summary
pub const KEYBOARD_ROWS: [&str; 3] = ["QWERTYUIOP", "ASDFGHJKL", "ZXCVBNM"];

/// Format one guessed letter as a colored cell
#[must_use]
pub fn letter_cell(letter: char, hint: LetterHint) -> ColoredString {
    let cell = format!(" {letter} ");
    match hint {
        LetterHint::Correct => cell.black().on_green().bold(),
        LetterHint::PlacementIncorrect => cell.black().on_yellow().bold(),
        LetterHint::Incorrect => cell.white().on_bright_black(),
    }
}

/// Format a row of colored cells for a guess
#[must_use]
pub fn hint_row(letters: &[(char, LetterHint)]) -> String {
    letters
        .iter()
        .map(|&(letter, hint)| letter_cell(letter, hint).to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Placeholder row for a word of `length` letters
#[must_use]
pub fn placeholder_row(length: usize) -> String {
    vec![" _ "; length].join(" ")
}

/// Keyboard rows colored by the best hint known for each letter
///
/// Letters that were never guessed are left plain.
#[must_use]
pub fn keyboard_rows(game: &Game) -> Vec<String> {
    let states = game.letter_states();
    KEYBOARD_ROWS
        .iter()
        .enumerate()
        .map(|(indent, row)| {
            let keys: Vec<String> = row
                .chars()
                .map(|key| match states.get(&key) {
                    Some(&LetterHint::Correct) => key.to_string().black().on_green().to_string(),
                    Some(&LetterHint::PlacementIncorrect) => {
                        key.to_string().black().on_yellow().to_string()
                    }
                    Some(&LetterHint::Incorrect) => key.to_string().bright_black().to_string(),
                    None => key.to_string(),
                })
                .collect();
            format!("{}{}", " ".repeat(indent), keys.join(" "))
        })
        .collect()
}

/// Return `"attempt"` with the correct plural form
#[must_use]
pub const fn attempts_text(n: usize) -> &'static str {
    if n == 1 { "attempt" } else { "attempts" }
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }

    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
