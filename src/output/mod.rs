//! Terminal output formatting
//!
//! Display utilities for game boards, results and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{
    print_board, print_guess_error, print_guess_hint, print_keyboard, print_state,
    print_statistics,
};
