//! Display functions for games and command results

use super::formatters::{
    attempts_text, create_progress_bar, hint_row, keyboard_rows, placeholder_row,
};
use crate::core::{Game, GameState, GuessError, GuessHint};
use crate::session::Statistics;
use colored::Colorize;

/// Print every guess of the game, or a placeholder row before the first guess
pub fn print_board(game: &Game) {
    if game.guess_hints().is_empty() {
        println!(
            "{}  ({} letters)",
            placeholder_row(game.word_length()),
            game.word_length()
        );
    } else {
        for hint in game.guess_hints() {
            print_guess_hint(hint);
        }
    }
    println!();
}

/// Print one guess as colored cells
pub fn print_guess_hint(hint: &GuessHint) {
    println!("{}", hint_row(hint.letters()));
    println!();
}

/// Print the letter summary as a keyboard
pub fn print_keyboard(game: &Game) {
    for row in keyboard_rows(game) {
        println!("  {row}");
    }
    println!();
}

/// Print the outcome of an accepted guess
pub fn print_state(game: &Game, state: GameState) {
    match state {
        GameState::Pending {
            attempts_remaining: Some(n),
        } => println!("{n} {} remaining", attempts_text(n)),
        GameState::Pending {
            attempts_remaining: None,
        } => {
            let n = game.attempts();
            println!("{n} {} so far", attempts_text(n));
        }
        GameState::Won { attempts } => println!(
            "{}",
            format!("🎉 You win with {attempts} {}!", attempts_text(attempts))
                .green()
                .bold()
        ),
        GameState::Lost => {
            println!("{}", "You lost :(".red().bold());
            println!("The word to guess was {}.", game.target().bright_yellow().bold());
        }
    }
}

/// Print why a guess was rejected
pub fn print_guess_error(error: &GuessError) {
    let message = match error {
        GuessError::LengthInvalid { expected, .. } => {
            format!("Please type a {expected}-letter word.")
        }
        GuessError::AlreadyPlayed => "This word has already been played.".to_string(),
        GuessError::GameOver(_) => "The game is over.".to_string(),
    };
    eprintln!("{}", message.yellow());
}

/// Print session statistics with a distribution of winning attempt counts
pub fn print_statistics(stats: &Statistics) {
    println!("\n{}", "═".repeat(40).cyan());
    println!(" {} ", "STATISTICS".bright_cyan().bold());
    println!("{}", "═".repeat(40).cyan());

    println!("   Played:    {}", stats.games_played);
    println!("   Won:       {}", stats.games_won);
    println!(
        "   Win rate:  {}",
        format!("{:.0}%", stats.win_rate()).bright_yellow().bold()
    );

    if stats.guess_distribution.is_empty() {
        return;
    }

    let max = stats.guess_distribution.values().copied().max().unwrap_or(0);
    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    for (attempts, &count) in &stats.guess_distribution {
        let bar = create_progress_bar(count as f64, max as f64, 20);
        println!("   {attempts:>2}: {} {count}", bar.green());
    }
}
