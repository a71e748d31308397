//! Formatting utilities for terminal output

use crate::core::Outcome;
use crate::game::{Guess, KeyboardFeedback};
use colored::{ColoredString, Colorize};

/// Letter rows of the on-screen keyboard, Czech letters on their own row
pub const KEYBOARD_ROWS: [&str; 4] = ["QWERTYUIOP", "ASDFGHJKL", "ZXCVBNM", "ÁČĎÉĚÍŇÓŘŠŤÚŮÝŽ"];

/// A letter tile colored by its outcome
#[must_use]
pub fn colored_letter(letter: char, outcome: Outcome) -> ColoredString {
    let tile = format!(" {letter} ");
    match outcome {
        Outcome::Correct => tile.black().on_green().bold(),
        Outcome::Present => tile.black().on_yellow().bold(),
        Outcome::Absent => tile.white().on_bright_black(),
        Outcome::Invalid => tile.white().on_red(),
        Outcome::Current => tile.underline(),
        Outcome::Empty => tile.normal(),
    }
}

/// A submitted guess as colored tiles followed by its emoji feedback
#[must_use]
pub fn format_guess(guess: &Guess) -> String {
    let tiles: String = guess
        .cells()
        .map(|(letter, outcome)| colored_letter(letter, outcome).to_string())
        .collect();
    format!("{tiles}  {}", guess.feedback().to_emoji())
}

/// One keyboard row with each key colored by its aggregate outcome
#[must_use]
pub fn format_keyboard_row(row: &str, keyboard: &KeyboardFeedback) -> String {
    row.chars()
        .map(|key| match keyboard.get(key) {
            Some(outcome) => colored_letter(key, outcome).to_string(),
            None => format!(" {key} "),
        })
        .collect()
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: usize, max: usize, width: usize) -> String {
    let filled = if max == 0 { 0 } else { value * width / max };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
