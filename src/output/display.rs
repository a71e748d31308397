//! Display functions for command results and line-mode games

use super::formatters::{
    KEYBOARD_ROWS, colored_letter, create_progress_bar, format_guess, format_keyboard_row,
};
use crate::commands::ScoreResult;
use crate::game::{KeyboardFeedback, Notice, NoticeKind, Session, Statistics};
use crate::wordlists::WordPicker;
use colored::Colorize;
use std::io::{self, Write};

/// Print the result of scoring one guess
pub fn print_score_result(result: &ScoreResult) {
    println!("\n{}", "─".repeat(40).cyan());
    println!(
        "Guess {} against {}",
        result.guess.to_string().bright_yellow().bold(),
        result.solution.to_string().bright_yellow().bold()
    );
    println!("{}", "─".repeat(40).cyan());

    let tiles: String = result
        .guess
        .letters()
        .iter()
        .zip(result.feedback.outcomes())
        .map(|(&letter, &outcome)| colored_letter(letter, outcome).to_string())
        .collect();
    println!("\n  {tiles}  {}", result.feedback.to_emoji());
    println!(
        "\n  Correct: {}  Present: {}",
        result.feedback.count_correct().to_string().green(),
        result.feedback.count_present().to_string().yellow()
    );
}

/// Write the guesses made so far and the number of attempts left
///
/// # Errors
///
/// Returns any error from the underlying writer.
pub fn write_board<P: WordPicker, W: Write>(
    out: &mut W,
    session: &Session<'_, P>,
) -> io::Result<()> {
    writeln!(out)?;
    for (i, guess) in session.history().iter().enumerate() {
        writeln!(
            out,
            "  {}. {}",
            (i + 1).to_string().bright_black(),
            format_guess(guess)
        )?;
    }
    writeln!(
        out,
        "  {} of {} guesses left",
        session.remaining_guesses(),
        session.max_guesses()
    )
}

/// Write the keyboard colored by aggregate feedback
///
/// # Errors
///
/// Returns any error from the underlying writer.
pub fn write_keyboard<W: Write>(out: &mut W, keyboard: &KeyboardFeedback) -> io::Result<()> {
    for row in KEYBOARD_ROWS {
        writeln!(out, "  {}", format_keyboard_row(row, keyboard))?;
    }
    Ok(())
}

/// Write a notice in the color of its kind
///
/// # Errors
///
/// Returns any error from the underlying writer.
pub fn write_notice<W: Write>(out: &mut W, notice: &Notice) -> io::Result<()> {
    let text = match notice.kind {
        NoticeKind::Info => notice.text.normal(),
        NoticeKind::Success => notice.text.green().bold(),
        NoticeKind::Failure => notice.text.red().bold(),
        NoticeKind::Error => notice.text.red(),
    };
    writeln!(out, "  {text}")
}

/// Write win statistics and the guess distribution
///
/// # Errors
///
/// Returns any error from the underlying writer.
pub fn write_statistics<W: Write>(out: &mut W, stats: &Statistics) -> io::Result<()> {
    writeln!(
        out,
        "\n  Games: {} | Won: {} | Win rate: {:.0}%",
        stats.games_played,
        stats.games_won,
        stats.win_rate()
    )?;

    let most = stats.guess_distribution.iter().copied().max().unwrap_or(0);
    for (attempts, &count) in stats.guess_distribution.iter().enumerate().skip(1) {
        let bar = create_progress_bar(count, most, 20);
        writeln!(out, "  {attempts}: {} {count}", bar.green())?;
    }
    Ok(())
}
