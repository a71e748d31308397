//! Simple line-mode game
//!
//! Text-based game without the TUI: one guess per line.

use crate::core::WORD_LENGTH;
use crate::game::{Controller, Statistics};
use crate::output::{write_board, write_keyboard, write_notice, write_statistics};
use crate::wordlists::WordPicker;
use colored::Colorize;
use std::io::{self, BufRead, Write};
use std::time::Instant;

/// Run the line-mode game on stdin and stdout
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn run_simple<P: WordPicker>(
    controller: &mut Controller<'_, P>,
    stats: &mut Statistics,
) -> io::Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    play_lines(controller, stats, stdin.lock(), &mut stdout.lock())
}

/// Play games reading guesses and commands from `input` until it ends or the
/// player quits
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn play_lines<P: WordPicker, R: BufRead, W: Write>(
    controller: &mut Controller<'_, P>,
    stats: &mut Statistics,
    mut input: R,
    out: &mut W,
) -> io::Result<()> {
    writeln!(out, "\n{}", "═".repeat(40).bright_cyan())?;
    writeln!(out, "{}", "            HÁDEJ SLOVO".bright_green().bold())?;
    writeln!(out, "{}", "═".repeat(40).bright_cyan())?;
    writeln!(
        out,
        "Guess the {WORD_LENGTH}-letter word in {} tries.",
        controller.session().max_guesses()
    )?;
    writeln!(out, "Commands: 'new' for a new game, 'quit' to exit")?;

    loop {
        let Some(line) = prompt(&mut input, out, "Guess")? else {
            break;
        };

        match line.to_lowercase().as_str() {
            "quit" | "q" | "exit" => break,
            "new" | "n" => {
                controller.reset();
                controller.inform("Nová hra");
            }
            _ if line.chars().count() > WORD_LENGTH => {
                writeln!(out, "  {}", "Příliš mnoho písmen".red())?;
                continue;
            }
            _ => {
                while controller.delete_letter() {}
                for ch in line.chars() {
                    controller.type_letter(ch);
                }
                if let Ok(submission) = controller.submit(Instant::now()) {
                    stats.record(&submission);
                }
            }
        }

        render(controller, out)?;

        if controller.session().status().is_over() {
            write_statistics(out, stats)?;
            let again = prompt(&mut input, out, "Play again? (yes/no)")?;
            let again = again.map(|answer| answer.to_lowercase());
            if !matches!(again.as_deref(), Some("yes" | "y")) {
                break;
            }
            controller.reset();
        }
    }

    writeln!(out, "\nThanks for playing!")
}

fn render<P: WordPicker, W: Write>(controller: &Controller<'_, P>, out: &mut W) -> io::Result<()> {
    write_board(out, controller.session())?;
    if let Some(notice) = controller.notice() {
        write_notice(out, notice)?;
    }
    write_keyboard(out, controller.session().keyboard())
}

/// Ask for one line; `None` once input is exhausted
fn prompt<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    label: &str,
) -> io::Result<Option<String>> {
    write!(out, "{label}: ")?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::session::tests::{Scripted, vocabulary};
    use crate::game::{DEFAULT_FLASH_DURATION, GameStatus, Session};

    fn play(solutions: &[&str], max_guesses: usize, input: &str) -> (String, Statistics) {
        colored::control::set_override(false);
        let vocab = vocabulary();
        let session = Session::new(&vocab, Scripted::new(solutions), max_guesses);
        let mut controller = Controller::new(session, DEFAULT_FLASH_DURATION);
        let mut stats = Statistics::new(max_guesses);
        let mut out = Vec::new();

        play_lines(&mut controller, &mut stats, input.as_bytes(), &mut out).unwrap();
        (String::from_utf8(out).unwrap(), stats)
    }

    #[test]
    fn win_then_decline_replay() {
        let (text, stats) = play(&["apple"], 6, "alloy\napple\nno\n");

        assert!(text.contains("Správně!"));
        assert!(text.contains("Games: 1 | Won: 1"));
        assert!(text.contains("Thanks for playing!"));
        assert_eq!(stats.guess_distribution[2], 1);
    }

    #[test]
    fn loss_reveals_solution() {
        let (text, stats) = play(&["apple"], 1, "onion\nn\n");

        assert!(text.contains("Slovo bylo: APPLE"));
        assert_eq!(stats.games_played, 1);
        assert_eq!(stats.games_won, 0);
    }

    #[test]
    fn rejected_lines_keep_the_game_going() {
        let (text, stats) = play(&["apple"], 6, "app\nxxxxx\napples\nquit\n");

        assert!(text.contains("Nedostatek písmen"));
        assert!(text.contains("Slovo není v seznamu"));
        assert!(text.contains("Příliš mnoho písmen"));
        assert_eq!(stats.games_played, 0);
    }

    #[test]
    fn replay_starts_a_fresh_game() {
        let vocab = vocabulary();
        let session = Session::new(&vocab, Scripted::new(&["apple", "lemon"]), 6);
        let mut controller = Controller::new(session, DEFAULT_FLASH_DURATION);
        let mut stats = Statistics::new(6);
        let mut out = Vec::new();

        play_lines(&mut controller, &mut stats, "apple\ny\n".as_bytes(), &mut out).unwrap();

        assert_eq!(controller.session().status(), GameStatus::Playing);
        assert!(controller.session().history().is_empty());
        assert_eq!(controller.session().solution().text(), "LEMON");
        assert_eq!(stats.games_won, 1);
    }

    #[test]
    fn end_of_input_stops_cleanly() {
        let (text, _) = play(&["apple"], 6, "");
        assert!(text.ends_with("Thanks for playing!\n"));
    }
}
