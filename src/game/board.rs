//! Board view: letters and display states for every row
//!
//! Submitted rows show their scored outcomes. The active row shows the pending
//! letters with a `Current` cursor, or `Invalid` on every typed letter while the
//! invalid flash is up. Remaining rows are `Empty`.

use super::Session;
use crate::core::{Outcome, WORD_LENGTH};
use crate::wordlists::WordPicker;

/// One cell of the board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub letter: Option<char>,
    pub outcome: Outcome,
}

impl Cell {
    const EMPTY: Self = Self {
        letter: None,
        outcome: Outcome::Empty,
    };
}

pub type Row = [Cell; WORD_LENGTH];

/// Build all `max_guesses` rows for rendering
#[must_use]
pub fn rows<P: WordPicker>(session: &Session<'_, P>, invalid: bool) -> Vec<Row> {
    let history = session.history();
    let total = session.max_guesses().max(history.len());
    let active = (!session.status().is_over() && history.len() < session.max_guesses())
        .then_some(history.len());

    (0..total)
        .map(|index| {
            if let Some(guess) = history.get(index) {
                let mut row = [Cell::EMPTY; WORD_LENGTH];
                for (cell, (letter, outcome)) in row.iter_mut().zip(guess.cells()) {
                    *cell = Cell {
                        letter: Some(letter),
                        outcome,
                    };
                }
                row
            } else if active == Some(index) {
                pending_row(session.pending(), invalid)
            } else {
                [Cell::EMPTY; WORD_LENGTH]
            }
        })
        .collect()
}

fn pending_row(pending: &[char], invalid: bool) -> Row {
    let mut row = [Cell::EMPTY; WORD_LENGTH];
    for (i, cell) in row.iter_mut().enumerate() {
        cell.letter = pending.get(i).copied();
        cell.outcome = if invalid {
            if i < pending.len() {
                Outcome::Invalid
            } else {
                Outcome::Empty
            }
        } else if i == pending.len() {
            Outcome::Current
        } else {
            Outcome::Empty
        };
    }
    row
}
