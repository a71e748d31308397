//! Aggregate per-letter feedback for the on-screen keyboard
//!
//! Each letter keeps the highest-priority outcome ever observed for it:
//! `Correct > Absent > Present > unset`. Absent outranking present is the
//! observed product behaviour and is kept as is.

use super::Guess;
use crate::core::Outcome;
use rustc_hash::FxHashMap;

/// Merge priority of an outcome; zero for display-only states
#[inline]
#[must_use]
pub const fn priority(outcome: Outcome) -> u8 {
    match outcome {
        Outcome::Correct => 3,
        Outcome::Absent => 2,
        Outcome::Present => 1,
        Outcome::Empty | Outcome::Current | Outcome::Invalid => 0,
    }
}

/// Combine the stored outcome of a letter with a newly observed one
///
/// Display-only outcomes are ignored. Equal priority replaces the stored value.
///
/// # Examples
/// ```
/// use hadej_slovo::core::Outcome;
/// use hadej_slovo::game::merge;
///
/// assert_eq!(merge(Some(Outcome::Present), Outcome::Absent), Some(Outcome::Absent));
/// assert_eq!(merge(Some(Outcome::Correct), Outcome::Present), Some(Outcome::Correct));
/// ```
#[must_use]
pub fn merge(existing: Option<Outcome>, incoming: Outcome) -> Option<Outcome> {
    if !incoming.is_scored() {
        return existing;
    }
    match existing {
        Some(current) if priority(incoming) < priority(current) => Some(current),
        _ => Some(incoming),
    }
}

/// Best-known outcome per letter
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyboardFeedback {
    letters: FxHashMap<char, Outcome>,
}

impl KeyboardFeedback {
    /// Fold a sequence of guesses into keyboard feedback
    pub fn from_history<'g, I>(history: I) -> Self
    where
        I: IntoIterator<Item = &'g Guess>,
    {
        history.into_iter().fold(Self::default(), |mut acc, guess| {
            acc.record(guess);
            acc
        })
    }

    /// Upgrade letters with the outcomes of one guess
    pub fn record(&mut self, guess: &Guess) {
        for (letter, outcome) in guess.cells() {
            if let Some(merged) = merge(self.get(letter), outcome) {
                self.letters.insert(letter, merged);
            }
        }
    }

    /// Aggregate outcome of a letter, if it has been guessed
    #[must_use]
    pub fn get(&self, letter: char) -> Option<Outcome> {
        self.letters.get(&letter).copied()
    }

    /// Number of letters with known feedback
    #[must_use]
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    pub fn clear(&mut self) {
        self.letters.clear();
    }
}
