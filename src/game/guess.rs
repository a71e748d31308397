//! Submitted guess record

use crate::core::{Feedback, Outcome, Word, score};

/// A submitted word together with its scored feedback
///
/// Created once when a submission is accepted and never modified afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Guess {
    word: Word,
    feedback: Feedback,
}

impl Guess {
    /// Score `word` against `solution` and record the result
    #[must_use]
    pub fn scored(word: Word, solution: &Word) -> Self {
        Self {
            feedback: score(&word, solution),
            word,
        }
    }

    #[inline]
    #[must_use]
    pub const fn word(&self) -> &Word {
        &self.word
    }

    #[inline]
    #[must_use]
    pub const fn feedback(&self) -> &Feedback {
        &self.feedback
    }

    /// Pairs of letter and outcome by position
    pub fn cells(&self) -> impl Iterator<Item = (char, Outcome)> + '_ {
        self.word
            .letters()
            .iter()
            .copied()
            .zip(self.feedback.outcomes().iter().copied())
    }
}
