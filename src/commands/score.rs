//! Score a single guess against a known solution

use crate::core::{Feedback, Word, WordError, score};

/// Result of scoring one guess
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreResult {
    pub guess: Word,
    pub solution: Word,
    pub feedback: Feedback,
}

/// Score `guess` against `solution` without consulting any vocabulary
///
/// # Errors
///
/// Returns an error if either word is not five accepted letters.
pub fn score_words(guess: &str, solution: &str) -> Result<ScoreResult, WordError> {
    let guess = Word::new(guess)?;
    let solution = Word::new(solution)?;

    Ok(ScoreResult {
        guess,
        solution,
        feedback: score(&guess, &solution),
    })
}
