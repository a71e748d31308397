//! Per-letter feedback and guess scoring
//!
//! Scoring produces one of three outcomes per position:
//! - `Correct` (letter in the right position)
//! - `Present` (letter elsewhere in the solution)
//! - `Absent` (letter not in the solution, or all of its occurrences already used)
//!
//! The remaining outcomes are display states layered on top by the board renderer.

use super::{WORD_LENGTH, Word};
use rustc_hash::FxHashMap;
use std::fmt;

/// State of a single letter cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// No letter yet
    Empty,
    /// Cursor position while typing
    Current,
    /// Letter matches the solution at this position
    Correct,
    /// Letter occurs elsewhere in the solution
    Present,
    /// Letter not in the solution (or no unmatched occurrence left)
    Absent,
    /// Pending letter of a rejected submission
    Invalid,
}

impl Outcome {
    /// Whether this outcome can be produced by [`score`]
    #[inline]
    #[must_use]
    pub const fn is_scored(self) -> bool {
        matches!(self, Self::Correct | Self::Present | Self::Absent)
    }

    /// Emoji square for a scored outcome
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            _ => '⬜',
        }
    }
}

/// Scored outcomes of one guess, one per position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Feedback([Outcome; WORD_LENGTH]);

impl Feedback {
    /// All positions correct
    pub const PERFECT: Self = Self([Outcome::Correct; WORD_LENGTH]);

    /// Outcomes by position
    #[inline]
    #[must_use]
    pub const fn outcomes(&self) -> &[Outcome; WORD_LENGTH] {
        &self.0
    }

    /// Check if this is a perfect match (all correct)
    #[must_use]
    pub fn is_perfect(&self) -> bool {
        *self == Self::PERFECT
    }

    /// Count the number of correct positions
    #[must_use]
    pub fn count_correct(&self) -> usize {
        self.0.iter().filter(|&&o| o == Outcome::Correct).count()
    }

    /// Count the number of present-but-misplaced positions
    #[must_use]
    pub fn count_present(&self) -> usize {
        self.0.iter().filter(|&&o| o == Outcome::Present).count()
    }

    /// Parse feedback from a string like "GY-GY" or "🟩🟨⬜🟩🟨"
    ///
    /// Accepts:
    /// - 'G'/'g'/🟩 for correct
    /// - 'Y'/'y'/🟨 for present
    /// - '-'/'_'/⬜ for absent
    ///
    /// # Examples
    /// ```
    /// use hadej_slovo::core::Feedback;
    ///
    /// let f1 = Feedback::parse("GY-GY").unwrap();
    /// let f2 = Feedback::parse("🟩🟨⬜🟩🟨").unwrap();
    /// assert_eq!(f1, f2);
    /// ```
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        let mut outcomes = [Outcome::Absent; WORD_LENGTH];
        let mut count = 0;

        for ch in s.chars() {
            let slot = outcomes.get_mut(count)?;
            *slot = match ch {
                'G' | 'g' | '🟩' => Outcome::Correct,
                'Y' | 'y' | '🟨' => Outcome::Present,
                '-' | '_' | '⬜' => Outcome::Absent,
                _ => return None,
            };
            count += 1;
        }

        (count == WORD_LENGTH).then_some(Self(outcomes))
    }

    /// Convert feedback to an emoji string like "🟩🟨⬜🟩🟨"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|o| o.emoji()).collect()
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for outcome in &self.0 {
            let ch = match outcome {
                Outcome::Correct => 'G',
                Outcome::Present => 'Y',
                _ => '-',
            };
            write!(f, "{ch}")?;
        }
        Ok(())
    }
}

impl std::str::FromStr for Feedback {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid feedback string: {s}"))
    }
}

/// Score `guess` against `solution`
///
/// Exact matches are resolved first so they never spend an occurrence that a
/// misplaced copy of the same letter would otherwise claim.
///
/// # Algorithm
/// 1. First pass: mark exact matches, count the unmatched solution letters
/// 2. Second pass: mark present letters from the remaining counts, the rest absent
///
/// # Examples
/// ```
/// use hadej_slovo::core::{score, Feedback, Word};
///
/// let guess = Word::new("alloy").unwrap();
/// let solution = Word::new("apple").unwrap();
///
/// assert_eq!(score(&guess, &solution), Feedback::parse("GY---").unwrap());
/// ```
#[must_use]
pub fn score(guess: &Word, solution: &Word) -> Feedback {
    let mut result = [Outcome::Absent; WORD_LENGTH];
    let mut unmatched: FxHashMap<char, u8> = FxHashMap::default();

    // First pass: exact position matches
    for (i, (&g, &s)) in guess.letters().iter().zip(solution.letters()).enumerate() {
        if g == s {
            result[i] = Outcome::Correct;
        } else {
            *unmatched.entry(s).or_insert(0) += 1;
        }
    }

    // Second pass: misplaced letters from what is left
    for (i, &g) in guess.letters().iter().enumerate() {
        if result[i] == Outcome::Correct {
            continue;
        }
        if let Some(count) = unmatched.get_mut(&g)
            && *count > 0
        {
            result[i] = Outcome::Present;
            *count -= 1;
        }
    }

    Feedback(result)
}
