//! Game word representation
//!
//! A Word stores exactly [`WORD_LENGTH`] uppercase letters of the accepted alphabet.

use super::alphabet::{is_accepted, normalize_word};
use rustc_hash::FxHashMap;
use std::fmt;
use thiserror::Error;

/// Number of letters in every guess and solution
pub const WORD_LENGTH: usize = 5;

/// A five-letter word over the accepted alphabet
///
/// Letters are stored as `char`s because the alphabet goes beyond ASCII.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Word {
    letters: [char; WORD_LENGTH],
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("word must be exactly {WORD_LENGTH} letters, got {0}")]
    InvalidLength(usize),
    #[error("'{0}' is not a letter of the alphabet")]
    InvalidLetter(char),
}

impl Word {
    /// Create a new Word from a string
    ///
    /// The input is trimmed and uppercased first.
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - Length is not exactly [`WORD_LENGTH`] characters
    /// - Any character is outside the accepted alphabet
    ///
    /// # Examples
    /// ```
    /// use hadej_slovo::core::Word;
    ///
    /// let word = Word::new("kočka").unwrap();
    /// assert_eq!(word.text(), "KOČKA");
    ///
    /// assert!(Word::new("too long").is_err());
    /// assert!(Word::new("sh0rt").is_err());
    /// ```
    pub fn new(text: &str) -> Result<Self, WordError> {
        let normalized = normalize_word(text);
        let chars: Vec<char> = normalized.chars().collect();

        let letters: [char; WORD_LENGTH] = chars
            .as_slice()
            .try_into()
            .map_err(|_| WordError::InvalidLength(chars.len()))?;

        Self::from_letters(letters)
    }

    /// Create a Word from letters that are already uppercase
    ///
    /// # Errors
    /// Returns `WordError::InvalidLetter` for the first letter outside the alphabet.
    pub fn from_letters(letters: [char; WORD_LENGTH]) -> Result<Self, WordError> {
        if let Some(&bad) = letters.iter().find(|&&ch| !is_accepted(ch)) {
            return Err(WordError::InvalidLetter(bad));
        }
        Ok(Self { letters })
    }

    /// Get the word as an owned string
    #[must_use]
    pub fn text(&self) -> String {
        self.letters.iter().collect()
    }

    /// Get the letters of the word
    #[inline]
    #[must_use]
    pub const fn letters(&self) -> &[char; WORD_LENGTH] {
        &self.letters
    }

    /// Get the letter at a specific position
    ///
    /// # Panics
    /// Panics if `position >= WORD_LENGTH`
    #[inline]
    #[must_use]
    pub const fn letter_at(&self, position: usize) -> char {
        self.letters[position]
    }

    /// Count how many times each letter occurs
    #[must_use]
    pub fn letter_counts(&self) -> FxHashMap<char, u8> {
        let mut counts = FxHashMap::default();
        for &ch in &self.letters {
            *counts.entry(ch).or_insert(0) += 1;
        }
        counts
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for ch in &self.letters {
            write!(f, "{ch}")?;
        }
        Ok(())
    }
}
