//! Core domain types for the game
//!
//! This module contains the alphabet, words and the scoring function.
//! Everything here is pure and has no knowledge of sessions or rendering.

mod alphabet;
mod feedback;
mod word;

pub use alphabet::{EXTENDED_LETTERS, is_accepted, normalize_letter, normalize_word};
pub use feedback::{Feedback, Outcome, score};
pub use word::{WORD_LENGTH, Word, WordError};
