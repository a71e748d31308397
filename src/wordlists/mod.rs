//! Word lists for the game
//!
//! Provides the embedded word list, file loading and the vocabulary built from them.

mod embedded;
pub mod loader;
mod vocabulary;

pub use embedded::{FALLBACK, WORDS, WORDS_COUNT};
pub use vocabulary::{RandomPicker, Vocabulary, WordPicker};
