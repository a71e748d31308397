//! Hádej slovo
//!
//! A Czech word-guessing game: find the hidden five-letter word in a limited
//! number of tries, with per-letter feedback after every guess.
//!
//! # Quick Start
//!
//! ```rust
//! use hadej_slovo::core::{Outcome, Word, score};
//!
//! let guess = Word::new("kočka").unwrap();
//! let solution = Word::new("kočár").unwrap();
//!
//! let feedback = score(&guess, &solution);
//! assert_eq!(feedback.outcomes()[2], Outcome::Correct);
//! ```

// Core domain types
pub mod core;

// Session state machine and feedback
pub mod game;

// Word lists
pub mod wordlists;

// Configuration file
pub mod config;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
