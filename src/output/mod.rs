//! Terminal output formatting
//!
//! Display utilities for CLI results and line-mode games.

pub mod display;
pub mod formatters;

pub use display::{print_score_result, write_board, write_keyboard, write_notice, write_statistics};
