//! Game session logic
//!
//! The [`Session`] state machine, the keyboard feedback it derives, and the
//! [`Controller`] that adds the player-facing notice and invalid flash.

pub mod board;
mod controller;
mod error;
mod flash;
mod guess;
mod keyboard;
pub(crate) mod session;
mod stats;

pub use controller::{Controller, Notice, NoticeKind};
pub use error::Rejection;
pub use flash::{DEFAULT_FLASH_DURATION, InvalidFlash};
pub use guess::Guess;
pub use keyboard::{KeyboardFeedback, merge, priority};
pub use session::{DEFAULT_MAX_GUESSES, GameStatus, MAX_GUESSES_LIMIT, Session, Submission};
pub use stats::Statistics;
