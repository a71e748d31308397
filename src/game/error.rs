//! Submission rejections.
//!
//! Both kinds are recoverable: they leave history and status untouched and
//! are surfaced to the player as a short notice plus the invalid flash.

use thiserror::Error;

/// Reasons a submission is refused.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Rejection {
    /// Fewer letters typed than a word needs.
    #[error("Nedostatek písmen")]
    TooShort { len: usize, required: usize },

    /// The typed word is not in the vocabulary.
    #[error("Slovo není v seznamu")]
    NotInVocabulary(String),
}

impl Rejection {
    /// Short machine-friendly name, used in logs.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::TooShort { .. } => "too_short",
            Self::NotInVocabulary(_) => "not_in_vocabulary",
        }
    }
}
