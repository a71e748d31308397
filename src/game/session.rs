//! Game session state machine
//!
//! A session is `Playing` until the solution is guessed (`Won`) or the guess
//! budget runs out (`Lost`). Only [`Session::reset`] leaves a terminal state.

use super::{Guess, KeyboardFeedback, Rejection};
use crate::core::{WORD_LENGTH, Word, normalize_letter};
use crate::wordlists::{Vocabulary, WordPicker};
use tracing::{debug, info, trace};

/// Guesses allowed per session unless configured otherwise
pub const DEFAULT_MAX_GUESSES: usize = 6;

/// Largest accepted number of guesses per game
pub const MAX_GUESSES_LIMIT: usize = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameStatus {
    Playing,
    Won,
    Lost,
}

impl GameStatus {
    #[must_use]
    pub const fn is_over(self) -> bool {
        !matches!(self, Self::Playing)
    }
}

/// Result of an accepted (or ignored) submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    /// The game is already over; nothing changed
    Ignored,
    /// Guess recorded, game continues
    Continue(Guess),
    /// Guess matched the solution
    Won { attempts: usize },
    /// Guess budget exhausted; carries the solution for the reveal
    Lost { solution: Word },
}

/// One game against a hidden solution
pub struct Session<'a, P: WordPicker> {
    vocabulary: &'a Vocabulary,
    picker: P,
    max_guesses: usize,
    solution: Word,
    history: Vec<Guess>,
    pending: Vec<char>,
    status: GameStatus,
    keyboard: KeyboardFeedback,
}

impl<'a, P: WordPicker> Session<'a, P> {
    /// Start a session, drawing the first solution from `picker`
    ///
    /// `max_guesses` is clamped to `1..=MAX_GUESSES_LIMIT`.
    pub fn new(vocabulary: &'a Vocabulary, mut picker: P, max_guesses: usize) -> Self {
        let solution = picker.pick(vocabulary);
        info!(max_guesses, "new game started");
        trace!(%solution, "solution drawn");

        Self {
            vocabulary,
            picker,
            max_guesses: max_guesses.clamp(1, MAX_GUESSES_LIMIT),
            solution,
            history: Vec::new(),
            pending: Vec::with_capacity(WORD_LENGTH),
            status: GameStatus::Playing,
            keyboard: KeyboardFeedback::default(),
        }
    }

    /// Append a typed character to the pending guess
    ///
    /// The character is uppercased; anything outside the alphabet is ignored.
    /// Returns `true` if the pending guess changed.
    pub fn type_letter(&mut self, ch: char) -> bool {
        if self.status.is_over() || self.pending.len() >= WORD_LENGTH {
            return false;
        }
        let Some(letter) = normalize_letter(ch) else {
            trace!(?ch, "ignoring non-letter input");
            return false;
        };
        self.pending.push(letter);
        true
    }

    /// Remove the last pending letter
    ///
    /// Returns `true` if a letter was removed.
    pub fn delete_letter(&mut self) -> bool {
        if self.status.is_over() {
            return false;
        }
        self.pending.pop().is_some()
    }

    /// Submit the pending guess
    ///
    /// # Errors
    ///
    /// Returns a [`Rejection`] when the pending guess is too short or not in
    /// the vocabulary. Rejections change nothing; the pending letters stay.
    pub fn submit(&mut self) -> Result<Submission, Rejection> {
        if self.status.is_over() {
            return Ok(Submission::Ignored);
        }

        let letters: [char; WORD_LENGTH] =
            self.pending
                .as_slice()
                .try_into()
                .map_err(|_| Rejection::TooShort {
                    len: self.pending.len(),
                    required: WORD_LENGTH,
                })?;

        let word = match Word::from_letters(letters) {
            Ok(word) if self.vocabulary.contains(&word) => word,
            _ => return Err(Rejection::NotInVocabulary(self.pending_text())),
        };

        let guess = Guess::scored(word, &self.solution);
        self.history.push(guess);
        self.keyboard.record(&guess);
        self.pending.clear();
        debug!(
            guess = %word,
            feedback = %guess.feedback(),
            attempt = self.history.len(),
            "guess accepted"
        );

        if word == self.solution {
            self.status = GameStatus::Won;
            info!(attempts = self.history.len(), "game won");
            return Ok(Submission::Won {
                attempts: self.history.len(),
            });
        }

        if self.history.len() >= self.max_guesses {
            self.status = GameStatus::Lost;
            info!(solution = %self.solution, "game lost");
            return Ok(Submission::Lost {
                solution: self.solution,
            });
        }

        Ok(Submission::Continue(guess))
    }

    /// Start over with a fresh solution; allowed in any state
    pub fn reset(&mut self) {
        self.history.clear();
        self.pending.clear();
        self.keyboard.clear();
        self.solution = self.picker.pick(self.vocabulary);
        self.status = GameStatus::Playing;
        info!("new game started");
        trace!(solution = %self.solution, "solution drawn");
    }

    #[must_use]
    pub fn history(&self) -> &[Guess] {
        &self.history
    }

    /// Letters typed so far
    #[must_use]
    pub fn pending(&self) -> &[char] {
        &self.pending
    }

    #[must_use]
    pub fn pending_text(&self) -> String {
        self.pending.iter().collect()
    }

    #[must_use]
    pub const fn status(&self) -> GameStatus {
        self.status
    }

    #[must_use]
    pub const fn keyboard(&self) -> &KeyboardFeedback {
        &self.keyboard
    }

    /// The hidden word; presentation should only reveal it once the game is lost
    #[must_use]
    pub const fn solution(&self) -> &Word {
        &self.solution
    }

    #[must_use]
    pub const fn max_guesses(&self) -> usize {
        self.max_guesses
    }

    #[must_use]
    pub fn remaining_guesses(&self) -> usize {
        self.max_guesses - self.history.len()
    }
}
