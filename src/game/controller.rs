//! Session controller
//!
//! Wraps a [`Session`] with the player-facing side channel: the status notice
//! and the transient invalid flash raised by rejected submissions.

use super::{InvalidFlash, Rejection, Session, Submission};
use crate::wordlists::WordPicker;
use std::time::{Duration, Instant};
use tracing::debug;

/// Status message shown below the board
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub text: String,
    pub kind: NoticeKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Success,
    Failure,
    Error,
}

impl Notice {
    fn new(text: impl Into<String>, kind: NoticeKind) -> Self {
        Self {
            text: text.into(),
            kind,
        }
    }
}

/// Session plus notice and invalid flash
pub struct Controller<'a, P: WordPicker> {
    session: Session<'a, P>,
    flash: InvalidFlash,
    notice: Option<Notice>,
}

impl<'a, P: WordPicker> Controller<'a, P> {
    #[must_use]
    pub fn new(session: Session<'a, P>, flash_duration: Duration) -> Self {
        Self {
            session,
            flash: InvalidFlash::new(flash_duration),
            notice: None,
        }
    }

    /// Type a letter; clears the notice and flash when it was accepted
    pub fn type_letter(&mut self, ch: char) -> bool {
        let changed = self.session.type_letter(ch);
        if changed {
            self.clear_feedback();
        }
        changed
    }

    /// Delete a letter; clears the notice and flash when one was removed
    pub fn delete_letter(&mut self) -> bool {
        let changed = self.session.delete_letter();
        if changed {
            self.clear_feedback();
        }
        changed
    }

    /// Submit the pending guess and update the notice
    ///
    /// # Errors
    ///
    /// Passes through the session's [`Rejection`] after raising the flash.
    pub fn submit(&mut self, now: Instant) -> Result<Submission, Rejection> {
        match self.session.submit() {
            Err(rejection) => {
                debug!(kind = rejection.kind(), "submission rejected");
                self.notice = Some(Notice::new(rejection.to_string(), NoticeKind::Error));
                self.flash.start(now);
                Err(rejection)
            }
            Ok(Submission::Ignored) => Ok(Submission::Ignored),
            Ok(submission) => {
                self.notice = match &submission {
                    Submission::Won { .. } => Some(Notice::new("Správně!", NoticeKind::Success)),
                    Submission::Lost { solution } => Some(Notice::new(
                        format!("Slovo bylo: {solution}"),
                        NoticeKind::Failure,
                    )),
                    _ => None,
                };
                self.flash.cancel();
                Ok(submission)
            }
        }
    }

    /// Start a new game and drop any pending feedback
    pub fn reset(&mut self) {
        self.session.reset();
        self.clear_feedback();
    }

    /// Show an informational notice
    pub fn inform(&mut self, text: impl Into<String>) {
        self.notice = Some(Notice::new(text, NoticeKind::Info));
    }

    /// Expire the flash if due; returns `true` if the display changed
    pub fn tick(&mut self, now: Instant) -> bool {
        self.flash.expire(now)
    }

    #[must_use]
    pub fn is_invalid(&self, now: Instant) -> bool {
        self.flash.is_active(now)
    }

    /// Time until the flash must be cleared, if one is pending
    #[must_use]
    pub fn time_to_deadline(&self, now: Instant) -> Option<Duration> {
        self.flash.time_left(now)
    }

    #[must_use]
    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    #[must_use]
    pub const fn session(&self) -> &Session<'a, P> {
        &self.session
    }

    fn clear_feedback(&mut self) {
        self.notice = None;
        self.flash.cancel();
    }
}
