//! Transient invalid-submission flag
//!
//! The flag is a single deadline rather than a scheduled callback: starting it
//! again replaces the previous deadline, so at most one timer is ever pending.
//! The event loop asks for [`InvalidFlash::time_left`] to size its input poll
//! and calls [`InvalidFlash::expire`] when it wakes up.

use std::time::{Duration, Instant};

/// How long the invalid flag stays up after a rejection
pub const DEFAULT_FLASH_DURATION: Duration = Duration::from_millis(700);

/// Cancellable, time-boxed flag
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidFlash {
    duration: Duration,
    deadline: Option<Instant>,
}

impl Default for InvalidFlash {
    fn default() -> Self {
        Self::new(DEFAULT_FLASH_DURATION)
    }
}

impl InvalidFlash {
    #[must_use]
    pub const fn new(duration: Duration) -> Self {
        Self {
            duration,
            deadline: None,
        }
    }

    /// Raise the flag, replacing any pending deadline
    pub fn start(&mut self, now: Instant) {
        self.deadline = Some(now + self.duration);
    }

    /// Drop the flag immediately
    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    /// Whether the flag is up at `now`
    #[must_use]
    pub fn is_active(&self, now: Instant) -> bool {
        self.deadline.is_some_and(|deadline| now < deadline)
    }

    /// Clear the flag if its deadline has passed
    ///
    /// Returns `true` when this call cleared it.
    pub fn expire(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }

    #[must_use]
    pub const fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Time until the pending deadline, zero if already due
    #[must_use]
    pub fn time_left(&self, now: Instant) -> Option<Duration> {
        self.deadline
            .map(|deadline| deadline.saturating_duration_since(now))
    }

    #[must_use]
    pub const fn duration(&self) -> Duration {
        self.duration
    }
}
