//! In-memory game statistics for the running process

use super::{MAX_GUESSES_LIMIT, Submission};

/// Results of finished games
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Statistics {
    pub games_played: usize,
    pub games_won: usize,
    /// Wins by number of attempts; index 0 is unused
    pub guess_distribution: Vec<usize>,
}

impl Statistics {
    #[must_use]
    pub fn new(max_guesses: usize) -> Self {
        Self {
            games_played: 0,
            games_won: 0,
            guess_distribution: vec![0; max_guesses.min(MAX_GUESSES_LIMIT) + 1],
        }
    }

    /// Count a submission if it ended the game
    pub fn record(&mut self, submission: &Submission) {
        match submission {
            Submission::Won { attempts } => {
                self.games_played += 1;
                self.games_won += 1;
                if let Some(slot) = self.guess_distribution.get_mut(*attempts) {
                    *slot += 1;
                }
            }
            Submission::Lost { .. } => self.games_played += 1,
            Submission::Ignored | Submission::Continue(_) => {}
        }
    }

    /// Percentage of games won
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.games_played == 0 {
            0.0
        } else {
            self.games_won as f64 / self.games_played as f64 * 100.0
        }
    }
}
