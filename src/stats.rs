//! Play statistics

use crate::pace::PaceSetter;
use crate::session::{MAX_ROWS, Outcome};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Aggregated results across days
///
/// Only [`crate::session::PuzzleSession::tally`] updates these counters, once
/// per completed puzzle.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Statistics {
    pub played: u32,
    pub won: u32,
    /// Wins by number of attempts, index 0 is a first-row win
    pub distribution: [u32; MAX_ROWS],
    pub current_streak: u32,
    pub max_streak: u32,
    /// Reference date of the last won puzzle
    pub last_won: Option<DateTime<Utc>>,
}

impl Statistics {
    /// Record one completed puzzle started at `date`
    ///
    /// A win extends the streak when the previous win was in the period right
    /// before `date`, and restarts it at one otherwise. A loss resets it.
    pub fn record(&mut self, outcome: Outcome, date: DateTime<Utc>, pace: &impl PaceSetter) {
        self.played += 1;

        match outcome {
            Outcome::Won { attempts } => {
                self.won += 1;
                if let Some(slot) = attempts
                    .checked_sub(1)
                    .and_then(|ix| self.distribution.get_mut(ix))
                {
                    *slot += 1;
                }

                let continues = self
                    .last_won
                    .is_some_and(|previous| pace.is_consecutive(previous, date));
                self.current_streak = if continues { self.current_streak + 1 } else { 1 };
                self.max_streak = self.max_streak.max(self.current_streak);
                self.last_won = Some(date);
            }
            Outcome::Exhausted => self.current_streak = 0,
        }

        tracing::info!(
            ?outcome,
            played = self.played,
            streak = self.current_streak,
            "statistics updated"
        );
    }

    #[must_use]
    pub const fn lost(&self) -> u32 {
        self.played.saturating_sub(self.won)
    }

    /// Share of played puzzles that were won, 0.0 to 1.0
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.played == 0 {
            0.0
        } else {
            f64::from(self.won) / f64::from(self.played)
        }
    }

    /// Highest count in the distribution, for scaling bars
    #[must_use]
    pub fn max_bucket(&self) -> u32 {
        self.distribution.iter().copied().max().unwrap_or(0)
    }
}
