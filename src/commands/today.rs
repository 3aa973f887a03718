//! Report on the current puzzle period

use super::Game;
use crate::core::Word;
use crate::daily;
use crate::pace::PaceSetter;
use crate::session::{MAX_ROWS, PuzzleSession};
use anyhow::Result;
use chrono::{DateTime, TimeDelta, Utc};

/// Progress of the saved puzzle, when it belongs to the current period
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SavedProgress {
    pub submitted: usize,
    pub completed: bool,
    pub tallied: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodayReport {
    pub day: i64,
    /// Only filled in when asked for
    pub answer: Option<Word>,
    pub remaining: TimeDelta,
    pub next_rollover: DateTime<Utc>,
    pub pace: String,
    pub saved: Option<SavedProgress>,
}

/// Describe the period containing `now`
///
/// # Errors
///
/// Returns an error if the saved puzzle cannot be read.
pub fn today_report(game: &Game, reveal: bool, now: DateTime<Utc>) -> Result<TodayReport> {
    let day = game.pace.epoch(now);

    let saved = game
        .store
        .load_state()?
        .filter(|state| daily::is_current(&game.pace, state.day, state.date, now))
        .and_then(|state| PuzzleSession::restore(&state).ok())
        .map(|session| SavedProgress {
            submitted: session.submitted_rows(),
            completed: session.is_completed(),
            tallied: session.is_tallied(),
        });

    Ok(TodayReport {
        day,
        answer: reveal.then(|| game.engine.answer(day).clone()),
        remaining: game.pace.remaining_ttl(now),
        next_rollover: game.pace.next_rollover(now),
        pace: game.pace.describe(),
        saved,
    })
}

impl SavedProgress {
    /// Rows still available
    #[must_use]
    pub const fn remaining_rows(&self) -> usize {
        MAX_ROWS.saturating_sub(self.submitted)
    }
}
