//! Puzzle pacing
//!
//! A pace setter turns instants into puzzle periods: which epoch is current, when
//! the next one starts, whether a saved state is still fresh and whether two wins
//! fall in consecutive periods. Callers always pass the instants in; nothing here
//! reads the clock.

mod bucket;
mod calendar;

pub use bucket::BucketPaceSetter;
pub use calendar::CalendarDailyPaceSetter;

use chrono::{DateTime, FixedOffset, TimeDelta, Utc};
use thiserror::Error;

/// Unix timestamp of the first puzzle (2022-03-22T16:20:02Z)
pub const DEFAULT_START_TIMESTAMP: i64 = 1_647_966_002;

/// Instant of the first puzzle
#[must_use]
pub fn default_start() -> DateTime<Utc> {
    DateTime::from_timestamp(DEFAULT_START_TIMESTAMP, 0).unwrap_or_default()
}

/// Errors raised when building a pace setter
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PaceError {
    #[error("bucket length must be positive, got {0}")]
    NonPositiveBucket(TimeDelta),
    #[error("UTC offset of {0} hours is out of range")]
    InvalidOffset(i32),
}

/// Period arithmetic shared by every pacing strategy
pub trait PaceSetter {
    /// Index of the period containing `now`, counted from the start instant
    fn epoch(&self, now: DateTime<Utc>) -> i64;

    /// Boundary that opened the period containing `now`
    fn period_start(&self, now: DateTime<Utc>) -> DateTime<Utc>;

    /// First period boundary at or after `now`
    fn next_rollover(&self, now: DateTime<Utc>) -> DateTime<Utc>;

    /// Time left until the next period boundary
    fn remaining_ttl(&self, now: DateTime<Utc>) -> TimeDelta {
        self.next_rollover(now) - now
    }

    /// Whether `reference` still belongs to the period of `now`
    fn is_fresh(&self, reference: DateTime<Utc>, now: DateTime<Utc>) -> bool;

    /// Whether `second` falls in the period right after the one of `first`
    fn is_consecutive(&self, first: DateTime<Utc>, second: DateTime<Utc>) -> bool;
}

/// The pacing strategy in use
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Pace {
    /// One puzzle per calendar day at a fixed UTC offset
    Daily(CalendarDailyPaceSetter<FixedOffset>),
    /// One puzzle per fixed-length bucket
    Bucket(BucketPaceSetter),
}

impl Pace {
    /// Human readable description, e.g. "daily (UTC+01:00)"
    #[must_use]
    pub fn describe(&self) -> String {
        match self {
            Self::Daily(pace) => format!("daily (UTC{})", pace.timezone()),
            Self::Bucket(pace) => format!("every {}s", pace.bucket().num_seconds()),
        }
    }
}

impl PaceSetter for Pace {
    fn epoch(&self, now: DateTime<Utc>) -> i64 {
        match self {
            Self::Daily(pace) => pace.epoch(now),
            Self::Bucket(pace) => pace.epoch(now),
        }
    }

    fn period_start(&self, now: DateTime<Utc>) -> DateTime<Utc> {
        match self {
            Self::Daily(pace) => pace.period_start(now),
            Self::Bucket(pace) => pace.period_start(now),
        }
    }

    fn next_rollover(&self, now: DateTime<Utc>) -> DateTime<Utc> {
        match self {
            Self::Daily(pace) => pace.next_rollover(now),
            Self::Bucket(pace) => pace.next_rollover(now),
        }
    }

    fn is_fresh(&self, reference: DateTime<Utc>, now: DateTime<Utc>) -> bool {
        match self {
            Self::Daily(pace) => pace.is_fresh(reference, now),
            Self::Bucket(pace) => pace.is_fresh(reference, now),
        }
    }

    fn is_consecutive(&self, first: DateTime<Utc>, second: DateTime<Utc>) -> bool {
        match self {
            Self::Daily(pace) => pace.is_consecutive(first, second),
            Self::Bucket(pace) => pace.is_consecutive(first, second),
        }
    }
}

impl From<CalendarDailyPaceSetter<FixedOffset>> for Pace {
    fn from(pace: CalendarDailyPaceSetter<FixedOffset>) -> Self {
        Self::Daily(pace)
    }
}

impl From<BucketPaceSetter> for Pace {
    fn from(pace: BucketPaceSetter) -> Self {
        Self::Bucket(pace)
    }
}
