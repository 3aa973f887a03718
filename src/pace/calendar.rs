//! One puzzle per calendar day

use super::{PaceError, PaceSetter};
use chrono::{DateTime, Days, FixedOffset, NaiveDate, NaiveTime, TimeDelta, TimeZone, Utc};

/// Periods end at local midnight in `tz`
///
/// Freshness, adjacency and the epoch index are all computed from local dates in
/// the same timezone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarDailyPaceSetter<Tz: TimeZone> {
    start: DateTime<Utc>,
    tz: Tz,
}

impl<Tz: TimeZone> CalendarDailyPaceSetter<Tz> {
    #[must_use]
    pub const fn new(start: DateTime<Utc>, tz: Tz) -> Self {
        Self { start, tz }
    }

    #[must_use]
    pub const fn start(&self) -> DateTime<Utc> {
        self.start
    }

    #[must_use]
    pub const fn timezone(&self) -> &Tz {
        &self.tz
    }

    /// Calendar date of `instant` in this timezone
    #[must_use]
    pub fn local_date(&self, instant: DateTime<Utc>) -> NaiveDate {
        instant.with_timezone(&self.tz).date_naive()
    }

    /// First existing local instant of `date`
    ///
    /// Midnight can fall in a DST gap; the first hour that exists locally is used
    /// instead.
    fn start_of_day(&self, date: NaiveDate) -> Option<DateTime<Utc>> {
        (0..24).find_map(|hour| {
            let time = NaiveTime::from_hms_opt(hour, 0, 0)?;
            self.tz
                .from_local_datetime(&date.and_time(time))
                .earliest()
                .map(|local| local.with_timezone(&Utc))
        })
    }

    fn days_between(&self, first: DateTime<Utc>, second: DateTime<Utc>) -> i64 {
        (self.local_date(second) - self.local_date(first)).num_days()
    }
}

impl CalendarDailyPaceSetter<Utc> {
    /// Daily pacing with midnight in UTC
    #[must_use]
    pub const fn utc(start: DateTime<Utc>) -> Self {
        Self::new(start, Utc)
    }
}

impl CalendarDailyPaceSetter<FixedOffset> {
    /// Daily pacing with midnight at a whole-hour offset from UTC
    ///
    /// # Errors
    ///
    /// Returns `PaceError::InvalidOffset` if the offset is not within ±23 hours.
    pub fn with_offset_hours(start: DateTime<Utc>, hours: i32) -> Result<Self, PaceError> {
        hours
            .checked_mul(3600)
            .and_then(FixedOffset::east_opt)
            .map(|offset| Self::new(start, offset))
            .ok_or(PaceError::InvalidOffset(hours))
    }
}

impl<Tz: TimeZone> PaceSetter for CalendarDailyPaceSetter<Tz> {
    fn epoch(&self, now: DateTime<Utc>) -> i64 {
        self.days_between(self.start, now)
    }

    fn period_start(&self, now: DateTime<Utc>) -> DateTime<Utc> {
        self.start_of_day(self.local_date(now))
            .filter(|midnight| *midnight <= now)
            .unwrap_or(now)
    }

    fn next_rollover(&self, now: DateTime<Utc>) -> DateTime<Utc> {
        self.local_date(now)
            .checked_add_days(Days::new(1))
            .and_then(|tomorrow| self.start_of_day(tomorrow))
            .unwrap_or_else(|| now + TimeDelta::days(1))
    }

    fn is_fresh(&self, reference: DateTime<Utc>, now: DateTime<Utc>) -> bool {
        self.local_date(reference) == self.local_date(now)
    }

    fn is_consecutive(&self, first: DateTime<Utc>, second: DateTime<Utc>) -> bool {
        self.days_between(first, second) == 1
    }
}
