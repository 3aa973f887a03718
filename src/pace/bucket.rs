//! One puzzle per fixed-length bucket

use super::{PaceError, PaceSetter};
use chrono::{DateTime, TimeDelta, Utc};

const NANOS_PER_SEC: i128 = 1_000_000_000;

/// Periods are `[start + k * bucket, start + (k + 1) * bucket)`
///
/// Arithmetic is done on whole nanoseconds, so instants a fraction of a second
/// past a boundary land in the right bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BucketPaceSetter {
    start: DateTime<Utc>,
    bucket: TimeDelta,
}

impl BucketPaceSetter {
    /// # Errors
    ///
    /// Returns `PaceError::NonPositiveBucket` if `bucket` is zero or negative.
    pub fn new(start: DateTime<Utc>, bucket: TimeDelta) -> Result<Self, PaceError> {
        if bucket <= TimeDelta::zero() {
            return Err(PaceError::NonPositiveBucket(bucket));
        }
        Ok(Self { start, bucket })
    }

    #[must_use]
    pub const fn start(&self) -> DateTime<Utc> {
        self.start
    }

    #[must_use]
    pub const fn bucket(&self) -> TimeDelta {
        self.bucket
    }

    /// Boundary opening bucket `k`
    fn boundary(&self, k: i128) -> DateTime<Utc> {
        from_nanos(k * nanos(self.bucket))
            .and_then(|offset| self.start.checked_add_signed(offset))
            .unwrap_or(if k < 0 {
                DateTime::<Utc>::MIN_UTC
            } else {
                DateTime::<Utc>::MAX_UTC
            })
    }

    fn elapsed(&self, now: DateTime<Utc>) -> i128 {
        nanos(now - self.start)
    }
}

impl PaceSetter for BucketPaceSetter {
    fn epoch(&self, now: DateTime<Utc>) -> i64 {
        let k = self.elapsed(now).div_euclid(nanos(self.bucket));
        i64::try_from(k).unwrap_or(if k < 0 { i64::MIN } else { i64::MAX })
    }

    fn period_start(&self, now: DateTime<Utc>) -> DateTime<Utc> {
        self.boundary(i128::from(self.epoch(now)))
    }

    /// Instants before the start roll over at the start itself
    fn next_rollover(&self, now: DateTime<Utc>) -> DateTime<Utc> {
        let elapsed = self.elapsed(now);
        if elapsed <= 0 {
            return self.start;
        }
        // ceil(elapsed / bucket)
        let k = -(-elapsed).div_euclid(nanos(self.bucket));
        self.boundary(k)
    }

    fn is_fresh(&self, reference: DateTime<Utc>, now: DateTime<Utc>) -> bool {
        now - reference < self.bucket
    }

    fn is_consecutive(&self, first: DateTime<Utc>, second: DateTime<Utc>) -> bool {
        // Buckets are half-open, so the opening boundary belongs to the next one
        let open = self.boundary(i128::from(self.epoch(first)) + 1);
        let close = self.boundary(i128::from(self.epoch(first)) + 2);
        open <= second && second < close
    }
}

fn nanos(delta: TimeDelta) -> i128 {
    i128::from(delta.num_seconds()) * NANOS_PER_SEC + i128::from(delta.subsec_nanos())
}

fn from_nanos(total: i128) -> Option<TimeDelta> {
    let secs = i64::try_from(total.div_euclid(NANOS_PER_SEC)).ok()?;
    let subsec = u32::try_from(total.rem_euclid(NANOS_PER_SEC)).ok()?;
    TimeDelta::new(secs, subsec)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t0() -> DateTime<Utc> {
        "2022-03-22T00:00:00Z".parse().unwrap()
    }

    fn plus(secs: i64) -> DateTime<Utc> {
        t0() + TimeDelta::seconds(secs)
    }

    fn pace() -> BucketPaceSetter {
        BucketPaceSetter::new(t0(), TimeDelta::seconds(10)).unwrap()
    }

    #[test]
    fn remaining_ttl_to_next_boundary() {
        assert_eq!(pace().remaining_ttl(plus(1)), TimeDelta::seconds(9));
        assert_eq!(pace().remaining_ttl(plus(19)), TimeDelta::seconds(1));
        assert_eq!(pace().remaining_ttl(plus(20)), TimeDelta::zero());
    }

    #[test]
    fn sub_second_remainders() {
        let now = plus(20) + TimeDelta::milliseconds(1);
        assert_eq!(pace().next_rollover(now), plus(30));
        assert_eq!(pace().epoch(now), 2);

        let just_before = plus(20) - TimeDelta::nanoseconds(1);
        assert_eq!(pace().next_rollover(just_before), plus(20));
        assert_eq!(pace().epoch(just_before), 1);
    }

    #[test]
    fn before_start_rolls_over_at_start() {
        assert_eq!(pace().next_rollover(plus(-35)), t0());
        assert_eq!(pace().epoch(plus(-35)), -4);
    }

    #[test]
    fn period_start_is_opening_boundary() {
        assert_eq!(pace().period_start(plus(25)), plus(20));
        assert_eq!(pace().period_start(plus(20)), plus(20));
        assert_eq!(pace().period_start(plus(-1)), plus(-10));
        assert!(pace().is_fresh(pace().period_start(plus(5)), plus(9)));
        assert!(!pace().is_fresh(pace().period_start(plus(5)), plus(10)));
    }

    #[test]
    fn freshness_within_bucket_length() {
        assert!(pace().is_fresh(t0(), plus(9)));
        assert!(!pace().is_fresh(t0(), plus(10)));
        assert!(pace().is_fresh(plus(1), plus(10)));
    }

    #[test]
    fn consecutive_buckets() {
        assert!(pace().is_consecutive(plus(1), plus(19)));
        assert!(!pace().is_consecutive(plus(1), plus(21)));
        assert!(pace().is_consecutive(plus(19), plus(21)));
        assert!(!pace().is_consecutive(plus(1), plus(5)));
        assert!(!pace().is_consecutive(plus(19), plus(1)));
        assert!(pace().is_consecutive(plus(0), plus(10)));
        assert!(!pace().is_consecutive(plus(0), plus(20)));
    }

    #[test]
    fn epoch_counts_whole_buckets() {
        assert_eq!(pace().epoch(t0()), 0);
        assert_eq!(pace().epoch(plus(9)), 0);
        assert_eq!(pace().epoch(plus(10)), 1);
        assert_eq!(pace().epoch(plus(-1)), -1);
    }

    #[test]
    fn non_positive_bucket_rejected() {
        assert_eq!(
            BucketPaceSetter::new(t0(), TimeDelta::zero()),
            Err(PaceError::NonPositiveBucket(TimeDelta::zero()))
        );
        assert!(BucketPaceSetter::new(t0(), TimeDelta::seconds(-5)).is_err());
    }
}
