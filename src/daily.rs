//! Picking up today's puzzle
//!
//! Resumes the stored state when it still belongs to the current period,
//! otherwise starts a new session on the epoch's answer.

use crate::engine::WordValidator;
use crate::pace::PaceSetter;
use crate::session::{DayWord, PuzzleSession};
use crate::state::{PersistedDailyState, RestoreError};
use chrono::{DateTime, Utc};

/// How the session returned by [`resume_or_start`] came about
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resumption {
    /// The stored state was fresh and restored
    Resumed,
    /// Nothing was stored
    Started,
    /// The stored state belonged to an earlier period
    Expired,
    /// The stored state was fresh but could not be restored
    Discarded(RestoreError),
}

/// Today's session and where it came from
#[derive(Debug)]
pub struct Daily {
    pub session: PuzzleSession,
    pub resumption: Resumption,
}

/// Session for the period containing `now`
///
/// # Examples
/// ```
/// use chrono::Utc;
/// use wordle_daily::daily::{Resumption, resume_or_start};
/// use wordle_daily::engine::WordValidator;
/// use wordle_daily::pace::{CalendarDailyPaceSetter, default_start};
/// use wordle_daily::wordlists::{DEFAULT_SEED, Lexicon, Locale, WordSource};
///
/// let engine = WordValidator::new(
///     Lexicon::load(Locale::En, DEFAULT_SEED, &WordSource::Embedded).unwrap(),
/// );
/// let pace = CalendarDailyPaceSetter::utc(default_start());
///
/// let daily = resume_or_start(None, &engine, &pace, Utc::now());
/// assert_eq!(daily.resumption, Resumption::Started);
/// assert_eq!(daily.session.submitted_rows(), 0);
/// ```
#[must_use]
pub fn resume_or_start(
    stored: Option<&PersistedDailyState>,
    engine: &WordValidator,
    pace: &impl PaceSetter,
    now: DateTime<Utc>,
) -> Daily {
    let resumption = match stored {
        None => Resumption::Started,
        Some(state) if !is_current(pace, state.day, state.date, now) => {
            tracing::info!(day = state.day, "stored puzzle expired");
            Resumption::Expired
        }
        Some(state) => match PuzzleSession::restore(state) {
            Ok(session) => {
                tracing::debug!(
                    day = state.day,
                    submitted = session.submitted_rows(),
                    "resumed stored puzzle"
                );
                return Daily {
                    session,
                    resumption: Resumption::Resumed,
                };
            }
            Err(err) => {
                tracing::warn!(error = %err, "discarding stored puzzle");
                Resumption::Discarded(err)
            }
        },
    };

    Daily {
        session: start(engine, pace, now),
        resumption,
    }
}

/// New session on the answer of the epoch containing `now`
///
/// The session is dated at the boundary that opened the period, so it stops
/// being fresh exactly at the next rollover.
#[must_use]
pub fn start(engine: &WordValidator, pace: &impl PaceSetter, now: DateTime<Utc>) -> PuzzleSession {
    let day = pace.epoch(now);
    let word = engine.answer(day).clone();
    tracing::info!(day, "starting new puzzle");
    PuzzleSession::with_target(DayWord { word, day }, pace.period_start(now))
}

/// Whether a puzzle chosen for epoch `day` and dated `date` is still today's
#[must_use]
pub fn is_current(
    pace: &impl PaceSetter,
    day: i64,
    date: DateTime<Utc>,
    now: DateTime<Utc>,
) -> bool {
    day == pace.epoch(now) && pace.is_fresh(date, now)
}

/// Whether `session` still plays the answer of the period containing `now`
#[must_use]
pub fn session_is_current(
    session: &PuzzleSession,
    pace: &impl PaceSetter,
    now: DateTime<Utc>,
) -> bool {
    session
        .target()
        .is_some_and(|target| is_current(pace, target.day, session.date(), now))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;
    use crate::pace::BucketPaceSetter;
    use crate::state::PersistedRow;
    use crate::wordlists::{Lexicon, Locale};
    use chrono::TimeDelta;

    fn engine() -> WordValidator {
        let words: Vec<Word> = ["trace", "crane", "slate"]
            .iter()
            .map(|t| Word::new(t).unwrap())
            .collect();
        WordValidator::loaded(Lexicon::from_words(Locale::En, 9, words.clone(), words).unwrap())
    }

    fn t0() -> DateTime<Utc> {
        "2022-03-22T00:00:00Z".parse().unwrap()
    }

    fn pace() -> BucketPaceSetter {
        BucketPaceSetter::new(t0(), TimeDelta::seconds(60)).unwrap()
    }

    fn stored(date: DateTime<Utc>) -> PersistedDailyState {
        PersistedDailyState {
            expected: "SLATE".into(),
            day: 0,
            date,
            rows: vec![PersistedRow {
                input: "CRANE".into(),
                submitted: true,
            }],
            tallied: false,
        }
    }

    #[test]
    fn starts_on_epoch_answer() {
        let engine = engine();
        let now = t0() + TimeDelta::seconds(130);
        let daily = resume_or_start(None, &engine, &pace(), now);

        let target = daily.session.target().unwrap();
        assert_eq!(target.day, 2);
        assert_eq!(&target.word, engine.answer(2));
        assert_eq!(daily.session.date(), t0() + TimeDelta::seconds(120));
    }

    #[test]
    fn late_start_expires_at_next_boundary() {
        let engine = engine();
        let pace = pace();
        let session = start(&engine, &pace, t0() + TimeDelta::seconds(55));
        assert_eq!(session.date(), t0());
        assert!(session_is_current(&session, &pace, t0() + TimeDelta::seconds(59)));
        assert!(!session_is_current(&session, &pace, t0() + TimeDelta::seconds(60)));

        let now = t0() + TimeDelta::seconds(100);
        let saved = session.snapshot().unwrap();
        let daily = resume_or_start(Some(&saved), &engine, &pace, now);

        assert_eq!(daily.resumption, Resumption::Expired);
        let target = daily.session.target().unwrap();
        assert_eq!(target.day, pace.epoch(now));
        assert_eq!(&target.word, engine.answer(1));
    }

    #[test]
    fn state_from_another_epoch_is_expired() {
        // Dated inside epoch 1 but chosen for epoch 0
        let state = stored(t0() + TimeDelta::seconds(70));
        let now = t0() + TimeDelta::seconds(80);
        let daily = resume_or_start(Some(&state), &engine(), &pace(), now);

        assert_eq!(daily.resumption, Resumption::Expired);
        assert_eq!(daily.session.target().unwrap().day, 1);
    }

    #[test]
    fn resumes_fresh_state() {
        let state = stored(t0() + TimeDelta::seconds(5));
        let now = t0() + TimeDelta::seconds(30);
        let daily = resume_or_start(Some(&state), &engine(), &pace(), now);

        assert_eq!(daily.resumption, Resumption::Resumed);
        assert_eq!(daily.session.target().unwrap().word.text(), "SLATE");
        assert_eq!(daily.session.submitted_rows(), 1);
    }

    #[test]
    fn expired_state_starts_over() {
        let state = stored(t0());
        let now = t0() + TimeDelta::seconds(90);
        let daily = resume_or_start(Some(&state), &engine(), &pace(), now);

        assert_eq!(daily.resumption, Resumption::Expired);
        assert_eq!(daily.session.submitted_rows(), 0);
        assert_eq!(daily.session.target().unwrap().day, 1);
    }

    #[test]
    fn broken_state_is_discarded() {
        let mut state = stored(t0());
        state.expected = "SL".into();
        let daily = resume_or_start(Some(&state), &engine(), &pace(), t0());

        assert!(matches!(
            daily.resumption,
            Resumption::Discarded(RestoreError::InvalidWord { .. })
        ));
        assert_eq!(daily.session.submitted_rows(), 0);
    }
}
