//! One day's puzzle
//!
//! A session holds the target word and six rows. The first open row is the
//! active one; every row before it is submitted. Once a row matches the target
//! or all six are submitted the session is completed and nothing can change
//! except tallying it into the statistics, once.

mod row;

pub use row::Row;

use crate::core::{Feedback, LetterFeedback, Word};
use crate::engine::{RejectionReason, WordValidator};
use crate::pace::PaceSetter;
use crate::state::{PersistedDailyState, PersistedRow, RestoreError};
use crate::stats::Statistics;
use chrono::{DateTime, Utc};
use rustc_hash::FxHashMap;
use std::fmt;
use thiserror::Error;

/// Number of attempts per puzzle
pub const MAX_ROWS: usize = 6;

/// Target word together with the epoch it was chosen for
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayWord {
    pub word: Word,
    pub day: i64,
}

/// How a completed puzzle ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Solved on row `attempts` (1-based)
    Won { attempts: usize },
    /// All rows used without finding the word
    Exhausted,
}

/// Where the session is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    /// Waiting for a target word
    Loading,
    InProgress,
    Completed(Outcome),
}

/// Operation not allowed in the session's current phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InvalidOperation {
    #[error("no target word has been assigned yet")]
    NoTarget,
    #[error("a target word is already assigned")]
    TargetAlreadyAssigned,
    #[error("the puzzle is already completed")]
    AlreadyCompleted,
    #[error("the puzzle is not completed yet")]
    NotCompleted,
    #[error("the puzzle has already been tallied")]
    AlreadyTallied,
}

/// Failure of a submission
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SubmitError {
    /// The guess was refused; the session is unchanged
    #[error(transparent)]
    Rejected(#[from] RejectionReason),
    #[error(transparent)]
    Invalid(#[from] InvalidOperation),
}

/// Notification sent to subscribers after every transition
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    TargetAssigned(DayWord),
    /// Typed letters of the row changed
    RowEdited { row: usize },
    RowSubmitted { row: usize, feedback: Feedback },
    Completed(Outcome),
    Tallied(Outcome),
}

type Listener = Box<dyn FnMut(&SessionEvent) + Send>;

/// State of one day's puzzle
pub struct PuzzleSession {
    target: Option<DayWord>,
    rows: Vec<Row>,
    tallied: bool,
    date: DateTime<Utc>,
    listeners: Vec<Listener>,
}

impl PuzzleSession {
    /// Session waiting for its target, started at `date`
    #[must_use]
    pub const fn new(date: DateTime<Utc>) -> Self {
        Self {
            target: None,
            rows: Vec::new(),
            tallied: false,
            date,
            listeners: Vec::new(),
        }
    }

    /// Session with its target already assigned
    #[must_use]
    pub fn with_target(target: DayWord, date: DateTime<Utc>) -> Self {
        let rows = (0..MAX_ROWS).map(|_| Row::new(target.word.clone())).collect();
        Self {
            target: Some(target),
            rows,
            tallied: false,
            date,
            listeners: Vec::new(),
        }
    }

    /// Register a listener for session events
    pub fn subscribe(&mut self, listener: impl FnMut(&SessionEvent) + Send + 'static) {
        self.listeners.push(Box::new(listener));
    }

    fn emit(&mut self, event: &SessionEvent) {
        for listener in &mut self.listeners {
            listener(event);
        }
    }

    /// Assign the day's target: Loading to `InProgress`
    ///
    /// # Errors
    ///
    /// Returns `InvalidOperation::TargetAlreadyAssigned` outside of Loading.
    pub fn assign_target(&mut self, target: DayWord) -> Result<(), InvalidOperation> {
        if self.target.is_some() {
            return Err(InvalidOperation::TargetAlreadyAssigned);
        }

        tracing::debug!(day = target.day, "target assigned");
        self.rows = (0..MAX_ROWS).map(|_| Row::new(target.word.clone())).collect();
        self.target = Some(target.clone());
        self.emit(&SessionEvent::TargetAssigned(target));
        Ok(())
    }

    #[must_use]
    pub fn phase(&self) -> SessionPhase {
        if self.target.is_none() {
            return SessionPhase::Loading;
        }

        if let Some(ix) = self.rows.iter().position(Row::is_solved) {
            return SessionPhase::Completed(Outcome::Won { attempts: ix + 1 });
        }

        if self.rows.iter().all(Row::is_submitted) {
            SessionPhase::Completed(Outcome::Exhausted)
        } else {
            SessionPhase::InProgress
        }
    }

    #[must_use]
    pub fn is_completed(&self) -> bool {
        matches!(self.phase(), SessionPhase::Completed(_))
    }

    #[must_use]
    pub fn outcome(&self) -> Option<Outcome> {
        match self.phase() {
            SessionPhase::Completed(outcome) => Some(outcome),
            _ => None,
        }
    }

    #[must_use]
    pub const fn target(&self) -> Option<&DayWord> {
        self.target.as_ref()
    }

    #[must_use]
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    #[must_use]
    pub const fn date(&self) -> DateTime<Utc> {
        self.date
    }

    #[must_use]
    pub const fn is_tallied(&self) -> bool {
        self.tallied
    }

    #[must_use]
    pub fn submitted_rows(&self) -> usize {
        self.rows.iter().filter(|row| row.is_submitted()).count()
    }

    /// Index of the editable row, if the puzzle is in progress
    #[must_use]
    pub fn active_row(&self) -> Option<usize> {
        match self.phase() {
            SessionPhase::InProgress => self.rows.iter().position(|row| !row.is_submitted()),
            _ => None,
        }
    }

    fn editable_row(&self) -> Result<usize, InvalidOperation> {
        match self.phase() {
            SessionPhase::Loading => Err(InvalidOperation::NoTarget),
            SessionPhase::Completed(_) => Err(InvalidOperation::AlreadyCompleted),
            SessionPhase::InProgress => self
                .rows
                .iter()
                .position(|row| !row.is_submitted())
                .ok_or(InvalidOperation::AlreadyCompleted),
        }
    }

    /// Type a letter into the active row
    ///
    /// Returns false, leaving the row unchanged, for non-letters and when the row
    /// already holds five letters.
    ///
    /// # Errors
    ///
    /// Returns `InvalidOperation` if the puzzle is not in progress.
    pub fn insert_letter(&mut self, letter: char) -> Result<bool, InvalidOperation> {
        let ix = self.editable_row()?;
        let changed = self.rows[ix].push(letter);
        if changed {
            self.emit(&SessionEvent::RowEdited { row: ix });
        }
        Ok(changed)
    }

    /// Remove the last letter of the active row
    ///
    /// # Errors
    ///
    /// Returns `InvalidOperation` if the puzzle is not in progress.
    pub fn delete_letter(&mut self) -> Result<Option<char>, InvalidOperation> {
        let ix = self.editable_row()?;
        let removed = self.rows[ix].pop();
        if removed.is_some() {
            self.emit(&SessionEvent::RowEdited { row: ix });
        }
        Ok(removed)
    }

    /// Submit `candidate` into the active row
    ///
    /// The engine decides acceptance against the words of the rows already
    /// submitted. On success the row is frozen with the canonical spelling and
    /// completion is re-evaluated.
    ///
    /// # Errors
    ///
    /// Returns `SubmitError::Invalid` if the puzzle is not in progress and
    /// `SubmitError::Rejected` if the engine refuses the guess. Either way the
    /// session is unchanged.
    ///
    /// # Examples
    /// ```
    /// use chrono::Utc;
    /// use wordle_daily::core::Word;
    /// use wordle_daily::engine::WordValidator;
    /// use wordle_daily::session::{DayWord, Outcome, PuzzleSession, SessionPhase};
    /// use wordle_daily::wordlists::{DEFAULT_SEED, Lexicon, Locale, WordSource};
    ///
    /// let lexicon = Lexicon::load(Locale::En, DEFAULT_SEED, &WordSource::Embedded).unwrap();
    /// let engine = WordValidator::loaded(lexicon);
    /// let target = DayWord { word: Word::new("trace").unwrap(), day: 0 };
    /// let mut session = PuzzleSession::with_target(target, Utc::now());
    ///
    /// session.submit_row("crane", &engine, false).unwrap();
    /// session.submit_row("trace", &engine, false).unwrap();
    /// assert_eq!(session.phase(), SessionPhase::Completed(Outcome::Won { attempts: 2 }));
    /// ```
    pub fn submit_row(
        &mut self,
        candidate: &str,
        engine: &WordValidator,
        hard_mode: bool,
    ) -> Result<Feedback, SubmitError> {
        let ix = self.editable_row()?;
        let target = self.rows[ix].target();

        let word = engine
            .can_submit(
                candidate,
                target,
                self.rows[..ix].iter().filter_map(Row::word),
                hard_mode,
            )
            .inspect_err(|reason| tracing::debug!(candidate, %reason, "guess rejected"))?;
        let feedback = Feedback::calculate(&word, target);

        self.rows[ix].submit(word);
        self.emit(&SessionEvent::RowSubmitted { row: ix, feedback });

        if let Some(outcome) = self.outcome() {
            tracing::info!(?outcome, "puzzle completed");
            self.emit(&SessionEvent::Completed(outcome));
        }

        Ok(feedback)
    }

    /// Submit the letters typed into the active row
    ///
    /// # Errors
    ///
    /// Same as [`PuzzleSession::submit_row`].
    pub fn submit_active(
        &mut self,
        engine: &WordValidator,
        hard_mode: bool,
    ) -> Result<Feedback, SubmitError> {
        let ix = self.editable_row()?;
        let input = self.rows[ix].input().to_string();
        self.submit_row(&input, engine, hard_mode)
    }

    /// Record the completed puzzle in `stats`
    ///
    /// # Errors
    ///
    /// Returns `InvalidOperation::NotCompleted` before completion and
    /// `InvalidOperation::AlreadyTallied` on a second call.
    pub fn tally(
        &mut self,
        stats: &mut Statistics,
        pace: &impl PaceSetter,
    ) -> Result<Outcome, InvalidOperation> {
        let outcome = match self.phase() {
            SessionPhase::Loading => return Err(InvalidOperation::NoTarget),
            SessionPhase::InProgress => return Err(InvalidOperation::NotCompleted),
            SessionPhase::Completed(outcome) => outcome,
        };
        if self.tallied {
            return Err(InvalidOperation::AlreadyTallied);
        }

        stats.record(outcome, self.date, pace);
        self.tallied = true;
        self.emit(&SessionEvent::Tallied(outcome));
        Ok(outcome)
    }

    /// Best known feedback for every letter guessed so far, keyed by folded letter
    #[must_use]
    pub fn letter_hints(&self) -> FxHashMap<char, LetterFeedback> {
        let mut hints = FxHashMap::default();
        for row in &self.rows {
            let (Some(word), Some(feedback)) = (row.word(), row.feedback()) else {
                continue;
            };
            for (&letter, &mark) in word.folded().iter().zip(feedback.marks()) {
                hints
                    .entry(letter)
                    .and_modify(|best: &mut LetterFeedback| *best = (*best).max(mark))
                    .or_insert(mark);
            }
        }
        hints
    }

    /// Persistable snapshot; `None` while loading
    #[must_use]
    pub fn snapshot(&self) -> Option<PersistedDailyState> {
        let target = self.target.as_ref()?;
        Some(PersistedDailyState {
            expected: target.word.text(),
            day: target.day,
            date: self.date,
            rows: self
                .rows
                .iter()
                .map(|row| PersistedRow {
                    input: row.input().to_string(),
                    submitted: row.is_submitted(),
                })
                .collect(),
            tallied: self.tallied,
        })
    }

    /// Rebuild a session from a snapshot
    ///
    /// Missing trailing rows are added empty. Submitted words are taken as
    /// stored; they were accepted when first played.
    ///
    /// # Errors
    ///
    /// Returns `RestoreError` if a stored word or input is invalid, there are too
    /// many rows, a submitted row follows an open one, a row was used after
    /// completion, or the state is tallied without being completed.
    pub fn restore(state: &PersistedDailyState) -> Result<Self, RestoreError> {
        let word = parse_word(&state.expected)?;
        if state.rows.len() > MAX_ROWS {
            return Err(RestoreError::TooManyRows(state.rows.len()));
        }

        let mut rows = Vec::with_capacity(MAX_ROWS);
        let mut open_seen = false;
        let mut solved = false;

        for (ix, stored) in state.rows.iter().enumerate() {
            if solved && (stored.submitted || !stored.input.is_empty()) {
                return Err(RestoreError::RowAfterCompletion { row: ix });
            }

            let row = if stored.submitted {
                if open_seen {
                    return Err(RestoreError::RowOrder { row: ix });
                }
                let guess = parse_word(&stored.input)?;
                solved = guess == word;
                Row::restored(word.clone(), guess)
            } else {
                open_seen = true;
                let mut row = Row::new(word.clone());
                for letter in stored.input.chars() {
                    if !row.push(letter) {
                        return Err(RestoreError::InvalidInput {
                            row: ix,
                            text: stored.input.clone(),
                        });
                    }
                }
                row
            };
            rows.push(row);
        }
        rows.resize_with(MAX_ROWS, || Row::new(word.clone()));

        let session = Self {
            target: Some(DayWord {
                word,
                day: state.day,
            }),
            rows,
            tallied: state.tallied,
            date: state.date,
            listeners: Vec::new(),
        };

        if session.tallied && !session.is_completed() {
            return Err(RestoreError::TalliedIncomplete);
        }
        Ok(session)
    }
}

fn parse_word(text: &str) -> Result<Word, RestoreError> {
    Word::new(text).map_err(|source| RestoreError::InvalidWord {
        text: text.to_string(),
        source,
    })
}

impl fmt::Debug for PuzzleSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PuzzleSession")
            .field("target", &self.target)
            .field("rows", &self.rows)
            .field("tallied", &self.tallied)
            .field("date", &self.date)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
