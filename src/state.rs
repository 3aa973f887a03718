//! Saved daily state
//!
//! The record the host persists between runs. Mapping to and from a live
//! session happens in [`crate::session::PuzzleSession`].

use crate::core::WordError;
use crate::session::{DayWord, MAX_ROWS};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Snapshot of one day's puzzle
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersistedDailyState {
    /// Target word as displayed
    pub expected: String,
    /// Epoch the target was chosen for
    #[serde(default)]
    pub day: i64,
    /// Opening boundary of the puzzle's period; freshness is judged against it
    pub date: DateTime<Utc>,
    pub rows: Vec<PersistedRow>,
    #[serde(default)]
    pub tallied: bool,
}

/// One saved row
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersistedRow {
    pub input: String,
    pub submitted: bool,
}

/// Why a saved state could not be turned back into a session
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RestoreError {
    #[error("stored word {text:?} is invalid: {source}")]
    InvalidWord {
        text: String,
        #[source]
        source: WordError,
    },
    #[error("stored input {text:?} in row {row} is not up to {max} letters", max = crate::core::WORD_LENGTH)]
    InvalidInput { row: usize, text: String },
    #[error("{0} rows stored, at most {MAX_ROWS} allowed")]
    TooManyRows(usize),
    #[error("row {row} is submitted after an open row")]
    RowOrder { row: usize },
    #[error("row {row} was edited after the puzzle was completed")]
    RowAfterCompletion { row: usize },
    #[error("state is marked as tallied but the puzzle is not completed")]
    TalliedIncomplete,
}

impl PersistedDailyState {
    /// Fresh state for a new puzzle: every row empty
    #[must_use]
    pub fn new(target: &DayWord, date: DateTime<Utc>) -> Self {
        Self {
            expected: target.word.text(),
            day: target.day,
            date,
            rows: vec![PersistedRow::default(); MAX_ROWS],
            tallied: false,
        }
    }

    /// Number of submitted rows
    #[must_use]
    pub fn submitted_rows(&self) -> usize {
        self.rows.iter().filter(|row| row.submitted).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;

    #[test]
    fn new_state_has_empty_rows() {
        let target = DayWord {
            word: Word::new("élève").unwrap(),
            day: 12,
        };
        let date: DateTime<Utc> = "2022-04-02T10:00:00Z".parse().unwrap();
        let state = PersistedDailyState::new(&target, date);

        assert_eq!(state.expected, "ÉLÈVE");
        assert_eq!(state.day, 12);
        assert_eq!(state.rows.len(), MAX_ROWS);
        assert_eq!(state.submitted_rows(), 0);
        assert!(!state.tallied);
    }

    #[test]
    fn json_shape() {
        let json = r#"{
            "expected": "TRACE",
            "date": "2022-04-02T10:00:00Z",
            "rows": [{ "input": "CRANE", "submitted": true }, { "input": "TR", "submitted": false }]
        }"#;
        let state: PersistedDailyState = serde_json::from_str(json).unwrap();

        assert_eq!(state.day, 0);
        assert!(!state.tallied);
        assert_eq!(state.submitted_rows(), 1);
        assert_eq!(state.rows[1].input, "TR");

        let back = serde_json::to_value(&state).unwrap();
        assert_eq!(back["date"], "2022-04-02T10:00:00Z");
        assert_eq!(back["rows"][0]["submitted"], true);
    }
}
