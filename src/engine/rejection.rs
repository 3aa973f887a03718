//! Reasons a guess can be refused

use std::fmt;

/// Why a guess was not accepted
///
/// All of these are recoverable: the caller shows the message and leaves the
/// session unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectionReason {
    /// Fewer than five letters typed
    TooShort,
    /// Not an accepted guess
    NotRecognized,
    /// Guess index not built yet; retry later
    StillLoading,
    /// Hard mode: a letter revealed in the right place was moved or dropped
    HardModeMismatch { position: usize, letter: char },
    /// Hard mode: a letter revealed in the wrong place is missing
    HardModeMissingLetter(char),
}

impl RejectionReason {
    /// True when the same guess may succeed later without changes
    #[must_use]
    pub const fn is_transient(self) -> bool {
        matches!(self, Self::StillLoading)
    }
}

impl fmt::Display for RejectionReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooShort => write!(f, "Not enough letters"),
            Self::NotRecognized => write!(f, "Not in word list"),
            Self::StillLoading => write!(f, "Wait a sec, loading words..."),
            Self::HardModeMismatch { position, letter } => {
                write!(f, "{} must be {letter}", letter_number(*position))
            }
            Self::HardModeMissingLetter(letter) => write!(f, "Guess must contain {letter}"),
        }
    }
}

impl std::error::Error for RejectionReason {}

/// "1st letter", "2nd letter", ... for a 0-based position
#[must_use]
pub(crate) fn letter_number(position: usize) -> String {
    format!("{} letter", ordinal(position + 1))
}

/// English ordinal for a 1-based number
#[must_use]
pub(crate) fn ordinal(n: usize) -> String {
    let suffix = match (n % 10, n % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    };
    format!("{n}{suffix}")
}
