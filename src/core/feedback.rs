//! Per-letter feedback for a guess
//!
//! Each position of a guess is marked as one of:
//! - `WrongLetter` (letter not in the target, or all its occurrences used up)
//! - `WrongPlace` (letter in the target, elsewhere)
//! - `RightPlace` (letter at this exact position)

use super::word::{WORD_LENGTH, Word};
use std::fmt;

/// Feedback for a single letter position
///
/// Ordered from least to most informative, so the best known state of a letter
/// across several rows is the maximum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum LetterFeedback {
    WrongLetter,
    WrongPlace,
    RightPlace,
}

impl LetterFeedback {
    /// Emoji tile for this feedback
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::RightPlace => '🟩',
            Self::WrongPlace => '🟨',
            Self::WrongLetter => '⬜',
        }
    }
}

/// Feedback for a full guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Feedback([LetterFeedback; WORD_LENGTH]);

impl Feedback {
    /// All letters in the right place
    pub const SOLVED: Self = Self([LetterFeedback::RightPlace; WORD_LENGTH]);

    /// Calculate the feedback when `candidate` is guessed and `target` is the answer
    ///
    /// Exact matches are reserved before any wrong-place mark is handed out, so a
    /// letter guessed more often than it occurs in the target never gets more
    /// marks than the target has occurrences.
    ///
    /// # Algorithm
    /// 1. First pass: mark exact position matches and remove them from the pool
    /// 2. Second pass, left to right: mark wrong-place letters from the remaining pool
    ///
    /// # Examples
    /// ```
    /// use wordle_daily::core::{Feedback, Word};
    ///
    /// let guess = Word::new("speed").unwrap();
    /// let target = Word::new("erase").unwrap();
    /// let feedback = Feedback::calculate(&guess, &target);
    ///
    /// assert_eq!(feedback.to_emoji(), "🟨⬜🟨🟨⬜");
    /// ```
    #[must_use]
    pub fn calculate(candidate: &Word, target: &Word) -> Self {
        let mut result = [LetterFeedback::WrongLetter; WORD_LENGTH];
        let mut available = target.letter_counts();

        // First pass: exact position matches
        for (i, mark) in result.iter_mut().enumerate() {
            if candidate.same_letter_at(target, i) {
                *mark = LetterFeedback::RightPlace;

                if let Some(count) = available.get_mut(&candidate.folded()[i]) {
                    *count = count.saturating_sub(1);
                }
            }
        }

        // Second pass: wrong position, but letter still available
        for (i, mark) in result.iter_mut().enumerate() {
            if *mark == LetterFeedback::RightPlace {
                continue;
            }

            if let Some(count) = available.get_mut(&candidate.folded()[i])
                && *count > 0
            {
                *mark = LetterFeedback::WrongPlace;
                *count -= 1;
            }
        }

        Self(result)
    }

    /// Feedback at a position (0-4)
    ///
    /// # Panics
    /// Panics if position >= 5
    #[inline]
    #[must_use]
    pub const fn at(&self, position: usize) -> LetterFeedback {
        self.0[position]
    }

    #[inline]
    #[must_use]
    pub const fn marks(&self) -> &[LetterFeedback; WORD_LENGTH] {
        &self.0
    }

    /// Check if every letter is in the right place
    #[must_use]
    pub fn is_solved(&self) -> bool {
        *self == Self::SOLVED
    }

    /// Convert feedback to an emoji string like "🟩🟨⬜🟩🟨"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|mark| mark.emoji()).collect()
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_emoji())
    }
}
