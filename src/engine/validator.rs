//! Guess validation
//!
//! Owns the lexicon and a lazily built guess index, computes feedback and decides
//! whether a guess can be submitted.

use super::rejection::RejectionReason;
use crate::core::{Feedback, LetterFeedback, WORD_LENGTH, Word};
use crate::wordlists::{GuessIndex, Lexicon};
use std::sync::OnceLock;
use unicode_normalization::UnicodeNormalization;

/// Rules engine for one locale
///
/// The guess index is built at most once. Until [`WordValidator::load`] has
/// finished, [`WordValidator::can_submit`] answers `StillLoading`. The type is
/// `Sync`, so the index can be built on a background thread while another
/// thread keeps validating.
#[derive(Debug)]
pub struct WordValidator {
    lexicon: Lexicon,
    index: OnceLock<GuessIndex>,
}

impl WordValidator {
    #[must_use]
    pub const fn new(lexicon: Lexicon) -> Self {
        Self {
            lexicon,
            index: OnceLock::new(),
        }
    }

    /// Create a validator and build its index right away
    #[must_use]
    pub fn loaded(lexicon: Lexicon) -> Self {
        let validator = Self::new(lexicon);
        validator.load();
        validator
    }

    /// Build the guess index
    ///
    /// Idempotent: concurrent callers wait for the single build and all get the
    /// same index.
    pub fn load(&self) -> &GuessIndex {
        self.index.get_or_init(|| {
            let index = GuessIndex::build(self.lexicon.guesses());
            tracing::info!(
                locale = %self.lexicon.locale(),
                guesses = index.len(),
                answers = self.lexicon.answers().len(),
                "guess index ready"
            );
            index
        })
    }

    /// Whether the guess index has been built
    #[must_use]
    pub fn ready(&self) -> bool {
        self.index.get().is_some()
    }

    #[must_use]
    pub const fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    /// Target word for an epoch
    #[must_use]
    pub fn answer(&self, epoch: i64) -> &Word {
        self.lexicon.answer(epoch)
    }

    /// Feedback for `candidate` against `target`
    #[must_use]
    pub fn evaluate(&self, candidate: &Word, target: &Word) -> Feedback {
        Feedback::calculate(candidate, target)
    }

    /// Check whether `candidate` can be submitted
    ///
    /// `prior` are the words of the rows already submitted, oldest first. Their
    /// feedback is recomputed against `target`.
    ///
    /// Rules, first failure wins:
    /// 1. fewer than five letters: `TooShort`
    /// 2. index not built yet: `StillLoading`
    /// 3. not an accepted guess: `NotRecognized`
    /// 4. hard mode constraints from prior rows
    ///
    /// On success returns the canonical spelling from the guess list.
    ///
    /// # Errors
    ///
    /// Returns the first `RejectionReason` that applies.
    ///
    /// # Examples
    /// ```
    /// use wordle_daily::core::Word;
    /// use wordle_daily::engine::{RejectionReason, WordValidator};
    /// use wordle_daily::wordlists::{DEFAULT_SEED, Lexicon, Locale, WordSource};
    ///
    /// let lexicon = Lexicon::load(Locale::En, DEFAULT_SEED, &WordSource::Embedded).unwrap();
    /// let validator = WordValidator::new(lexicon);
    /// let target = Word::new("trace").unwrap();
    ///
    /// assert_eq!(validator.can_submit("cra", &target, [], false), Err(RejectionReason::TooShort));
    /// assert_eq!(validator.can_submit("crane", &target, [], false), Err(RejectionReason::StillLoading));
    ///
    /// validator.load();
    /// assert_eq!(validator.can_submit("crane", &target, [], false).unwrap().text(), "CRANE");
    /// ```
    pub fn can_submit<'a>(
        &self,
        candidate: &str,
        target: &Word,
        prior: impl IntoIterator<Item = &'a Word>,
        hard_mode: bool,
    ) -> Result<Word, RejectionReason> {
        if candidate.trim().nfc().count() < WORD_LENGTH {
            return Err(RejectionReason::TooShort);
        }

        let Some(index) = self.index.get() else {
            return Err(RejectionReason::StillLoading);
        };

        let word = Word::new(candidate)
            .ok()
            .and_then(|word| index.lookup(&word).cloned())
            .ok_or(RejectionReason::NotRecognized)?;

        if hard_mode {
            check_hard_mode(&word, target, prior)?;
        }

        Ok(word)
    }
}

/// Check hard mode constraints for `candidate`
///
/// Every right-place letter of a prior row must stay in place; those are checked
/// first, rows oldest first and positions left to right. Every wrong-place letter
/// must then appear somewhere in the candidate.
///
/// # Errors
///
/// Returns `HardModeMismatch` or `HardModeMissingLetter` for the first violation.
pub(crate) fn check_hard_mode<'a>(
    candidate: &Word,
    target: &Word,
    prior: impl IntoIterator<Item = &'a Word>,
) -> Result<(), RejectionReason> {
    let mut required = Vec::new();

    for guess in prior {
        let feedback = Feedback::calculate(guess, target);

        for position in 0..WORD_LENGTH {
            match feedback.at(position) {
                LetterFeedback::RightPlace => {
                    if !candidate.same_letter_at(target, position) {
                        return Err(RejectionReason::HardModeMismatch {
                            position,
                            letter: target.letter_at(position),
                        });
                    }
                }
                LetterFeedback::WrongPlace => required.push(guess.letter_at(position)),
                LetterFeedback::WrongLetter => {}
            }
        }
    }

    match required.into_iter().find(|&letter| !candidate.contains_letter(letter)) {
        Some(letter) => {
            tracing::debug!(%candidate, %letter, "hard mode: missing letter");
            Err(RejectionReason::HardModeMissingLetter(letter))
        }
        None => Ok(()),
    }
}
