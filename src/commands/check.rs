//! Check a guess against a target without touching the saved puzzle

use super::Game;
use crate::core::{Feedback, Word};
use crate::engine::RejectionReason;
use crate::pace::PaceSetter;
use anyhow::{Context, Result};
use chrono::{DateTime, Utc};

/// Result of checking one guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckResult {
    pub input: String,
    pub target: Word,
    /// Words played before the guess, used for hard mode
    pub prior: Vec<Word>,
    /// Canonical word if the guess would be accepted
    pub verdict: Result<Word, RejectionReason>,
    /// Feedback against the target, whenever the input is a well-formed word
    pub feedback: Option<Feedback>,
}

/// Check `guess` against `target`, or against the answer of the period
/// containing `now`
///
/// # Errors
///
/// Returns an error if `target` or one of `prior` is not a valid word.
pub fn check_guess(
    game: &Game,
    guess: &str,
    target: Option<&str>,
    prior: &[String],
    now: DateTime<Utc>,
) -> Result<CheckResult> {
    let target = match target {
        Some(text) => Word::new(text).with_context(|| format!("invalid target {text:?}"))?,
        None => game.engine.answer(game.pace.epoch(now)).clone(),
    };
    let prior = prior
        .iter()
        .map(|text| Word::new(text).with_context(|| format!("invalid earlier guess {text:?}")))
        .collect::<Result<Vec<_>>>()?;

    game.engine.load();
    let verdict = game
        .engine
        .can_submit(guess, &target, &prior, game.hard_mode);
    let feedback = Word::new(guess)
        .ok()
        .map(|word| game.engine.evaluate(&word, &target));

    Ok(CheckResult {
        input: guess.to_string(),
        target,
        prior,
        verdict,
        feedback,
    })
}
