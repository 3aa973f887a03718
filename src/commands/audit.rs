//! Word list audit
//!
//! Scans every answer of the configured locale and reports the ones that
//! could never be played: answers the guess list does not accept, and answers
//! that appear twice in the schedule once accents and case are folded.

use super::Game;
use crate::core::Word;
use crate::output::formatters::scan_progress;
use crate::wordlists::Locale;
use rayon::prelude::*;
use rustc_hash::FxHashMap;
use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
pub struct AuditReport {
    pub locale: Locale,
    pub answers: usize,
    pub guesses: usize,
    /// Answers rejected as guesses, in schedule order
    pub not_guessable: Vec<Word>,
    /// Folded duplicates with the days they are scheduled on
    pub duplicates: Vec<(Word, Vec<i64>)>,
    pub duration: Duration,
}

impl AuditReport {
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.not_guessable.is_empty() && self.duplicates.is_empty()
    }

    /// Days before the schedule repeats
    #[must_use]
    pub const fn cycle_length(&self) -> usize {
        self.answers
    }
}

/// Audit the word lists of `game`
///
/// `progress` draws a bar on stderr while the answers are scanned.
#[must_use]
pub fn run_audit(game: &Game, progress: bool) -> AuditReport {
    let start = Instant::now();
    let lexicon = game.engine.lexicon();
    let index = game.engine.load();
    let answers = lexicon.answers();

    let pb = progress.then(|| scan_progress(answers.len()));
    if let Some(pb) = &pb {
        pb.set_message(format!("{} answers", lexicon.locale().display_name()));
    }

    let not_guessable: Vec<Word> = answers
        .par_iter()
        .filter(|answer| {
            if let Some(pb) = &pb {
                pb.inc(1);
            }
            !index.contains(answer)
        })
        .cloned()
        .collect();

    if let Some(pb) = &pb {
        pb.finish_with_message("Complete!");
    }

    let mut days: FxHashMap<&Word, Vec<i64>> = FxHashMap::default();
    for (day, answer) in answers.iter().enumerate() {
        days.entry(answer).or_default().push(day as i64);
    }
    let mut duplicates: Vec<(Word, Vec<i64>)> = days
        .into_iter()
        .filter(|(_, days)| days.len() > 1)
        .map(|(word, days)| (word.clone(), days))
        .collect();
    duplicates.sort_by_key(|(_, days)| days[0]);

    let report = AuditReport {
        locale: lexicon.locale(),
        answers: answers.len(),
        guesses: index.len(),
        not_guessable,
        duplicates,
        duration: start.elapsed(),
    };

    tracing::info!(
        locale = %report.locale,
        not_guessable = report.not_guessable.len(),
        duplicates = report.duplicates.len(),
        "audit finished"
    );
    report
}
