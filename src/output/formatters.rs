//! Formatting utilities for terminal output

use crate::core::{Feedback, LetterFeedback, Word};
use crate::session::{MAX_ROWS, Outcome, PuzzleSession};
use chrono::TimeDelta;
use colored::{ColoredString, Colorize};
use indicatif::{ProgressBar, ProgressStyle};

/// One guessed letter as a colored tile, e.g. " C " on green
#[must_use]
pub fn tile(letter: char, mark: LetterFeedback) -> ColoredString {
    let text = format!(" {letter} ");
    match mark {
        LetterFeedback::RightPlace => text.black().on_green().bold(),
        LetterFeedback::WrongPlace => text.black().on_yellow().bold(),
        LetterFeedback::WrongLetter => text.white().on_bright_black().bold(),
    }
}

/// A submitted word as a row of tiles
#[must_use]
pub fn tiles(word: &Word, feedback: &Feedback) -> String {
    word.letters()
        .iter()
        .zip(feedback.marks())
        .map(|(&letter, &mark)| tile(letter, mark).to_string())
        .collect()
}

/// Remaining time as HH:MM:SS; negative durations show as zero
#[must_use]
pub fn format_ttl(ttl: TimeDelta) -> String {
    let total = ttl.num_seconds().max(0);
    let (hours, minutes, seconds) = (total / 3600, (total / 60) % 60, total % 60);
    format!("{hours:02}:{minutes:02}:{seconds:02}")
}

/// "3/6" for a win, "X/6" otherwise
#[must_use]
pub fn score(outcome: Outcome) -> String {
    match outcome {
        Outcome::Won { attempts } => format!("{attempts}/{MAX_ROWS}"),
        Outcome::Exhausted => format!("X/{MAX_ROWS}"),
    }
}

/// Spoiler-free result: a title line followed by one emoji line per row
///
/// Returns `None` until the session is completed.
#[must_use]
pub fn share_grid(session: &PuzzleSession, title: &str) -> Option<String> {
    let outcome = session.outcome()?;
    let day = session.target().map_or(0, |target| target.day);

    let mut grid = format!("{title} {day} {}", score(outcome));
    for feedback in session.rows().iter().filter_map(|row| row.feedback()) {
        grid.push('\n');
        grid.push_str(&feedback.to_emoji());
    }
    Some(grid)
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Terminal progress bar for long scans over a word list
#[must_use]
pub fn scan_progress(len: usize) -> ProgressBar {
    let pb = ProgressBar::new(len as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
            .map_or_else(|_| ProgressStyle::default_bar(), |style| style.progress_chars("█▓▒░")),
    );
    pb
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::WordValidator;
    use crate::session::DayWord;
    use crate::wordlists::{Lexicon, Locale};
    use chrono::{DateTime, Utc};

    #[test]
    fn ttl_formatting() {
        assert_eq!(format_ttl(TimeDelta::seconds(82_801)), "23:00:01");
        assert_eq!(format_ttl(TimeDelta::seconds(9)), "00:00:09");
        assert_eq!(format_ttl(TimeDelta::milliseconds(999)), "00:00:00");
        assert_eq!(format_ttl(TimeDelta::seconds(-5)), "00:00:00");
        assert_eq!(format_ttl(TimeDelta::hours(30)), "30:00:00");
    }

    #[test]
    fn scores() {
        assert_eq!(score(Outcome::Won { attempts: 3 }), "3/6");
        assert_eq!(score(Outcome::Exhausted), "X/6");
    }

    #[test]
    fn share_grid_after_win() {
        let words: Vec<Word> = ["trace", "crane"]
            .iter()
            .map(|t| Word::new(t).unwrap())
            .collect();
        let engine =
            WordValidator::loaded(Lexicon::from_words(Locale::En, 1, words.clone(), words).unwrap());
        let date: DateTime<Utc> = "2022-03-26T08:00:00Z".parse().unwrap();
        let mut session = PuzzleSession::with_target(
            DayWord {
                word: Word::new("trace").unwrap(),
                day: 4,
            },
            date,
        );

        assert!(share_grid(&session, "Wordle").is_none());
        session.submit_row("crane", &engine, false).unwrap();
        session.submit_row("trace", &engine, false).unwrap();

        assert_eq!(
            share_grid(&session, "Wordle").unwrap(),
            "Wordle 4 2/6\n🟨🟩🟩⬜🟩\n🟩🟩🟩🟩🟩"
        );
    }

    #[test]
    fn progress_bar_empty() {
        assert_eq!(create_progress_bar(0.0, 100.0, 10), "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        assert_eq!(create_progress_bar(100.0, 100.0, 10), "██████████");
    }

    #[test]
    fn progress_bar_half() {
        assert_eq!(create_progress_bar(50.0, 100.0, 10), "█████░░░░░");
    }

    #[test]
    fn progress_bar_zero_max() {
        assert_eq!(create_progress_bar(3.0, 0.0, 4), "░░░░");
    }
}
