//! Display functions for command results

use super::formatters::{create_progress_bar, format_ttl, score, share_grid, tile, tiles};
use crate::commands::{AuditReport, CheckResult, TodayReport};
use crate::core::{LetterFeedback, WORD_LENGTH, Word};
use crate::engine::RejectionReason;
use crate::session::{MAX_ROWS, Outcome, PuzzleSession};
use crate::stats::Statistics;
use chrono::{Local, TimeDelta};
use colored::Colorize;

/// Print the six rows of a session
pub fn print_board(session: &PuzzleSession) {
    println!();
    for (i, row) in session.rows().iter().enumerate() {
        let line = match (row.word(), row.feedback()) {
            (Some(word), Some(feedback)) => tiles(word, &feedback),
            _ if session.active_row() == Some(i) => {
                let typed: Vec<char> = row.input().chars().collect();
                (0..WORD_LENGTH)
                    .map(|pos| {
                        typed
                            .get(pos)
                            .map_or_else(|| " _ ".bright_black().to_string(), |c| format!(" {c} "))
                    })
                    .collect()
            }
            _ => " · ".repeat(WORD_LENGTH).bright_black().to_string(),
        };
        println!("   {line}");
    }
    println!();
}

pub fn print_rejection(reason: RejectionReason) {
    if reason.is_transient() {
        println!("{}", format!("⏳ {reason}").yellow());
    } else {
        println!("{}", format!("❌ {reason}").red());
    }
}

/// Result banner, statistics and the share grid of a completed puzzle
pub fn print_completion(session: &PuzzleSession, stats: &Statistics, title: &str, ttl: TimeDelta) {
    let Some(outcome) = session.outcome() else {
        return;
    };

    println!("{}", "═".repeat(60).bright_cyan());
    match outcome {
        Outcome::Won { attempts } => {
            let cheer = match attempts {
                1 => "Genius!",
                2 => "Magnificent!",
                3 => "Impressive!",
                4 => "Splendid!",
                5 => "Great!",
                _ => "Phew!",
            };
            println!("  {}", format!("🎉 {cheer} Solved in {}", score(outcome)).bright_green().bold());
        }
        Outcome::Exhausted => {
            let answer = session.target().map(|t| t.word.text()).unwrap_or_default();
            println!("  {}", format!("The word was {answer}").bright_yellow().bold());
        }
    }
    println!("{}", "═".repeat(60).bright_cyan());

    print_statistics(stats);

    if let Some(grid) = share_grid(session, title) {
        println!("\n{}", "Share:".bright_cyan().bold());
        println!("{grid}");
    }

    println!("\nNext puzzle in {}\n", format_ttl(ttl).bright_white().bold());
}

/// Print played, win rate, streaks and the guess distribution
pub fn print_statistics(stats: &Statistics) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "STATISTICS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n   Played:          {}", stats.played);
    println!(
        "   Win rate:        {}",
        format!("{:.0}%", stats.win_rate() * 100.0).bright_yellow().bold()
    );
    println!("   Current streak:  {}", stats.current_streak.to_string().green());
    println!("   Max streak:      {}", stats.max_streak);

    println!("\n{}", "Guess distribution:".bright_cyan().bold());
    let max = f64::from(stats.max_bucket().max(1));
    for (i, &count) in stats.distribution.iter().enumerate() {
        let bar = create_progress_bar(f64::from(count), max, 30);
        let (filled, empty) = bar.split_at(bar.find('░').unwrap_or(bar.len()));
        println!("   {} {}{} {count}", i + 1, filled.green(), empty.bright_black());
    }
    if stats.lost() > 0 {
        println!("   {} {}", "X".red(), stats.lost());
    }
}

pub fn print_check_result(result: &CheckResult) {
    let guess = result.input.to_uppercase();
    match (&result.verdict, &result.feedback) {
        (Ok(word), Some(feedback)) => {
            println!("\n   {}   {}", tiles(word, feedback), feedback.to_emoji());
            println!("{}", format!("✅ {word} would be accepted").green());
        }
        (Err(reason), _) => {
            if let (Some(feedback), Ok(word)) = (&result.feedback, Word::new(&guess)) {
                println!("\n   {}   {}", tiles(&word, feedback), feedback.to_emoji());
            }
            print_rejection(*reason);
        }
        (Ok(word), None) => println!("{}", format!("✅ {word} would be accepted").green()),
    }

    if !result.prior.is_empty() {
        let prior: Vec<String> = result.prior.iter().map(ToString::to_string).collect();
        println!("   {} {}", "after:".bright_black(), prior.join(", "));
    }
}

pub fn print_today_report(report: &TodayReport) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Puzzle #{}  {}",
        report.day.to_string().bright_yellow().bold(),
        report.pace.bright_black()
    );
    println!("{}", "─".repeat(60).cyan());

    if let Some(answer) = &report.answer {
        let reveal: String = answer
            .letters()
            .iter()
            .map(|&c| tile(c, LetterFeedback::RightPlace).to_string())
            .collect();
        println!("   Answer:        {reveal}");
    }

    match &report.saved {
        Some(saved) if saved.completed => println!(
            "   Progress:      completed in {} rows{}",
            saved.submitted,
            if saved.tallied { "" } else { " (not yet counted)" }
        ),
        Some(saved) => println!(
            "   Progress:      {}/{MAX_ROWS} rows used, {} left",
            saved.submitted,
            saved.remaining_rows()
        ),
        None => println!("   Progress:      not started"),
    }

    println!(
        "   Next puzzle:   {} (at {})",
        format_ttl(report.remaining).bright_white().bold(),
        report.next_rollover.with_timezone(&Local).format("%Y-%m-%d %H:%M:%S")
    );
}

pub fn print_audit_report(report: &AuditReport) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "WORD LIST AUDIT:".bright_cyan().bold(),
        report.locale.display_name().bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    println!("\n   Answers:          {}", report.answers);
    println!("   Accepted guesses: {}", report.guesses);
    println!("   Schedule repeats: every {} puzzles", report.cycle_length());
    println!("   Time taken:       {:.2}s", report.duration.as_secs_f64());

    if report.is_clean() {
        println!("\n{}", "✅ Every answer can be played".green().bold());
        return;
    }

    if !report.not_guessable.is_empty() {
        println!(
            "\n{}",
            format!("❌ {} answers are not accepted as guesses:", report.not_guessable.len())
                .red()
                .bold()
        );
        for word in &report.not_guessable {
            println!("   • {word}");
        }
    }

    if !report.duplicates.is_empty() {
        println!(
            "\n{}",
            format!("⚠ {} answers are scheduled more than once:", report.duplicates.len())
                .yellow()
                .bold()
        );
        for (word, days) in &report.duplicates {
            let days: Vec<String> = days.iter().map(ToString::to_string).collect();
            println!("   • {word} on days {}", days.join(", "));
        }
    }
}
