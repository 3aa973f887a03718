//! Simple line-based mode
//!
//! Plays today's puzzle on plain stdin/stdout, one guess per line.

use super::Game;
use crate::daily::{self, Resumption};
use crate::output::display::{print_board, print_completion, print_rejection};
use crate::pace::PaceSetter;
use crate::session::{PuzzleSession, SubmitError};
use anyhow::{Context, Result};
use chrono::Utc;
use colored::Colorize;
use std::io::{self, Write};

/// Play today's puzzle until it is completed or the player quits
///
/// The puzzle is saved after every accepted guess, so quitting and coming back
/// later in the same period resumes it.
///
/// # Errors
///
/// Returns an error on I/O failures reading input or writing the saved files.
pub fn run_simple(game: &Game) -> Result<()> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                     Wordle - Daily Puzzle                    ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    game.engine.load();
    let stored = game.store.load_state()?;
    let daily = daily::resume_or_start(stored.as_ref(), &game.engine, &game.pace, Utc::now());
    match &daily.resumption {
        Resumption::Resumed => println!("{}", "Welcome back! Resuming today's puzzle.".bright_black()),
        Resumption::Expired => println!("{}", "A new puzzle is available.".bright_black()),
        Resumption::Discarded(err) => {
            println!("{}", format!("Saved puzzle was unreadable ({err}), starting over.").yellow());
        }
        Resumption::Started => {}
    }

    if game.hard_mode {
        println!("{}", "Hard mode: revealed hints must be used in later guesses.".bright_black());
    }
    println!("Type a five-letter word and press Enter. 'quit' to exit.\n");

    let mut session = daily.session;
    save(game, &session)?;
    print_board(&session);

    if session.is_completed() {
        return finish(game, &mut session);
    }

    loop {
        let Some(input) = get_user_input("Guess")? else {
            println!();
            return Ok(());
        };

        match input.to_lowercase().as_str() {
            "quit" | "q" | "exit" => {
                println!("\n👋 See you tomorrow!\n");
                return Ok(());
            }
            "" => continue,
            _ => {}
        }

        let now = Utc::now();
        if !daily::session_is_current(&session, &game.pace, now) {
            println!("{}", "\nThe puzzle rolled over, here is a new one.\n".yellow());
            session = daily::start(&game.engine, &game.pace, now);
            save(game, &session)?;
            print_board(&session);
            continue;
        }

        match session.submit_row(&input, &game.engine, game.hard_mode) {
            Ok(_) => {
                save(game, &session)?;
                print_board(&session);
                if session.is_completed() {
                    return finish(game, &mut session);
                }
            }
            Err(SubmitError::Rejected(reason)) => print_rejection(reason),
            Err(SubmitError::Invalid(err)) => {
                return Err(err).context("puzzle can no longer be played");
            }
        }
    }
}

/// Tally a completed puzzle once, then show the result
fn finish(game: &Game, session: &mut PuzzleSession) -> Result<()> {
    let mut stats = game.store.load_stats()?;
    if !session.is_tallied() {
        session.tally(&mut stats, &game.pace)?;
        game.store.save_stats(&stats)?;
        save(game, session)?;
    }

    let now = Utc::now();
    print_completion(session, &stats, &game.title, game.pace.remaining_ttl(now));
    Ok(())
}

fn save(game: &Game, session: &PuzzleSession) -> Result<()> {
    if let Some(state) = session.snapshot() {
        game.store.save_state(&state)?;
    }
    Ok(())
}

/// Read one trimmed line; `None` at end of input
fn get_user_input(prompt: &str) -> io::Result<Option<String>> {
    print!("{prompt}: ");
    io::stdout().flush()?;

    let mut input = String::new();
    if io::stdin().read_line(&mut input)? == 0 {
        return Ok(None);
    }

    Ok(Some(input.trim().to_string()))
}
