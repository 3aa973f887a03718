//! Wordle Daily - CLI
//!
//! Daily word puzzle with a terminal board, a line-based mode and a few
//! maintenance commands.

use anyhow::{Context, Result};
use chrono::Utc;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use wordle_daily::{
    commands::{
        Game, check_guess, load_statistics, reset_statistics, run_audit, run_simple,
        store::LOG_FILE, today_report,
    },
    config::GameConfig,
    logging::{self, LogTarget},
    output::{print_audit_report, print_check_result, print_statistics, print_today_report},
    wordlists::Locale,
};

#[derive(Parser)]
#[command(
    name = "wordle_daily",
    about = "Daily five-letter word puzzle with hard mode, streaks and a terminal board",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Config file (default: <config dir>/wordle_daily/config.toml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Puzzle language: en or fr
    #[arg(short, long, global = true)]
    locale: Option<Locale>,

    /// Hard mode: revealed hints must be used in later guesses
    #[arg(long, global = true)]
    hard: bool,

    /// More log output (-v info, -vv debug); RUST_LOG overrides
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Terminal board (default)
    Play,

    /// Line-based mode without the terminal board
    Simple,

    /// Check whether a guess would be accepted, and its feedback
    Check {
        /// The guess to check
        guess: String,

        /// Target word (default: today's answer)
        #[arg(short, long)]
        target: Option<String>,

        /// Earlier guesses, for hard mode
        #[arg(short, long, value_delimiter = ',')]
        after: Vec<String>,
    },

    /// Show today's puzzle number and the time until the next one
    Today {
        /// Also show the answer
        #[arg(long)]
        reveal: bool,
    },

    /// Show saved statistics
    Stats {
        /// Forget all recorded results
        #[arg(long)]
        reset: bool,
    },

    /// Check that every answer can be played
    Audit,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = GameConfig::load(cli.config.as_deref()).context("failed to load config")?;
    if let Some(locale) = cli.locale {
        config.locale = locale;
    }
    if cli.hard {
        config.hard_mode = true;
    }

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    // The terminal board owns the screen, so its logs go to a file
    let log_target = match command {
        Commands::Play => LogTarget::File(config.state_dir().join(LOG_FILE)),
        _ => LogTarget::Stderr,
    };
    logging::init(cli.verbose, &log_target).context("failed to set up logging")?;

    let game = Game::from_config(&config)?;

    match command {
        Commands::Play => run_play_command(game),
        Commands::Simple => run_simple(&game),
        Commands::Check {
            guess,
            target,
            after,
        } => run_check_command(&game, &guess, target.as_deref(), &after),
        Commands::Today { reveal } => run_today_command(&game, reveal),
        Commands::Stats { reset } => run_stats_command(&game, reset),
        Commands::Audit => {
            run_audit_command(&game);
            Ok(())
        }
    }
}

fn run_play_command(game: Game) -> Result<()> {
    use wordle_daily::interactive::{App, run_tui};

    let app = App::new(game, Utc::now())?;
    run_tui(app)
}

fn run_check_command(
    game: &Game,
    guess: &str,
    target: Option<&str>,
    after: &[String],
) -> Result<()> {
    let result = check_guess(game, guess, target, after, Utc::now())?;
    print_check_result(&result);
    Ok(())
}

fn run_today_command(game: &Game, reveal: bool) -> Result<()> {
    let report = today_report(game, reveal, Utc::now())?;
    print_today_report(&report);
    Ok(())
}

fn run_stats_command(game: &Game, reset: bool) -> Result<()> {
    if reset {
        reset_statistics(game)?;
        println!("Statistics reset.");
        return Ok(());
    }

    let stats = load_statistics(game)?;
    print_statistics(&stats);
    Ok(())
}

fn run_audit_command(game: &Game) {
    let report = run_audit(game, true);
    print_audit_report(&report);
}
