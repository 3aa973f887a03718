//! Command implementations

pub mod audit;
pub mod check;
pub mod simple;
pub mod stats;
pub mod store;
pub mod today;

pub use audit::{AuditReport, run_audit};
pub use check::{CheckResult, check_guess};
pub use simple::run_simple;
pub use stats::{load_statistics, reset_statistics};
pub use store::Store;
pub use today::{TodayReport, today_report};

use crate::config::GameConfig;
use crate::engine::WordValidator;
use crate::pace::Pace;
use crate::wordlists::{Lexicon, Locale};
use anyhow::{Context, Result};
use std::sync::Arc;

/// Everything a command needs, built once from the configuration
#[derive(Debug, Clone)]
pub struct Game {
    pub engine: Arc<WordValidator>,
    pub pace: Pace,
    pub store: Store,
    pub hard_mode: bool,
    /// Name used in share grids
    pub title: String,
}

impl Game {
    /// Load the lexicon and build the pace setter
    ///
    /// The guess index is not built here; the caller decides whether to build
    /// it in the foreground or in the background.
    ///
    /// # Errors
    ///
    /// Returns an error if the word lists cannot be loaded or the pace
    /// settings are invalid.
    pub fn from_config(config: &GameConfig) -> Result<Self> {
        let lexicon = Lexicon::load(config.locale, config.seed, &config.word_source())
            .with_context(|| format!("failed to load {} word lists", config.locale))?;
        let pace = config.build_pace().context("invalid pace settings")?;
        let store = Store::new(config.state_dir(), config.locale);

        tracing::debug!(
            locale = %config.locale,
            pace = %pace.describe(),
            state_dir = %store.dir().display(),
            "game configured"
        );

        Ok(Self {
            engine: Arc::new(WordValidator::new(lexicon)),
            pace,
            store,
            hard_mode: config.hard_mode,
            title: title_for(config),
        })
    }
}

fn title_for(config: &GameConfig) -> String {
    match config.locale {
        Locale::En => "Wordle".to_string(),
        Locale::Fr => "Wordle FR".to_string(),
    }
}
