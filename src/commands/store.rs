//! JSON files for the saved puzzle and statistics
//!
//! Each locale keeps its own `state.<locale>.json` and `stats.<locale>.json`
//! under the state directory.

use crate::state::PersistedDailyState;
use crate::stats::Statistics;
use crate::wordlists::Locale;
use anyhow::{Context, Result};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Log file written while the terminal board is running
pub const LOG_FILE: &str = "wordle_daily.log";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Store {
    dir: PathBuf,
    locale: Locale,
}

impl Store {
    #[must_use]
    pub const fn new(dir: PathBuf, locale: Locale) -> Self {
        Self { dir, locale }
    }

    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    #[must_use]
    pub fn state_path(&self) -> PathBuf {
        self.dir.join(format!("state.{}.json", self.locale))
    }

    #[must_use]
    pub fn stats_path(&self) -> PathBuf {
        self.dir.join(format!("stats.{}.json", self.locale))
    }

    #[must_use]
    pub fn log_path(&self) -> PathBuf {
        self.dir.join(LOG_FILE)
    }

    /// Saved puzzle, if any
    ///
    /// An unreadable file is logged and treated as missing: the puzzle simply
    /// starts over.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read.
    pub fn load_state(&self) -> Result<Option<PersistedDailyState>> {
        let path = self.state_path();
        match read_json(&path)? {
            Some(Ok(state)) => Ok(Some(state)),
            Some(Err(err)) => {
                tracing::warn!(path = %path.display(), error = %err, "ignoring corrupt saved puzzle");
                Ok(None)
            }
            None => Ok(None),
        }
    }

    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub fn save_state(&self, state: &PersistedDailyState) -> Result<()> {
        write_json(&self.state_path(), state)
    }

    /// Saved statistics, or empty ones
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed. Unlike
    /// the daily state, statistics are never silently reset.
    pub fn load_stats(&self) -> Result<Statistics> {
        let path = self.stats_path();
        match read_json(&path)? {
            Some(parsed) => {
                parsed.with_context(|| format!("failed to parse statistics {}", path.display()))
            }
            None => Ok(Statistics::default()),
        }
    }

    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub fn save_stats(&self, stats: &Statistics) -> Result<()> {
        write_json(&self.stats_path(), stats)
    }
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<Option<serde_json::Result<T>>> {
    match fs::read_to_string(path) {
        Ok(contents) => Ok(Some(serde_json::from_str(&contents))),
        Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
        Err(err) => Err(err).with_context(|| format!("failed to read {}", path.display())),
    }
}

/// Write through a temporary file so a crash never leaves half a file behind
fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)
            .with_context(|| format!("failed to create {}", dir.display()))?;
    }

    let contents = serde_json::to_string_pretty(value)?;
    let temp = path.with_extension("json.tmp");
    fs::write(&temp, contents).with_context(|| format!("failed to write {}", temp.display()))?;
    fs::rename(&temp, path).with_context(|| format!("failed to replace {}", path.display()))?;
    Ok(())
}
