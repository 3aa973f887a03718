//! Game configuration
//!
//! Read from a TOML file, then overridden by `WORDLE_DAILY_*` environment
//! variables. Command line flags are applied on top by the binary.
//!
//! ```toml
//! locale = "fr"
//! hard_mode = true
//! start = "2022-03-22T16:20:02Z"
//! pace = { kind = "bucket", seconds = 300 }
//! ```

use crate::pace::{
    BucketPaceSetter, CalendarDailyPaceSetter, Pace, PaceError, default_start,
};
use crate::wordlists::{DEFAULT_SEED, Locale, WordSource};
use chrono::{DateTime, Local, Offset, TimeDelta, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Directory name used under the platform config and data directories
pub const APP_DIR: &str = "wordle_daily";

pub const ENV_LOCALE: &str = "WORDLE_DAILY_LOCALE";
pub const ENV_HARD_MODE: &str = "WORDLE_DAILY_HARD_MODE";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse config {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("bucket of {0} seconds is out of range")]
    BucketOutOfRange(i64),
    #[error(transparent)]
    Pace(#[from] PaceError),
}

/// How puzzle periods are laid out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase", deny_unknown_fields)]
pub enum PaceConfig {
    /// A new puzzle at every local midnight
    Daily {
        /// Fixed offset from UTC in hours; the system offset when absent
        #[serde(default)]
        utc_offset_hours: Option<i32>,
    },
    /// A new puzzle every `seconds`
    Bucket { seconds: i64 },
}

impl Default for PaceConfig {
    fn default() -> Self {
        Self::Daily {
            utc_offset_hours: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GameConfig {
    pub locale: Locale,
    pub hard_mode: bool,
    /// Seed of the answer shuffle
    pub seed: u64,
    /// Instant of the first puzzle
    pub start: DateTime<Utc>,
    pub pace: PaceConfig,
    /// Directory with `<locale>_answers.txt` and `<locale>_guesses.txt`
    pub wordlist_dir: Option<PathBuf>,
    /// Where state, statistics and logs are written
    pub state_dir: Option<PathBuf>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            locale: Locale::default(),
            hard_mode: false,
            seed: DEFAULT_SEED,
            start: default_start(),
            pace: PaceConfig::default(),
            wordlist_dir: None,
            state_dir: None,
        }
    }
}

impl GameConfig {
    /// `<config dir>/wordle_daily/config.toml`
    #[must_use]
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(APP_DIR).join("config.toml"))
    }

    /// Load configuration and apply environment overrides
    ///
    /// An explicit `path` must exist. Without one the default path is used if
    /// present, and built-in defaults otherwise.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file cannot be read or parsed.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => match Self::default_path() {
                Some(path) if path.exists() => Self::from_file(&path)?,
                _ => Self::default(),
            },
        };

        config.apply_env_overrides(|key| std::env::var(key).ok());
        Ok(config)
    }

    /// # Errors
    ///
    /// Returns `ConfigError` if the file cannot be read or parsed.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = toml::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Apply `WORDLE_DAILY_*` overrides read through `lookup`
    ///
    /// Invalid values are logged and ignored.
    pub fn apply_env_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(raw) = lookup(ENV_LOCALE).filter(|raw| !raw.trim().is_empty()) {
            match raw.parse() {
                Ok(locale) => self.locale = locale,
                Err(err) => tracing::warn!("invalid {ENV_LOCALE}, ignoring: {err}"),
            }
        }

        if let Some(raw) = lookup(ENV_HARD_MODE).filter(|raw| !raw.trim().is_empty()) {
            match parse_flag(&raw) {
                Some(flag) => self.hard_mode = flag,
                None => tracing::warn!("invalid {ENV_HARD_MODE} {raw:?}, ignoring"),
            }
        }
    }

    /// Build the configured pace setter
    ///
    /// A daily pace without an explicit offset uses the system offset at the
    /// time of the call.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` for an out of range offset or bucket.
    pub fn build_pace(&self) -> Result<Pace, ConfigError> {
        let pace = match self.pace {
            PaceConfig::Daily {
                utc_offset_hours: Some(hours),
            } => CalendarDailyPaceSetter::with_offset_hours(self.start, hours)?.into(),
            PaceConfig::Daily {
                utc_offset_hours: None,
            } => CalendarDailyPaceSetter::new(self.start, Local::now().offset().fix()).into(),
            PaceConfig::Bucket { seconds } => {
                let bucket = TimeDelta::try_seconds(seconds)
                    .ok_or(ConfigError::BucketOutOfRange(seconds))?;
                BucketPaceSetter::new(self.start, bucket)?.into()
            }
        };
        Ok(pace)
    }

    #[must_use]
    pub fn word_source(&self) -> WordSource {
        self.wordlist_dir
            .clone()
            .map_or(WordSource::Embedded, WordSource::Directory)
    }

    /// Configured state directory, or `<data dir>/wordle_daily`
    #[must_use]
    pub fn state_dir(&self) -> PathBuf {
        self.state_dir.clone().unwrap_or_else(|| {
            dirs::data_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(APP_DIR)
        })
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pace::PaceSetter;

    fn parse(s: &str) -> GameConfig {
        toml::from_str(s).unwrap()
    }

    #[test]
    fn empty_file_gives_defaults() {
        let config = parse("");
        assert_eq!(config, GameConfig::default());
        assert_eq!(config.seed, 14_384_982_345);
        assert_eq!(config.start, default_start());
        assert_eq!(config.word_source(), WordSource::Embedded);
    }

    #[test]
    fn full_file() {
        let config = parse(
            r#"
            locale = "fr"
            hard_mode = true
            seed = 7
            start = "2022-03-22T00:00:00Z"
            pace = { kind = "bucket", seconds = 10 }
            wordlist_dir = "/srv/words"
            state_dir = "/var/lib/wordle"
            "#,
        );

        assert_eq!(config.locale, Locale::Fr);
        assert!(config.hard_mode);
        assert_eq!(config.seed, 7);
        assert_eq!(config.pace, PaceConfig::Bucket { seconds: 10 });
        assert_eq!(
            config.word_source(),
            WordSource::Directory(PathBuf::from("/srv/words"))
        );
        assert_eq!(config.state_dir(), PathBuf::from("/var/lib/wordle"));

        let pace = config.build_pace().unwrap();
        let now: DateTime<Utc> = "2022-03-22T00:00:01Z".parse().unwrap();
        assert_eq!(pace.remaining_ttl(now), TimeDelta::seconds(9));
    }

    #[test]
    fn daily_pace_with_offset() {
        let config = parse(
            r#"
            start = "2022-03-22T16:20:02Z"
            [pace]
            kind = "daily"
            utc_offset_hours = 1
            "#,
        );
        let pace = config.build_pace().unwrap();
        let before: DateTime<Utc> = "2022-03-22T23:59:59Z".parse().unwrap();
        assert_eq!(pace.remaining_ttl(before), TimeDelta::seconds(82_801));
    }

    #[test]
    fn unknown_keys_rejected() {
        assert!(toml::from_str::<GameConfig>("colour = \"blue\"").is_err());
        assert!(toml::from_str::<GameConfig>("pace = { kind = \"hourly\" }").is_err());
    }

    #[test]
    fn invalid_pace_values() {
        let zero = parse("pace = { kind = \"bucket\", seconds = 0 }");
        assert!(matches!(
            zero.build_pace(),
            Err(ConfigError::Pace(PaceError::NonPositiveBucket(_)))
        ));

        let offset = parse("pace = { kind = \"daily\", utc_offset_hours = 40 }");
        assert!(matches!(
            offset.build_pace(),
            Err(ConfigError::Pace(PaceError::InvalidOffset(40)))
        ));
    }

    #[test]
    fn env_overrides() {
        let mut config = GameConfig::default();
        config.apply_env_overrides(|key| match key {
            ENV_LOCALE => Some("fr".into()),
            ENV_HARD_MODE => Some("yes".into()),
            _ => None,
        });
        assert_eq!(config.locale, Locale::Fr);
        assert!(config.hard_mode);
    }

    #[test]
    fn invalid_env_values_ignored() {
        let mut config = GameConfig::default();
        config.apply_env_overrides(|key| match key {
            ENV_LOCALE => Some("klingon".into()),
            ENV_HARD_MODE => Some("maybe".into()),
            _ => None,
        });
        assert_eq!(config, GameConfig::default());
    }

    #[test]
    fn load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "locale = \"fr\"\n").unwrap();

        let config = GameConfig::from_file(&path).unwrap();
        assert_eq!(config.locale, Locale::Fr);

        let err = GameConfig::from_file(&dir.path().join("missing.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));

        fs::write(&path, "hard_mode = \"sometimes\"\n").unwrap();
        assert!(matches!(
            GameConfig::from_file(&path),
            Err(ConfigError::Parse { .. })
        ));
    }

    #[test]
    fn pace_config_round_trips_through_toml() {
        let config = GameConfig {
            pace: PaceConfig::Bucket { seconds: 60 },
            ..GameConfig::default()
        };
        let text = toml::to_string(&config).unwrap();
        assert_eq!(toml::from_str::<GameConfig>(&text).unwrap(), config);
    }
}
