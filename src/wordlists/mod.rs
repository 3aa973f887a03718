//! Word lists for the daily puzzle
//!
//! Two lists per locale: candidate answers and accepted guesses. Both are embedded
//! into the binary at build time and can be replaced by text files at runtime.

mod embedded;
pub mod index;
pub mod lexicon;
pub mod loader;

pub use embedded::{EN_ANSWERS, EN_GUESSES, FR_ANSWERS, FR_GUESSES};
pub use index::GuessIndex;
pub use lexicon::{DEFAULT_SEED, Lexicon};
pub use loader::{LexiconError, WordSource, load_word_list};

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Supported puzzle locales
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Fr,
}

/// Which of the two per-locale lists
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WordListKind {
    Answers,
    Guesses,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown locale {0:?} (expected one of: en, fr)")]
pub struct UnknownLocale(pub String);

impl Locale {
    pub const ALL: [Self; 2] = [Self::En, Self::Fr];

    /// Base name of the locale's word list files
    #[must_use]
    pub const fn file_base_name(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Fr => "fr",
        }
    }

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::En => "English",
            Self::Fr => "Français",
        }
    }

    /// Embedded list for this locale
    #[must_use]
    pub const fn embedded(self, kind: WordListKind) -> &'static [&'static str] {
        match (self, kind) {
            (Self::En, WordListKind::Answers) => EN_ANSWERS,
            (Self::En, WordListKind::Guesses) => EN_GUESSES,
            (Self::Fr, WordListKind::Answers) => FR_ANSWERS,
            (Self::Fr, WordListKind::Guesses) => FR_GUESSES,
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.file_base_name())
    }
}

impl FromStr for Locale {
    type Err = UnknownLocale;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "en" | "english" => Ok(Self::En),
            "fr" | "french" | "français" => Ok(Self::Fr),
            _ => Err(UnknownLocale(s.to_string())),
        }
    }
}

impl WordListKind {
    /// File suffix for this list kind
    #[must_use]
    pub const fn file_suffix(self) -> &'static str {
        match self {
            Self::Answers => "answers",
            Self::Guesses => "guesses",
        }
    }
}

impl fmt::Display for WordListKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.file_suffix())
    }
}
