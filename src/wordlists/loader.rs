//! Word list loading utilities
//!
//! Lists come either from the embedded constants or from a directory holding
//! `<locale>_answers.txt` and `<locale>_guesses.txt`, one word per line.

use super::{Locale, WordListKind};
use crate::core::{Word, WordError};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Where word lists are read from
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum WordSource {
    /// Lists compiled into the binary
    #[default]
    Embedded,
    /// Text files in a directory
    Directory(PathBuf),
}

/// Errors raised while loading a lexicon
///
/// These are startup failures: nothing can be played without both lists.
#[derive(Debug, Error)]
pub enum LexiconError {
    #[error("failed to read word list {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("{locale} {kind} list, line {line}: invalid entry {text:?}: {source}")]
    InvalidEntry {
        locale: Locale,
        kind: WordListKind,
        line: usize,
        text: String,
        #[source]
        source: WordError,
    },
    #[error("{locale} {kind} list is empty")]
    Empty { locale: Locale, kind: WordListKind },
}

impl WordSource {
    /// Path of a list file inside a directory source
    #[must_use]
    pub fn file_path(dir: &Path, locale: Locale, kind: WordListKind) -> PathBuf {
        dir.join(format!(
            "{}_{}.txt",
            locale.file_base_name(),
            kind.file_suffix()
        ))
    }
}

/// Load one word list
///
/// # Errors
///
/// Returns `LexiconError` if the file cannot be read, an entry is not a valid
/// word, or the list is empty.
///
/// # Examples
/// ```
/// use wordle_daily::wordlists::{Locale, WordListKind, WordSource, load_word_list};
///
/// let answers = load_word_list(Locale::En, WordListKind::Answers, &WordSource::Embedded).unwrap();
/// assert!(!answers.is_empty());
/// ```
pub fn load_word_list(
    locale: Locale,
    kind: WordListKind,
    source: &WordSource,
) -> Result<Vec<Word>, LexiconError> {
    let words = match source {
        WordSource::Embedded => parse_word_list(locale.embedded(kind).iter().copied(), locale, kind)?,
        WordSource::Directory(dir) => {
            load_from_file(WordSource::file_path(dir, locale, kind), locale, kind)?
        }
    };

    tracing::debug!(%locale, %kind, count = words.len(), "loaded word list");
    Ok(words)
}

/// Load words from a file
///
/// # Errors
///
/// Returns `LexiconError::Io` if the file cannot be read, or any error from
/// [`parse_word_list`].
pub fn load_from_file<P: AsRef<Path>>(
    path: P,
    locale: Locale,
    kind: WordListKind,
) -> Result<Vec<Word>, LexiconError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| LexiconError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    parse_word_list(content.lines(), locale, kind)
}

/// Parse a word list, one word per line
///
/// Blank lines are skipped; anything else must be a valid word.
///
/// # Errors
///
/// Returns `LexiconError::InvalidEntry` on the first invalid line and
/// `LexiconError::Empty` if no words remain.
pub fn parse_word_list<'a>(
    lines: impl IntoIterator<Item = &'a str>,
    locale: Locale,
    kind: WordListKind,
) -> Result<Vec<Word>, LexiconError> {
    let mut words = Vec::new();

    for (ix, line) in lines.into_iter().enumerate() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        let word = Word::new(trimmed).map_err(|source| LexiconError::InvalidEntry {
            locale,
            kind,
            line: ix + 1,
            text: trimmed.to_string(),
            source,
        })?;
        words.push(word);
    }

    if words.is_empty() {
        return Err(LexiconError::Empty { locale, kind });
    }

    Ok(words)
}
