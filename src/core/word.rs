//! Puzzle word representation
//!
//! A Word stores a 5-letter word twice: once as displayed (uppercased, accents kept)
//! and once folded for comparison.

use super::normalize::{display_letter, fold_letter};
use rustc_hash::FxHashMap;
use std::fmt;
use std::hash::{Hash, Hasher};
use thiserror::Error;
use unicode_normalization::UnicodeNormalization;

/// Number of letters in every puzzle word
pub const WORD_LENGTH: usize = 5;

/// A 5-letter puzzle word
///
/// Equality and hashing use the folded letters, so `ÉLÈVE` and `eleve` are the
/// same word while each keeps its own display form.
#[derive(Debug, Clone)]
pub struct Word {
    letters: [char; WORD_LENGTH],
    folded: [char; WORD_LENGTH],
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("Word must be exactly {WORD_LENGTH} letters, got {0}")]
    InvalidLength(usize),
    #[error("Word contains a non-letter character {0:?}")]
    InvalidCharacter(char),
}

impl Word {
    /// Create a new Word from a string
    ///
    /// Surrounding whitespace is ignored, the text is NFC-composed and letters are
    /// uppercased.
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - Length is not exactly 5 letters
    /// - Contains non-alphabetic characters
    ///
    /// # Examples
    /// ```
    /// use wordle_daily::core::Word;
    ///
    /// let word = Word::new("crane").unwrap();
    /// assert_eq!(word.text(), "CRANE");
    ///
    /// assert!(Word::new("too long").is_err());
    /// assert!(Word::new("sh0rt").is_err());
    /// assert_eq!(Word::new("élève").unwrap(), Word::new("ELEVE").unwrap());
    /// ```
    pub fn new(text: &str) -> Result<Self, WordError> {
        let chars: Vec<char> = text.trim().nfc().map(display_letter).collect();

        if chars.len() != WORD_LENGTH {
            return Err(WordError::InvalidLength(chars.len()));
        }

        if let Some(&bad) = chars.iter().find(|c| !c.is_alphabetic()) {
            return Err(WordError::InvalidCharacter(bad));
        }

        let mut letters = [' '; WORD_LENGTH];
        let mut folded = [' '; WORD_LENGTH];
        for (i, &ch) in chars.iter().enumerate() {
            letters[i] = ch;
            folded[i] = fold_letter(ch);
        }

        Ok(Self { letters, folded })
    }

    /// Get the word as displayed
    #[must_use]
    pub fn text(&self) -> String {
        self.letters.iter().collect()
    }

    /// Display letters (uppercased, accents kept)
    #[inline]
    #[must_use]
    pub const fn letters(&self) -> &[char; WORD_LENGTH] {
        &self.letters
    }

    /// Folded letters used for every comparison
    #[inline]
    #[must_use]
    pub const fn folded(&self) -> &[char; WORD_LENGTH] {
        &self.folded
    }

    /// Get the display letter at a specific position (0-4)
    ///
    /// # Panics
    /// Panics if position >= 5
    #[inline]
    #[must_use]
    pub const fn letter_at(&self, position: usize) -> char {
        self.letters[position]
    }

    /// Check if two words have the same letter at `position`
    #[inline]
    #[must_use]
    pub const fn same_letter_at(&self, other: &Self, position: usize) -> bool {
        self.folded[position] == other.folded[position]
    }

    /// Check if the word contains a letter, ignoring case and accents
    #[must_use]
    pub fn contains_letter(&self, letter: char) -> bool {
        let letter = fold_letter(letter);
        self.folded.contains(&letter)
    }

    /// Get the count of each folded letter in the word
    ///
    /// Used for feedback calculation with duplicate letters.
    #[must_use]
    pub(crate) fn letter_counts(&self) -> FxHashMap<char, u8> {
        let mut counts = FxHashMap::default();
        for &ch in &self.folded {
            *counts.entry(ch).or_insert(0) += 1;
        }
        counts
    }
}

impl PartialEq for Word {
    fn eq(&self, other: &Self) -> bool {
        self.folded == other.folded
    }
}

impl Eq for Word {}

impl Hash for Word {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.folded.hash(state);
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for ch in &self.letters {
            write!(f, "{ch}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_creation_valid() {
        let word = Word::new("crane").unwrap();
        assert_eq!(word.text(), "CRANE");
        assert_eq!(word.letters(), &['C', 'R', 'A', 'N', 'E']);
    }

    #[test]
    fn word_creation_trims_whitespace() {
        let word = Word::new("  slate\n").unwrap();
        assert_eq!(word.text(), "SLATE");
    }

    #[test]
    fn word_creation_invalid_length() {
        assert_eq!(Word::new("too long"), Err(WordError::InvalidLength(8)));
        assert_eq!(Word::new("shrt"), Err(WordError::InvalidLength(4)));
        assert_eq!(Word::new(""), Err(WordError::InvalidLength(0)));
    }

    #[test]
    fn word_length_counts_letters_not_bytes() {
        // 5 letters, 7 bytes
        let word = Word::new("élève").unwrap();
        assert_eq!(word.text(), "ÉLÈVE");
    }

    #[test]
    fn word_creation_composes_decomposed_input() {
        // E + combining acute accent
        let word = Word::new("e\u{301}cole").unwrap();
        assert_eq!(word.letter_at(0), 'É');
    }

    #[test]
    fn word_creation_invalid_characters() {
        assert_eq!(Word::new("cran3"), Err(WordError::InvalidCharacter('3')));
        assert_eq!(Word::new("cr ne"), Err(WordError::InvalidCharacter(' ')));
        assert_eq!(Word::new("cran!"), Err(WordError::InvalidCharacter('!')));
    }

    #[test]
    fn word_equality_ignores_case_and_accents() {
        let plain = Word::new("eleve").unwrap();
        let accented = Word::new("ÉLÈVE").unwrap();
        assert_eq!(plain, accented);
        assert_eq!(plain.text(), "ELEVE");
        assert_eq!(accented.text(), "ÉLÈVE");
        assert_ne!(plain, Word::new("slate").unwrap());
    }

    #[test]
    fn word_hash_matches_equality() {
        use std::collections::HashSet;

        let mut set = HashSet::new();
        set.insert(Word::new("école").unwrap());
        assert!(set.contains(&Word::new("ECOLE").unwrap()));
    }

    #[test]
    fn word_contains_letter() {
        let word = Word::new("fêtes").unwrap();
        assert!(word.contains_letter('e'));
        assert!(word.contains_letter('Ê'));
        assert!(word.contains_letter('T'));
        assert!(!word.contains_letter('z'));
    }

    #[test]
    fn word_letter_counts() {
        let word = Word::new("speed").unwrap();
        let counts = word.letter_counts();
        assert_eq!(counts.get(&'S'), Some(&1));
        assert_eq!(counts.get(&'E'), Some(&2));
        assert_eq!(counts.get(&'D'), Some(&1));
        assert_eq!(counts.len(), 4);
    }

    #[test]
    fn word_letter_counts_fold_accents() {
        let word = Word::new("élève").unwrap();
        let counts = word.letter_counts();
        assert_eq!(counts.get(&'E'), Some(&3));
    }

    #[test]
    fn word_display() {
        let word = Word::new("crane").unwrap();
        assert_eq!(format!("{word}"), "CRANE");
    }
}
