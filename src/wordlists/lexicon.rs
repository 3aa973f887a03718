//! Per-locale lexicon with a reproducible answer order

use super::loader::{LexiconError, WordSource, load_word_list};
use super::{Locale, WordListKind};
use crate::core::Word;
use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

/// Default shuffle seed for the answer list
pub const DEFAULT_SEED: u64 = 14_384_982_345;

/// Answers and accepted guesses for one locale
///
/// Answers are shuffled once with a seeded generator, so a seed and locale
/// always give the same answer for a given epoch.
#[derive(Debug, Clone)]
pub struct Lexicon {
    locale: Locale,
    seed: u64,
    answers: Vec<Word>,
    guesses: Vec<Word>,
}

impl Lexicon {
    /// Load both lists for a locale and shuffle the answers
    ///
    /// # Errors
    ///
    /// Returns `LexiconError` if either list cannot be loaded.
    ///
    /// # Examples
    /// ```
    /// use wordle_daily::wordlists::{DEFAULT_SEED, Lexicon, Locale, WordSource};
    ///
    /// let first = Lexicon::load(Locale::En, DEFAULT_SEED, &WordSource::Embedded).unwrap();
    /// let second = Lexicon::load(Locale::En, DEFAULT_SEED, &WordSource::Embedded).unwrap();
    /// assert_eq!(first.answer(42), second.answer(42));
    /// ```
    pub fn load(locale: Locale, seed: u64, source: &WordSource) -> Result<Self, LexiconError> {
        let answers = load_word_list(locale, WordListKind::Answers, source)?;
        let guesses = load_word_list(locale, WordListKind::Guesses, source)?;
        Self::from_words(locale, seed, answers, guesses)
    }

    /// Build a lexicon from already parsed lists
    ///
    /// # Errors
    ///
    /// Returns `LexiconError::Empty` if either list is empty.
    pub fn from_words(
        locale: Locale,
        seed: u64,
        mut answers: Vec<Word>,
        guesses: Vec<Word>,
    ) -> Result<Self, LexiconError> {
        if answers.is_empty() {
            return Err(LexiconError::Empty {
                locale,
                kind: WordListKind::Answers,
            });
        }
        if guesses.is_empty() {
            return Err(LexiconError::Empty {
                locale,
                kind: WordListKind::Guesses,
            });
        }

        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        answers.shuffle(&mut rng);

        Ok(Self {
            locale,
            seed,
            answers,
            guesses,
        })
    }

    /// Target word for an epoch (`answers[epoch mod len]`)
    ///
    /// Negative epochs wrap around like positive ones.
    #[must_use]
    pub fn answer(&self, epoch: i64) -> &Word {
        let len = self.answers.len() as i64;
        &self.answers[epoch.rem_euclid(len) as usize]
    }

    #[must_use]
    pub const fn locale(&self) -> Locale {
        self.locale
    }

    #[must_use]
    pub const fn seed(&self) -> u64 {
        self.seed
    }

    /// Answers in shuffled order
    #[must_use]
    pub fn answers(&self) -> &[Word] {
        &self.answers
    }

    #[must_use]
    pub fn guesses(&self) -> &[Word] {
        &self.guesses
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(list: &[&str]) -> Vec<Word> {
        list.iter().map(|w| Word::new(w).unwrap()).collect()
    }

    fn small(seed: u64) -> Lexicon {
        let answers = words(&["crane", "slate", "trace", "grape", "toast", "speed"]);
        let guesses = answers.clone();
        Lexicon::from_words(Locale::En, seed, answers, guesses).unwrap()
    }

    #[test]
    fn same_seed_same_order() {
        let a = small(7);
        let b = small(7);
        assert_eq!(a.answers(), b.answers());
        for k in 0..12 {
            assert_eq!(a.answer(k), b.answer(k));
        }
    }

    #[test]
    fn shuffle_keeps_every_answer() {
        let lexicon = small(7);
        let mut shuffled: Vec<String> = lexicon.answers().iter().map(Word::text).collect();
        shuffled.sort();
        assert_eq!(shuffled, ["CRANE", "GRAPE", "SLATE", "SPEED", "TOAST", "TRACE"]);
    }

    #[test]
    fn answer_wraps_around() {
        let lexicon = small(3);
        let len = lexicon.answers().len() as i64;
        assert_eq!(lexicon.answer(0), lexicon.answer(len));
        assert_eq!(lexicon.answer(-1), lexicon.answer(len - 1));
    }

    #[test]
    fn embedded_lexicon_is_reproducible() {
        let first = Lexicon::load(Locale::Fr, DEFAULT_SEED, &WordSource::Embedded).unwrap();
        let second = Lexicon::load(Locale::Fr, DEFAULT_SEED, &WordSource::Embedded).unwrap();
        assert_eq!(first.answers(), second.answers());
        assert_eq!(first.seed(), DEFAULT_SEED);
        assert_eq!(first.locale(), Locale::Fr);
    }

    #[test]
    fn empty_answers_rejected() {
        let err = Lexicon::from_words(Locale::En, 1, Vec::new(), words(&["crane"])).unwrap_err();
        assert!(matches!(
            err,
            LexiconError::Empty {
                kind: WordListKind::Answers,
                ..
            }
        ));
    }
}
