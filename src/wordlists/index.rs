//! Lookup structure over accepted guesses

use crate::core::{WORD_LENGTH, Word};
use rustc_hash::FxHashMap;

/// Accepted guesses keyed by their folded letters
///
/// Lookups return the canonical word from the list, so `eleve` finds `ÉLÈVE`.
#[derive(Debug, Clone, Default)]
pub struct GuessIndex {
    words: Vec<Word>,
    by_folded: FxHashMap<[char; WORD_LENGTH], usize>,
}

impl GuessIndex {
    /// Build the index; the first spelling of a folded key wins
    #[must_use]
    pub fn build(guesses: &[Word]) -> Self {
        let mut words = Vec::with_capacity(guesses.len());
        let mut by_folded = FxHashMap::default();
        by_folded.reserve(guesses.len());

        for word in guesses {
            by_folded.entry(*word.folded()).or_insert_with(|| {
                words.push(word.clone());
                words.len() - 1
            });
        }

        Self { words, by_folded }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Canonical spelling of `candidate`, if it is an accepted guess
    #[must_use]
    pub fn lookup(&self, candidate: &Word) -> Option<&Word> {
        self.by_folded
            .get(candidate.folded())
            .map(|&ix| &self.words[ix])
    }

    #[must_use]
    pub fn contains(&self, candidate: &Word) -> bool {
        self.by_folded.contains_key(candidate.folded())
    }
}
