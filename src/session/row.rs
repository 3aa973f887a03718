//! One attempt row of the board

use crate::core::normalize::display_letter;
use crate::core::{Feedback, WORD_LENGTH, Word};

/// An attempt: typed letters while open, a frozen word once submitted
///
/// Feedback is never stored; it is recomputed from the submitted word and the
/// target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    target: Word,
    input: String,
    submitted: Option<Word>,
}

impl Row {
    #[must_use]
    pub const fn new(target: Word) -> Self {
        Self {
            target,
            input: String::new(),
            submitted: None,
        }
    }

    /// Row already submitted with `guess`, as read back from saved state
    pub(crate) fn restored(target: Word, guess: Word) -> Self {
        Self {
            target,
            input: guess.text(),
            submitted: Some(guess),
        }
    }

    #[must_use]
    pub const fn target(&self) -> &Word {
        &self.target
    }

    /// Letters shown in the row: the typed input, or the submitted word
    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Number of letters typed so far
    #[must_use]
    pub fn len(&self) -> usize {
        self.input.chars().count()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.input.is_empty()
    }

    #[must_use]
    pub fn is_full(&self) -> bool {
        self.len() >= WORD_LENGTH
    }

    /// Submitted word, if the row is frozen
    #[must_use]
    pub const fn word(&self) -> Option<&Word> {
        self.submitted.as_ref()
    }

    #[must_use]
    pub const fn is_submitted(&self) -> bool {
        self.submitted.is_some()
    }

    /// Whether the submitted word is the target
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.submitted.as_ref() == Some(&self.target)
    }

    /// Feedback for the submitted word
    #[must_use]
    pub fn feedback(&self) -> Option<Feedback> {
        self.submitted
            .as_ref()
            .map(|word| Feedback::calculate(word, &self.target))
    }

    /// Append a letter; false if it is not a letter or the row is full
    pub(crate) fn push(&mut self, letter: char) -> bool {
        if self.is_submitted() || self.is_full() || !letter.is_alphabetic() {
            return false;
        }
        self.input.push(display_letter(letter));
        true
    }

    /// Remove the last typed letter
    pub(crate) fn pop(&mut self) -> Option<char> {
        if self.is_submitted() {
            return None;
        }
        self.input.pop()
    }

    /// Freeze the row with the accepted word
    pub(crate) fn submit(&mut self, word: Word) {
        self.input = word.text();
        self.submitted = Some(word);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LetterFeedback;

    fn row(target: &str) -> Row {
        Row::new(Word::new(target).unwrap())
    }

    #[test]
    fn typing_is_capped_at_five_letters() {
        let mut r = row("trace");
        for c in "crane".chars() {
            assert!(r.push(c));
        }
        assert!(r.is_full());
        assert!(!r.push('s'));
        assert_eq!(r.input(), "CRANE");
    }

    #[test]
    fn non_letters_are_ignored() {
        let mut r = row("trace");
        assert!(!r.push('1'));
        assert!(!r.push('\n'));
        assert!(r.push('é'));
        assert_eq!(r.input(), "É");
        assert_eq!(r.len(), 1);
    }

    #[test]
    fn delete_removes_last_letter() {
        let mut r = row("trace");
        r.push('a');
        r.push('b');
        assert_eq!(r.pop(), Some('B'));
        assert_eq!(r.input(), "A");
        r.pop();
        assert_eq!(r.pop(), None);
        assert!(r.is_empty());
    }

    #[test]
    fn submitted_row_is_frozen() {
        let mut r = row("trace");
        r.submit(Word::new("crane").unwrap());
        assert!(r.is_submitted());
        assert!(!r.push('a'));
        assert_eq!(r.pop(), None);
        assert_eq!(r.input(), "CRANE");
    }

    #[test]
    fn feedback_only_after_submit() {
        let mut r = row("trace");
        assert_eq!(r.feedback(), None);
        r.submit(Word::new("crane").unwrap());
        assert_eq!(
            r.feedback().unwrap().at(0),
            LetterFeedback::WrongPlace
        );
        assert!(!r.is_solved());

        let mut won = row("trace");
        won.submit(Word::new("trace").unwrap());
        assert!(won.is_solved());
    }

    #[test]
    fn restored_row_shows_its_guess() {
        let r = Row::restored(Word::new("trace").unwrap(), Word::new("élève").unwrap());
        assert!(r.is_submitted());
        assert_eq!(r.input(), "ÉLÈVE");
        assert_eq!(r.word().map(Word::text).as_deref(), Some("ÉLÈVE"));
        assert!(r.feedback().is_some());
    }
}
