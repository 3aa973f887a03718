//! Letter folding for accent-insensitive comparison
//!
//! A folded letter is the canonical decomposition of the letter with combining
//! marks dropped, uppercased: `é`, `È` and `e` all fold to `E`.

use unicode_normalization::char::{decompose_canonical, is_combining_mark};

/// Fold a single letter to its comparison form
#[must_use]
pub fn fold_letter(letter: char) -> char {
    let mut base = None;
    decompose_canonical(letter, |c| {
        if base.is_none() && !is_combining_mark(c) {
            base = Some(c);
        }
    });

    let base = base.unwrap_or(letter);
    base.to_uppercase().next().unwrap_or(base)
}

/// Uppercase a letter for display, keeping its accents
#[must_use]
pub fn display_letter(letter: char) -> char {
    letter.to_uppercase().next().unwrap_or(letter)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fold_strips_accents() {
        assert_eq!(fold_letter('é'), 'E');
        assert_eq!(fold_letter('È'), 'E');
        assert_eq!(fold_letter('ê'), 'E');
        assert_eq!(fold_letter('ç'), 'C');
        assert_eq!(fold_letter('û'), 'U');
    }

    #[test]
    fn fold_uppercases_plain_letters() {
        assert_eq!(fold_letter('a'), 'A');
        assert_eq!(fold_letter('Z'), 'Z');
    }

    #[test]
    fn fold_keeps_letters_without_decomposition() {
        assert_eq!(fold_letter('Œ'), 'Œ');
        assert_eq!(fold_letter('œ'), 'Œ');
    }

    #[test]
    fn display_keeps_accents() {
        assert_eq!(display_letter('é'), 'É');
        assert_eq!(display_letter('b'), 'B');
    }
}
