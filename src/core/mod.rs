//! Core domain types for the daily puzzle
//!
//! This module contains the fundamental domain types: words and per-letter feedback.
//! Words compare by their accent-folded letters; display keeps the accents as typed.

mod feedback;
pub mod normalize;
mod word;

pub use feedback::{Feedback, LetterFeedback};
pub use word::{WORD_LENGTH, Word, WordError};
