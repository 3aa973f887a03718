//! Wordle Daily
//!
//! A daily five-letter word puzzle: one answer per period, six attempts, an
//! optional hard mode, statistics with streaks and a saved state that resumes
//! within the same period.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_daily::core::{Feedback, Word};
//!
//! // Create words
//! let guess = Word::new("crane").unwrap();
//! let answer = Word::new("trace").unwrap();
//!
//! // Calculate feedback
//! let feedback = Feedback::calculate(&guess, &answer);
//! assert_eq!(feedback.to_emoji(), "🟨🟩🟩⬜🟩");
//! ```

// Core domain types
pub mod core;

// Word lists
pub mod wordlists;

// Guess validation and hard mode rules
pub mod engine;

// Puzzle periods
pub mod pace;

// One day's puzzle
pub mod session;

// Saved state and statistics
pub mod state;
pub mod stats;

// Resume or start today's puzzle
pub mod daily;

pub mod config;
pub mod logging;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
