//! Guess validation engine
//!
//! Computes feedback for a guess and decides whether a guess may be submitted,
//! including the hard mode rules carried forward from earlier rows.

mod rejection;
mod validator;

pub use rejection::RejectionReason;
pub use validator::WordValidator;
