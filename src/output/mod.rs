//! Terminal output formatting
//!
//! Display utilities for CLI results and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{
    print_audit_report, print_board, print_check_result, print_completion, print_rejection,
    print_statistics, print_today_report,
};
pub use formatters::{format_ttl, share_grid};
