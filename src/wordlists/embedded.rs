//! Embedded word lists
//!
//! Answer and guess lists for every locale, compiled in by the build script.

// One const pair per locale: <LOCALE>_ANSWERS and <LOCALE>_GUESSES
include!(concat!(env!("OUT_DIR"), "/wordlists.rs"));
