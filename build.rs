//! Build script to generate embedded word lists
//!
//! Reads the per-locale word list files and generates Rust source code with const arrays.

use std::env;
use std::fs;
use std::io::Write;
use std::path::Path;

/// Locales shipped with the binary: (file prefix, const prefix, display name)
const LOCALES: &[(&str, &str, &str)] = &[("en", "EN", "English"), ("fr", "FR", "French")];

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();
    let output_path = Path::new(&out_dir).join("wordlists.rs");

    let mut output = fs::File::create(&output_path)
        .unwrap_or_else(|e| panic!("Failed to create {}: {e}", output_path.display()));

    writeln!(output, "// Generated word lists").unwrap();
    writeln!(output).unwrap();

    for &(file_prefix, const_prefix, language) in LOCALES {
        generate_word_list(
            &mut output,
            &format!("data/{file_prefix}_answers.txt"),
            &format!("{const_prefix}_ANSWERS"),
            &format!("{language} answer words, in file order"),
        );
        generate_word_list(
            &mut output,
            &format!("data/{file_prefix}_guesses.txt"),
            &format!("{const_prefix}_GUESSES"),
            &format!("{language} accepted guesses"),
        );

        println!("cargo:rerun-if-changed=data/{file_prefix}_answers.txt");
        println!("cargo:rerun-if-changed=data/{file_prefix}_guesses.txt");
    }
}

fn generate_word_list(output: &mut fs::File, input_path: &str, const_name: &str, doc_comment: &str) {
    let content = fs::read_to_string(input_path)
        .unwrap_or_else(|e| panic!("Failed to read {input_path}: {e}"));

    let words: Vec<&str> = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();

    writeln!(output, "/// {doc_comment} ({} words)", words.len()).unwrap();
    writeln!(output, "pub const {const_name}: &[&str] = &[").unwrap();

    for word in words {
        writeln!(output, "    {word:?},").unwrap();
    }

    writeln!(output, "];").unwrap();
    writeln!(output).unwrap();
}
