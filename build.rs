//! Build script to embed the word list
//!
//! Entries are emitted as written; normalization happens when the vocabulary
//! is built. Lines starting with `#` are comments.

use std::env;
use std::fmt::Write;
use std::fs;
use std::path::Path;

const WORD_LIST: &str = "data/words.txt";

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();
    let content =
        fs::read_to_string(WORD_LIST).unwrap_or_else(|e| panic!("Failed to read {WORD_LIST}: {e}"));

    let words: Vec<&str> = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .collect();

    let mut source = String::from("/// Common five-letter Czech words\npub const WORDS: &[&str] = &[\n");
    for word in &words {
        writeln!(source, "    {word:?},").unwrap();
    }
    source.push_str("];\n\n");
    writeln!(source, "/// Number of entries in WORDS").unwrap();
    writeln!(source, "pub const WORDS_COUNT: usize = {};", words.len()).unwrap();

    let output = Path::new(&out_dir).join("words.rs");
    fs::write(&output, source)
        .unwrap_or_else(|e| panic!("Failed to write {}: {e}", output.display()));

    println!("cargo:rerun-if-changed={WORD_LIST}");
}
