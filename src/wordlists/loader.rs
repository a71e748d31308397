//! Word list loading utilities
//!
//! Provides functions to build a vocabulary from files or from the embedded list.

use super::Vocabulary;
use std::fs;
use std::io;
use std::path::Path;
use tracing::debug;

/// Name accepted in place of a path to select the embedded list
pub const EMBEDDED: &str = "embedded";

/// Load a vocabulary from a file with one word per line
///
/// Blank lines and invalid entries are skipped. A file with no valid entries
/// yields the fallback vocabulary.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use hadej_slovo::wordlists::loader::load_from_file;
///
/// let vocab = load_from_file("data/words.txt").unwrap();
/// println!("Loaded {} words", vocab.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vocabulary> {
    let path = path.as_ref();
    debug!(path = %path.display(), "reading word list");
    let content = fs::read_to_string(path)?;

    Ok(Vocabulary::from_words(
        content.lines().filter(|line| !line.trim().is_empty()),
    ))
}

/// Resolve a word list selector: [`EMBEDDED`] or a file path
///
/// # Errors
///
/// Returns an I/O error if the selector names a file that cannot be read.
pub fn load(selector: &str) -> io::Result<Vocabulary> {
    if selector == EMBEDDED {
        Ok(Vocabulary::embedded())
    } else {
        load_from_file(selector)
    }
}
