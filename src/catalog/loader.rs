//! Word list loading utilities
//!
//! Reads raw candidate lines from disk; validation and bucketing happen in
//! [`Catalog::from_candidates`](super::Catalog::from_candidates).

use std::fs;
use std::io;
use std::path::Path;

/// Load raw candidate words from a file, one per line.
///
/// Blank lines are skipped and surrounding whitespace is trimmed. No
/// validity filtering happens here.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use bullcow::catalog::{Catalog, loader::load_from_file};
///
/// let lines = load_from_file("data/hidden_words.txt").unwrap();
/// let catalog = Catalog::from_candidates(lines).unwrap();
/// println!("Loaded {} words", catalog.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<String>> {
    let content = fs::read_to_string(path)?;

    let lines = content
        .lines()
        .filter_map(|line| {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                None
            } else {
                Some(trimmed.to_string())
            }
        })
        .collect();

    Ok(lines)
}
