//! Dictionary loading utilities
//!
//! Load a dictionary from a word list file, or use the embedded default.

use super::{Dictionary, WORDS};
use std::fs;
use std::io;
use std::path::Path;

/// Load a dictionary from a word list file, one entry per line
///
/// Blank lines and non-alphabetic entries are skipped.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use bee_solver::dictionary::loader::load_from_file;
///
/// let dictionary = load_from_file("data/words.txt").unwrap();
/// println!("Loaded {} words", dictionary.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Dictionary> {
    let content = fs::read_to_string(path)?;
    Ok(Dictionary::from_words(content.lines()))
}

/// The embedded default dictionary
///
/// # Examples
/// ```
/// use bee_solver::dictionary::loader::embedded;
///
/// let dictionary = embedded();
/// assert!(!dictionary.is_empty());
/// ```
#[must_use]
pub fn embedded() -> Dictionary {
    Dictionary::from_words(WORDS.iter().copied())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::WORDS_COUNT;

    #[test]
    fn embedded_loads_every_entry() {
        // The generated list is already deduplicated and alphabetic
        let dictionary = embedded();
        assert_eq!(dictionary.len(), WORDS_COUNT);
    }

    #[test]
    fn embedded_contains_known_words() {
        let dictionary = embedded();
        assert!(dictionary.iter().any(|w| w == "gravel"));
        assert!(dictionary.iter().any(|w| w == "gravely"));
        assert!(dictionary.iter().any(|w| w == "lever"));
    }

    #[test]
    fn load_skips_blank_and_invalid_lines() {
        let dictionary = Dictionary::from_words("gravel\n\nlever\nab1\n".lines());
        assert_eq!(dictionary.len(), 2);
    }
}
