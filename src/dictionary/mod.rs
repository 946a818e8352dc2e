//! Dictionary source
//!
//! An immutable set of known words, loaded once and shared read-only by
//! every puzzle evaluation. Entries keep their stored casing: an
//! uppercase-initial entry denotes a proper noun.

mod embedded;
pub mod loader;

pub use embedded::{WORDS, WORDS_COUNT};

use rustc_hash::FxHashSet;

/// An immutable set of dictionary entries
///
/// Entries are ASCII-alphabetic, deduplicated, and case-preserving. Nothing
/// is added or removed after construction; puzzle evaluations borrow the
/// set, so concurrent readers need no synchronization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dictionary {
    entries: Vec<String>,
}

impl Dictionary {
    /// Build a dictionary from an iterator of words
    ///
    /// Entries are trimmed; blank or non-alphabetic entries are skipped, and
    /// duplicates keep their first occurrence.
    ///
    /// # Examples
    /// ```
    /// use bee_solver::dictionary::Dictionary;
    ///
    /// let dictionary = Dictionary::from_words(["gravel", "lever", "gravel", "x9"]);
    /// assert_eq!(dictionary.len(), 2);
    /// ```
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut seen = FxHashSet::default();
        let mut entries = Vec::new();

        for word in words {
            let word = word.as_ref().trim();
            if word.is_empty() || !word.chars().all(|c| c.is_ascii_alphabetic()) {
                continue;
            }
            if seen.contains(word) {
                continue;
            }
            seen.insert(word.to_owned());
            entries.push(word.to_owned());
        }

        Self { entries }
    }

    /// Number of entries
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the dictionary has no entries
    ///
    /// An empty dictionary is valid; every puzzle over it yields empty
    /// result lists.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate the entries in load order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }

    /// Get the entries as a slice
    #[inline]
    #[must_use]
    pub fn entries(&self) -> &[String] {
        &self.entries
    }
}
