//! Scoring and pangram classification
//!
//! Applies the puzzle scoring bands to a qualifying word list.

use rustc_hash::FxHashSet;

/// Check whether a word uses seven distinct characters
///
/// Words reaching this check are already constrained to the seven puzzle
/// letters, so seven distinct characters means every target letter appears
/// at least once.
#[must_use]
pub fn is_pangram(word: &str) -> bool {
    let distinct: FxHashSet<char> = word.chars().collect();
    distinct.len() == 7
}

/// Score a single word
///
/// Words of three characters or fewer score nothing, four-character words
/// score one point, pangrams score their length plus seven, and every other
/// word scores its length.
#[must_use]
pub fn word_score(word: &str) -> u32 {
    let len = word.chars().count();
    if len <= 3 {
        0
    } else if len == 4 {
        1
    } else if is_pangram(word) {
        len as u32 + 7
    } else {
        len as u32
    }
}

/// Total score for a puzzle's word list
///
/// Sums [`word_score`] over the verified words only; names and heuristic
/// inflections never contribute.
#[must_use]
pub fn puzzle_score<S: AsRef<str>>(words: &[S]) -> u32 {
    words.iter().map(|word| word_score(word.as_ref())).sum()
}
