//! Suffix inflection heuristic
//!
//! Dictionaries rarely carry every inflected form. When the required letter
//! appears only inside a formable suffix, a base word lacking the required
//! letter can still yield a valid puzzle word once suffixed; this module
//! reconstructs such forms. The results are heuristic: they are not checked
//! against any grammar and may include non-words, which is why they are kept
//! apart from the dictionary-verified word list.

use crate::core::{Letters, PartOfSpeech, SUFFIX_CATALOG};
use crate::dictionary::Dictionary;
use crate::solver::score::is_pangram;

/// Eligible suffixes per part of speech, in catalog order
pub type SuffixTable = Vec<(PartOfSpeech, Vec<&'static str>)>;

/// Reconstructed words per required-letter-bearing suffix, in suffix order
pub type InflectionTable = Vec<(&'static str, Vec<String>)>;

/// Characters the elision rule treats as vowels, 'y' included
const VOWELS: &str = "aeiouy";

fn is_vowel(c: char) -> bool {
    VOWELS.contains(c)
}

/// Filter the suffix catalog down to suffixes formable from the letter set
///
/// A suffix is eligible when every one of its characters is a member of the
/// letter set. Parts of speech with no eligible suffix are omitted entirely.
#[must_use]
pub fn eligible_suffixes(letters: &Letters) -> SuffixTable {
    SUFFIX_CATALOG
        .iter()
        .filter_map(|&(pos, suffixes)| {
            let eligible: Vec<&'static str> = suffixes
                .iter()
                .copied()
                .filter(|suffix| suffix.chars().all(|c| letters.contains(c)))
                .collect();
            (!eligible.is_empty()).then_some((pos, eligible))
        })
        .collect()
}

/// Append a suffix to a word, eliding a trailing vowel before a vowel
///
/// "like" + "ed" becomes "liked", not "likeed": when the suffix starts with
/// a vowel and the word also ends with one, the word's trailing character is
/// dropped before appending.
#[must_use]
pub fn append_suffix(word: &str, suffix: &str) -> String {
    let (Some(first), Some(last)) = (suffix.chars().next(), word.chars().last()) else {
        return format!("{word}{suffix}");
    };

    if is_vowel(first) && is_vowel(last) {
        let stem = &word[..word.len() - last.len_utf8()];
        format!("{stem}{suffix}")
    } else {
        format!("{word}{suffix}")
    }
}

/// Reconstruct plausible inflected words for the puzzle
///
/// Collects the eligible suffixes that themselves contain the required
/// letter (first occurrence wins when a suffix is listed under several parts
/// of speech), then suffixes every dictionary entry that lacks the required
/// letter but stays inside the letter set. Per suffix, reconstructions
/// shorter than four characters are discarded and the rest sorted. The
/// second return value collects pangram reconstructions in suffix-iteration
/// order, not globally re-sorted.
#[must_use]
pub fn inflected_words(
    letters: &Letters,
    dictionary: &Dictionary,
    candidates: &SuffixTable,
) -> (InflectionTable, Vec<String>) {
    let required = letters.required();

    let mut bearing: Vec<&'static str> = Vec::new();
    for (_, suffixes) in candidates {
        for &suffix in suffixes {
            if suffix.contains(required) && !bearing.contains(&suffix) {
                bearing.push(suffix);
            }
        }
    }

    let mut inflections = InflectionTable::new();
    let mut max_words = Vec::new();

    if bearing.is_empty() {
        return (inflections, max_words);
    }

    // Base pool: in-alphabet entries missing the required letter. No minimum
    // length here; short stems can still reach four characters once suffixed.
    let stems: Vec<&str> = dictionary
        .iter()
        .filter(|word| !word.contains(required) && word.chars().all(|c| letters.contains(c)))
        .collect();

    for suffix in bearing {
        let mut formed: Vec<String> = stems
            .iter()
            .map(|stem| append_suffix(stem, suffix))
            .filter(|word| word.chars().count() >= 4)
            .collect();
        formed.sort_unstable();

        max_words.extend(formed.iter().filter(|word| is_pangram(word.as_str())).cloned());
        inflections.push((suffix, formed));
    }

    (inflections, max_words)
}
