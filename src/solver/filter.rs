//! Letter constraint filter
//!
//! Partitions the dictionary into qualifying names and words for a given
//! letter set.

use crate::core::Letters;
use crate::dictionary::Dictionary;

/// Partition the dictionary into qualifying `(names, words)` lists
///
/// A candidate qualifies when it is at least four characters long, contains
/// the required letter, and every one of its characters case-folds into the
/// letter set. Both lists are lexicographically sorted. Entries whose stored
/// form starts with an uppercase letter are reported as names (proper nouns,
/// invalid in the puzzle); everything else lands in words.
#[must_use]
pub fn partition_words(letters: &Letters, dictionary: &Dictionary) -> (Vec<String>, Vec<String>) {
    let mut qualifying: Vec<&str> = dictionary
        .iter()
        .filter(|word| qualifies(letters, word, None))
        .collect();
    qualifying.sort_unstable();

    let (names, words): (Vec<&str>, Vec<&str>) = qualifying
        .into_iter()
        .partition(|word| word.chars().next().is_some_and(char::is_uppercase));

    (
        names.into_iter().map(str::to_owned).collect(),
        words.into_iter().map(str::to_owned).collect(),
    )
}

/// Qualifying entries that end in one extra letter outside the set
///
/// Same qualification as [`partition_words`], except the candidate's last
/// character must equal `additional`, and that one character is allowed on
/// top of the seven letters. Supports the inflection heuristic's hunt for
/// base forms that drop a trailing letter before a suffix, e.g. an ending
/// "e" elided by "ing".
#[must_use]
pub fn consider(letters: &Letters, dictionary: &Dictionary, additional: char) -> Vec<String> {
    let extra = additional.to_ascii_lowercase();

    let mut result: Vec<String> = dictionary
        .iter()
        .filter(|word| {
            word.chars().last() == Some(additional) && qualifies(letters, word, Some(extra))
        })
        .map(str::to_owned)
        .collect();
    result.sort_unstable();
    result
}

/// Shared qualification test
///
/// Membership is case-folded; `extra` admits one character beyond the set.
fn qualifies(letters: &Letters, word: &str, extra: Option<char>) -> bool {
    word.chars().count() >= 4
        && word
            .chars()
            .any(|c| c.to_ascii_lowercase() == letters.required())
        && word.chars().all(|c| {
            let folded = c.to_ascii_lowercase();
            letters.contains(folded) || extra == Some(folded)
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn letters() -> Letters {
        Letters::new("gralvey").unwrap()
    }

    #[test]
    fn partition_end_to_end() {
        let dictionary =
            Dictionary::from_words(["gravely", "gravel", "lever", "GRAVELY", "grave", "Gale"]);
        let (names, words) = partition_words(&letters(), &dictionary);

        // "lever" lacks the required 'g'; capitalized entries are names
        assert_eq!(words, ["grave", "gravel", "gravely"]);
        assert_eq!(names, ["GRAVELY", "Gale"]);
    }

    #[test]
    fn partition_enforces_minimum_length() {
        let dictionary = Dictionary::from_words(["gal", "gale", "egg"]);
        let (names, words) = partition_words(&letters(), &dictionary);

        assert!(names.is_empty());
        assert_eq!(words, ["gale"]);
    }

    #[test]
    fn partition_requires_required_letter() {
        let dictionary = Dictionary::from_words(["valley", "rally", "relay", "gravel"]);
        let (_, words) = partition_words(&letters(), &dictionary);

        assert_eq!(words, ["gravel"]);
    }

    #[test]
    fn partition_rejects_letters_outside_set() {
        let dictionary = Dictionary::from_words(["gravel", "gravels", "grating"]);
        let (_, words) = partition_words(&letters(), &dictionary);

        // 's', 't', 'i', 'n' are not in the set
        assert_eq!(words, ["gravel"]);
    }

    #[test]
    fn partition_membership_is_case_insensitive() {
        let dictionary = Dictionary::from_words(["GRAVEL", "gRaVeL"]);
        let (names, words) = partition_words(&letters(), &dictionary);

        assert_eq!(names, ["GRAVEL"]);
        assert_eq!(words, ["gRaVeL"]);
    }

    #[test]
    fn partition_results_are_sorted_and_disjoint() {
        let dictionary = Dictionary::from_words(["gravely", "gale", "gavel", "gravel", "Gale"]);
        let (names, words) = partition_words(&letters(), &dictionary);

        let mut sorted_words = words.clone();
        sorted_words.sort();
        assert_eq!(words, sorted_words);

        for name in &names {
            assert!(!words.contains(name));
        }
    }

    #[test]
    fn partition_allows_repeated_letters() {
        let dictionary = Dictionary::from_words(["gravelly", "allergy"]);
        let (_, words) = partition_words(&letters(), &dictionary);

        assert_eq!(words, ["allergy", "gravelly"]);
    }

    #[test]
    fn partition_empty_dictionary() {
        let dictionary = Dictionary::from_words(Vec::<&str>::new());
        let (names, words) = partition_words(&letters(), &dictionary);

        assert!(names.is_empty());
        assert!(words.is_empty());
    }

    #[test]
    fn consider_requires_trailing_letter() {
        let dictionary = Dictionary::from_words(["graved", "gravel", "glad", "raved"]);
        let result = consider(&letters(), &dictionary, 'd');

        // "gravel" ends in 'l', "raved" lacks 'g'; "glad" ends in 'd' with
        // 'd' as its one extra letter
        assert_eq!(result, ["glad", "graved"]);
    }

    #[test]
    fn consider_allows_only_one_extra_letter() {
        let dictionary = Dictionary::from_words(["grated", "graved"]);
        let result = consider(&letters(), &dictionary, 'd');

        // "grated" needs both 't' and 'd' outside the set
        assert_eq!(result, ["graved"]);
    }

    #[test]
    fn consider_output_is_sorted() {
        let dictionary = Dictionary::from_words(["veered", "graved", "agreed"]);
        let result = consider(&letters(), &dictionary, 'd');

        assert_eq!(result, ["agreed", "graved"]);
    }
}
