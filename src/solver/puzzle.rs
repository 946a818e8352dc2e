//! Puzzle facade
//!
//! One `Puzzle` per letter set: construction validates the letters, then
//! runs the filter, classifier and inflection heuristic eagerly and exposes
//! the results read-only. The dictionary is borrowed and never modified.

use crate::core::{Letters, LettersError};
use crate::dictionary::Dictionary;
use crate::solver::inflect::{self, InflectionTable, SuffixTable};
use crate::solver::{filter, score};

/// A solved Spelling Bee puzzle
///
/// Holds the complete result bundle for one letter set. Everything is
/// computed once at construction; two puzzles built from the same letters
/// and dictionary carry identical results.
#[derive(Debug, Clone)]
pub struct Puzzle<'a> {
    letters: Letters,
    dictionary: &'a Dictionary,
    names: Vec<String>,
    words: Vec<String>,
    all_letter_words: Vec<String>,
    candidate_suffixes: SuffixTable,
    inflections: InflectionTable,
    inflection_max_words: Vec<String>,
}

impl<'a> Puzzle<'a> {
    /// Solve a puzzle for the given letters
    ///
    /// The first letter is the required letter; input is lowercased.
    ///
    /// # Errors
    /// Returns `LettersError::InvalidLength` if `letters` is not exactly
    /// 7 characters long.
    ///
    /// # Examples
    /// ```
    /// use bee_solver::dictionary::Dictionary;
    /// use bee_solver::solver::Puzzle;
    ///
    /// let dictionary = Dictionary::from_words(["gravel", "lever"]);
    /// let puzzle = Puzzle::new("gralvey", &dictionary).unwrap();
    /// assert_eq!(puzzle.words(), ["gravel"]);
    ///
    /// assert!(Puzzle::new("gr", &dictionary).is_err());
    /// ```
    pub fn new(letters: &str, dictionary: &'a Dictionary) -> Result<Self, LettersError> {
        let letters = Letters::new(letters)?;

        let (names, words) = filter::partition_words(&letters, dictionary);
        let all_letter_words = words
            .iter()
            .filter(|word| score::is_pangram(word.as_str()))
            .cloned()
            .collect();
        let candidate_suffixes = inflect::eligible_suffixes(&letters);
        let (inflections, inflection_max_words) =
            inflect::inflected_words(&letters, dictionary, &candidate_suffixes);

        Ok(Self {
            letters,
            dictionary,
            names,
            words,
            all_letter_words,
            candidate_suffixes,
            inflections,
            inflection_max_words,
        })
    }

    /// The puzzle letters, required letter first
    #[inline]
    #[must_use]
    pub const fn letters(&self) -> &Letters {
        &self.letters
    }

    /// Qualifying proper-noun entries, sorted
    ///
    /// Reported separately because proper nouns are not valid puzzle words.
    #[inline]
    #[must_use]
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Qualifying common words, sorted
    #[inline]
    #[must_use]
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Pangrams within [`words`](Self::words)
    #[inline]
    #[must_use]
    pub fn all_letter_words(&self) -> &[String] {
        &self.all_letter_words
    }

    /// Eligible suffixes per part of speech
    #[inline]
    #[must_use]
    pub fn candidate_suffixes(&self) -> &SuffixTable {
        &self.candidate_suffixes
    }

    /// Heuristic reconstructions per required-letter-bearing suffix
    ///
    /// Unverified; may contain non-words.
    #[inline]
    #[must_use]
    pub fn inflections(&self) -> &InflectionTable {
        &self.inflections
    }

    /// Pangram reconstructions, in suffix-iteration order
    #[inline]
    #[must_use]
    pub fn inflection_max_words(&self) -> &[String] {
        &self.inflection_max_words
    }

    /// Predicted puzzle score over the verified word list
    #[must_use]
    pub fn score(&self) -> u32 {
        score::puzzle_score(&self.words)
    }

    /// Qualifying entries ending in one extra letter outside the set
    ///
    /// See [`filter::consider`].
    #[must_use]
    pub fn consider(&self, additional: char) -> Vec<String> {
        filter::consider(&self.letters, self.dictionary, additional)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dictionary() -> Dictionary {
        Dictionary::from_words([
            "gravely", "gravel", "lever", "GRAVELY", "grave", "gale", "Gale", "rave", "veal",
            "allergy",
        ])
    }

    #[test]
    fn construction_rejects_wrong_length() {
        let dictionary = dictionary();
        assert!(matches!(
            Puzzle::new("gralve", &dictionary),
            Err(LettersError::InvalidLength(6))
        ));
        assert!(matches!(
            Puzzle::new("gralveys", &dictionary),
            Err(LettersError::InvalidLength(8))
        ));
        assert!(Puzzle::new("gralvey", &dictionary).is_ok());
    }

    #[test]
    fn end_to_end_scenario() {
        let dictionary = dictionary();
        let puzzle = Puzzle::new("gralvey", &dictionary).unwrap();

        assert_eq!(puzzle.words(), ["allergy", "gale", "grave", "gravel", "gravely"]);
        assert_eq!(puzzle.names(), ["GRAVELY", "Gale"]);
        // "allergy" misses 'v', so "gravely" is the lone pangram
        assert_eq!(puzzle.all_letter_words(), ["gravely"]);
    }

    #[test]
    fn score_computed_from_words_only() {
        let dictionary = dictionary();
        let puzzle = Puzzle::new("gralvey", &dictionary).unwrap();

        // allergy 7, gale 1, grave 5, gravel 6, gravely 7+7
        assert_eq!(puzzle.score(), 33);
    }

    #[test]
    fn words_respect_alphabet_and_required_letter() {
        let dictionary = dictionary();
        let puzzle = Puzzle::new("gralvey", &dictionary).unwrap();

        for word in puzzle.words().iter().chain(puzzle.names()) {
            assert!(word.chars().count() >= 4);
            assert!(
                word.chars()
                    .any(|c| c.to_ascii_lowercase() == puzzle.letters().required())
            );
            assert!(
                word.chars()
                    .all(|c| puzzle.letters().contains(c.to_ascii_lowercase()))
            );
        }
    }

    #[test]
    fn construction_is_deterministic() {
        let dictionary = dictionary();
        let first = Puzzle::new("gralvey", &dictionary).unwrap();
        let second = Puzzle::new("gralvey", &dictionary).unwrap();

        assert_eq!(first.names(), second.names());
        assert_eq!(first.words(), second.words());
        assert_eq!(first.all_letter_words(), second.all_letter_words());
        assert_eq!(first.candidate_suffixes(), second.candidate_suffixes());
        assert_eq!(first.inflections(), second.inflections());
        assert_eq!(first.inflection_max_words(), second.inflection_max_words());
        assert_eq!(first.score(), second.score());
    }

    #[test]
    fn empty_dictionary_yields_empty_bundle() {
        let dictionary = Dictionary::from_words(Vec::<&str>::new());
        let puzzle = Puzzle::new("gralvey", &dictionary).unwrap();

        assert!(puzzle.names().is_empty());
        assert!(puzzle.words().is_empty());
        assert!(puzzle.all_letter_words().is_empty());
        assert!(puzzle.inflection_max_words().is_empty());
        assert_eq!(puzzle.score(), 0);
        // The suffix table depends only on the letters
        assert!(!puzzle.candidate_suffixes().is_empty());
    }

    #[test]
    fn inflections_reachable_through_facade() {
        // Required 'r' sits in the eligible suffixes "er" and "or"
        let dictionary = Dictionary::from_words(["stone", "tend"]);
        let puzzle = Puzzle::new("rodents", &dictionary).unwrap();

        let suffixes: Vec<&str> = puzzle.inflections().iter().map(|&(s, _)| s).collect();
        assert_eq!(suffixes, ["er", "or"]);
        assert_eq!(puzzle.inflections()[0].1, ["stoner", "tender"]);
    }

    #[test]
    fn consider_through_facade() {
        let dictionary = Dictionary::from_words(["graved", "gravel"]);
        let puzzle = Puzzle::new("gralvey", &dictionary).unwrap();

        assert_eq!(puzzle.consider('d'), ["graved"]);
    }
}
