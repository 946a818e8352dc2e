//! Puzzle solving command
//!
//! Builds the puzzle for a letter string and summarizes the result bundle.

use crate::core::LettersError;
use crate::dictionary::Dictionary;
use crate::solver::Puzzle;

/// Compact counts for a solved puzzle
///
/// Used by the interactive mode's one-line recap and the report footer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PuzzleSummary {
    pub name_count: usize,
    pub word_count: usize,
    pub pangram_count: usize,
    pub inflection_count: usize,
    pub score: u32,
}

impl PuzzleSummary {
    /// Summarize a solved puzzle
    #[must_use]
    pub fn of(puzzle: &Puzzle<'_>) -> Self {
        Self {
            name_count: puzzle.names().len(),
            word_count: puzzle.words().len(),
            pangram_count: puzzle.all_letter_words().len(),
            inflection_count: puzzle
                .inflections()
                .iter()
                .map(|(_, words)| words.len())
                .sum(),
            score: puzzle.score(),
        }
    }
}

/// Solve a puzzle for the given letter string
///
/// # Errors
/// Returns `LettersError::InvalidLength` if `letters` is not exactly
/// 7 characters long.
pub fn solve_letters<'a>(
    letters: &str,
    dictionary: &'a Dictionary,
) -> Result<Puzzle<'a>, LettersError> {
    Puzzle::new(letters, dictionary)
}
