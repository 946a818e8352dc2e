//! Puzzle letter set
//!
//! The seven target letters of a puzzle. The first letter is the required
//! letter that every valid word must contain.

use std::fmt;

/// The seven target letters of a Spelling Bee puzzle
///
/// Letters are normalized to lowercase at construction; index 0 is the
/// required letter. Duplicate letters are tolerated but add nothing to the
/// set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Letters {
    text: String,
    chars: [char; 7],
}

/// Error type for invalid puzzle letters
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LettersError {
    InvalidLength(usize),
}

impl fmt::Display for LettersError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength(len) => {
                write!(f, "Puzzle letters must be exactly 7 characters, got {len}")
            }
        }
    }
}

impl std::error::Error for LettersError {}

impl Letters {
    /// Create a new letter set from a string
    ///
    /// The input is lowercased; the first character becomes the required
    /// letter.
    ///
    /// # Errors
    /// Returns `LettersError::InvalidLength` if the input is not exactly
    /// 7 characters long.
    ///
    /// # Examples
    /// ```
    /// use bee_solver::core::Letters;
    ///
    /// let letters = Letters::new("GRALVEY").unwrap();
    /// assert_eq!(letters.required(), 'g');
    /// assert_eq!(letters.text(), "gralvey");
    ///
    /// assert!(Letters::new("short").is_err());
    /// assert!(Letters::new("eightfold").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, LettersError> {
        let text: String = text.into().to_lowercase();

        let chars: [char; 7] = text
            .chars()
            .collect::<Vec<char>>()
            .try_into()
            .map_err(|bad: Vec<char>| LettersError::InvalidLength(bad.len()))?;

        Ok(Self { text, chars })
    }

    /// Get the letters as a lowercase string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the letters as a char array, required letter first
    #[inline]
    #[must_use]
    pub const fn chars(&self) -> &[char; 7] {
        &self.chars
    }

    /// The required letter, which every valid word must contain
    #[inline]
    #[must_use]
    pub const fn required(&self) -> char {
        self.chars[0]
    }

    /// Check if a character is a member of the letter set
    ///
    /// Matches against the stored lowercase letters; callers case-fold
    /// candidates before membership tests, never for output.
    #[inline]
    #[must_use]
    pub fn contains(&self, c: char) -> bool {
        self.chars.contains(&c)
    }
}

impl fmt::Display for Letters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}
