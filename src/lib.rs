//! Spelling Bee Solver
//!
//! Finds every word that can be formed from seven puzzle letters, where each
//! word must contain the required letter (the first of the seven). Scores the
//! result, flags pangrams, and heuristically recovers inflected forms whose
//! base word lacks the required letter.
//!
//! # Quick Start
//!
//! ```rust
//! use bee_solver::dictionary::Dictionary;
//! use bee_solver::solver::Puzzle;
//!
//! let dictionary = Dictionary::from_words(["gravel", "gravely", "lever"]);
//! let puzzle = Puzzle::new("gralvey", &dictionary).unwrap();
//!
//! assert_eq!(puzzle.words(), ["gravel", "gravely"]);
//! assert_eq!(puzzle.all_letter_words(), ["gravely"]);
//! assert_eq!(puzzle.score(), 20);
//! ```

// Core domain types
pub mod core;

// Filtering, scoring and inflection
pub mod solver;

// Dictionary source
pub mod dictionary;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
