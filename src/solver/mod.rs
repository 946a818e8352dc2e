//! Puzzle solving engine
//!
//! Filters the dictionary against the puzzle letters, scores the result,
//! and runs the suffix inflection heuristic.

pub mod filter;
pub mod inflect;
pub mod puzzle;
pub mod score;

pub use inflect::{InflectionTable, SuffixTable};
pub use puzzle::Puzzle;
