//! Core domain types for the Spelling Bee puzzle
//!
//! This module contains the fundamental domain types with zero external dependencies.
//! All types here are pure, testable, and have clear semantics.

mod letters;
mod suffix;

pub use letters::{Letters, LettersError};
pub use suffix::{PartOfSpeech, SUFFIX_CATALOG};
