//! Terminal output formatting

pub mod display;
pub mod formatters;

pub use display::{print_puzzle, print_suffix_report};
