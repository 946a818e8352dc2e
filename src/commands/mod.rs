//! Command implementations

pub mod interactive;
pub mod solve;

pub use interactive::run_interactive;
pub use solve::{PuzzleSummary, solve_letters};
