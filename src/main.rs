//! Spelling Bee Solver - CLI
//!
//! Finds the valid words for a seven-letter Spelling Bee puzzle, flags
//! pangrams, predicts the score, and suggests heuristic inflections.

use anyhow::{Context, Result};
use bee_solver::{
    commands::{run_interactive, solve_letters},
    core::Letters,
    dictionary::{Dictionary, loader},
    output::{print_puzzle, print_suffix_report},
    solver::inflect::eligible_suffixes,
};
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "bee_solver",
    about = "Spelling Bee puzzle solver with pangram scoring and a suffix inflection heuristic",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Dictionary: 'embedded' (default) or a path to a word list file
    #[arg(short = 'd', long, global = true, default_value = "embedded")]
    dictionary: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Solve a puzzle and print the full report
    Solve {
        /// The seven puzzle letters, required letter first
        letters: String,
    },

    /// Show which catalog suffixes are formable from the letters
    Suffixes {
        /// The seven puzzle letters, required letter first
        letters: String,
    },

    /// Interactive mode (default) - prompts for letters repeatedly
    Interactive,
}

/// Load the dictionary selected by the -d flag
fn load_dictionary(mode: &str) -> Result<Dictionary> {
    match mode {
        "embedded" => Ok(loader::embedded()),
        path => loader::load_from_file(path)
            .with_context(|| format!("Failed to load dictionary from {path}")),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // The dictionary is loaded once and borrowed by every puzzle
    let dictionary = load_dictionary(&cli.dictionary)?;

    match cli.command.unwrap_or(Commands::Interactive) {
        Commands::Solve { letters } => run_solve_command(&letters, &dictionary),
        Commands::Suffixes { letters } => run_suffixes_command(&letters),
        Commands::Interactive => run_interactive(&dictionary).map_err(|e| anyhow::anyhow!(e)),
    }
}

fn run_solve_command(letters: &str, dictionary: &Dictionary) -> Result<()> {
    let puzzle = solve_letters(letters, dictionary)?;
    print_puzzle(&puzzle);
    Ok(())
}

fn run_suffixes_command(letters: &str) -> Result<()> {
    let letters = Letters::new(letters)?;
    let table = eligible_suffixes(&letters);
    print_suffix_report(&letters, &table);
    Ok(())
}
