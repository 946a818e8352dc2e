//! Interactive prompt mode
//!
//! Repeatedly reads a letter string from stdin and prints the puzzle report.

use crate::commands::solve::{PuzzleSummary, solve_letters};
use crate::dictionary::Dictionary;
use crate::output::display;
use std::io::{self, Write};

/// Run the interactive prompt loop
///
/// Invalid input prints a validation message and re-prompts; the puzzle
/// itself is never constructed from a bad letter string.
///
/// # Errors
///
/// Returns an error if reading user input fails.
pub fn run_interactive(dictionary: &Dictionary) -> Result<(), String> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║            Spelling Bee Solver - Interactive Mode            ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("Enter the seven puzzle letters with the required letter first.");
    println!("Commands: 'quit' to exit\n");

    loop {
        let Some(input) = get_user_input("Letters (7, required first)")? else {
            println!("\nGoodbye!\n");
            return Ok(());
        };

        match input.to_lowercase().as_str() {
            "" => {}
            "quit" | "q" | "exit" => {
                println!("\nGoodbye!\n");
                return Ok(());
            }
            letters => match solve_letters(letters, dictionary) {
                Ok(puzzle) => {
                    display::print_puzzle(&puzzle);
                    let summary = PuzzleSummary::of(&puzzle);
                    println!(
                        "{} words, {} pangrams, predicted score {}\n",
                        summary.word_count, summary.pangram_count, summary.score
                    );
                }
                Err(e) => println!("❌ {e}\n"),
            },
        }
    }
}

/// Get user input with a prompt, `None` on end of input
fn get_user_input(prompt: &str) -> Result<Option<String>, String> {
    print!("{prompt}: ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut input = String::new();
    let bytes = io::stdin()
        .read_line(&mut input)
        .map_err(|e| e.to_string())?;

    if bytes == 0 {
        return Ok(None);
    }

    Ok(Some(input.trim().to_string()))
}
