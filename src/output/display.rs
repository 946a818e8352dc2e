//! Display functions for puzzle reports

use super::formatters::{columns, spread_letters};
use crate::core::Letters;
use crate::solver::{Puzzle, SuffixTable};
use colored::Colorize;

/// Print the full report for a solved puzzle
pub fn print_puzzle(puzzle: &Puzzle<'_>) {
    print_letters_banner(puzzle.letters());

    println!(
        "\n{} ({})",
        "Names".bright_cyan().bold(),
        puzzle.names().len()
    );
    print_word_block(puzzle.names());

    println!(
        "\n{} ({})",
        "Words".bright_cyan().bold(),
        puzzle.words().len()
    );
    print_word_block(puzzle.words());

    println!("\n{}", "Pangrams".bright_cyan().bold());
    if puzzle.all_letter_words().is_empty() {
        println!("  {}", "none".bright_black());
    } else {
        for word in puzzle.all_letter_words() {
            println!("  {}", word.green().bold());
        }
    }

    println!(
        "\n{} {}",
        "Predicted score:".bright_cyan().bold(),
        puzzle.score().to_string().bright_yellow().bold()
    );

    print_suffix_table(puzzle.candidate_suffixes());

    println!(
        "\n{} {}",
        "Possible inflections".bright_cyan().bold(),
        "(heuristic, unverified)".bright_black()
    );
    if puzzle.inflections().is_empty() {
        println!("  {}", "none".bright_black());
    } else {
        for (suffix, words) in puzzle.inflections() {
            println!("  -{suffix} ({}):", words.len());
            print!("{}", columns(words, 6));
        }
    }

    println!("\n{}", "Inflection pangrams".bright_cyan().bold());
    if puzzle.inflection_max_words().is_empty() {
        println!("  {}", "none".bright_black());
    } else {
        for word in puzzle.inflection_max_words() {
            println!("  {}", word.green());
        }
    }
    println!();
}

/// Print suffix eligibility for a letter set
pub fn print_suffix_report(letters: &Letters, table: &SuffixTable) {
    print_letters_banner(letters);
    print_suffix_table(table);
    println!();
}

fn print_letters_banner(letters: &Letters) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Letters: {}   required: {}",
        spread_letters(letters).bright_yellow().bold(),
        letters
            .required()
            .to_ascii_uppercase()
            .to_string()
            .bright_green()
            .bold()
    );
    println!("{}", "─".repeat(60).cyan());
}

fn print_suffix_table(table: &SuffixTable) {
    println!("\n{}", "Formable suffixes".bright_cyan().bold());
    if table.is_empty() {
        println!("  {}", "none".bright_black());
        return;
    }
    for (pos, suffixes) in table {
        println!("  {:<10} {}", format!("{pos}:"), suffixes.join(", "));
    }
}

fn print_word_block(words: &[String]) {
    if words.is_empty() {
        println!("  {}", "none".bright_black());
    } else {
        print!("{}", columns(words, 6));
    }
}
