//! Formatting utilities for terminal output

use crate::core::Letters;

/// Lay out words in left-aligned columns
///
/// Produces indented lines of `per_line` entries, each padded to the width
/// of the longest word. Returns an empty string for an empty list.
#[must_use]
pub fn columns<S: AsRef<str>>(words: &[S], per_line: usize) -> String {
    if words.is_empty() || per_line == 0 {
        return String::new();
    }

    let width = words
        .iter()
        .map(|word| word.as_ref().chars().count())
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    for row in words.chunks(per_line) {
        out.push_str("  ");
        for (i, word) in row.iter().enumerate() {
            let word = word.as_ref();
            if i + 1 == row.len() {
                out.push_str(word);
            } else {
                out.push_str(&format!("{word:<width$} "));
            }
        }
        out.push('\n');
    }
    out
}

/// Spell the puzzle letters out in uppercase, required letter first
///
/// "gralvey" becomes "G R A L V E Y".
#[must_use]
pub fn spread_letters(letters: &Letters) -> String {
    let mut out = String::new();
    for (i, &c) in letters.chars().iter().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        out.push(c.to_ascii_uppercase());
    }
    out
}
