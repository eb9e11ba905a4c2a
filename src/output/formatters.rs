//! Formatting utilities for terminal output

use crate::core::{GuessRecord, Mark};
use colored::Colorize;

/// Words printed per row when listing candidates
pub const WORDS_PER_ROW: usize = 8;

/// Format a record as letter tiles
///
/// With `color`, each letter sits on a green, yellow or gray background. Without
/// it, the word is followed by its feedback symbols and emoji.
#[must_use]
pub fn record_tiles(record: &GuessRecord, color: bool) -> String {
    if !color {
        return format!(
            "{} {} {}",
            record.guess().text().to_uppercase(),
            record.feedback(),
            record.feedback().to_emoji()
        );
    }

    record
        .guess()
        .letters()
        .iter()
        .zip(record.feedback().marks())
        .map(|(letter, mark)| {
            let tile = format!(" {} ", letter.to_uppercase()).black().bold();
            let tile = match mark {
                Mark::Correct => tile.on_green(),
                Mark::Present => tile.on_yellow(),
                Mark::Absent => tile.on_bright_black(),
            };
            tile.to_string()
        })
        .collect()
}

/// Lay out words in fixed-width rows
#[must_use]
pub fn word_rows(words: &[String], per_row: usize) -> String {
    words
        .chunks(per_row.max(1))
        .map(|row| format!("  {}", row.join("  ")))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Pluralize a count
#[must_use]
pub fn plural(count: usize, singular: &str, plural: &str) -> String {
    if count == 1 {
        format!("{count} {singular}")
    } else {
        format!("{count} {plural}")
    }
}
