//! Rendering of session replies

use super::formatters::{WORDS_PER_ROW, plural, record_tiles, word_rows};
use super::help::HELP;
use crate::session::{Reply, SessionError};
use crate::solver::SortOrder;
use colored::Colorize;

/// Turns replies into the text shown to the player
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Renderer {
    /// Use ANSI colours
    pub color: bool,
    /// Maximum number of candidates to list
    pub limit: Option<usize>,
}

impl Default for Renderer {
    fn default() -> Self {
        Self {
            color: true,
            limit: None,
        }
    }
}

impl Renderer {
    /// Plain-text renderer with no candidate limit
    #[must_use]
    pub const fn plain() -> Self {
        Self {
            color: false,
            limit: None,
        }
    }

    /// Render a reply; an empty string means nothing to print
    #[must_use]
    pub fn render(&self, reply: &Reply) -> String {
        match reply {
            Reply::LanguageSet(language) => format!("Language set to {language}."),
            Reply::Recorded(record) => {
                format!("Recorded {}", record_tiles(record, self.color))
            }
            Reply::Suggestions {
                language,
                sort,
                words,
            } => self.render_suggestions(&language.to_string(), *sort, words),
            Reply::Undone(record) => format!("Removed {}", record_tiles(record, self.color)),
            Reply::NothingToUndo => "Nothing to undo.".to_string(),
            Reply::State { language, guesses } => {
                let mut lines = vec![
                    format!("Language: {language}"),
                    format!("Guesses: {} recorded", guesses.len()),
                ];
                if guesses.is_empty() {
                    lines.push("  (none yet)".to_string());
                }
                for (i, record) in guesses.iter().enumerate() {
                    lines.push(format!("  {}. {}", i + 1, record_tiles(record, self.color)));
                }
                lines.join("\n")
            }
            Reply::Reset { cleared } => {
                format!("Cleared {}.", plural(*cleared, "guess", "guesses"))
            }
            Reply::Help => HELP.to_string(),
            Reply::Goodbye | Reply::Nothing => String::new(),
        }
    }

    fn render_suggestions(&self, language: &str, sort: SortOrder, words: &[String]) -> String {
        if words.is_empty() {
            let message = "No candidates match the recorded feedback. Try 'show' or 'undo'.";
            return self.paint_error(message);
        }

        let mut header = format!("{} ({language})", plural(words.len(), "candidate", "candidates"));
        if sort == SortOrder::Vowels {
            header.push_str(", most distinct vowels first");
        }
        header.push(':');

        let shown = self.limit.map_or(words, |limit| &words[..limit.min(words.len())]);
        let mut out = format!("{}\n{}", self.paint_header(&header), word_rows(shown, WORDS_PER_ROW));
        if shown.len() < words.len() {
            out.push_str(&format!("\n  ... and {} more", words.len() - shown.len()));
        }
        out
    }

    /// Render an error that left the session unchanged
    #[must_use]
    pub fn render_error(&self, error: &SessionError) -> String {
        self.paint_error(&format!("Error: {error}"))
    }

    fn paint_header(&self, text: &str) -> String {
        if self.color {
            text.bright_cyan().bold().to_string()
        } else {
            text.to_string()
        }
    }

    fn paint_error(&self, text: &str) -> String {
        if self.color {
            text.red().to_string()
        } else {
            text.to_string()
        }
    }
}
