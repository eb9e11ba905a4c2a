//! Command classification
//!
//! One line of user input becomes exactly one [`Command`]. Everything the loop
//! can do is listed here, so adding a command means adding a variant.

use crate::core::{GuessRecord, Mark, ParseError, WORD_LENGTH};
use crate::solver::SortOrder;
use crate::wordlists::Language;
use log::debug;
use thiserror::Error;

/// A classified line of input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `lang en` / `lang es`
    SetLanguage(Language),
    /// `record <guess>` or a bare guess
    Record(GuessRecord),
    /// `suggest`, `s`, `suggest vowels`, `sv`
    Suggest(SortOrder),
    /// `undo`
    Undo,
    /// `show`, `show state`
    Show,
    /// `reset`, `restart`
    Reset,
    /// `help`, `h`
    Help,
    /// `quit`, `exit`, `q`
    Quit,
    /// A blank line
    Nothing,
}

/// A line that could not be turned into a command
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("unrecognized command '{0}' (type 'help' for usage)")]
    Unrecognized(String),
    #[error("unknown language '{0}' (use 'lang en' or 'lang es')")]
    UnknownLanguage(String),
    #[error(transparent)]
    InvalidRecord(#[from] ParseError),
}

impl Command {
    /// Classify one line of input
    ///
    /// Keywords are matched case-insensitively. A line that is not a keyword is
    /// tried as a guess record.
    ///
    /// # Errors
    /// Returns `CommandError` when the line is neither a known command nor a
    /// valid guess, or when `record`/`lang` are given a bad argument.
    ///
    /// # Examples
    /// ```
    /// use wordle_helper::session::Command;
    /// use wordle_helper::solver::SortOrder;
    ///
    /// assert_eq!(Command::parse("sv").unwrap(), Command::Suggest(SortOrder::Vowels));
    /// assert!(matches!(Command::parse("crane G-Y--").unwrap(), Command::Record(_)));
    /// ```
    pub fn parse(line: &str) -> Result<Self, CommandError> {
        let line = line.trim();
        let (keyword, rest) = line
            .split_once(char::is_whitespace)
            .map_or((line, ""), |(keyword, rest)| (keyword, rest.trim()));
        let keyword = keyword.to_lowercase();
        let rest_lower = rest.to_lowercase();

        let command = match (keyword.as_str(), rest_lower.as_str()) {
            ("", _) => Self::Nothing,
            ("lang", code) => Language::from_code(code)
                .map(Self::SetLanguage)
                .ok_or_else(|| CommandError::UnknownLanguage(rest.to_string()))?,
            ("record", _) => Self::Record(GuessRecord::parse(rest)?),
            ("suggest" | "s", "") => Self::Suggest(SortOrder::Dictionary),
            ("suggest" | "s", key) => Self::Suggest(SortOrder::from_key(key)),
            ("sv", "") => Self::Suggest(SortOrder::Vowels),
            ("undo", "") => Self::Undo,
            ("show", "" | "state") => Self::Show,
            ("reset" | "restart", "") => Self::Reset,
            ("help" | "h", "") => Self::Help,
            ("quit" | "exit" | "q", "") => Self::Quit,
            _ => match GuessRecord::parse(line) {
                Ok(record) => Self::Record(record),
                Err(e) if looks_like_record(line) => return Err(e.into()),
                Err(_) => return Err(CommandError::Unrecognized(line.to_string())),
            },
        };

        debug!("classified {line:?} as {command:?}");
        Ok(command)
    }
}

/// A bare line shaped like a guess: `word symbols`, or a single token of
/// interleaved pairs
fn looks_like_record(line: &str) -> bool {
    let mut parts = line.split_whitespace();
    match (parts.next(), parts.next(), parts.next()) {
        (Some(_), Some(symbols), None) => symbols.chars().all(|c| Mark::from_symbol(c).is_some()),
        (Some(compact), None, None) => compact.chars().count() == 2 * WORD_LENGTH,
        _ => false,
    }
}
