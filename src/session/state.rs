//! Session state and transitions

use super::command::{Command, CommandError};
use crate::core::GuessRecord;
use crate::solver::{SortOrder, try_filter_candidates};
use crate::wordlists::{Dictionaries, DictionaryError, Language};
use log::debug;
use thiserror::Error;

/// Whether the loop should keep reading input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Running,
    Ended,
}

/// The observable result of one command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    LanguageSet(Language),
    Recorded(GuessRecord),
    Suggestions {
        language: Language,
        sort: SortOrder,
        words: Vec<String>,
    },
    Undone(GuessRecord),
    NothingToUndo,
    State {
        language: Language,
        guesses: Vec<GuessRecord>,
    },
    Reset {
        cleared: usize,
    },
    Help,
    Goodbye,
    Nothing,
}

/// A line that left the session unchanged
#[derive(Debug, Error)]
pub enum SessionError {
    #[error(transparent)]
    Command(#[from] CommandError),
    #[error(transparent)]
    Dictionary(#[from] DictionaryError),
}

/// Recorded guesses plus the active language
///
/// Guesses form a stack: the most recent one is on top and is the one `undo`
/// removes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    guesses: Vec<GuessRecord>,
    language: Language,
    status: Status,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(Language::default())
    }
}

impl Session {
    #[must_use]
    pub const fn new(language: Language) -> Self {
        Self {
            guesses: Vec::new(),
            language,
            status: Status::Running,
        }
    }

    #[must_use]
    pub const fn language(&self) -> Language {
        self.language
    }

    #[must_use]
    pub const fn status(&self) -> Status {
        self.status
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.status == Status::Running
    }

    /// Recorded guesses, oldest first
    #[must_use]
    pub fn guesses(&self) -> &[GuessRecord] {
        &self.guesses
    }

    /// Move to the terminal state
    pub fn end(&mut self) {
        self.status = Status::Ended;
    }

    /// Classify and execute one line of input
    ///
    /// # Errors
    /// Returns `SessionError` for input that is not a command or a valid guess,
    /// and for dictionaries that cannot be read. The session is unchanged in
    /// both cases.
    pub fn handle_line(
        &mut self,
        line: &str,
        dictionaries: &Dictionaries,
    ) -> Result<Reply, SessionError> {
        let command = Command::parse(line)?;
        Ok(self.execute(command, dictionaries)?)
    }

    /// Apply a command
    ///
    /// Once ended, the session ignores further commands.
    ///
    /// # Errors
    /// Returns `DictionaryError` if `Suggest` cannot read the active dictionary.
    pub fn execute(
        &mut self,
        command: Command,
        dictionaries: &Dictionaries,
    ) -> Result<Reply, DictionaryError> {
        if self.status == Status::Ended {
            return Ok(Reply::Goodbye);
        }

        let reply = match command {
            Command::SetLanguage(language) => {
                self.language = language;
                Reply::LanguageSet(language)
            }
            Command::Record(record) => {
                self.guesses.push(record.clone());
                Reply::Recorded(record)
            }
            Command::Suggest(sort) => {
                let source = dictionaries.get(self.language);
                let words = try_filter_candidates(&self.guesses, source.words()?, sort)?;
                Reply::Suggestions {
                    language: self.language,
                    sort,
                    words,
                }
            }
            Command::Undo => self
                .guesses
                .pop()
                .map_or(Reply::NothingToUndo, Reply::Undone),
            Command::Show => Reply::State {
                language: self.language,
                guesses: self.guesses.clone(),
            },
            Command::Reset => {
                let cleared = self.guesses.len();
                self.guesses.clear();
                Reply::Reset { cleared }
            }
            Command::Help => Reply::Help,
            Command::Quit => {
                self.end();
                Reply::Goodbye
            }
            Command::Nothing => Reply::Nothing,
        };

        debug!(
            "session now {} with {} guesses",
            self.language,
            self.guesses.len()
        );
        Ok(reply)
    }
}
