//! Dictionaries for each supported language
//!
//! A dictionary is either the word list compiled into the binary or a text file
//! on disk that is re-read every time it is scanned.

mod embedded;
pub mod loader;

pub use embedded::{ENGLISH, ENGLISH_COUNT, SPANISH, SPANISH_COUNT};

use log::info;
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Language of the active dictionary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Language {
    #[default]
    En,
    Es,
}

impl Language {
    /// Resolve a language code such as `en` or `ES`
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_lowercase().as_str() {
            "en" => Some(Self::En),
            "es" => Some(Self::Es),
            _ => None,
        }
    }

    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Es => "es",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::En => write!(f, "EN"),
            Self::Es => write!(f, "ES"),
        }
    }
}

/// A dictionary could not be read
#[derive(Debug, Error)]
pub enum DictionaryError {
    #[error("cannot open dictionary {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("cannot read dictionary {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Words of a dictionary in order, read lazily
pub type WordStream<'a> = Box<dyn Iterator<Item = Result<String, DictionaryError>> + 'a>;

/// Where a language's words come from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DictionarySource {
    Embedded(&'static [&'static str]),
    File(PathBuf),
}

impl DictionarySource {
    /// The word list compiled into the binary for `language`
    #[must_use]
    pub const fn builtin(language: Language) -> Self {
        match language {
            Language::En => Self::Embedded(ENGLISH),
            Language::Es => Self::Embedded(SPANISH),
        }
    }

    /// Stream the words of this dictionary in order
    ///
    /// Files are opened afresh on every call.
    ///
    /// # Errors
    ///
    /// Returns `DictionaryError::Open` if a file source cannot be opened.
    pub fn words(&self) -> Result<WordStream<'_>, DictionaryError> {
        let stream: WordStream<'_> = match self {
            Self::Embedded(words) => {
                Box::new(words.iter().map(|&w| Ok::<_, DictionaryError>(w.to_string())))
            }
            Self::File(path) => Box::new(loader::stream_file(path)?),
        };
        Ok(stream)
    }
}

impl fmt::Display for DictionarySource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Embedded(words) => write!(f, "built-in ({} words)", words.len()),
            Self::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// One dictionary source per language
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dictionaries {
    english: DictionarySource,
    spanish: DictionarySource,
}

impl Default for Dictionaries {
    fn default() -> Self {
        Self {
            english: DictionarySource::builtin(Language::En),
            spanish: DictionarySource::builtin(Language::Es),
        }
    }
}

impl Dictionaries {
    /// Use files where given and the built-in lists otherwise
    #[must_use]
    pub fn new(english: Option<PathBuf>, spanish: Option<PathBuf>) -> Self {
        let english = english.map_or(DictionarySource::builtin(Language::En), DictionarySource::File);
        let spanish = spanish.map_or(DictionarySource::builtin(Language::Es), DictionarySource::File);
        info!("english dictionary: {english}");
        info!("spanish dictionary: {spanish}");
        Self { english, spanish }
    }

    #[must_use]
    pub const fn get(&self, language: Language) -> &DictionarySource {
        match language {
            Language::En => &self.english,
            Language::Es => &self.spanish,
        }
    }
}
