//! Wordle word representation
//!
//! A Word stores a 5-letter word as an array of `char`s so that letters outside
//! ASCII (the Spanish `ñ`) occupy exactly one position.

use rustc_hash::FxHashMap;
use std::borrow::Cow;
use std::fmt;
use thiserror::Error;

/// Number of letters in every guess and target
pub const WORD_LENGTH: usize = 5;

/// Combining tilde, as produced by keyboards that emit `n` + U+0303 for `ñ`
const COMBINING_TILDE: char = '\u{303}';
const DECOMPOSED_ENYE: &str = "n\u{303}";
const DECOMPOSED_ENYE_UPPER: &str = "N\u{303}";

/// A 5-letter Wordle word, lowercase
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Word {
    text: String,
    letters: [char; WORD_LENGTH],
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("Word must be exactly {} letters, got {}", WORD_LENGTH, .0)]
    InvalidLength(usize),
    #[error("Word contains a character that is not a letter: '{0}'")]
    InvalidCharacter(char),
}

impl Word {
    /// Create a new Word from a string
    ///
    /// The input is lowercased, and a decomposed `n` + combining tilde is folded
    /// into `ñ` before validation.
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - Length is not exactly 5 letters
    /// - Contains anything other than Latin letters or `ñ`
    ///
    /// # Examples
    /// ```
    /// use wordle_helper::core::Word;
    ///
    /// let word = Word::new("CRANE").unwrap();
    /// assert_eq!(word.text(), "crane");
    ///
    /// assert!(Word::new("señor").is_ok());
    /// assert!(Word::new("sh0rt").is_err());
    /// ```
    pub fn new(text: impl AsRef<str>) -> Result<Self, WordError> {
        let text = fold_enye(&text.as_ref().to_lowercase()).into_owned();

        let letters: Vec<char> = text.chars().collect();
        if letters.len() != WORD_LENGTH {
            return Err(WordError::InvalidLength(letters.len()));
        }

        if let Some(&bad) = letters.iter().find(|&&c| !is_letter(c)) {
            return Err(WordError::InvalidCharacter(bad));
        }

        let letters: [char; WORD_LENGTH] = letters
            .try_into()
            .map_err(|v: Vec<char>| WordError::InvalidLength(v.len()))?;

        Ok(Self { text, letters })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the letters in order
    #[inline]
    #[must_use]
    pub const fn letters(&self) -> &[char; WORD_LENGTH] {
        &self.letters
    }

    /// Get the letter at a specific position (0-4)
    ///
    /// # Panics
    /// Panics if position >= 5
    #[inline]
    #[must_use]
    pub const fn letter_at(&self, position: usize) -> char {
        self.letters[position]
    }

    /// Get the count of each letter in the word
    #[inline]
    pub(crate) fn letter_counts(&self) -> FxHashMap<char, u8> {
        let mut counts = FxHashMap::default();
        for &letter in &self.letters {
            *counts.entry(letter).or_insert(0) += 1;
        }
        counts
    }
}

/// Fold a decomposed `n` + combining tilde into `ñ`, keeping case
///
/// Borrows the input when there is nothing to fold.
pub(crate) fn fold_enye(text: &str) -> Cow<'_, str> {
    if text.contains(COMBINING_TILDE) {
        Cow::Owned(
            text.replace(DECOMPOSED_ENYE, "ñ")
                .replace(DECOMPOSED_ENYE_UPPER, "Ñ"),
        )
    } else {
        Cow::Borrowed(text)
    }
}

/// Letters accepted in a word: the lowercase Latin alphabet plus `ñ`
#[must_use]
pub const fn is_letter(c: char) -> bool {
    c.is_ascii_lowercase() || c == 'ñ'
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

impl std::str::FromStr for Word {
    type Err = WordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}
