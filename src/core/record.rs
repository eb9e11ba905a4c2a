//! Recorded guesses and the text forms they are entered in
//!
//! A guess and its feedback can be typed two ways:
//! - separated: `crane -YG--` (word, whitespace, five symbols)
//! - interleaved: `-cYrGa-n-e` (symbol before each letter, no separator)

use super::feedback::{Feedback, Mark};
use super::word::{WORD_LENGTH, Word, WordError, fold_enye};
use std::fmt;
use thiserror::Error;

/// A guess together with the feedback the game gave it
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GuessRecord {
    guess: Word,
    feedback: Feedback,
}

/// Why a line of text is not a valid guess record
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("expected 'word feedback' or {} interleaved symbol/letter pairs", WORD_LENGTH)]
    Malformed,
    #[error("invalid guess: {0}")]
    InvalidWord(#[from] WordError),
    #[error("feedback must be exactly {} symbols, got {}", WORD_LENGTH, .0)]
    FeedbackLength(usize),
    #[error("unknown feedback symbol '{0}' (use G, Y or -)")]
    InvalidSymbol(char),
}

impl GuessRecord {
    #[must_use]
    pub const fn new(guess: Word, feedback: Feedback) -> Self {
        Self { guess, feedback }
    }

    /// Parse a guess record from user text in either form
    ///
    /// # Errors
    /// Returns `ParseError` when the text matches neither form, the word is
    /// not five letters, or a feedback symbol is unknown.
    ///
    /// # Examples
    /// ```
    /// use wordle_helper::core::GuessRecord;
    ///
    /// let separated = GuessRecord::parse("crane -YG--").unwrap();
    /// let interleaved = GuessRecord::parse("-cYrGa-n-e").unwrap();
    /// assert_eq!(separated, interleaved);
    /// ```
    pub fn parse(raw: &str) -> Result<Self, ParseError> {
        // Folded first so the interleaved form sees `ñ` as one letter
        let raw = fold_enye(raw.trim());

        let mut parts = raw.split_whitespace();
        match (parts.next(), parts.next(), parts.next()) {
            (Some(word), Some(symbols), None) => Self::from_parts(word, symbols),
            (Some(compact), None, None) => Self::parse_interleaved(compact),
            _ => Err(ParseError::Malformed),
        }
    }

    fn parse_interleaved(compact: &str) -> Result<Self, ParseError> {
        let chars: Vec<char> = compact.chars().collect();
        if chars.len() != 2 * WORD_LENGTH {
            return Err(ParseError::Malformed);
        }

        let symbols: String = chars.iter().step_by(2).collect();
        let word: String = chars.iter().skip(1).step_by(2).collect();
        Self::from_parts(&word, &symbols)
    }

    fn from_parts(word: &str, symbols: &str) -> Result<Self, ParseError> {
        let guess = Word::new(word)?;
        let feedback = parse_feedback(symbols)?;
        Ok(Self { guess, feedback })
    }

    #[inline]
    #[must_use]
    pub const fn guess(&self) -> &Word {
        &self.guess
    }

    #[inline]
    #[must_use]
    pub const fn feedback(&self) -> Feedback {
        self.feedback
    }
}

fn parse_feedback(symbols: &str) -> Result<Feedback, ParseError> {
    let count = symbols.chars().count();
    if count != WORD_LENGTH {
        return Err(ParseError::FeedbackLength(count));
    }

    if let Some(bad) = symbols.chars().find(|&c| Mark::from_symbol(c).is_none()) {
        return Err(ParseError::InvalidSymbol(bad));
    }

    Feedback::from_symbols(symbols).ok_or(ParseError::FeedbackLength(count))
}

impl fmt::Display for GuessRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.guess, self.feedback)
    }
}

impl std::str::FromStr for GuessRecord {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use Mark::{Absent, Correct, Present};

    #[test]
    fn parse_separated_form() {
        let record = GuessRecord::parse("adieu YY---").unwrap();
        assert_eq!(record.guess().text(), "adieu");
        assert_eq!(
            record.feedback().marks(),
            &[Present, Present, Absent, Absent, Absent]
        );
    }

    #[test]
    fn parse_interleaved_form() {
        let record = GuessRecord::parse("GcGl-oGs-e").unwrap();
        assert_eq!(record.guess().text(), "close");
        assert_eq!(
            record.feedback().marks(),
            &[Correct, Correct, Absent, Correct, Absent]
        );
    }

    #[test]
    fn both_forms_parse_identically() {
        for (separated, interleaved) in [
            ("chore G-G-G", "Gc-hGo-rGe"),
            ("BANAL ---GY", "-b-a-nGaYl"),
            ("señor yg--g", "ysge-ñ-ogr"),
        ] {
            assert_eq!(
                GuessRecord::parse(separated).unwrap(),
                GuessRecord::parse(interleaved).unwrap(),
                "{separated} vs {interleaved}"
            );
        }
    }

    #[test]
    fn parse_normalizes_case_and_whitespace() {
        let record = GuessRecord::parse("  CrAnE   g-y-G \n").unwrap();
        assert_eq!(record.guess().text(), "crane");
        assert_eq!(record.to_string(), "crane G-Y-G");
    }

    #[test]
    fn parse_accepts_emoji_feedback() {
        let a = GuessRecord::parse("crane 🟩⬜🟨⬜🟩").unwrap();
        let b = GuessRecord::parse("crane G-Y-G").unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn parse_rejects_bad_word() {
        assert_eq!(
            GuessRecord::parse("cran GGGG"),
            Err(ParseError::InvalidWord(WordError::InvalidLength(4)))
        );
        assert_eq!(
            GuessRecord::parse("cr4ne GGGGG"),
            Err(ParseError::InvalidWord(WordError::InvalidCharacter('4')))
        );
    }

    #[test]
    fn parse_rejects_bad_feedback() {
        assert_eq!(
            GuessRecord::parse("crane GGG"),
            Err(ParseError::FeedbackLength(3))
        );
        assert_eq!(
            GuessRecord::parse("crane GGXGG"),
            Err(ParseError::InvalidSymbol('X'))
        );
        assert_eq!(
            GuessRecord::parse("GcGrGaGnXe"),
            Err(ParseError::InvalidSymbol('X'))
        );
    }

    #[test]
    fn parse_rejects_wrong_shape() {
        assert_eq!(GuessRecord::parse(""), Err(ParseError::Malformed));
        assert_eq!(GuessRecord::parse("crane"), Err(ParseError::Malformed));
        assert_eq!(
            GuessRecord::parse("crane GGGGG extra"),
            Err(ParseError::Malformed)
        );
    }
}
