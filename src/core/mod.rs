//! Core domain types for Wordle
//!
//! Words, per-letter feedback, the mark engine and recorded guesses.
//! Everything here is pure and independent of I/O.

mod feedback;
mod record;
mod word;

pub use feedback::{Feedback, Mark, mark};
pub use record::{GuessRecord, ParseError};
pub use word::{WORD_LENGTH, Word, WordError, is_letter};
