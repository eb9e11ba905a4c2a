//! Wordle Helper
//!
//! Records the feedback a Wordle-style game gave each guess and lists the
//! dictionary words still consistent with all of it.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_helper::core::{GuessRecord, Word, mark};
//! use wordle_helper::solver::{SortOrder, filter_candidates};
//!
//! // Feedback the game would give
//! let feedback = mark(&Word::new("adieu").unwrap(), &Word::new("hoard").unwrap());
//! assert_eq!(feedback.to_string(), "YY---");
//!
//! // Narrow a word list
//! let records = [GuessRecord::parse("adieu YY---").unwrap()];
//! let kept = filter_candidates(&records, ["hoard", "crane"], SortOrder::Dictionary);
//! assert_eq!(kept, ["hoard"]);
//! ```

// Core domain types
pub mod core;

// Candidate filtering
pub mod solver;

// Dictionaries
pub mod wordlists;

// Command handling and the interactive loop
pub mod session;

// Terminal output formatting
pub mod output;
