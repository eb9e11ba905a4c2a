//! Candidate filtering
//!
//! Applies the mark engine to a dictionary to find the words still in play.

mod filter;

pub use filter::{SortOrder, distinct_vowels, filter_candidates, is_candidate, try_filter_candidates};
