//! Candidate filtering
//!
//! Narrows a dictionary to the words that, had they been the target, would have
//! produced every recorded feedback.

use crate::core::{GuessRecord, Word, mark};
use log::trace;
use std::cmp::Reverse;
use std::convert::Infallible;

/// Vowels counted by [`SortOrder::Vowels`]
const VOWELS: [char; 5] = ['a', 'e', 'i', 'o', 'u'];

/// How retained candidates are ordered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    /// Keep dictionary order
    #[default]
    Dictionary,
    /// Most distinct vowels first, ties in dictionary order
    Vowels,
}

impl SortOrder {
    /// Resolve a sort key typed by the user
    ///
    /// Unknown keys fall back to dictionary order rather than failing.
    #[must_use]
    pub fn from_key(key: &str) -> Self {
        match key.trim().to_lowercase().as_str() {
            "vowels" | "v" => Self::Vowels,
            other => {
                trace!("unrecognized sort key '{other}', keeping dictionary order");
                Self::Dictionary
            }
        }
    }
}

/// Check whether `word` is consistent with every record
///
/// With no records every word qualifies. A dictionary line that is not a valid
/// five-letter word can never match a recorded feedback and is rejected.
#[must_use]
pub fn is_candidate(records: &[GuessRecord], word: &str) -> bool {
    if records.is_empty() {
        return true;
    }

    Word::new(word).is_ok_and(|target| {
        records
            .iter()
            .all(|record| mark(record.guess(), &target) == record.feedback())
    })
}

/// Filter a dictionary against the recorded guesses
///
/// Returns the retained words in dictionary order, or ranked when `sort` is
/// [`SortOrder::Vowels`]. An empty result is not an error.
///
/// # Examples
/// ```
/// use wordle_helper::core::GuessRecord;
/// use wordle_helper::solver::{SortOrder, filter_candidates};
///
/// let records = [GuessRecord::parse("adieu YY---").unwrap()];
/// let words = ["hoard", "crane", "dryad", "board"];
/// let kept = filter_candidates(&records, words, SortOrder::Dictionary);
/// assert_eq!(kept, ["hoard", "dryad", "board"]);
/// ```
pub fn filter_candidates<I, S>(records: &[GuessRecord], dictionary: I, sort: SortOrder) -> Vec<S>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let infallible = dictionary.into_iter().map(Ok::<S, Infallible>);
    match try_filter_candidates(records, infallible, sort) {
        Ok(words) => words,
        Err(never) => match never {},
    }
}

/// Filter a dictionary whose words arrive as fallible reads
///
/// Stops at the first read error and returns it.
///
/// # Errors
/// Propagates the first `Err` yielded by `dictionary`.
pub fn try_filter_candidates<I, S, E>(
    records: &[GuessRecord],
    dictionary: I,
    sort: SortOrder,
) -> Result<Vec<S>, E>
where
    I: IntoIterator<Item = Result<S, E>>,
    S: AsRef<str>,
{
    let mut scanned = 0usize;
    let mut retained = Vec::new();

    for word in dictionary {
        let word = word?;
        scanned += 1;
        if is_candidate(records, word.as_ref()) {
            retained.push(word);
        }
    }

    trace!(
        "scanned {scanned} words against {} records, kept {}",
        records.len(),
        retained.len()
    );

    if sort == SortOrder::Vowels {
        // Stable, so equal counts keep dictionary order
        retained.sort_by_cached_key(|word| Reverse(distinct_vowels(word.as_ref())));
    }

    Ok(retained)
}

/// Count how many different vowels a word contains
#[must_use]
pub fn distinct_vowels(word: &str) -> usize {
    VOWELS.iter().filter(|&&v| word.contains(v)).count()
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn word_strategy() -> impl Strategy<Value = Word> {
        "[a-hñ]{5}".prop_map(|s| Word::new(s).unwrap())
    }

    proptest! {
        #[test]
        fn target_survives_its_own_feedback(
            target in word_strategy(),
            guesses in prop::collection::vec(word_strategy(), 1..6),
            others in prop::collection::vec(word_strategy(), 0..20),
        ) {
            let records: Vec<GuessRecord> = guesses
                .into_iter()
                .map(|guess| {
                    let feedback = mark(&guess, &target);
                    GuessRecord::new(guess, feedback)
                })
                .collect();
            let words: Vec<&str> = others
                .iter()
                .map(Word::text)
                .chain(std::iter::once(target.text()))
                .collect();

            for sort in [SortOrder::Dictionary, SortOrder::Vowels] {
                let kept = filter_candidates(&records, words.iter().copied(), sort);
                prop_assert!(kept.contains(&target.text()));
            }
        }
    }
}
