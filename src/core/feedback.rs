//! Per-letter feedback and the mark engine
//!
//! A [`Feedback`] is the five [`Mark`]s the game shows for a guess. [`mark`]
//! reproduces the game's feedback for any guess/target pair, including the
//! duplicate-letter rules.

use super::word::{WORD_LENGTH, Word};
use std::fmt;

/// Feedback for a single letter position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mark {
    /// Right letter, right position (green)
    Correct,
    /// Right letter, wrong position (yellow)
    Present,
    /// Letter not in the target, or every occurrence already accounted for (gray)
    Absent,
}

impl Mark {
    /// Canonical input/output symbol
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Correct => 'G',
            Self::Present => 'Y',
            Self::Absent => '-',
        }
    }

    /// Parse a feedback symbol
    ///
    /// Accepts:
    /// - 'G'/'g'/🟩 for correct
    /// - 'Y'/'y'/🟨 for present
    /// - '-'/'_'/⬜ for absent
    #[must_use]
    pub const fn from_symbol(c: char) -> Option<Self> {
        match c {
            'G' | 'g' | '🟩' => Some(Self::Correct),
            'Y' | 'y' | '🟨' => Some(Self::Present),
            '-' | '_' | '⬜' => Some(Self::Absent),
            _ => None,
        }
    }

    /// Emoji tile for this mark
    #[must_use]
    pub const fn to_emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬜',
        }
    }
}

/// The five marks for one guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Feedback([Mark; WORD_LENGTH]);

impl Feedback {
    /// All correct (the guess was the target)
    pub const PERFECT: Self = Self([Mark::Correct; WORD_LENGTH]);

    #[inline]
    #[must_use]
    pub const fn new(marks: [Mark; WORD_LENGTH]) -> Self {
        Self(marks)
    }

    #[inline]
    #[must_use]
    pub const fn marks(&self) -> &[Mark; WORD_LENGTH] {
        &self.0
    }

    #[inline]
    #[must_use]
    pub fn is_perfect(self) -> bool {
        self == Self::PERFECT
    }

    /// Number of positions that are not `Absent`
    #[must_use]
    pub fn count_hits(self) -> usize {
        self.0.iter().filter(|&&m| m != Mark::Absent).count()
    }

    /// Parse five feedback symbols, e.g. "GY-G-" or "🟩🟨⬜🟩⬜"
    ///
    /// # Examples
    /// ```
    /// use wordle_helper::core::Feedback;
    ///
    /// let p1 = Feedback::from_symbols("GY-GY").unwrap();
    /// let p2 = Feedback::from_symbols("🟩🟨⬜🟩🟨").unwrap();
    /// assert_eq!(p1, p2);
    /// ```
    #[must_use]
    pub fn from_symbols(s: &str) -> Option<Self> {
        let mut marks = [Mark::Absent; WORD_LENGTH];
        let mut symbols = s.chars();

        for slot in &mut marks {
            *slot = Mark::from_symbol(symbols.next()?)?;
        }

        if symbols.next().is_some() {
            return None;
        }

        Some(Self(marks))
    }

    /// Convert to an emoji string like "🟩🟨⬜🟩🟨"
    #[must_use]
    pub fn to_emoji(self) -> String {
        self.0.iter().map(|m| m.to_emoji()).collect()
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for mark in &self.0 {
            write!(f, "{}", mark.symbol())?;
        }
        Ok(())
    }
}

/// Compute the feedback the game shows when `guess` is played against `target`
///
/// # Algorithm
/// 1. Exact pass: every position where the letters agree is `Correct` and that
///    letter occurrence is consumed from the target's remaining-count table.
/// 2. Presence pass: walking the guess left to right, an unmarked letter with a
///    remaining count in the target is `Present` and consumes one occurrence.
/// 3. Everything still unmarked is `Absent`.
///
/// A repeated letter is therefore credited at most as many times as it occurs
/// in the target, and the leftmost guess occurrences are credited first.
///
/// # Examples
/// ```
/// use wordle_helper::core::{Feedback, Mark, Word, mark};
///
/// let guess = Word::new("chore").unwrap();
/// let target = Word::new("close").unwrap();
/// assert_eq!(
///     mark(&guess, &target),
///     Feedback::new([Mark::Correct, Mark::Absent, Mark::Correct, Mark::Absent, Mark::Correct])
/// );
/// ```
#[must_use]
pub fn mark(guess: &Word, target: &Word) -> Feedback {
    let mut result: [Option<Mark>; WORD_LENGTH] = [None; WORD_LENGTH];
    let mut remaining = target.letter_counts();

    for (slot, (g, t)) in result
        .iter_mut()
        .zip(guess.letters().iter().zip(target.letters()))
    {
        if g == t {
            *slot = Some(Mark::Correct);
            if let Some(count) = remaining.get_mut(g) {
                *count = count.saturating_sub(1);
            }
        }
    }

    for (slot, letter) in result.iter_mut().zip(guess.letters()) {
        if slot.is_some() {
            continue;
        }
        if let Some(count) = remaining.get_mut(letter)
            && *count > 0
        {
            *slot = Some(Mark::Present);
            *count -= 1;
        }
    }

    Feedback(result.map(|slot| slot.unwrap_or(Mark::Absent)))
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn word_strategy() -> impl Strategy<Value = Word> {
        "[a-fñ]{5}".prop_map(|s| Word::new(s).unwrap())
    }

    proptest! {
        #[test]
        fn identical_words_are_all_correct(w in word_strategy()) {
            prop_assert!(mark(&w, &w).is_perfect());
        }

        #[test]
        fn hits_never_exceed_shared_letters(g in word_strategy(), t in word_strategy()) {
            let target_counts = t.letter_counts();
            let shared: usize = g
                .letter_counts()
                .iter()
                .map(|(letter, &n)| usize::from(n.min(*target_counts.get(letter).unwrap_or(&0))))
                .sum();
            prop_assert!(mark(&g, &t).count_hits() <= shared);
        }

        #[test]
        fn correct_exactly_where_letters_agree(g in word_strategy(), t in word_strategy()) {
            let feedback = mark(&g, &t);
            for i in 0..WORD_LENGTH {
                prop_assert_eq!(
                    feedback.marks()[i] == Mark::Correct,
                    g.letter_at(i) == t.letter_at(i)
                );
            }
        }
    }
}
