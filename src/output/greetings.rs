//! Greeting and farewell lines
//!
//! Picked at random from fixed pools. The random source is passed in so a seeded
//! generator gives repeatable output.

use rand::Rng;
use rand::seq::IndexedRandom;

const GREETINGS: &[&str] = &[
    "Let's find that word.",
    "Ready when you are. Type 'help' for commands.",
    "Five letters, six tries. Let's narrow it down.",
    "Tell me what the game said and I'll do the rest.",
];

const FAREWELLS: &[&str] = &[
    "Good luck with the puzzle!",
    "See you tomorrow.",
    "Bye! May all your tiles be green.",
    "Happy guessing.",
];

/// A greeting for the start of a session
pub fn greeting<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    GREETINGS.choose(rng).copied().unwrap_or_default()
}

/// A farewell for the end of a session
pub fn farewell<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    FAREWELLS.choose(rng).copied().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn seeded_choice_is_repeatable() {
        let first = greeting(&mut StdRng::seed_from_u64(7));
        let second = greeting(&mut StdRng::seed_from_u64(7));
        assert_eq!(first, second);
    }

    #[test]
    fn choices_come_from_pools() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..20 {
            assert!(GREETINGS.contains(&greeting(&mut rng)));
            assert!(FAREWELLS.contains(&farewell(&mut rng)));
        }
    }
}
