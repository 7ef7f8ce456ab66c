//! Blacks/whites scoring
//!
//! Two algorithms, picked from the duplicate policy of the rules:
//! - `Distinct`: position match → black, otherwise color anywhere in the
//!   secret → white. Only correct when neither the secret nor the proposal
//!   repeats a color, since nothing stops a color from being counted twice.
//! - `Counting`: classic consume-on-match. Blacks are taken first, then each
//!   remaining proposed peg earns a white only while the secret still has an
//!   unmatched peg of that color.

use crate::core::{Color, Combination, CombinationRules, Feedback, SecretCombination};
use rustc_hash::FxHashMap;

/// Scores proposed combinations against a secret
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScoringEngine {
    /// Single-pass scoring for combinations without repeated colors
    #[default]
    Distinct,
    /// Consume-on-match scoring, safe with repeated colors
    Counting,
}

impl ScoringEngine {
    /// Pick the algorithm matching the duplicate policy
    #[must_use]
    pub const fn for_rules(rules: &CombinationRules) -> Self {
        if rules.allows_duplicates() {
            Self::Counting
        } else {
            Self::Distinct
        }
    }

    /// Score a validated proposal against the secret
    ///
    /// `proposed` must have the same length as the secret. The result always
    /// satisfies `blacks + whites <= secret.len()`.
    ///
    /// # Examples
    /// ```
    /// use mastermind::config::Config;
    /// use mastermind::core::{Combination, CombinationRules, Feedback, SecretCombination};
    /// use mastermind::engine::ScoringEngine;
    ///
    /// let rules = CombinationRules::new(&Config::default()).unwrap();
    /// let secret = SecretCombination::new(Combination::parse("rgyb"), &rules).unwrap();
    /// let engine = ScoringEngine::for_rules(&rules);
    ///
    /// assert_eq!(engine.score(&secret, &Combination::parse("grby")), Feedback::new(0, 4));
    /// ```
    #[must_use]
    pub fn score(self, secret: &SecretCombination, proposed: &Combination) -> Feedback {
        debug_assert_eq!(secret.len(), proposed.len());

        match self {
            Self::Distinct => score_distinct(secret, proposed),
            Self::Counting => score_counting(secret.colors(), proposed.colors()),
        }
    }
}

fn score_distinct(secret: &SecretCombination, proposed: &Combination) -> Feedback {
    let mut blacks = 0;
    let mut whites = 0;

    for (&hidden, &guess) in secret.colors().iter().zip(proposed.colors()) {
        if hidden == guess {
            blacks += 1;
        } else if secret.contains(guess) {
            whites += 1;
        }
    }

    Feedback::new(blacks, whites)
}

fn score_counting(secret: &[Color], proposed: &[Color]) -> Feedback {
    let mut blacks = 0;
    let mut unmatched: FxHashMap<Color, usize> = FxHashMap::default();
    let mut leftover = Vec::with_capacity(proposed.len());

    // First pass: blacks, and tally the secret pegs they did not use
    for (&hidden, &guess) in secret.iter().zip(proposed) {
        if hidden == guess {
            blacks += 1;
        } else {
            *unmatched.entry(hidden).or_insert(0) += 1;
            leftover.push(guess);
        }
    }

    // Second pass: whites consume the remaining pegs
    let mut whites = 0;
    for guess in leftover {
        if let Some(count) = unmatched.get_mut(&guess)
            && *count > 0
        {
            *count -= 1;
            whites += 1;
        }
    }

    Feedback::new(blacks, whites)
}
