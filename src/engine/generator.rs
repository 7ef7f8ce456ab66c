//! Secret combination generation
//!
//! The random source is injected so games can be replayed from a seed.

use crate::core::{Combination, CombinationRules, SecretCombination};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Source of secret combinations for new games
pub trait SecretGenerator {
    /// Produce a secret that satisfies `rules`
    fn generate(&mut self, rules: &CombinationRules) -> SecretCombination;
}

impl<G: SecretGenerator + ?Sized> SecretGenerator for &mut G {
    fn generate(&mut self, rules: &CombinationRules) -> SecretCombination {
        (**self).generate(rules)
    }
}

/// Draws secrets from a random number generator
///
/// Colors are drawn uniformly from the alphabet. Without duplicates, a draw
/// already present in the secret is rejected and redrawn, which amounts to
/// a random permutation of `length` colors taken without replacement.
#[derive(Debug, Clone)]
pub struct RandomSecretGenerator<R> {
    rng: R,
}

impl<R: Rng> RandomSecretGenerator<R> {
    #[must_use]
    pub const fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RandomSecretGenerator<StdRng> {
    /// Deterministic generator: the same seed yields the same secrets
    ///
    /// # Examples
    /// ```
    /// use mastermind::config::Config;
    /// use mastermind::core::CombinationRules;
    /// use mastermind::engine::{RandomSecretGenerator, SecretGenerator};
    ///
    /// let rules = CombinationRules::new(&Config::default()).unwrap();
    /// let first = RandomSecretGenerator::from_seed(7).generate(&rules);
    /// let second = RandomSecretGenerator::from_seed(7).generate(&rules);
    /// assert_eq!(first, second);
    /// ```
    #[must_use]
    pub fn from_seed(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    /// Generator seeded from the thread-local random source
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_rng(&mut rand::rng()))
    }
}

impl<R: Rng> SecretGenerator for RandomSecretGenerator<R> {
    fn generate(&mut self, rules: &CombinationRules) -> SecretCombination {
        let alphabet = rules.alphabet();
        let length = rules.length();
        let mut colors = Vec::with_capacity(length);

        while colors.len() < length {
            let color = alphabet[self.rng.random_range(0..alphabet.len())];
            if rules.allows_duplicates() || !colors.contains(&color) {
                colors.push(color);
            }
        }

        debug_assert!(rules.validate(&colors).is_ok());
        tracing::debug!(length, "generated secret combination");

        SecretCombination::new_unchecked(Combination::new(colors))
    }
}

/// Hands out a fixed list of secrets in order, wrapping around
#[cfg(test)]
pub(crate) struct FixedSecretGenerator {
    secrets: Vec<Combination>,
    next: usize,
}

#[cfg(test)]
impl FixedSecretGenerator {
    pub(crate) fn new(secrets: &[&str]) -> Self {
        Self {
            secrets: secrets.iter().map(|&s| Combination::parse(s)).collect(),
            next: 0,
        }
    }
}

#[cfg(test)]
impl SecretGenerator for FixedSecretGenerator {
    fn generate(&mut self, rules: &CombinationRules) -> SecretCombination {
        let combination = self.secrets[self.next % self.secrets.len()].clone();
        self.next += 1;
        SecretCombination::new(combination, rules).expect("fixed secret must satisfy the rules")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::core::Color;

    fn rules(config: &Config) -> CombinationRules {
        CombinationRules::new(config).unwrap()
    }

    #[test]
    fn generated_secrets_satisfy_rules() {
        let rules = rules(&Config::default());
        let mut generator = RandomSecretGenerator::from_seed(42);

        for _ in 0..200 {
            let secret = generator.generate(&rules);
            assert_eq!(secret.len(), 4);
            assert!(rules.validate(secret.colors()).is_ok());
        }
    }

    #[test]
    fn same_seed_same_sequence() {
        let rules = rules(&Config::default());
        let mut a = RandomSecretGenerator::from_seed(2024);
        let mut b = RandomSecretGenerator::from_seed(2024);

        for _ in 0..20 {
            assert_eq!(a.generate(&rules), b.generate(&rules));
        }
    }

    #[test]
    fn every_color_eventually_drawn() {
        let rules = rules(&Config::default());
        let mut generator = RandomSecretGenerator::from_seed(1);
        let mut seen = rustc_hash::FxHashSet::default();

        for _ in 0..100 {
            seen.extend(generator.generate(&rules).colors().iter().copied());
        }

        assert_eq!(seen.len(), rules.alphabet().len());
    }

    #[test]
    fn tight_alphabet_still_terminates() {
        // One spare color beyond the combination length
        let config = Config {
            combination_length: 5,
            ..Config::default()
        };
        let rules = rules(&config);
        let mut generator = RandomSecretGenerator::from_seed(9);

        let secret = generator.generate(&rules);
        assert_eq!(secret.len(), 5);
        assert!(rules.validate(secret.colors()).is_ok());
    }

    #[test]
    fn duplicates_allowed_with_single_color() {
        let config = Config {
            allow_duplicate_colors: true,
            ..Config::default().with_alphabet("r")
        };
        let rules = rules(&config);
        let secret = RandomSecretGenerator::from_seed(3).generate(&rules);

        assert_eq!(secret.colors(), Color::parse_all("rrrr").as_slice());
    }

    #[test]
    fn duplicates_appear_when_allowed() {
        let config = Config {
            allow_duplicate_colors: true,
            ..Config::default().with_alphabet("rg")
        };
        let rules = rules(&config);
        let mut generator = RandomSecretGenerator::from_seed(5);

        // Four pegs from two colors always repeat one of them
        let secret = generator.generate(&rules);
        let distinct: rustc_hash::FxHashSet<_> = secret.colors().iter().collect();
        assert_eq!(secret.len(), 4);
        assert!(distinct.len() <= 2);
        assert!(rules.validate(secret.colors()).is_ok());
    }

    #[test]
    fn generator_usable_through_mutable_reference() {
        fn generate_with<G: SecretGenerator>(mut generator: G, rules: &CombinationRules) -> usize {
            generator.generate(rules).len()
        }

        let rules = rules(&Config::default());
        let mut generator = RandomSecretGenerator::from_seed(11);

        assert_eq!(generate_with(&mut generator, &rules), 4);
        assert_eq!(generate_with(&mut generator, &rules), 4);
    }

    #[test]
    fn fixed_generator_cycles() {
        let rules = rules(&Config::default());
        let mut generator = FixedSecretGenerator::new(&["rgyb", "cmbg"]);

        let first = generator.generate(&rules);
        let second = generator.generate(&rules);
        let third = generator.generate(&rules);

        assert_eq!(first.colors(), Color::parse_all("rgyb").as_slice());
        assert_eq!(second.colors(), Color::parse_all("cmbg").as_slice());
        assert_eq!(first, third);
    }
}
