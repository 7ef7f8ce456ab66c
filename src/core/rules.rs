//! Combination rules and validation
//!
//! The rules fix the alphabet, the combination length and the duplicate
//! policy. Validation reports the first failing check, in this order:
//! 1. length
//! 2. colors belong to the alphabet
//! 3. no repeated colors (unless duplicates are allowed)

use super::Color;
use crate::config::{Config, ConfigError};
use rustc_hash::FxHashSet;

/// Outcome of checking a candidate combination against the rules
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValidationOutcome {
    Ok,
    InvalidLength,
    InvalidColor,
    DuplicateColor,
}

impl ValidationOutcome {
    #[inline]
    #[must_use]
    pub const fn is_ok(self) -> bool {
        matches!(self, Self::Ok)
    }
}

/// Static rule set every secret and accepted proposal satisfies
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CombinationRules {
    alphabet: Vec<Color>,
    length: usize,
    allow_duplicates: bool,
}

impl CombinationRules {
    /// Build the rules from a configuration
    ///
    /// # Errors
    /// Returns `ConfigError` if the configuration is malformed (see
    /// [`Config::validate`]).
    pub fn new(config: &Config) -> Result<Self, ConfigError> {
        config.validate()?;

        Ok(Self {
            alphabet: config.alphabet.clone(),
            length: config.combination_length,
            allow_duplicates: config.allow_duplicate_colors,
        })
    }

    /// Check a candidate sequence of colors
    ///
    /// Pure: the same input always gives the same outcome, whatever other
    /// violations the candidate also has.
    ///
    /// # Examples
    /// ```
    /// use mastermind::config::Config;
    /// use mastermind::core::{Color, CombinationRules, ValidationOutcome};
    ///
    /// let rules = CombinationRules::new(&Config::default()).unwrap();
    /// assert_eq!(rules.validate(&Color::parse_all("rgyb")), ValidationOutcome::Ok);
    /// assert_eq!(rules.validate(&Color::parse_all("rx")), ValidationOutcome::InvalidLength);
    /// ```
    #[must_use]
    pub fn validate(&self, colors: &[Color]) -> ValidationOutcome {
        if colors.len() != self.length {
            return ValidationOutcome::InvalidLength;
        }

        if !colors.iter().all(|color| self.alphabet.contains(color)) {
            return ValidationOutcome::InvalidColor;
        }

        if !self.allow_duplicates && has_repeated(colors) {
            return ValidationOutcome::DuplicateColor;
        }

        ValidationOutcome::Ok
    }

    /// Valid colors, in alphabet order
    #[inline]
    #[must_use]
    pub fn alphabet(&self) -> &[Color] {
        &self.alphabet
    }

    /// Required number of pegs in a combination
    #[inline]
    #[must_use]
    pub const fn length(&self) -> usize {
        self.length
    }

    #[inline]
    #[must_use]
    pub const fn allows_duplicates(&self) -> bool {
        self.allow_duplicates
    }
}

fn has_repeated(colors: &[Color]) -> bool {
    let mut seen = FxHashSet::default();
    !colors.iter().all(|color| seen.insert(*color))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rules(allow_duplicates: bool) -> CombinationRules {
        let config = Config {
            allow_duplicate_colors: allow_duplicates,
            ..Config::default()
        };
        CombinationRules::new(&config).unwrap()
    }

    fn check(rules: &CombinationRules, input: &str) -> ValidationOutcome {
        rules.validate(&Color::parse_all(input))
    }

    #[test]
    fn valid_combination() {
        assert_eq!(check(&rules(false), "rgyb"), ValidationOutcome::Ok);
        assert_eq!(check(&rules(false), "cmbg"), ValidationOutcome::Ok);
    }

    #[test]
    fn wrong_length() {
        let rules = rules(false);
        assert_eq!(check(&rules, ""), ValidationOutcome::InvalidLength);
        assert_eq!(check(&rules, "rgy"), ValidationOutcome::InvalidLength);
        assert_eq!(check(&rules, "rgybm"), ValidationOutcome::InvalidLength);
    }

    #[test]
    fn invalid_color() {
        let rules = rules(false);
        assert_eq!(check(&rules, "rxyz"), ValidationOutcome::InvalidColor);
        // Colors are case sensitive
        assert_eq!(check(&rules, "RGYB"), ValidationOutcome::InvalidColor);
    }

    #[test]
    fn duplicate_color() {
        assert_eq!(check(&rules(false), "rgyr"), ValidationOutcome::DuplicateColor);
        assert_eq!(check(&rules(false), "rrrr"), ValidationOutcome::DuplicateColor);
    }

    #[test]
    fn duplicates_allowed_by_configuration() {
        assert_eq!(check(&rules(true), "rrrr"), ValidationOutcome::Ok);
        assert_eq!(check(&rules(true), "rgyr"), ValidationOutcome::Ok);
    }

    #[test]
    fn length_checked_before_colors() {
        // Wrong length and an invalid color at once
        assert_eq!(check(&rules(false), "rx"), ValidationOutcome::InvalidLength);
        assert_eq!(check(&rules(false), "xxxxxx"), ValidationOutcome::InvalidLength);
    }

    #[test]
    fn colors_checked_before_duplicates() {
        // Invalid color and a repeated color at once
        assert_eq!(check(&rules(false), "rrxg"), ValidationOutcome::InvalidColor);
        assert_eq!(check(&rules(false), "xxgy"), ValidationOutcome::InvalidColor);
    }

    #[test]
    fn outcome_is_ok() {
        assert!(ValidationOutcome::Ok.is_ok());
        assert!(!ValidationOutcome::InvalidLength.is_ok());
        assert!(!ValidationOutcome::InvalidColor.is_ok());
        assert!(!ValidationOutcome::DuplicateColor.is_ok());
    }

    #[test]
    fn rules_expose_configuration() {
        let rules = rules(false);
        assert_eq!(rules.alphabet(), Color::parse_all("rgybmc").as_slice());
        assert_eq!(rules.length(), 4);
        assert!(!rules.allows_duplicates());
    }

    #[test]
    fn rules_refuse_malformed_config() {
        let config = Config {
            combination_length: 0,
            ..Config::default()
        };
        assert_eq!(CombinationRules::new(&config), Err(ConfigError::ZeroLength));
    }
}
