//! Combination representation
//!
//! A [`Combination`] is any ordered sequence of colors, including raw player
//! input that has not been validated yet. A [`SecretCombination`] can only
//! be built from a combination that passes the game rules.

use super::{Color, CombinationRules, ValidationOutcome};
use std::fmt;

/// An ordered sequence of colors, valid or not
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Combination {
    colors: Vec<Color>,
}

impl Combination {
    #[must_use]
    pub const fn new(colors: Vec<Color>) -> Self {
        Self { colors }
    }

    /// Parse a line of player input
    ///
    /// Surrounding whitespace is ignored; every remaining character becomes
    /// one color. No rule checking happens here.
    ///
    /// # Examples
    /// ```
    /// use mastermind::core::Combination;
    ///
    /// let combination = Combination::parse("  rgyb\n");
    /// assert_eq!(combination.len(), 4);
    /// assert_eq!(combination.to_string(), "rgyb");
    /// ```
    #[must_use]
    pub fn parse(input: &str) -> Self {
        Self::new(Color::parse_all(input.trim()))
    }

    #[inline]
    #[must_use]
    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    /// Get the color at a specific position
    ///
    /// Returns `None` past the end of the combination.
    #[inline]
    #[must_use]
    pub fn color_at(&self, position: usize) -> Option<Color> {
        self.colors.get(position).copied()
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Check if the color appears at any position
    #[inline]
    #[must_use]
    pub fn contains(&self, color: Color) -> bool {
        self.colors.contains(&color)
    }
}

impl From<&str> for Combination {
    fn from(input: &str) -> Self {
        Self::parse(input)
    }
}

impl FromIterator<Color> for Combination {
    fn from_iter<I: IntoIterator<Item = Color>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl fmt::Display for Combination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for color in &self.colors {
            write!(f, "{color}")?;
        }
        Ok(())
    }
}

/// The hidden combination of a game
///
/// Always satisfies the rules it was built against. Has no `Display` impl,
/// and `Debug` only shows the length.
#[derive(Clone, PartialEq, Eq)]
pub struct SecretCombination {
    combination: Combination,
}

impl SecretCombination {
    /// Seal a combination as a secret
    ///
    /// # Errors
    /// Returns the failing [`ValidationOutcome`] if the combination breaks
    /// the rules.
    ///
    /// # Examples
    /// ```
    /// use mastermind::config::Config;
    /// use mastermind::core::{Combination, CombinationRules, SecretCombination, ValidationOutcome};
    ///
    /// let rules = CombinationRules::new(&Config::default()).unwrap();
    /// assert!(SecretCombination::new(Combination::parse("rgyb"), &rules).is_ok());
    /// assert_eq!(
    ///     SecretCombination::new(Combination::parse("rgy"), &rules).err(),
    ///     Some(ValidationOutcome::InvalidLength)
    /// );
    /// ```
    pub fn new(
        combination: Combination,
        rules: &CombinationRules,
    ) -> Result<Self, ValidationOutcome> {
        match rules.validate(combination.colors()) {
            ValidationOutcome::Ok => Ok(Self { combination }),
            failure => Err(failure),
        }
    }

    /// Seal a combination the caller has already checked against the rules
    pub(crate) const fn new_unchecked(combination: Combination) -> Self {
        Self { combination }
    }

    /// Number of pegs, used for masked rendering
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.combination.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.combination.is_empty()
    }

    /// Colors of the secret, for the scoring engine only
    #[inline]
    pub(crate) fn colors(&self) -> &[Color] {
        self.combination.colors()
    }

    #[inline]
    pub(crate) fn contains(&self, color: Color) -> bool {
        self.combination.contains(color)
    }
}

impl fmt::Debug for SecretCombination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SecretCombination")
            .field("len", &self.len())
            .finish_non_exhaustive()
    }
}
