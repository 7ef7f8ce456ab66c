//! Game configuration
//!
//! A [`Config`] describes one flavour of the game. It is checked once when a
//! session is built; a malformed configuration never produces a session.

use crate::core::Color;
use rustc_hash::FxHashSet;
use thiserror::Error;

/// Colors of the classic game: red, green, yellow, blue, magenta, cyan
pub const CLASSIC_COLORS: &str = "rgybmc";

/// Pegs per combination in the classic game
pub const CLASSIC_LENGTH: usize = 4;

/// Attempts per game in the classic game
pub const CLASSIC_MAX_ATTEMPTS: usize = 10;

/// Error for a configuration the engine cannot play with
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("The alphabet must contain at least one color")]
    EmptyAlphabet,
    #[error("Color '{0}' appears more than once in the alphabet")]
    RepeatedSymbol(Color),
    #[error("Combination length must be at least 1")]
    ZeroLength,
    #[error("Maximum attempts must be at least 1")]
    ZeroMaxAttempts,
    #[error(
        "{colors} colors cannot fill {length} positions without repeating; \
         use more colors or allow duplicates"
    )]
    AlphabetTooSmall { colors: usize, length: usize },
}

/// Parameters for a game
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Ordered list of distinct colors
    pub alphabet: Vec<Color>,
    pub combination_length: usize,
    pub max_attempts: usize,
    pub allow_duplicate_colors: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            alphabet: Color::parse_all(CLASSIC_COLORS),
            combination_length: CLASSIC_LENGTH,
            max_attempts: CLASSIC_MAX_ATTEMPTS,
            allow_duplicate_colors: false,
        }
    }
}

impl Config {
    /// Replace the alphabet with one color per character of `symbols`
    ///
    /// # Examples
    /// ```
    /// use mastermind::config::Config;
    ///
    /// let config = Config::default().with_alphabet("abcdefgh");
    /// assert_eq!(config.alphabet.len(), 8);
    /// assert!(config.validate().is_ok());
    /// ```
    #[must_use]
    pub fn with_alphabet(mut self, symbols: &str) -> Self {
        self.alphabet = Color::parse_all(symbols);
        self
    }

    /// Check the configuration
    ///
    /// Without duplicates, the alphabet must be larger than the combination
    /// length so that secret generation always terminates.
    ///
    /// # Errors
    /// Returns the first problem found, as a `ConfigError`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.alphabet.is_empty() {
            return Err(ConfigError::EmptyAlphabet);
        }

        let mut seen = FxHashSet::default();
        if let Some(&repeated) = self.alphabet.iter().find(|color| !seen.insert(**color)) {
            return Err(ConfigError::RepeatedSymbol(repeated));
        }

        if self.combination_length == 0 {
            return Err(ConfigError::ZeroLength);
        }

        if self.max_attempts == 0 {
            return Err(ConfigError::ZeroMaxAttempts);
        }

        if !self.allow_duplicate_colors && self.alphabet.len() <= self.combination_length {
            return Err(ConfigError::AlphabetTooSmall {
                colors: self.alphabet.len(),
                length: self.combination_length,
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_classic_game() {
        let config = Config::default();
        assert_eq!(config.alphabet, Color::parse_all("rgybmc"));
        assert_eq!(config.combination_length, 4);
        assert_eq!(config.max_attempts, 10);
        assert!(!config.allow_duplicate_colors);
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn empty_alphabet_rejected() {
        let config = Config::default().with_alphabet("");
        assert_eq!(config.validate(), Err(ConfigError::EmptyAlphabet));
    }

    #[test]
    fn repeated_alphabet_symbol_rejected() {
        let config = Config::default().with_alphabet("rgybmr");
        assert_eq!(
            config.validate(),
            Err(ConfigError::RepeatedSymbol(Color::new('r')))
        );
    }

    #[test]
    fn zero_length_rejected() {
        let config = Config {
            combination_length: 0,
            ..Config::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::ZeroLength));
    }

    #[test]
    fn zero_attempts_rejected() {
        let config = Config {
            max_attempts: 0,
            ..Config::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::ZeroMaxAttempts));
    }

    #[test]
    fn alphabet_must_exceed_length_without_duplicates() {
        let config = Config::default().with_alphabet("rgyb");
        assert_eq!(
            config.validate(),
            Err(ConfigError::AlphabetTooSmall {
                colors: 4,
                length: 4
            })
        );

        let config = Config::default().with_alphabet("rgybm");
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn small_alphabet_allowed_with_duplicates() {
        let config = Config {
            allow_duplicate_colors: true,
            ..Config::default().with_alphabet("rg")
        };
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn error_messages_are_readable() {
        let error = ConfigError::AlphabetTooSmall {
            colors: 3,
            length: 4,
        };
        assert!(error.to_string().starts_with("3 colors cannot fill 4 positions"));
        assert_eq!(
            ConfigError::RepeatedSymbol(Color::new('g')).to_string(),
            "Color 'g' appears more than once in the alphabet"
        );
    }
}
