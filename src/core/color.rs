//! Peg color symbol

use std::fmt;

/// A single peg color, identified by its one-character symbol
///
/// Colors carry no structure beyond identity: two colors are equal when
/// their symbols are equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Color(char);

impl Color {
    #[inline]
    #[must_use]
    pub const fn new(symbol: char) -> Self {
        Self(symbol)
    }

    /// Get the symbol used to display and type this color
    #[inline]
    #[must_use]
    pub const fn symbol(self) -> char {
        self.0
    }

    /// Split a string into one color per character
    ///
    /// # Examples
    /// ```
    /// use mastermind::core::Color;
    ///
    /// let colors = Color::parse_all("rgb");
    /// assert_eq!(colors, vec![Color::new('r'), Color::new('g'), Color::new('b')]);
    /// ```
    #[must_use]
    pub fn parse_all(symbols: &str) -> Vec<Self> {
        symbols.chars().map(Self).collect()
    }
}

impl From<char> for Color {
    fn from(symbol: char) -> Self {
        Self(symbol)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_equality_is_symbol_equality() {
        assert_eq!(Color::new('r'), Color::from('r'));
        assert_ne!(Color::new('r'), Color::new('R'));
    }

    #[test]
    fn color_display() {
        assert_eq!(Color::new('m').to_string(), "m");
    }

    #[test]
    fn parse_all_keeps_order_and_repeats() {
        let colors = Color::parse_all("rrg");
        assert_eq!(colors.len(), 3);
        assert_eq!(colors[0], colors[1]);
        assert_eq!(colors[2].symbol(), 'g');
    }

    #[test]
    fn parse_all_empty() {
        assert!(Color::parse_all("").is_empty());
    }
}
