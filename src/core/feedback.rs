//! Blacks/whites feedback for a proposed combination

use std::fmt;

/// Result of scoring a proposed combination against the secret
///
/// - `blacks`: positions where the proposed color matches the secret exactly
/// - `whites`: positions whose color is in the secret, but elsewhere
///
/// For a combination of length `L`, `blacks + whites <= L` always holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Feedback {
    blacks: usize,
    whites: usize,
}

impl Feedback {
    #[inline]
    #[must_use]
    pub const fn new(blacks: usize, whites: usize) -> Self {
        Self { blacks, whites }
    }

    #[inline]
    #[must_use]
    pub const fn blacks(self) -> usize {
        self.blacks
    }

    #[inline]
    #[must_use]
    pub const fn whites(self) -> usize {
        self.whites
    }

    /// Total number of pegs that earned any feedback
    #[inline]
    #[must_use]
    pub const fn total(self) -> usize {
        self.blacks + self.whites
    }

    /// Check if every position of a combination of `length` pegs matched
    ///
    /// # Examples
    /// ```
    /// use mastermind::core::Feedback;
    ///
    /// assert!(Feedback::new(4, 0).is_winner(4));
    /// assert!(!Feedback::new(3, 1).is_winner(4));
    /// ```
    #[inline]
    #[must_use]
    pub const fn is_winner(self, length: usize) -> bool {
        self.blacks == length
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} blacks and {} whites", self.blacks, self.whites)
    }
}
