//! Core domain types for Mastermind
//!
//! Colors, combinations, feedback and the rules that decide whether a
//! combination is playable. Everything here is pure and free of I/O.

mod color;
mod combination;
mod feedback;
mod rules;

pub use color::Color;
pub use combination::{Combination, SecretCombination};
pub use feedback::Feedback;
pub use rules::{CombinationRules, ValidationOutcome};
