//! Formatting utilities for the game board and messages

use crate::core::{CombinationRules, Feedback, ValidationOutcome};
use crate::engine::{Attempt, GameState};

/// Character used to hide each peg of the secret
pub const HIDDEN_PEG: char = '*';

/// Banner shown once when the program starts
pub const TITLE: &str = "----- MASTERMIND -----";

/// Mask the secret, one hidden peg per position
#[must_use]
pub fn masked_secret(length: usize) -> String {
    HIDDEN_PEG.to_string().repeat(length)
}

/// Header line above the board
#[must_use]
pub fn attempts_header(attempts: usize) -> String {
    format!("\n{attempts} attempt(s):")
}

/// One board line: the proposal and its feedback
#[must_use]
pub fn attempt_line(attempt: &Attempt) -> String {
    feedback_line(&attempt.proposed().to_string(), attempt.feedback())
}

#[must_use]
pub fn feedback_line(proposed: &str, feedback: Feedback) -> String {
    format!("{proposed} --> {feedback}")
}

/// Message explaining why a proposal was rejected
///
/// Returns `None` for [`ValidationOutcome::Ok`].
#[must_use]
pub fn validation_message(outcome: ValidationOutcome, rules: &CombinationRules) -> Option<String> {
    match outcome {
        ValidationOutcome::Ok => None,
        ValidationOutcome::InvalidLength => Some("Wrong proposed combination length".to_string()),
        ValidationOutcome::InvalidColor => {
            let colors: String = rules.alphabet().iter().map(|color| color.symbol()).collect();
            Some(format!("Wrong colors, they must be: {colors}"))
        }
        ValidationOutcome::DuplicateColor => {
            Some("Wrong proposed combination, colors can't be repeated".to_string())
        }
    }
}

/// Closing message for a finished game
///
/// Returns `None` while the game is still in progress.
#[must_use]
pub const fn end_message(state: GameState) -> Option<&'static str> {
    match state {
        GameState::InProgress => None,
        GameState::Won => Some("You've won!!! ;-)"),
        GameState::Lost => Some("You've lost!!! :-("),
    }
}
