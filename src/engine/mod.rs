//! Game engine
//!
//! Secret generation, scoring and the turn state machine.

pub mod generator;
pub mod scoring;
pub mod session;

pub use generator::{RandomSecretGenerator, SecretGenerator};
pub use scoring::ScoringEngine;
pub use session::{
    Attempt, GameSession, GameState, SessionError, Status, Submission, new_game,
};
