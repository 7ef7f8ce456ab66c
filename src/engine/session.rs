//! Game session and turn state machine
//!
//! ```text
//!               add_proposed (blacks == L)
//!   InProgress ─────────────────────────────▶ Won
//!       │
//!       │ add_proposed (attempts == max)
//!       ▼
//!      Lost
//! ```
//!
//! Rejected proposals leave the session untouched. `reset` returns any state
//! to `InProgress` with a fresh secret. Every secret handed out by the
//! generator is checked against the session rules before it is used.

use super::generator::{RandomSecretGenerator, SecretGenerator};
use super::scoring::ScoringEngine;
use crate::config::{Config, ConfigError};
use crate::core::{Combination, CombinationRules, Feedback, SecretCombination, ValidationOutcome};
use rand::rngs::StdRng;
use std::fmt;
use thiserror::Error;

/// Progress of a game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameState {
    InProgress,
    Won,
    Lost,
}

impl GameState {
    /// Check if no more proposals are accepted
    #[inline]
    #[must_use]
    pub const fn is_over(self) -> bool {
        !matches!(self, Self::InProgress)
    }
}

impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InProgress => write!(f, "in progress"),
            Self::Won => write!(f, "won"),
            Self::Lost => write!(f, "lost"),
        }
    }
}

/// Error for operations the session cannot carry out
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("The game is already {state}; reset it to play again")]
    GameOver { state: GameState },
    #[error("Secret generator broke the session rules: {outcome:?}")]
    InvalidSecret { outcome: ValidationOutcome },
}

/// One validated proposal and the feedback it earned
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attempt {
    proposed: Combination,
    feedback: Feedback,
}

impl Attempt {
    #[inline]
    #[must_use]
    pub const fn proposed(&self) -> &Combination {
        &self.proposed
    }

    #[inline]
    #[must_use]
    pub const fn feedback(&self) -> Feedback {
        self.feedback
    }
}

/// Snapshot of the session counters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Status {
    pub attempts_used: usize,
    pub max_attempts: usize,
    pub state: GameState,
}

/// Answer to a proposal
///
/// `feedback` is present exactly when `outcome` is [`ValidationOutcome::Ok`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Submission {
    pub outcome: ValidationOutcome,
    pub feedback: Option<Feedback>,
}

impl Submission {
    const fn rejected(outcome: ValidationOutcome) -> Self {
        Self {
            outcome,
            feedback: None,
        }
    }

    const fn scored(feedback: Feedback) -> Self {
        Self {
            outcome: ValidationOutcome::Ok,
            feedback: Some(feedback),
        }
    }

    #[inline]
    #[must_use]
    pub const fn is_accepted(&self) -> bool {
        self.feedback.is_some()
    }
}

/// A single game: the secret, the attempts so far and the resulting state
///
/// The session is generic over its [`SecretGenerator`] so that tests and
/// replays can supply their own secrets.
pub struct GameSession<G> {
    rules: CombinationRules,
    max_attempts: usize,
    scoring: ScoringEngine,
    generator: G,
    secret: SecretCombination,
    attempts: Vec<Attempt>,
    state: GameState,
}

/// Start a game with a randomly seeded generator
///
/// # Errors
/// Returns `SessionError::Config` if the configuration is malformed.
///
/// # Examples
/// ```
/// use mastermind::config::Config;
/// use mastermind::engine::{GameState, new_game};
///
/// let session = new_game(&Config::default()).unwrap();
/// assert_eq!(session.state(), GameState::InProgress);
/// assert_eq!(session.secret_length(), 4);
/// ```
pub fn new_game(
    config: &Config,
) -> Result<GameSession<RandomSecretGenerator<StdRng>>, SessionError> {
    GameSession::new(config, RandomSecretGenerator::from_entropy())
}

impl<G: SecretGenerator> GameSession<G> {
    /// Build a session and draw its first secret
    ///
    /// # Errors
    /// Returns `SessionError::Config` if the configuration is malformed and
    /// `SessionError::InvalidSecret` if the generator's first secret breaks
    /// the rules; no session is created in either case.
    pub fn new(config: &Config, mut generator: G) -> Result<Self, SessionError> {
        let rules = CombinationRules::new(config)?;
        let secret = draw_secret(&mut generator, &rules)?;

        tracing::debug!(
            colors = rules.alphabet().len(),
            length = rules.length(),
            max_attempts = config.max_attempts,
            allow_duplicates = rules.allows_duplicates(),
            "game session created"
        );

        Ok(Self {
            scoring: ScoringEngine::for_rules(&rules),
            rules,
            max_attempts: config.max_attempts,
            generator,
            secret,
            attempts: Vec::with_capacity(config.max_attempts),
            state: GameState::InProgress,
        })
    }

    /// Submit a proposed combination
    ///
    /// Invalid proposals are reported through [`Submission::outcome`] and do
    /// not consume an attempt. A valid one is scored, recorded, and may end
    /// the game.
    ///
    /// # Errors
    /// Returns `SessionError::GameOver` if the game has already ended.
    pub fn add_proposed(&mut self, candidate: Combination) -> Result<Submission, SessionError> {
        if self.state.is_over() {
            return Err(SessionError::GameOver { state: self.state });
        }

        let outcome = self.rules.validate(candidate.colors());
        if !outcome.is_ok() {
            tracing::debug!(?outcome, "proposal rejected");
            return Ok(Submission::rejected(outcome));
        }

        let feedback = self.scoring.score(&self.secret, &candidate);
        self.attempts.push(Attempt {
            proposed: candidate,
            feedback,
        });

        tracing::debug!(
            attempt = self.attempts.len(),
            blacks = feedback.blacks(),
            whites = feedback.whites(),
            "proposal scored"
        );

        if feedback.is_winner(self.rules.length()) {
            self.state = GameState::Won;
        } else if self.attempts.len() == self.max_attempts {
            self.state = GameState::Lost;
        }

        if self.state.is_over() {
            tracing::info!(state = %self.state, attempts = self.attempts.len(), "game over");
        }

        Ok(Submission::scored(feedback))
    }

    /// Start over with a new secret and no attempts
    ///
    /// # Errors
    /// Returns `SessionError::InvalidSecret` if the generator's new secret
    /// breaks the rules. The current game is kept as it was.
    pub fn reset(&mut self) -> Result<(), SessionError> {
        self.secret = draw_secret(&mut self.generator, &self.rules)?;
        self.attempts.clear();
        self.state = GameState::InProgress;
        tracing::debug!("game session reset");
        Ok(())
    }
}

fn draw_secret<G: SecretGenerator>(
    generator: &mut G,
    rules: &CombinationRules,
) -> Result<SecretCombination, SessionError> {
    let secret = generator.generate(rules);

    match rules.validate(secret.colors()) {
        ValidationOutcome::Ok => Ok(secret),
        outcome => {
            tracing::warn!(?outcome, "generated secret rejected");
            Err(SessionError::InvalidSecret { outcome })
        }
    }
}

impl<G> GameSession<G> {
    #[must_use]
    pub fn status(&self) -> Status {
        Status {
            attempts_used: self.attempts.len(),
            max_attempts: self.max_attempts,
            state: self.state,
        }
    }

    #[inline]
    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }

    /// Attempts in submission order
    #[inline]
    #[must_use]
    pub fn history(&self) -> &[Attempt] {
        &self.attempts
    }

    /// Number of pegs in the secret, for masked display
    #[inline]
    #[must_use]
    pub fn secret_length(&self) -> usize {
        self.secret.len()
    }

    #[inline]
    #[must_use]
    pub const fn rules(&self) -> &CombinationRules {
        &self.rules
    }

    #[inline]
    #[must_use]
    pub const fn max_attempts(&self) -> usize {
        self.max_attempts
    }

    #[must_use]
    pub fn remaining_attempts(&self) -> usize {
        self.max_attempts - self.attempts.len()
    }
}

impl<G> fmt::Debug for GameSession<G> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GameSession")
            .field("rules", &self.rules)
            .field("secret", &self.secret)
            .field("attempts", &self.attempts)
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}
