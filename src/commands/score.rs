//! One-shot scoring command
//!
//! Scores a proposed combination against a secret given on the command line.

use crate::config::{Config, ConfigError};
use crate::core::{Combination, CombinationRules, Feedback, SecretCombination};
use crate::engine::ScoringEngine;
use crate::output::formatters::validation_message;
use thiserror::Error;

/// Error for a score request that cannot be answered
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScoreError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("Invalid secret combination: {0}")]
    InvalidSecret(String),
    #[error("{0}")]
    InvalidProposal(String),
}

/// Result of scoring one proposal
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreReport {
    pub proposed: Combination,
    pub feedback: Feedback,
    pub length: usize,
}

impl ScoreReport {
    /// Check if the proposal matches the secret exactly
    #[must_use]
    pub const fn is_exact(&self) -> bool {
        self.feedback.is_winner(self.length)
    }
}

/// Score `proposed` against `secret` under the rules of `config`
///
/// # Errors
/// Returns `ScoreError` if the configuration is malformed, or if the secret
/// or the proposal breaks the rules.
///
/// # Examples
/// ```
/// use mastermind::commands::score_combination;
/// use mastermind::config::Config;
/// use mastermind::core::Feedback;
///
/// let report = score_combination(&Config::default(), "rgyb", "rygc").unwrap();
/// assert_eq!(report.feedback, Feedback::new(1, 2));
/// ```
pub fn score_combination(
    config: &Config,
    secret: &str,
    proposed: &str,
) -> Result<ScoreReport, ScoreError> {
    let rules = CombinationRules::new(config)?;

    let secret = SecretCombination::new(Combination::parse(secret), &rules).map_err(|outcome| {
        ScoreError::InvalidSecret(validation_message(outcome, &rules).unwrap_or_default())
    })?;

    let proposed = Combination::parse(proposed);
    if let Some(message) = validation_message(rules.validate(proposed.colors()), &rules) {
        return Err(ScoreError::InvalidProposal(message));
    }

    let feedback = ScoringEngine::for_rules(&rules).score(&secret, &proposed);
    tracing::debug!(
        blacks = feedback.blacks(),
        whites = feedback.whites(),
        "scored proposal from command line"
    );

    Ok(ScoreReport {
        proposed,
        feedback,
        length: rules.length(),
    })
}
