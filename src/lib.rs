//! Mastermind
//!
//! A code-breaking game engine: a hidden combination of colored pegs is
//! generated and the player proposes guesses, each scored in blacks (right
//! color, right place) and whites (right color, wrong place), until the
//! secret is found or the attempts run out.
//!
//! # Quick Start
//!
//! ```rust
//! use mastermind::config::Config;
//! use mastermind::core::{Combination, ValidationOutcome};
//! use mastermind::engine::{GameState, new_game};
//!
//! let mut session = new_game(&Config::default()).unwrap();
//!
//! // Rejected proposals cost nothing
//! let submission = session.add_proposed(Combination::parse("rxyz")).unwrap();
//! assert_eq!(submission.outcome, ValidationOutcome::InvalidColor);
//! assert_eq!(session.status().attempts_used, 0);
//!
//! let submission = session.add_proposed(Combination::parse("rgyb")).unwrap();
//! let feedback = submission.feedback.unwrap();
//! println!("{} blacks, {} whites", feedback.blacks(), feedback.whites());
//! assert_ne!(session.state(), GameState::Lost);
//! ```

// Core domain types
pub mod core;

// Game configuration
pub mod config;

// Secret generation, scoring and game sessions
pub mod engine;

// Line-oriented input/output
pub mod console;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
