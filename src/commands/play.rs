//! Interactive text-mode game loop
//!
//! Drives a [`GameSession`] through a [`Console`]: shows the masked board,
//! asks for proposals until the game ends, then asks whether to play again.

use crate::console::Console;
use crate::core::Combination;
use crate::engine::{GameSession, GameState, SecretGenerator, SessionError};
use crate::output::formatters::{
    TITLE, attempt_line, attempts_header, end_message, masked_secret, validation_message,
};
use std::io;
use thiserror::Error;

const PROPOSE_PROMPT: &str = "Propose a combination:";

/// Error that stops the game loop
#[derive(Debug, Error)]
pub enum PlayError {
    #[error("Console I/O failed")]
    Io(#[from] io::Error),
    #[error(transparent)]
    Session(#[from] SessionError),
}

/// Games played during one run of the loop
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct PlaySummary {
    pub games_played: usize,
    pub games_won: usize,
}

/// Closed question accepting exactly two answers
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct YesNoDialog {
    question: String,
    affirmative: String,
    negative: String,
}

impl Default for YesNoDialog {
    fn default() -> Self {
        Self::new("Do you want to continue?", "y", "n")
    }
}

impl YesNoDialog {
    #[must_use]
    pub fn new(
        question: impl Into<String>,
        affirmative: impl Into<String>,
        negative: impl Into<String>,
    ) -> Self {
        Self {
            question: question.into(),
            affirmative: affirmative.into(),
            negative: negative.into(),
        }
    }

    /// Ask until one of the two answers is given
    ///
    /// Returns `true` for the affirmative answer.
    ///
    /// # Errors
    /// Returns an I/O error if the console fails or runs out of input.
    pub fn ask<C: Console>(&self, console: &mut C) -> io::Result<bool> {
        let prompt = format!("{} ({}/{}):", self.question, self.affirmative, self.negative);

        loop {
            let answer = console.read_line(&prompt)?;
            let answer = answer.trim();

            if answer == self.affirmative {
                return Ok(true);
            }
            if answer == self.negative {
                return Ok(false);
            }

            console.write_line(&format!(
                "Please, answer \"{}\" or \"{}\"",
                self.affirmative, self.negative
            ))?;
        }
    }
}

/// Run the interactive game loop until the player stops
///
/// End of input is treated as the player leaving and ends the loop cleanly.
///
/// # Errors
/// Returns `PlayError` if the console fails for any other reason.
pub fn run_play<C, G>(
    console: &mut C,
    session: &mut GameSession<G>,
    dialog: &YesNoDialog,
) -> Result<PlaySummary, PlayError>
where
    C: Console,
    G: SecretGenerator,
{
    let mut summary = PlaySummary::default();

    match play_games(console, session, dialog, &mut summary) {
        Ok(()) => {}
        Err(PlayError::Io(error)) if error.kind() == io::ErrorKind::UnexpectedEof => {
            tracing::info!("input closed, leaving game loop");
        }
        Err(error) => return Err(error),
    }

    tracing::info!(
        games_played = summary.games_played,
        games_won = summary.games_won,
        "game loop finished"
    );
    Ok(summary)
}

fn play_games<C, G>(
    console: &mut C,
    session: &mut GameSession<G>,
    dialog: &YesNoDialog,
    summary: &mut PlaySummary,
) -> Result<(), PlayError>
where
    C: Console,
    G: SecretGenerator,
{
    console.write_line(TITLE)?;

    if session.state().is_over() {
        session.reset()?;
    }

    loop {
        let state = play_game(console, session)?;

        summary.games_played += 1;
        if state == GameState::Won {
            summary.games_won += 1;
        }

        if let Some(message) = end_message(state) {
            console.write_line(message)?;
        }

        let again = dialog.ask(console)?;
        tracing::debug!(again, "continue dialog answered");
        if !again {
            return Ok(());
        }

        session.reset()?;
    }
}

/// Play one game to its end and return how it ended
fn play_game<C, G>(console: &mut C, session: &mut GameSession<G>) -> Result<GameState, PlayError>
where
    C: Console,
    G: SecretGenerator,
{
    show_board(console, session)?;

    while !session.state().is_over() {
        let input = console.read_line(PROPOSE_PROMPT)?;
        let submission = session.add_proposed(Combination::parse(&input))?;

        if let Some(message) = validation_message(submission.outcome, session.rules()) {
            console.write_line(&message)?;
            continue;
        }

        show_board(console, session)?;
    }

    Ok(session.state())
}

fn show_board<C: Console, G>(console: &mut C, session: &GameSession<G>) -> io::Result<()> {
    console.write_line(&attempts_header(session.history().len()))?;
    console.write_line(&masked_secret(session.secret_length()))?;

    for attempt in session.history() {
        console.write_line(&attempt_line(attempt))?;
    }

    Ok(())
}
