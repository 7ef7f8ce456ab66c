//! Mastermind - CLI
//!
//! Text-mode Mastermind game, plus a one-shot scoring command.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use mastermind::{
    commands::{YesNoDialog, run_play, score_combination},
    config::{CLASSIC_COLORS, CLASSIC_LENGTH, CLASSIC_MAX_ATTEMPTS, Config},
    console::StdConsole,
    engine::{GameSession, RandomSecretGenerator},
    output::print_score_report,
};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "mastermind",
    about = "Break the hidden color combination in as few attempts as possible",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Available colors, one character each
    #[arg(short, long, global = true, default_value = CLASSIC_COLORS)]
    colors: String,

    /// Number of pegs in a combination
    #[arg(short, long, global = true, default_value_t = CLASSIC_LENGTH)]
    length: usize,

    /// Attempts allowed per game
    #[arg(short, long, global = true, default_value_t = CLASSIC_MAX_ATTEMPTS)]
    max_attempts: usize,

    /// Allow the same color more than once in a combination
    #[arg(long, global = true)]
    allow_duplicates: bool,

    /// Seed for reproducible secrets
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Increase log verbosity (-v debug, -vv trace); RUST_LOG takes precedence
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Play interactively (default)
    Play,

    /// Score one proposed combination against a known secret
    Score {
        /// The secret combination, e.g. rgyb
        secret: String,

        /// The proposed combination, e.g. grby
        proposed: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = Config {
        combination_length: cli.length,
        max_attempts: cli.max_attempts,
        allow_duplicate_colors: cli.allow_duplicates,
        ..Config::default().with_alphabet(&cli.colors)
    };

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play_command(&config, cli.seed),
        Commands::Score { secret, proposed } => run_score_command(&config, &secret, &proposed),
    }
}

/// Send logs to stderr so they never mix with the game board on stdout
fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "mastermind=debug",
        _ => "mastermind=trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run_play_command(config: &Config, seed: Option<u64>) -> Result<()> {
    let generator = seed.map_or_else(
        RandomSecretGenerator::from_entropy,
        RandomSecretGenerator::from_seed,
    );
    let mut session =
        GameSession::new(config, generator).context("Cannot start a game with these settings")?;

    tracing::info!(seed = ?seed, "starting interactive game");

    let mut console = StdConsole::new();
    run_play(&mut console, &mut session, &YesNoDialog::default()).context("Game loop failed")?;
    Ok(())
}

fn run_score_command(config: &Config, secret: &str, proposed: &str) -> Result<()> {
    let report = score_combination(config, secret, proposed)?;
    print_score_report(&report);
    Ok(())
}
