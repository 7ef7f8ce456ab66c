//! Terminal output formatting
//!
//! Text for the game board and messages, plus colored printing for CLI
//! reports.

pub mod display;
pub mod formatters;

pub use display::print_score_report;
