//! Command implementations

pub mod play;
pub mod score;

pub use play::{PlayError, PlaySummary, YesNoDialog, run_play};
pub use score::{ScoreError, ScoreReport, score_combination};
