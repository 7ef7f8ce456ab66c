//! Display functions for command results

use super::formatters::feedback_line;
use crate::commands::ScoreReport;
use colored::Colorize;

/// Print the result of scoring a single proposal
pub fn print_score_report(report: &ScoreReport) {
    let line = feedback_line(&report.proposed.to_string(), report.feedback);

    if report.is_exact() {
        println!("{}", line.green().bold());
    } else if report.feedback.total() == 0 {
        println!("{}", line.bright_black());
    } else {
        println!("{}", line.yellow());
    }
}
