// src/reports/parse.rs

use crate::errors::{PuzzleError, Result};
use crate::reports::Report;

/// Parse one report per line, levels separated by whitespace.
///
/// Blank lines are skipped. Any token that is not an integer is reported with
/// its 1-based line number rather than dropped.
pub fn parse_reports(input: &str) -> Result<Vec<Report>> {
    let mut reports = Vec::new();

    for (idx, line) in input.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }

        let levels = line
            .split_whitespace()
            .map(|token| {
                token.parse::<i64>().map_err(|e| {
                    PuzzleError::parse(idx + 1, format!("invalid level '{token}': {e}"))
                })
            })
            .collect::<Result<Vec<_>>>()?;

        reports.push(Report::new(levels));
    }

    Ok(reports)
}
