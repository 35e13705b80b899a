// src/reports/mod.rs

//! Reactor reports: bounded monotonic integer sequences.
//!
//! - [`parse`] turns the puzzle input into a list of [`Report`]s.
//! - [`validator`] holds the strict check and the two "at most one removal"
//!   strategies (brute force and single pass).

pub mod parse;
pub mod validator;

use tracing::{debug, info};

use crate::errors::{PuzzleError, Result};
use crate::puzzle::Puzzle;
use crate::types::Day;

pub use parse::parse_reports;
pub use validator::{is_safe, is_safe_bruteforce, is_strictly_safe};

/// One line of levels. Immutable once read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub levels: Vec<i64>,
}

impl Report {
    pub fn new(levels: Vec<i64>) -> Self {
        Self { levels }
    }
}

/// Parsed day 2 input.
#[derive(Debug, Clone)]
pub struct Reports {
    reports: Vec<Report>,
    cross_check: bool,
}

impl Reports {
    pub fn new(reports: Vec<Report>) -> Self {
        Self {
            reports,
            cross_check: true,
        }
    }

    /// Enable or disable comparing the single-pass validator against the
    /// brute-force reference on every report.
    pub fn with_cross_check(mut self, enabled: bool) -> Self {
        self.cross_check = enabled;
        self
    }

    pub fn reports(&self) -> &[Report] {
        &self.reports
    }

    /// Classify one report with the single-pass validator, optionally checked
    /// against the brute-force reference.
    pub fn classify(&self, report: &Report) -> Result<bool> {
        let safe = is_safe(&report.levels);
        if self.cross_check && safe != is_safe_bruteforce(&report.levels) {
            return Err(PuzzleError::StrategyMismatch(report.levels.clone()));
        }
        Ok(safe)
    }
}

impl Puzzle for Reports {
    const DAY: Day = Day::Reports;

    fn parse(input: &str) -> Result<Self> {
        Ok(Reports::new(parse_reports(input)?))
    }

    fn part1(&self) -> Result<u64> {
        let count = self
            .reports
            .iter()
            .filter(|r| is_strictly_safe(&r.levels))
            .count() as u64;
        info!(count, total = self.reports.len(), "strictly safe reports");
        Ok(count)
    }

    fn part2(&self) -> Result<u64> {
        let mut count = 0u64;
        for report in &self.reports {
            let safe = self.classify(report)?;
            debug!(levels = ?report.levels, safe, "classified report");
            if safe {
                count += 1;
            }
        }
        info!(
            count,
            total = self.reports.len(),
            cross_check = self.cross_check,
            "safe reports with one removal allowed"
        );
        Ok(count)
    }

    fn summary(&self) -> String {
        format!("{} reports", self.reports.len())
    }
}
