// src/puzzle.rs

//! The [`Puzzle`] seam shared by every day, and dispatch from [`Day`].

use tracing::{debug, info};

use crate::errors::Result;
use crate::ordering::PrintQueue;
use crate::reports::Reports;
use crate::trails::TrailMap;
use crate::types::{Day, Part};

/// A parsed puzzle input that can answer both parts.
pub trait Puzzle: Sized {
    const DAY: Day;

    /// Parse the full input text.
    fn parse(input: &str) -> Result<Self>;

    fn part1(&self) -> Result<u64>;

    fn part2(&self) -> Result<u64>;

    /// One-line description of the parsed input, for `--dry-run`.
    fn summary(&self) -> String;

    fn answer(&self, part: Part) -> Result<u64> {
        match part {
            Part::One => self.part1(),
            Part::Two => self.part2(),
        }
    }
}

/// How a single day should be run.
#[derive(Debug, Clone)]
pub struct SolveOptions {
    /// Parts to answer, in order.
    pub parts: Vec<Part>,
    /// Cross-check the single-pass report validator against brute force.
    pub cross_check: bool,
    /// Parse only; report a summary instead of answers.
    pub dry_run: bool,
}

impl Default for SolveOptions {
    fn default() -> Self {
        Self {
            parts: Part::BOTH.to_vec(),
            cross_check: true,
            dry_run: false,
        }
    }
}

/// Result of running one day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Answers(Vec<(Part, u64)>),
    Summary(String),
}

/// Parse `input` as the given day and answer the requested parts.
pub fn solve(day: Day, input: &str, options: &SolveOptions) -> Result<Outcome> {
    match day {
        Day::Reports => {
            let reports = Reports::parse(input)?.with_cross_check(options.cross_check);
            run_puzzle(&reports, options)
        }
        Day::PrintQueue => run_puzzle(&PrintQueue::parse(input)?, options),
        Day::Trails => run_puzzle(&TrailMap::parse(input)?, options),
    }
}

fn run_puzzle<P: Puzzle>(puzzle: &P, options: &SolveOptions) -> Result<Outcome> {
    let summary = puzzle.summary();
    debug!(day = %P::DAY, %summary, "parsed input");

    if options.dry_run {
        return Ok(Outcome::Summary(format!("{}: {summary}", P::DAY)));
    }

    let mut answers = Vec::with_capacity(options.parts.len());
    for &part in &options.parts {
        let answer = puzzle.answer(part)?;
        info!(day = %P::DAY, %part, answer, "solved");
        answers.push((part, answer));
    }

    Ok(Outcome::Answers(answers))
}
