// src/ordering/mod.rs

//! Page ordering: precedence rules checked against page updates.
//!
//! - [`parse`] reads rules and updates.
//! - [`rules`] holds the rule set and the induced subgraph per update.
//! - [`toposort`] is the three-state DFS producing a linear extension.
//! - [`checker`] compares an update with that order.

pub mod checker;
pub mod parse;
pub mod rules;
pub mod toposort;

use tracing::info;

use crate::errors::Result;
use crate::puzzle::Puzzle;
use crate::types::Day;

pub use checker::{UpdateCheck, check_update, find_violation};
pub use parse::parse_print_queue;
pub use rules::{RuleSet, Update};
pub use toposort::{VisitState, topological_order};

/// Parsed day 5 input.
#[derive(Debug, Clone)]
pub struct PrintQueue {
    pub rules: RuleSet,
    pub updates: Vec<Update>,
}

impl PrintQueue {
    pub fn new(rules: RuleSet, updates: Vec<Update>) -> Self {
        Self { rules, updates }
    }

    /// Check every update, stopping at the first unsatisfiable one.
    pub fn checks(&self) -> Result<Vec<UpdateCheck>> {
        self.updates
            .iter()
            .map(|u| check_update(u, &self.rules))
            .collect()
    }
}

impl Puzzle for PrintQueue {
    const DAY: Day = Day::PrintQueue;

    fn parse(input: &str) -> Result<Self> {
        let (rules, updates) = parse_print_queue(input)?;
        Ok(PrintQueue::new(rules, updates))
    }

    fn part1(&self) -> Result<u64> {
        let checks = self.checks()?;
        let valid = checks.iter().filter(|c| c.is_valid()).count();
        let sum: u64 = checks
            .iter()
            .filter(|c| c.is_valid())
            .map(|c| u64::from(c.middle()))
            .sum();
        info!(valid, total = checks.len(), sum, "middle pages of valid updates");
        Ok(sum)
    }

    fn part2(&self) -> Result<u64> {
        let checks = self.checks()?;
        let corrected = checks.iter().filter(|c| !c.is_valid()).count();
        let sum: u64 = checks
            .iter()
            .filter(|c| !c.is_valid())
            .map(|c| u64::from(c.middle()))
            .sum();
        info!(
            corrected,
            total = checks.len(),
            sum,
            "middle pages of corrected updates"
        );
        Ok(sum)
    }

    fn summary(&self) -> String {
        format!("{} rules, {} updates", self.rules.len(), self.updates.len())
    }
}
