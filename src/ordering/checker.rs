// src/ordering/checker.rs

use tracing::debug;

use crate::errors::Result;
use crate::ordering::rules::{RuleSet, Update, middle_of};
use crate::ordering::toposort::topological_order;

/// Outcome of checking one update against the rules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateCheck {
    /// The update already respects every applicable rule.
    Valid { middle: u32 },
    /// The update broke at least one rule; `order` is the corrected sequence.
    Corrected { order: Vec<u32>, middle: u32 },
}

impl UpdateCheck {
    pub fn is_valid(&self) -> bool {
        matches!(self, UpdateCheck::Valid { .. })
    }

    pub fn middle(&self) -> u32 {
        match self {
            UpdateCheck::Valid { middle } | UpdateCheck::Corrected { middle, .. } => *middle,
        }
    }
}

/// Compare `update` with its topological order under `rules`.
pub fn check_update(update: &Update, rules: &RuleSet) -> Result<UpdateCheck> {
    let order = topological_order(update, rules)?;

    if order == update.pages() {
        return Ok(UpdateCheck::Valid {
            middle: update.middle(),
        });
    }

    if let Some((before, after)) = find_violation(update, rules) {
        debug!(
            pages = ?update.pages(),
            before,
            after,
            "update breaks rule; using corrected order"
        );
    }

    let middle = middle_of(&order);
    Ok(UpdateCheck::Corrected { order, middle })
}

/// First rule `before|after` broken by `update`, i.e. `after` appears earlier.
pub fn find_violation(update: &Update, rules: &RuleSet) -> Option<(u32, u32)> {
    let pages = update.pages();
    pages.iter().enumerate().find_map(|(idx, &page)| {
        pages[..idx]
            .iter()
            .find(|&&earlier| rules.requires(page, earlier))
            .map(|&earlier| (page, earlier))
    })
}
