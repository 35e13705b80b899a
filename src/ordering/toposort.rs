// src/ordering/toposort.rs

//! Depth-first topological sort over the rules induced by one update.
//!
//! Iterative with an explicit stack, so long updates cannot exhaust the call
//! stack. Roots are started from the last page backwards: an update that
//! already respects every rule comes back unchanged.

use std::collections::HashMap;

use tracing::trace;

use crate::errors::{PuzzleError, Result};
use crate::ordering::rules::{RuleSet, Update};

/// Per-page DFS colouring.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VisitState {
    Unvisited,
    /// On the current DFS path. Reaching it again means a cycle.
    InProgress,
    Done,
}

/// One DFS stack entry: a page position and a cursor into its successors.
#[derive(Debug)]
struct Frame {
    node: usize,
    successors: Vec<usize>,
    next: usize,
}

/// Linear extension of the rules restricted to the pages of `update`.
///
/// Fails with [`PuzzleError::UnsatisfiableConstraints`] if the induced rules
/// contain a cycle.
pub fn topological_order(update: &Update, rules: &RuleSet) -> Result<Vec<u32>> {
    let pages = update.pages();
    let graph = rules.induced(pages);
    let position: HashMap<u32, usize> = pages.iter().enumerate().map(|(i, &p)| (p, i)).collect();

    let successors_of = |node: usize| -> Vec<usize> {
        graph
            .neighbors(pages[node])
            .filter_map(|succ| position.get(&succ).copied())
            .collect()
    };

    let mut state = vec![VisitState::Unvisited; pages.len()];
    let mut post_order = Vec::with_capacity(pages.len());
    let mut stack: Vec<Frame> = Vec::new();

    for root in (0..pages.len()).rev() {
        if state[root] != VisitState::Unvisited {
            continue;
        }

        state[root] = VisitState::InProgress;
        stack.push(Frame {
            node: root,
            successors: successors_of(root),
            next: 0,
        });

        while let Some(frame) = stack.last_mut() {
            if let Some(&succ) = frame.successors.get(frame.next) {
                frame.next += 1;
                match state[succ] {
                    VisitState::Unvisited => {
                        state[succ] = VisitState::InProgress;
                        stack.push(Frame {
                            node: succ,
                            successors: successors_of(succ),
                            next: 0,
                        });
                    }
                    VisitState::InProgress => {
                        return Err(PuzzleError::UnsatisfiableConstraints(format!(
                            "cycle detected in rules involving page {}",
                            pages[succ]
                        )));
                    }
                    VisitState::Done => {}
                }
            } else {
                let node = frame.node;
                stack.pop();
                state[node] = VisitState::Done;
                post_order.push(pages[node]);
                trace!(page = pages[node], "page finished");
            }
        }
    }

    post_order.reverse();
    Ok(post_order)
}
