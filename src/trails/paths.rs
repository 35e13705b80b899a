// src/trails/paths.rs

//! Trail graph and exact path counting.
//!
//! Edges only climb by exactly one, so the graph is a DAG and every trail from
//! a trailhead (0) to a summit (9) has exactly nine steps. Counting walks the
//! graph once in reverse topological order.

use std::collections::{BTreeSet, HashMap};

use anyhow::anyhow;
use petgraph::algo::toposort;
use petgraph::graphmap::DiGraphMap;
use tracing::debug;

use crate::errors::Result;
use crate::trails::grid::{Cell, HeightMap};

pub const TRAILHEAD: u8 = 0;
pub const SUMMIT: u8 = 9;

/// Per-trailhead totals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrailheadStats {
    pub cell: Cell,
    /// Distinct summits reachable.
    pub score: u64,
    /// Distinct trails to any summit.
    pub rating: u64,
}

/// Directed "climb by one" relation over a [`HeightMap`].
#[derive(Debug, Clone)]
pub struct TrailGraph {
    graph: DiGraphMap<Cell, ()>,
    heights: HashMap<Cell, u8>,
}

impl TrailGraph {
    pub fn from_map(map: &HeightMap) -> Self {
        let mut graph = DiGraphMap::new();
        let mut heights = HashMap::new();

        for (cell, h) in map.cells() {
            graph.add_node(cell);
            heights.insert(cell, h);
        }

        for (cell, h) in map.cells() {
            for next in map.neighbours(cell) {
                if map.get(next) == Some(h + 1) {
                    graph.add_edge(cell, next, ());
                }
            }
        }

        debug!(
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            "built trail graph"
        );

        Self { graph, heights }
    }

    /// Cells of height 0, in row-major order.
    pub fn trailheads(&self) -> Vec<Cell> {
        let mut heads: Vec<Cell> = self
            .heights
            .iter()
            .filter(|(_, h)| **h == TRAILHEAD)
            .map(|(c, _)| *c)
            .collect();
        heads.sort_unstable();
        heads
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Score and rating for every trailhead.
    pub fn trailhead_stats(&self) -> Result<Vec<TrailheadStats>> {
        let order = toposort(&self.graph, None).map_err(|cycle| {
            anyhow!(
                "trail graph has a cycle at {:?}; heights must strictly increase",
                cycle.node_id()
            )
        })?;

        let mut paths: HashMap<Cell, u64> = HashMap::with_capacity(order.len());
        let mut summits: HashMap<Cell, BTreeSet<Cell>> = HashMap::with_capacity(order.len());

        for &cell in order.iter().rev() {
            if self.heights.get(&cell) == Some(&SUMMIT) {
                paths.insert(cell, 1);
                summits.insert(cell, BTreeSet::from([cell]));
                continue;
            }

            let mut count = 0u64;
            let mut reached = BTreeSet::new();
            for next in self.graph.neighbors(cell) {
                count += paths.get(&next).copied().unwrap_or(0);
                if let Some(s) = summits.get(&next) {
                    reached.extend(s.iter().copied());
                }
            }
            paths.insert(cell, count);
            summits.insert(cell, reached);
        }

        Ok(self
            .trailheads()
            .into_iter()
            .map(|cell| TrailheadStats {
                cell,
                score: summits.get(&cell).map_or(0, |s| s.len() as u64),
                rating: paths.get(&cell).copied().unwrap_or(0),
            })
            .collect())
    }
}
