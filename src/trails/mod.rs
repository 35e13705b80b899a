// src/trails/mod.rs

//! Hiking trails over a height map.
//!
//! - [`grid`] parses the map.
//! - [`paths`] builds the climb-by-one graph and counts trails.

pub mod grid;
pub mod paths;

use tracing::{debug, info};

use crate::errors::Result;
use crate::puzzle::Puzzle;
use crate::types::Day;

pub use grid::{Cell, HeightMap};
pub use paths::{TrailGraph, TrailheadStats};

/// Parsed day 10 input.
#[derive(Debug, Clone)]
pub struct TrailMap {
    map: HeightMap,
    graph: TrailGraph,
}

impl TrailMap {
    pub fn new(map: HeightMap) -> Self {
        let graph = TrailGraph::from_map(&map);
        Self { map, graph }
    }

    pub fn map(&self) -> &HeightMap {
        &self.map
    }

    pub fn stats(&self) -> Result<Vec<TrailheadStats>> {
        let stats = self.graph.trailhead_stats()?;
        for s in &stats {
            debug!(cell = ?s.cell, score = s.score, rating = s.rating, "trailhead");
        }
        Ok(stats)
    }
}

impl Puzzle for TrailMap {
    const DAY: Day = Day::Trails;

    fn parse(input: &str) -> Result<Self> {
        Ok(TrailMap::new(HeightMap::parse(input)?))
    }

    fn part1(&self) -> Result<u64> {
        let total = self.stats()?.iter().map(|s| s.score).sum();
        info!(total, "sum of trailhead scores");
        Ok(total)
    }

    fn part2(&self) -> Result<u64> {
        let total = self.stats()?.iter().map(|s| s.rating).sum();
        info!(total, "sum of trailhead ratings");
        Ok(total)
    }

    fn summary(&self) -> String {
        format!(
            "{}x{} map, {} trailheads",
            self.map.width(),
            self.map.height(),
            self.graph.trailheads().len()
        )
    }
}
