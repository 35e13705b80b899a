// src/trails/grid.rs

use crate::errors::{PuzzleError, Result};

/// `(row, col)` position on the map.
pub type Cell = (usize, usize);

/// Rectangular topographic map. `None` marks an impassable cell (`.`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeightMap {
    width: usize,
    height: usize,
    cells: Vec<Option<u8>>,
}

impl HeightMap {
    /// Parse rows of digit characters. Blank lines are skipped; every other row
    /// must be as wide as the first.
    pub fn parse(input: &str) -> Result<Self> {
        let mut width = None;
        let mut height = 0;
        let mut cells = Vec::new();

        for (idx, raw) in input.lines().enumerate() {
            let line = raw.trim_end();
            if line.is_empty() {
                continue;
            }

            let row_width = line.chars().count();
            match width {
                None => width = Some(row_width),
                Some(w) if w != row_width => {
                    return Err(PuzzleError::parse(
                        idx + 1,
                        format!("row is {row_width} cells wide, expected {w}"),
                    ));
                }
                Some(_) => {}
            }

            for c in line.chars() {
                let cell = match c {
                    '.' => None,
                    _ => match c.to_digit(10) {
                        Some(d) => Some(d as u8),
                        None => {
                            return Err(PuzzleError::parse(
                                idx + 1,
                                format!("invalid height '{c}'"),
                            ));
                        }
                    },
                };
                cells.push(cell);
            }
            height += 1;
        }

        Ok(Self {
            width: width.unwrap_or(0),
            height,
            cells,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Height at `cell`, or `None` if outside the map or impassable.
    pub fn get(&self, (row, col): Cell) -> Option<u8> {
        if row >= self.height || col >= self.width {
            return None;
        }
        self.cells[row * self.width + col]
    }

    /// Passable cells with their heights, row by row.
    pub fn cells(&self) -> impl Iterator<Item = (Cell, u8)> + '_ {
        self.cells.iter().enumerate().filter_map(|(idx, h)| {
            h.map(|h| ((idx / self.width, idx % self.width), h))
        })
    }

    /// In-bounds 4-neighbours of `cell`.
    pub fn neighbours(&self, (row, col): Cell) -> impl Iterator<Item = Cell> + '_ {
        let up = row.checked_sub(1).map(|r| (r, col));
        let down = (row + 1 < self.height).then_some((row + 1, col));
        let left = col.checked_sub(1).map(|c| (row, c));
        let right = (col + 1 < self.width).then_some((row, col + 1));
        [up, down, left, right].into_iter().flatten()
    }
}
