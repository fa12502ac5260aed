//! Grid storage and the coordinate-resolution policy

use super::rng::Lcg;
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Glyph used for live cells in every rendering.
pub const ALIVE_GLYPH: char = 'O';

/// Default glyph for dead cells.
pub const DEFAULT_BACKGROUND: char = '.';

/// How coordinates outside the grid are resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EdgeBehavior {
    /// Hard edges: off-grid reads are dead, off-grid writes are no-ops.
    Bounded,
    /// Toric playfield: coordinates wrap around to the opposite edge.
    Wrap,
}

/// Errors surfaced by grid construction and pattern seeding.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    #[error("grid dimensions must be positive, got {rows}x{cols}")]
    InvalidDimensions { rows: usize, cols: usize },

    #[error("invalid pattern character '{ch}' at offset {index}, expected 'O' or '.'")]
    InvalidPatternChar { ch: char, index: usize },
}

/// A Game of Life playfield.
///
/// Cells live in one contiguous buffer indexed `row * cols + col`; dimensions
/// are fixed at construction. Out-of-range access is resolved by the grid's
/// [`EdgeBehavior`], never by an error, which keeps neighbor counting at the
/// edges free of special cases.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<bool>,
    edge: EdgeBehavior,
    background: char,
}

impl Grid {
    /// Create an all-dead bounded grid.
    pub fn new(rows: usize, cols: usize) -> Result<Self, GridError> {
        if rows == 0 || cols == 0 {
            return Err(GridError::InvalidDimensions { rows, cols });
        }
        Ok(Self {
            rows,
            cols,
            cells: vec![false; rows * cols],
            edge: EdgeBehavior::Bounded,
            background: DEFAULT_BACKGROUND,
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn edge_behavior(&self) -> EdgeBehavior {
        self.edge
    }

    pub fn set_edge_behavior(&mut self, edge: EdgeBehavior) {
        self.edge = edge;
    }

    /// Glyph used for dead cells when rendering without an explicit override.
    pub fn background(&self) -> char {
        self.background
    }

    pub fn set_background(&mut self, background: char) {
        self.background = background;
    }

    #[inline]
    fn index(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }

    /// Resolve a signed coordinate pair to a buffer position, or `None` for
    /// an off-grid coordinate in bounded mode.
    fn resolve(&self, row: i64, col: i64) -> Option<(usize, usize)> {
        match self.edge {
            EdgeBehavior::Bounded => {
                if row >= 0 && row < self.rows as i64 && col >= 0 && col < self.cols as i64 {
                    Some((row as usize, col as usize))
                } else {
                    None
                }
            }
            EdgeBehavior::Wrap => {
                let r = row.rem_euclid(self.rows as i64) as usize;
                let c = col.rem_euclid(self.cols as i64) as usize;
                Some((r, c))
            }
        }
    }

    /// Read a cell. Off-grid coordinates in bounded mode read as dead.
    pub fn get(&self, row: i64, col: i64) -> bool {
        match self.resolve(row, col) {
            Some((r, c)) => self.cells[self.index(r, c)],
            None => false,
        }
    }

    /// Write a cell. Off-grid coordinates in bounded mode are silently ignored.
    pub fn set(&mut self, row: i64, col: i64, alive: bool) {
        if let Some((r, c)) = self.resolve(row, col) {
            let idx = self.index(r, c);
            self.cells[idx] = alive;
        }
    }

    /// Write one row-segment of cells from a pattern string of `'O'` (alive)
    /// and `'.'` (dead), left to right starting at `(row, col)`.
    ///
    /// A pattern containing any other character is rejected before anything
    /// is written, so a failed call leaves the grid untouched. Each accepted
    /// cell goes through the normal edge policy.
    pub fn set_pattern(&mut self, row: i64, col: i64, pattern: &str) -> Result<(), GridError> {
        for (index, ch) in pattern.chars().enumerate() {
            if ch != ALIVE_GLYPH && ch != '.' {
                return Err(GridError::InvalidPatternChar { ch, index });
            }
        }
        for (offset, ch) in pattern.chars().enumerate() {
            self.set(row, col + offset as i64, ch == ALIVE_GLYPH);
        }
        Ok(())
    }

    /// Reset every cell to dead.
    pub fn clear(&mut self) {
        self.cells.fill(false);
    }

    /// Overwrite every cell with a coin flip from a freshly seeded [`Lcg`],
    /// in row-major order. Equal seeds produce identical grids.
    pub fn randomize(&mut self, seed: u32) {
        let mut rng = Lcg::new(seed);
        for cell in &mut self.cells {
            *cell = rng.draw_cell();
        }
    }

    /// Count the live cells among the 8 Moore neighbors of `(row, col)`.
    ///
    /// Neighbor reads go through [`Grid::get`], which already encodes the
    /// bounded/wrap policy, so edge cells need no special handling.
    pub fn count_neighbors(&self, row: i64, col: i64) -> u8 {
        let mut count = 0;
        for dr in [-1i64, 0, 1] {
            for dc in [-1i64, 0, 1] {
                if dr == 0 && dc == 0 {
                    continue;
                }
                if self.get(row + dr, col + dc) {
                    count += 1;
                }
            }
        }
        count
    }

    /// Coordinates of every live cell, row-major.
    pub fn live_cells(&self) -> Vec<(usize, usize)> {
        (0..self.rows)
            .cartesian_product(0..self.cols)
            .filter(|&(r, c)| self.cells[self.index(r, c)])
            .collect()
    }

    /// Total number of live cells.
    pub fn live_count(&self) -> usize {
        self.cells.iter().filter(|&&cell| cell).count()
    }

    /// True if no cell is alive.
    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|&cell| !cell)
    }

    /// Render the grid as text: `O` for live cells, `background` for dead
    /// ones, one line per row, and a trailing blank line after the grid.
    pub fn render(&self, background: char) -> String {
        let mut out = String::with_capacity((self.cols + 1) * self.rows + 1);
        for row in 0..self.rows {
            for col in 0..self.cols {
                out.push(if self.cells[self.index(row, col)] {
                    ALIVE_GLYPH
                } else {
                    background
                });
            }
            out.push('\n');
        }
        out.push('\n');
        out
    }

    /// Render with the grid's configured background glyph.
    pub fn render_default(&self) -> String {
        self.render(self.background)
    }

    /// Hand the grid a new cell buffer of identical dimensions. Used by the
    /// rules engine to install a freshly computed generation.
    pub(crate) fn adopt_cells(&mut self, cells: Vec<bool>) {
        debug_assert_eq!(cells.len(), self.cells.len());
        self.cells = cells;
    }

    pub(crate) fn cells(&self) -> &[bool] {
        &self.cells
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_grid_is_all_dead() {
        let grid = Grid::new(4, 7).unwrap();
        assert_eq!(grid.rows(), 4);
        assert_eq!(grid.cols(), 7);
        assert!(grid.is_empty());
        for row in 0..4 {
            for col in 0..7 {
                assert!(!grid.get(row, col));
            }
        }
    }

    #[test]
    fn test_invalid_dimensions_rejected() {
        assert_eq!(
            Grid::new(0, 5).unwrap_err(),
            GridError::InvalidDimensions { rows: 0, cols: 5 }
        );
        assert!(Grid::new(5, 0).is_err());
        assert!(Grid::new(0, 0).is_err());
    }

    #[test]
    fn test_set_and_get_round_trip() {
        let mut grid = Grid::new(3, 3).unwrap();
        grid.set(1, 2, true);
        assert!(grid.get(1, 2));
        grid.set(1, 2, false);
        assert!(!grid.get(1, 2));
    }

    #[test]
    fn test_bounded_out_of_range_reads_dead() {
        let mut grid = Grid::new(3, 5).unwrap();
        grid.set(0, 0, true);
        for &(r, c) in &[(-1, 0), (0, -1), (3, 0), (0, 5), (100, 100), (-7, -7)] {
            assert!(!grid.get(r, c), "({}, {}) should read dead", r, c);
        }
    }

    #[test]
    fn test_bounded_out_of_range_writes_are_noops() {
        let mut grid = Grid::new(3, 3).unwrap();
        grid.set(-1, 0, true);
        grid.set(0, -1, true);
        grid.set(3, 0, true);
        grid.set(0, 3, true);
        assert!(grid.is_empty());
    }

    #[test]
    fn test_wrap_coordinates_are_congruent() {
        let mut grid = Grid::new(4, 6).unwrap();
        grid.set_edge_behavior(EdgeBehavior::Wrap);
        grid.set(1, 2, true);
        for k in [-3i64, -1, 0, 1, 2, 5] {
            assert!(grid.get(1 + k * 4, 2 + k * 6), "k = {}", k);
        }
        // Writing through a wrapped alias lands on the canonical cell
        grid.set(1 - 4, 2 + 6, false);
        assert!(!grid.get(1, 2));
    }

    #[test]
    fn test_clear_resets_everything() {
        let mut grid = Grid::new(3, 3).unwrap();
        grid.set(0, 0, true);
        grid.set(2, 2, true);
        grid.clear();
        assert!(grid.is_empty());
    }

    #[test]
    fn test_set_pattern_writes_row_segment() {
        let mut grid = Grid::new(3, 6).unwrap();
        grid.set_pattern(1, 1, ".O.O").unwrap();
        assert!(!grid.get(1, 1));
        assert!(grid.get(1, 2));
        assert!(!grid.get(1, 3));
        assert!(grid.get(1, 4));
        assert_eq!(grid.live_count(), 2);
    }

    #[test]
    fn test_set_pattern_respects_bounded_edges() {
        let mut grid = Grid::new(2, 3).unwrap();
        // Overhangs the right edge; the overflow is silently dropped
        grid.set_pattern(0, 1, "OOO").unwrap();
        assert!(grid.get(0, 1));
        assert!(grid.get(0, 2));
        assert_eq!(grid.live_count(), 2);
    }

    #[test]
    fn test_set_pattern_wraps_on_toric_grid() {
        let mut grid = Grid::new(3, 3).unwrap();
        grid.set_edge_behavior(EdgeBehavior::Wrap);
        grid.set_pattern(-3, -3, "OOO").unwrap();
        assert!(grid.get(0, 0));
        assert!(grid.get(0, 1));
        assert!(grid.get(0, 2));
    }

    #[test]
    fn test_set_pattern_rejects_bad_char_without_partial_write() {
        let mut grid = Grid::new(3, 5).unwrap();
        let err = grid.set_pattern(0, 0, "OX.").unwrap_err();
        assert_eq!(err, GridError::InvalidPatternChar { ch: 'X', index: 1 });
        assert!(grid.is_empty());
    }

    #[test]
    fn test_randomize_is_deterministic() {
        let mut a = Grid::new(10, 10).unwrap();
        let mut b = Grid::new(10, 10).unwrap();
        a.randomize(3);
        b.randomize(3);
        assert_eq!(a, b);
        assert!(!a.is_empty());

        let mut c = Grid::new(10, 10).unwrap();
        c.randomize(4);
        assert_ne!(a, c);
    }

    #[test]
    fn test_neighbor_counting_bounded_corner() {
        let mut grid = Grid::new(3, 3).unwrap();
        grid.set(0, 1, true);
        grid.set(1, 0, true);
        grid.set(1, 1, true);
        assert_eq!(grid.count_neighbors(0, 0), 3);
        assert_eq!(grid.count_neighbors(2, 2), 1);
    }

    #[test]
    fn test_neighbor_counting_wraps() {
        let mut grid = Grid::new(3, 3).unwrap();
        grid.set_edge_behavior(EdgeBehavior::Wrap);
        grid.set(2, 2, true);
        // (0, 0) sees (2, 2) diagonally across the seam
        assert_eq!(grid.count_neighbors(0, 0), 1);
    }

    #[test]
    fn test_render_structure() {
        let mut grid = Grid::new(2, 3).unwrap();
        grid.set(0, 0, true);
        grid.set(1, 2, true);
        assert_eq!(grid.render('.'), "O..\n..O\n\n");
        assert_eq!(grid.render(' '), "O  \n  O\n\n");
    }

    #[test]
    fn test_render_default_uses_configured_background() {
        let mut grid = Grid::new(1, 3).unwrap();
        grid.set(0, 1, true);
        grid.set_background(' ');
        assert_eq!(grid.render_default(), " O \n\n");
        assert_eq!(format!("{}", grid), " O \n\n");
    }

    #[test]
    fn test_live_cells_row_major() {
        let mut grid = Grid::new(3, 3).unwrap();
        grid.set(2, 0, true);
        grid.set(0, 1, true);
        assert_eq!(grid.live_cells(), vec![(0, 1), (2, 0)]);
    }
}
