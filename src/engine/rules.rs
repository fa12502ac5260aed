//! The B3/S23 rule and generation advancement

use super::Grid;

/// Conway's standard rule, applied simultaneously to the whole grid.
pub struct LifeRules;

impl LifeRules {
    /// Whether a cell is alive in the next generation, given its current
    /// state and live-neighbor count.
    pub fn next_state(alive: bool, neighbors: u8) -> bool {
        match (alive, neighbors) {
            (true, 2) | (true, 3) | (false, 3) => true,
            _ => false,
        }
    }

    /// Compute the next generation into a fresh grid of identical dimensions
    /// and edge behavior.
    ///
    /// Every cell is evaluated against the *current* generation only; no
    /// update can observe an already-updated neighbor.
    pub fn step(current: &Grid) -> Grid {
        let mut next = current.clone();
        let cells: Vec<bool> = (0..current.rows() as i64)
            .flat_map(|row| {
                (0..current.cols() as i64).map(move |col| {
                    let neighbors = current.count_neighbors(row, col);
                    Self::next_state(current.get(row, col), neighbors)
                })
            })
            .collect();
        next.adopt_cells(cells);
        next
    }

    /// Advance a grid through `generations` steps.
    pub fn step_generations(mut grid: Grid, generations: usize) -> Grid {
        for _ in 0..generations {
            grid = Self::step(&grid);
        }
        grid
    }
}

impl Grid {
    /// Replace the current generation with the next one.
    pub fn advance(&mut self) {
        let next = LifeRules::step(self);
        self.adopt_cells(next.cells().to_vec());
    }
}
