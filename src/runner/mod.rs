//! Frame loop driving a grid through successive generations

use crate::engine::Grid;
use anyhow::{Context, Result};
use std::io::Write;
use std::thread;
use std::time::Duration;

/// Drives a grid: render the current frame, advance, wait, repeat.
///
/// The engine itself has no I/O or timing dependency; everything
/// observable about a run goes through the writer handed to [`Runner::run`].
#[derive(Debug, Clone)]
pub struct Runner {
    generations: usize,
    frame_delay: Duration,
}

impl Runner {
    pub fn new(generations: usize, frame_delay: Duration) -> Self {
        Self {
            generations,
            frame_delay,
        }
    }

    /// Play `generations` steps, writing each frame to `out`.
    ///
    /// The seeded state is rendered before the first advance, so a run emits
    /// `generations + 1` frames with one delay per generation. A zero delay
    /// skips sleeping entirely, which keeps tests instant.
    pub fn run(&self, grid: &mut Grid, out: &mut impl Write) -> Result<()> {
        out.write_all(grid.render_default().as_bytes())
            .context("Failed to write initial frame")?;

        for generation in 1..=self.generations {
            grid.advance();
            if !self.frame_delay.is_zero() {
                thread::sleep(self.frame_delay);
            }
            out.write_all(grid.render_default().as_bytes())
                .with_context(|| format!("Failed to write frame for generation {}", generation))?;
        }
        out.flush().context("Failed to flush output")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn blinker_grid() -> Grid {
        let mut grid = Grid::new(5, 5).unwrap();
        grid.set_pattern(2, 1, "OOO").unwrap();
        grid
    }

    #[test]
    fn test_run_emits_one_frame_per_generation_plus_seed() {
        let mut grid = blinker_grid();
        let runner = Runner::new(3, Duration::ZERO);
        let mut out = Vec::new();
        runner.run(&mut grid, &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        // Frames are separated by the trailing blank line each render emits
        let frames: Vec<&str> = text.split("\n\n").filter(|f| !f.is_empty()).collect();
        assert_eq!(frames.len(), 4);
    }

    #[test]
    fn test_first_frame_is_the_seeded_state() {
        let mut grid = blinker_grid();
        let seeded = grid.render_default();
        let runner = Runner::new(1, Duration::ZERO);
        let mut out = Vec::new();
        runner.run(&mut grid, &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with(&seeded));
    }

    #[test]
    fn test_zero_generations_still_renders_once() {
        let mut grid = blinker_grid();
        let runner = Runner::new(0, Duration::ZERO);
        let mut out = Vec::new();
        runner.run(&mut grid, &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), blinker_grid().render_default());
    }

    #[test]
    fn test_run_advances_the_grid_in_place() {
        let mut grid = blinker_grid();
        let runner = Runner::new(2, Duration::ZERO);
        let mut out = Vec::new();
        runner.run(&mut grid, &mut out).unwrap();
        // Blinker has period 2, so after two generations it is back
        assert_eq!(grid, blinker_grid());
    }
}
