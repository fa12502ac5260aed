//! Console Game of Life simulator
//!
//! This library provides a Conway's Game of Life engine with bounded or
//! toric (wraparound) playfields, deterministic random seeding, and a frame
//! loop that renders successive generations as text.

pub mod config;
pub mod engine;
pub mod runner;
pub mod utils;

pub use config::Settings;
pub use engine::{EdgeBehavior, Grid, GridError, Lcg, LifeRules};
pub use runner::Runner;

use anyhow::{Context, Result};
use config::SeedingMode;
use std::io::Write;

/// Build a grid from settings: dimensions, edge behavior, background glyph,
/// and the configured seeding (random fill or pattern stamp).
pub fn grid_from_settings(settings: &Settings) -> Result<Grid> {
    let mut grid = Grid::new(settings.simulation.rows, settings.simulation.cols)
        .context("Failed to construct grid")?;
    grid.set_edge_behavior(settings.simulation.edge_behavior);
    grid.set_background(settings.display.background);

    match settings.seeding.mode {
        SeedingMode::Random => grid.randomize(settings.seeding.seed),
        SeedingMode::Pattern => {
            for (i, pattern) in settings.seeding.rows.iter().enumerate() {
                grid.set_pattern(
                    settings.seeding.origin_row + i as i64,
                    settings.seeding.origin_col,
                    pattern,
                )
                .with_context(|| format!("Failed to stamp pattern row {}", i))?;
            }
        }
    }

    Ok(grid)
}

/// Main entry point: seed a grid per the settings and play it to `out`.
pub fn run_simulation(settings: &Settings, out: &mut impl Write) -> Result<()> {
    let mut grid = grid_from_settings(settings)?;
    let runner = Runner::new(settings.simulation.generations, settings.frame_delay());
    runner.run(&mut grid, out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_from_settings_pattern_seeding() {
        let mut settings = Settings::default();
        settings.simulation.rows = 5;
        settings.simulation.cols = 5;
        settings.simulation.edge_behavior = EdgeBehavior::Wrap;
        settings.seeding.mode = SeedingMode::Pattern;
        settings.seeding.origin_row = -3;
        settings.seeding.origin_col = -3;
        settings.seeding.rows = vec![".O.".into(), "..O".into(), "OOO".into()];

        let grid = grid_from_settings(&settings).unwrap();
        assert_eq!(grid.edge_behavior(), EdgeBehavior::Wrap);
        assert_eq!(grid.live_count(), 5);
    }

    #[test]
    fn test_grid_from_settings_random_seeding_is_reproducible() {
        let mut settings = Settings::default();
        settings.simulation.rows = 8;
        settings.simulation.cols = 8;
        settings.seeding.seed = 17;

        let a = grid_from_settings(&settings).unwrap();
        let b = grid_from_settings(&settings).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_run_simulation_writes_frames() {
        let mut settings = Settings::default();
        settings.simulation.rows = 4;
        settings.simulation.cols = 4;
        settings.simulation.generations = 2;
        settings.simulation.frame_delay_ms = 0;

        let mut out = Vec::new();
        run_simulation(&settings, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.matches("\n\n").count(), 3);
    }
}
