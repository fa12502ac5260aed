//! Configuration settings for the console Game of Life simulator

use crate::engine::{EdgeBehavior, ALIVE_GLYPH, DEFAULT_BACKGROUND};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    pub simulation: SimulationConfig,
    pub display: DisplayConfig,
    pub seeding: SeedingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationConfig {
    pub rows: usize,
    pub cols: usize,
    pub generations: usize,
    pub frame_delay_ms: u64,
    pub edge_behavior: EdgeBehavior,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayConfig {
    pub background: char,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedingConfig {
    pub mode: SeedingMode,
    pub seed: u32,
    pub origin_row: i64,
    pub origin_col: i64,
    pub rows: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SeedingMode {
    /// Fill the whole grid from the deterministic generator.
    Random,
    /// Stamp the pattern rows starting at the configured origin.
    Pattern,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            simulation: SimulationConfig {
                rows: 30,
                cols: 30,
                generations: 50,
                frame_delay_ms: 250,
                edge_behavior: EdgeBehavior::Bounded,
            },
            display: DisplayConfig {
                background: DEFAULT_BACKGROUND,
            },
            seeding: SeedingConfig {
                mode: SeedingMode::Random,
                seed: 3,
                origin_row: 0,
                origin_col: 0,
                rows: Vec::new(),
            },
        }
    }
}

impl Settings {
    /// Load settings from a YAML file
    pub fn from_file(path: &PathBuf) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let settings: Settings = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        settings.validate()?;
        Ok(settings)
    }

    /// Save settings to a YAML file
    pub fn to_file(&self, path: &PathBuf) -> Result<()> {
        let content = serde_yaml::to_string(self).context("Failed to serialize settings")?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Validate the settings
    pub fn validate(&self) -> Result<()> {
        if self.simulation.rows == 0 || self.simulation.cols == 0 {
            anyhow::bail!(
                "Grid dimensions must be positive, got {}x{}",
                self.simulation.rows,
                self.simulation.cols
            );
        }

        if self.simulation.generations == 0 {
            anyhow::bail!("Number of generations must be positive");
        }

        if self.display.background == ALIVE_GLYPH {
            anyhow::bail!("Background glyph 'O' would be indistinguishable from live cells");
        }

        if self.seeding.mode == SeedingMode::Pattern {
            if self.seeding.rows.is_empty() {
                anyhow::bail!("Pattern seeding requires at least one pattern row");
            }
            for (i, row) in self.seeding.rows.iter().enumerate() {
                if let Some(ch) = row.chars().find(|&c| c != ALIVE_GLYPH && c != '.') {
                    anyhow::bail!(
                        "Pattern row {} contains invalid character '{}', expected 'O' or '.'",
                        i,
                        ch
                    );
                }
            }
        }

        Ok(())
    }

    /// Inter-frame delay as a [`Duration`]
    pub fn frame_delay(&self) -> Duration {
        Duration::from_millis(self.simulation.frame_delay_ms)
    }

    /// Merge settings with command line overrides
    pub fn merge_with_cli(&mut self, cli_overrides: &CliOverrides) {
        if let Some(rows) = cli_overrides.rows {
            self.simulation.rows = rows;
        }
        if let Some(cols) = cli_overrides.cols {
            self.simulation.cols = cols;
        }
        if let Some(generations) = cli_overrides.generations {
            self.simulation.generations = generations;
        }
        if let Some(delay_ms) = cli_overrides.delay_ms {
            self.simulation.frame_delay_ms = delay_ms;
        }
        if cli_overrides.wrap {
            self.simulation.edge_behavior = EdgeBehavior::Wrap;
        }
        if let Some(seed) = cli_overrides.seed {
            self.seeding.mode = SeedingMode::Random;
            self.seeding.seed = seed;
        }
        if let Some(background) = cli_overrides.background {
            self.display.background = background;
        }
    }
}

/// Command line overrides for settings
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub rows: Option<usize>,
    pub cols: Option<usize>,
    pub generations: Option<usize>,
    pub delay_ms: Option<u64>,
    pub wrap: bool,
    pub seed: Option<u32>,
    pub background: Option<char>,
}
