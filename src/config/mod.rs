//! Configuration management for the console Game of Life simulator

pub mod settings;

pub use settings::{
    CliOverrides, DisplayConfig, SeedingConfig, SeedingMode, Settings, SimulationConfig,
};
