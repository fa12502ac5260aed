//! Main CLI application for the console Game of Life simulator

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use game_of_life_console::{
    config::{CliOverrides, Settings},
    engine::{EdgeBehavior, Grid},
    grid_from_settings,
    utils::{ColorOutput, GridFormatter},
    Runner,
};
use std::path::PathBuf;
use std::time::Duration;

#[derive(Parser)]
#[command(name = "game_of_life_console")]
#[command(about = "Conway's Game of Life console simulator")]
#[command(version = "0.1.0")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a simulation described by a configuration file
    Run {
        /// Configuration file path
        #[arg(short, long, default_value = "config/default.yaml")]
        config: PathBuf,

        /// Grid rows (overrides config)
        #[arg(long)]
        rows: Option<usize>,

        /// Grid columns (overrides config)
        #[arg(long)]
        cols: Option<usize>,

        /// Number of generations to play (overrides config)
        #[arg(short, long)]
        generations: Option<usize>,

        /// Inter-frame delay in milliseconds (overrides config)
        #[arg(short, long)]
        delay_ms: Option<u64>,

        /// Use a toric playfield with wraparound edges
        #[arg(short, long)]
        wrap: bool,

        /// Randomize the grid from this seed (overrides config seeding)
        #[arg(short, long)]
        seed: Option<u32>,

        /// Glyph for dead cells (overrides config)
        #[arg(short, long)]
        background: Option<char>,

        /// Print the effective configuration and an annotated first frame
        #[arg(short, long)]
        verbose: bool,
    },

    /// Play the built-in demonstration grids
    Demo {
        /// Cap the number of generations per scenario
        #[arg(short, long)]
        generations: Option<usize>,

        /// Inter-frame delay in milliseconds
        #[arg(short, long, default_value_t = 250)]
        delay_ms: u64,
    },

    /// Create an example configuration file
    Setup {
        /// Directory to create files in
        #[arg(short, long, default_value = ".")]
        directory: PathBuf,

        /// Force overwrite existing files
        #[arg(short, long)]
        force: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Run {
            config,
            rows,
            cols,
            generations,
            delay_ms,
            wrap,
            seed,
            background,
            verbose,
        } => {
            let overrides = CliOverrides {
                rows,
                cols,
                generations,
                delay_ms,
                wrap,
                seed,
                background,
            };
            run_command(config, overrides, verbose)
        }
        Commands::Demo {
            generations,
            delay_ms,
        } => demo_command(generations, delay_ms),
        Commands::Setup { directory, force } => setup_command(directory, force),
    }
}

fn run_command(config_path: PathBuf, overrides: CliOverrides, verbose: bool) -> Result<()> {
    // Load configuration
    let mut settings = if config_path.exists() {
        Settings::from_file(&config_path)
            .with_context(|| format!("Failed to load config from {}", config_path.display()))?
    } else {
        println!(
            "{}",
            ColorOutput::warning(&format!(
                "Config file {} not found, using defaults",
                config_path.display()
            ))
        );
        Settings::default()
    };

    // Apply CLI overrides
    settings.merge_with_cli(&overrides);

    settings.validate().context("Configuration validation failed")?;

    if verbose {
        println!("Configuration:");
        println!(
            "  Grid: {}x{} ({:?} edges)",
            settings.simulation.rows, settings.simulation.cols, settings.simulation.edge_behavior
        );
        println!("  Generations: {}", settings.simulation.generations);
        println!("  Frame delay: {}ms", settings.simulation.frame_delay_ms);
        println!();
    }

    let mut grid = grid_from_settings(&settings)?;

    if verbose {
        println!("Seeded grid ({} live cells):", grid.live_count());
        println!("{}", GridFormatter::with_coords(&grid));
    }

    let runner = Runner::new(settings.simulation.generations, settings.frame_delay());
    runner
        .run(&mut grid, &mut std::io::stdout())
        .context("Simulation failed")?;

    println!(
        "{}",
        ColorOutput::success(&format!(
            "Finished after {} generations, {} cells alive",
            settings.simulation.generations,
            grid.live_count()
        ))
    );

    Ok(())
}

fn demo_command(generation_cap: Option<usize>, delay_ms: u64) -> Result<()> {
    let delay = Duration::from_millis(delay_ms);
    let cap = |generations: usize| generation_cap.map_or(generations, |c| c.min(generations));
    let mut stdout = std::io::stdout();

    println!(
        "{}",
        ColorOutput::info("Demo 1: 10x10 bounded grid, symmetric pattern block")
    );
    let mut pattern_grid = Grid::new(10, 10)?;
    pattern_grid.set_pattern(2, 2, ".O..O.")?;
    pattern_grid.set_pattern(3, 2, "O.OO.O")?;
    pattern_grid.set_pattern(4, 2, ".O..O.")?;
    pattern_grid.set_pattern(5, 2, ".O..O.")?;
    pattern_grid.set_pattern(6, 2, "O.OO.O")?;
    pattern_grid.set_pattern(7, 2, ".O..O.")?;
    Runner::new(cap(5), delay).run(&mut pattern_grid, &mut stdout)?;

    println!(
        "{}",
        ColorOutput::info("Demo 2: 5x5 toric playfield, glider seeded at negative offsets")
    );
    let mut toric_grid = Grid::new(5, 5)?;
    toric_grid.set_edge_behavior(EdgeBehavior::Wrap);
    toric_grid.set_pattern(-3, -3, ".O.")?;
    toric_grid.set_pattern(-2, -3, "..O")?;
    toric_grid.set_pattern(-1, -3, "OOO")?;
    Runner::new(cap(20), delay).run(&mut toric_grid, &mut stdout)?;

    println!("{}", ColorOutput::info("Demo 3: 30x30 grid randomized with seed 3"));
    let mut random_grid = Grid::new(30, 30)?;
    random_grid.randomize(3);
    Runner::new(cap(150), delay).run(&mut random_grid, &mut stdout)?;

    println!(
        "{}",
        ColorOutput::info("Demo 4: 31x31 grid with blank background")
    );
    let mut banner_grid = Grid::new(31, 31)?;
    banner_grid.set_background(' ');
    banner_grid.set_pattern(5, 0, "OOOOOOOOOOOOO.....OOOOOOOOOOOOO")?;
    banner_grid.set_pattern(16, 0, "OOOOOOOOOOOOOOOOOOOOOOOOOOOOOOO")?;
    Runner::new(cap(300), delay).run(&mut banner_grid, &mut stdout)?;

    println!("{}", ColorOutput::success("All demos finished"));
    Ok(())
}

fn setup_command(directory: PathBuf, force: bool) -> Result<()> {
    println!("{}", ColorOutput::info("Setting up project structure..."));

    let config_dir = directory.join("config");
    std::fs::create_dir_all(&config_dir)
        .with_context(|| format!("Failed to create directory {}", config_dir.display()))?;

    let config_path = config_dir.join("default.yaml");
    if !config_path.exists() || force {
        let default_settings = Settings::default();
        default_settings
            .to_file(&config_path)
            .context("Failed to create default configuration")?;
        println!("Created: {}", config_path.display());
    } else {
        println!("Skipped: {} (already exists)", config_path.display());
    }

    println!("\n{}", ColorOutput::success("Setup complete!"));
    println!("\nNext steps:");
    println!("1. Edit {}", config_path.display());
    println!("2. Run: cargo run -- run --config config/default.yaml");
    println!("3. Or try the showcase: cargo run -- demo");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_cli_parsing() {
        let cli = Cli::try_parse_from([
            "game_of_life_console",
            "run",
            "--config",
            "test.yaml",
            "--generations",
            "5",
            "--wrap",
        ]);

        assert!(cli.is_ok());
    }

    #[test]
    fn test_demo_cli_parsing() {
        let cli = Cli::try_parse_from(["game_of_life_console", "demo", "--generations", "2"]);
        assert!(cli.is_ok());
    }

    #[test]
    fn test_setup_command() {
        let temp_dir = tempdir().unwrap();
        let result = setup_command(temp_dir.path().to_path_buf(), false);

        assert!(result.is_ok());
        assert!(temp_dir.path().join("config/default.yaml").exists());
    }

    #[test]
    fn test_demo_command_with_zero_delay() {
        // Capped to a single generation so the test stays fast
        let result = demo_command(Some(1), 0);
        assert!(result.is_ok());
    }
}
