use anyhow::Result;
use clap::Parser;
use log::LevelFilter;
use std::path::PathBuf;
use term_snake::game::GameConfig;
use term_snake::logging;
use term_snake::modes::HumanMode;

#[derive(Parser)]
#[command(name = "term_snake")]
#[command(version, about = "Snake on a wrap-around grid, in your terminal")]
struct Cli {
    /// YAML file with game settings; flags below override it
    #[arg(long)]
    config: Option<PathBuf>,

    /// Grid width
    #[arg(long)]
    width: Option<u32>,

    /// Grid height
    #[arg(long)]
    height: Option<u32>,

    /// Simulation steps per second
    #[arg(long)]
    tick_rate: Option<u32>,

    /// Seed for food placement and starting direction
    #[arg(long)]
    seed: Option<u64>,

    /// Write log records to this file (logging is off without it)
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Minimum level written to the log file
    #[arg(long, default_value = "info")]
    log_level: LevelFilter,
}

impl Cli {
    fn game_config(&self) -> Result<GameConfig> {
        let mut config = match &self.config {
            Some(path) => GameConfig::load(path)?,
            None => GameConfig::default(),
        };

        if let Some(width) = self.width {
            config.grid_width = width;
        }
        if let Some(height) = self.height {
            config.grid_height = height;
        }
        if let Some(tick_rate) = self.tick_rate {
            config.tick_rate_hz = tick_rate;
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }

        config.validate()?;
        Ok(config)
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.log_file.as_deref(), cli.log_level)?;

    let config = cli.game_config()?;
    log::info!("starting with {config:?}");

    let mut human_mode = HumanMode::new(&config)?;
    human_mode.run().await?;

    Ok(())
}
