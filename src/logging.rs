//! File logging for the `log` facade.
//!
//! The terminal belongs to the game while it runs, so records go to a file
//! instead of stderr.

use anyhow::{Context, Result};
use log::LevelFilter;
use simplelog::{Config, ConfigBuilder, WriteLogger};
use std::fs::File;
use std::path::Path;

/// RFC 3339 timestamps, with `file:line` on every record
pub fn logger_config() -> Config {
    ConfigBuilder::new()
        .set_time_format_rfc3339()
        .set_location_level(LevelFilter::Error)
        .set_target_level(LevelFilter::Off)
        .build()
}

/// Install the global logger.
///
/// With no path, logging stays disabled.
pub fn init(path: Option<&Path>, level: LevelFilter) -> Result<()> {
    let Some(path) = path else {
        log::set_max_level(LevelFilter::Off);
        return Ok(());
    };

    let file = File::create(path)
        .with_context(|| format!("Failed to create log file {}", path.display()))?;
    WriteLogger::init(level, logger_config(), file).context("Failed to initialize logger")?;
    Ok(())
}
