use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

use super::error::GameError;
use super::grid::GridGeometry;

/// Configuration for the game
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Width of the game grid
    pub grid_width: u32,
    /// Height of the game grid
    pub grid_height: u32,
    /// Simulation steps per second
    pub tick_rate_hz: u32,
    /// Points awarded per food eaten
    pub food_score: u32,
    /// Seed for the session RNG; `None` draws one from the OS
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid_width: 40,
            grid_height: 30,
            tick_rate_hz: 10,
            food_score: 10,
            seed: None,
        }
    }
}

impl GameConfig {
    /// Create a new configuration with custom grid size
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            grid_width: width,
            grid_height: height,
            ..Default::default()
        }
    }

    /// Create a small grid for testing
    pub fn small() -> Self {
        Self::new(10, 10)
    }

    /// Parse a YAML document. Missing keys keep their defaults.
    pub fn from_yaml(content: &str) -> Result<Self> {
        serde_yaml_ng::from_str(content).context("Failed to parse game config")
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::from_yaml(&content)
    }

    pub fn validate(&self) -> Result<(), GameError> {
        if self.tick_rate_hz == 0 {
            return Err(GameError::InvalidConfig(
                "tick rate must be positive".to_string(),
            ));
        }
        self.grid().map(|_| ())
    }

    pub fn grid(&self) -> Result<GridGeometry, GameError> {
        GridGeometry::new(self.grid_width, self.grid_height)
    }

    /// Time between two simulation steps
    pub fn tick_interval(&self) -> Duration {
        Duration::from_secs(1) / self.tick_rate_hz.max(1)
    }
}
