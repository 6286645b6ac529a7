//! Core game logic module for Snake
//!
//! This module contains all the game logic without any I/O or rendering dependencies.
//! The terminal front-end drives it through [`GameSession`], but it can be driven
//! just as well from tests with a seeded RNG.

pub mod action;
pub mod config;
pub mod error;
pub mod food;
pub mod grid;
pub mod session;
pub mod snake;

// Re-export commonly used types
pub use action::{Direction, Intent};
pub use config::GameConfig;
pub use error::GameError;
pub use food::Food;
pub use grid::{Cell, GridGeometry};
pub use session::{Flow, GameSession, Phase, Snapshot, TickOutcome};
pub use snake::{AdvanceResult, Snake};
