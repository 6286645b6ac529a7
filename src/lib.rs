//! Term Snake - the classic snake game on a wrap-around grid, in the terminal
//!
//! This library provides:
//! - Core game logic (game module): grid, snake, food and the session state machine
//! - Keyboard input mapping (input module)
//! - TUI rendering (render module)
//! - Round timing shown on screen (metrics module)
//! - The interactive terminal loop (modes module)
//! - A file-backed logger (logging module)

pub mod game;
pub mod input;
pub mod logging;
pub mod metrics;
pub mod modes;
pub mod render;
