use thiserror::Error;

/// Errors raised by the game engine
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GameError {
    /// Every cell of the grid is covered, so food has nowhere to go
    #[error("no free cell left for food on a {width}x{height} grid")]
    GridExhausted { width: u32, height: u32 },

    #[error("invalid game configuration: {0}")]
    InvalidConfig(String),
}
