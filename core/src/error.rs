use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Unknown tile name: {0:?}")]
    UnknownTile(String),
    #[error("Tile index {0} is out of range")]
    InvalidTileIndex(u8),
    #[error("Initial pattern length must be at least 1")]
    ZeroPatternLength,
    #[error("Failure animation needs at least one cycle")]
    ZeroFailureCycles,
}

pub type Result<T> = core::result::Result<T, GameError>;
