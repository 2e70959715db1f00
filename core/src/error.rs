use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid coordinates")]
    InvalidCoords,
    #[error("Board dimensions must be nonzero")]
    InvalidSize,
    #[error("Too many mines")]
    TooManyMines,
    #[error("Mines were already placed on this board")]
    MinesAlreadyPlaced,
    #[error("Unknown difficulty, expected one of: easy, medium, hard")]
    UnknownDifficulty,
}

pub type Result<T> = core::result::Result<T, GameError>;
