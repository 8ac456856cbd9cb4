use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid coordinates")]
    InvalidCoords,
    #[error("Board dimensions must be non-empty and every axis positive")]
    InvalidDimensions,
    #[error("Too many mines, at least one square must stay free")]
    TooManyMines,
    #[error("Game already ended, no new moves are accepted")]
    AlreadyEnded,
    #[error("Game has not ended, mine information is still hidden")]
    NotEnded,
}

pub type Result<T> = core::result::Result<T, GameError>;
