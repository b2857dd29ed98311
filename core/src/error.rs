use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid coordinates")]
    InvalidCoords,
    #[error("Too many mines, at least one cell must stay safe")]
    TooManyMines,
    #[error("Board must be at least 1x1")]
    EmptyBoard,
    #[error("Board shape must be square")]
    InvalidBoardShape,
}

pub type Result<T> = core::result::Result<T, GameError>;
