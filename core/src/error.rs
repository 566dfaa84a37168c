use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Coordinates out of range")]
    OutOfRange,
    #[error("Board needs at least one row and one column")]
    EmptyBoard,
    #[error("Mine count must leave at least one safe cell and place at least one mine")]
    InvalidMineCount,
    #[error("Board shape does not match declared size")]
    InvalidBoardShape,
    #[error("Saved game does not match its mine layout")]
    InconsistentState,
    #[error("Unknown difficulty")]
    UnknownDifficulty,
}

pub type Result<T> = core::result::Result<T, GameError>;
