use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Cell index out of range")]
    InvalidIndex,
    #[error("Card cannot make that transition")]
    InvalidTransition,
    #[error("Grid needs an even number of cells to hold pairs")]
    OddCellCount,
}

pub type Result<T> = core::result::Result<T, GameError>;
