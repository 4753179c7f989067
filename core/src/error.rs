use thiserror::Error;

use crate::{CellCount, Coord2};

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Board side must be at least one cell")]
    InvalidSize,
    #[error("Invalid coordinates")]
    InvalidCoords,
    #[error("Too many mines")]
    TooManyMines,
    #[error("Board shape does not match declared size")]
    InvalidBoardShape,
    #[error("Declared {expected} mines but board holds {found}")]
    MineCountMismatch {
        expected: CellCount,
        found: CellCount,
    },
    #[error("Cell at {0:?} is in an impossible state")]
    InconsistentCell(Coord2),
}

pub type Result<T> = core::result::Result<T, GameError>;
