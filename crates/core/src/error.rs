//! Error types for the game core.

use thiserror::Error;

/// Errors raised by [`Board`](crate::Board) and [`Cell`](crate::Cell) mutations.
///
/// None of these reach the player: the controller checks occupancy before
/// every move and turns rejected clicks into flash feedback.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoreError {
    #[error("cell ({row}, {col}) is already occupied")]
    CellOccupied { row: usize, col: usize },

    #[error("cell ({row}, {col}) is outside the board")]
    OutOfBounds { row: usize, col: usize },

    #[error("cell ({row}, {col}) already holds a mark")]
    InvalidState { row: usize, col: usize },

    #[error("internal invariant violated: {0}")]
    InvariantViolation(&'static str),
}

pub type Result<T> = std::result::Result<T, CoreError>;
