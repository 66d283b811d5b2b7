use crate::board::Player;

/// Reasons a placement (or a computer turn) is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("position ({row}, {col}) is off the board")]
    OutOfBounds { row: usize, col: usize },

    #[error("cell ({row}, {col}) is already occupied")]
    CellOccupied { row: usize, col: usize },

    #[error("the game is already over")]
    GameAlreadyOver,

    #[error("it is {expected:?}'s turn, not {attempted:?}'s")]
    NotPlayersTurn { expected: Player, attempted: Player },
}
