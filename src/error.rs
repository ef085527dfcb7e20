use thiserror::Error;

use crate::types::Side;

/// Errors returned by the engine and the game session.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error("row/col out of range: ({row}, {col})")]
    OutOfRange { row: u8, col: u8 },

    #[error("illegal move for {side}: ({row}, {col})")]
    IllegalMove { row: u8, col: u8, side: Side },

    #[error("game is already over")]
    GameOver,

    #[error("it is not {side}'s turn")]
    NotYourTurn { side: Side },

    #[error("{side} is computer-controlled and to move")]
    ComputerToMove { side: Side },

    #[error("{side} has no legal move")]
    NoLegalMove { side: Side },

    #[error("no side is computer-controlled")]
    NoComputerSide,

    #[error("invalid config: {0}")]
    InvalidConfig(String),
}
