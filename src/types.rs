use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::EngineError;

pub const BOARD_SIZE: u8 = 8;

/// One of the two players.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Black,
    White,
}

impl Side {
    pub fn opponent(self) -> Side {
        match self {
            Side::Black => Side::White,
            Side::White => Side::Black,
        }
    }

    pub fn cell(self) -> Cell {
        match self {
            Side::Black => Cell::Black,
            Side::White => Cell::White,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Black => f.write_str("black"),
            Side::White => f.write_str("white"),
        }
    }
}

/// Content of a single square.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    Black,
    White,
}

impl Cell {
    /// Wire encoding used in [`GameState::board`]: 0=empty, 1=black, 2=white.
    pub fn code(self) -> u8 {
        match self {
            Cell::Empty => 0,
            Cell::Black => 1,
            Cell::White => 2,
        }
    }
}

/// A board coordinate, always inside the 8x8 grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Position {
    row: u8,
    col: u8,
}

impl Position {
    pub fn new(row: u8, col: u8) -> Result<Self, EngineError> {
        if row >= BOARD_SIZE || col >= BOARD_SIZE {
            return Err(EngineError::OutOfRange { row, col });
        }
        Ok(Self { row, col })
    }

    /// Caller contract: `index < 64`.
    pub(crate) fn from_index(index: usize) -> Self {
        debug_assert!(index < 64, "square index out of range: {index}");
        Self {
            row: (index / BOARD_SIZE as usize) as u8,
            col: (index % BOARD_SIZE as usize) as u8,
        }
    }

    pub fn row(self) -> u8 {
        self.row
    }

    pub fn col(self) -> u8 {
        self.col
    }

    /// Row-major square index in `0..64`.
    pub fn index(self) -> usize {
        self.row as usize * BOARD_SIZE as usize + self.col as usize
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", (b'a' + self.col) as char, self.row + 1)
    }
}

/// Final result after game over. `winner` is `None` on a draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GameResult {
    pub winner: Option<Side>,
    pub black_count: u8,
    pub white_count: u8,
}

impl GameResult {
    pub fn from_counts(black_count: u8, white_count: u8) -> Self {
        let winner = if black_count > white_count {
            Some(Side::Black)
        } else if white_count > black_count {
            Some(Side::White)
        } else {
            None
        };
        Self {
            winner,
            black_count,
            white_count,
        }
    }

    pub fn is_draw(&self) -> bool {
        self.winner.is_none()
    }
}

/// Public game state returned to the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameState {
    /// 64 cells, row-major, encoded by [`Cell::code`].
    pub board: Vec<u8>,
    /// `None` once the game is over.
    pub side_to_move: Option<Side>,
    pub black_count: u8,
    pub white_count: u8,
    pub is_game_over: bool,
    /// Winner after game over; `None` while in progress or on a draw.
    pub winner: Option<Side>,
    /// Per-cell legal-target flags for the side to move.
    pub hints: Vec<bool>,
    pub last_move: Option<Position>,
    /// Indices (0..=63) flipped by the last move.
    pub flipped: Vec<u8>,
    /// Side whose turn was skipped by the last transition, if any.
    pub skipped: Option<Side>,
    pub computer_to_move: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opponent_is_involutive() {
        for side in [Side::Black, Side::White] {
            assert_ne!(side.opponent(), side);
            assert_eq!(side.opponent().opponent(), side);
        }
    }

    #[test]
    fn position_rejects_out_of_range() {
        assert_eq!(
            Position::new(8, 0).unwrap_err(),
            EngineError::OutOfRange { row: 8, col: 0 }
        );
        assert!(Position::new(0, 8).is_err());
        assert!(Position::new(7, 7).is_ok());
    }

    #[test]
    fn position_index_is_row_major() {
        let pos = Position::new(2, 3).unwrap();
        assert_eq!(pos.index(), 19);
        assert_eq!(Position::from_index(19), pos);
        assert_eq!(pos.to_string(), "d3");
    }

    #[test]
    fn result_compares_counts_strictly() {
        assert_eq!(GameResult::from_counts(40, 24).winner, Some(Side::Black));
        assert_eq!(GameResult::from_counts(10, 11).winner, Some(Side::White));
        assert!(GameResult::from_counts(32, 32).is_draw());
    }
}
