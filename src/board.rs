use crate::error::EngineError;
use crate::types::{Cell, Position, Side};

const BOARD_SIZE: usize = 8;
const NUM_SQUARES: usize = BOARD_SIZE * BOARD_SIZE;
const DIRECTIONS: [(i32, i32); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Othello board state represented by two bitboards.
///
/// Bit `row * 8 + col` is set in `black` (or `white`) when that square holds a
/// disc of that color. The type is `Copy`: every transition yields a fresh
/// value and never touches a board another caller still holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    black: u64,
    white: u64,
}

impl Board {
    /// Creates the initial board:
    /// d4=white, e4=black, d5=black, e5=white.
    pub fn new() -> Self {
        Self {
            black: bit(28) | bit(35),
            white: bit(27) | bit(36),
        }
    }

    /// Builds a board from raw bitboards. Squares set in both masks are
    /// treated as black.
    pub fn from_bitboards(black: u64, white: u64) -> Self {
        Self {
            black,
            white: white & !black,
        }
    }

    /// Builds a board from a row-major grid of cells.
    pub fn from_cells(cells: [[Cell; BOARD_SIZE]; BOARD_SIZE]) -> Self {
        let mut board = Self::from_bitboards(0, 0);
        for (row, line) in cells.iter().enumerate() {
            for (col, cell) in line.iter().enumerate() {
                let square = bit(row * BOARD_SIZE + col);
                match cell {
                    Cell::Black => board.black |= square,
                    Cell::White => board.white |= square,
                    Cell::Empty => {}
                }
            }
        }
        board
    }

    pub fn cell(&self, pos: Position) -> Cell {
        let square = bit(pos.index());
        if (self.black & square) != 0 {
            Cell::Black
        } else if (self.white & square) != 0 {
            Cell::White
        } else {
            Cell::Empty
        }
    }

    /// Bitboard of the discs owned by `side`.
    pub fn discs(&self, side: Side) -> u64 {
        match side {
            Side::Black => self.black,
            Side::White => self.white,
        }
    }

    /// Returns true when placing `side` at `pos` captures at least one disc.
    /// Stops at the first direction that captures.
    pub fn is_legal_move(&self, side: Side, pos: Position) -> bool {
        let (me, opp) = self.split(side);
        let index = pos.index();
        if ((me | opp) & bit(index)) != 0 {
            return false;
        }

        DIRECTIONS
            .iter()
            .any(|&(dr, dc)| capture_line(index, dr, dc, me, opp) != 0)
    }

    /// Returns legal move mask for the given side.
    pub fn legal_moves(&self, side: Side) -> u64 {
        let mut legal = 0u64;
        for index in 0..NUM_SQUARES {
            if self.is_legal_move(side, Position::from_index(index)) {
                legal |= bit(index);
            }
        }
        legal
    }

    pub fn has_any_legal_move(&self, side: Side) -> bool {
        (0..NUM_SQUARES).any(|index| self.is_legal_move(side, Position::from_index(index)))
    }

    /// Mask of the discs that placing `side` at `pos` would flip.
    /// Zero when the move is illegal.
    pub fn flips(&self, side: Side, pos: Position) -> u64 {
        let (me, opp) = self.split(side);
        let index = pos.index();
        if ((me | opp) & bit(index)) != 0 {
            return 0;
        }

        DIRECTIONS
            .iter()
            .fold(0u64, |acc, &(dr, dc)| acc | capture_line(index, dr, dc, me, opp))
    }

    /// Places one disc for `side` and flips every captured run.
    /// Returns the successor board; `self` is left untouched.
    pub fn apply_move(&self, side: Side, pos: Position) -> Result<Board, EngineError> {
        let flips = self.flips(side, pos);
        if flips == 0 {
            return Err(EngineError::IllegalMove {
                row: pos.row(),
                col: pos.col(),
                side,
            });
        }

        Ok(self.place(side, pos, flips))
    }

    /// Builds the successor of a move whose flip mask is already known.
    /// Caller contract: `flips == self.flips(side, pos)` and is non-zero.
    pub(crate) fn place(&self, side: Side, pos: Position, flips: u64) -> Board {
        debug_assert_ne!(flips, 0, "place() requires a capturing move");
        let (me, opp) = self.split(side);
        let next_me = me | bit(pos.index()) | flips;
        let next_opp = opp & !flips;

        match side {
            Side::Black => Self {
                black: next_me,
                white: next_opp,
            },
            Side::White => Self {
                black: next_opp,
                white: next_me,
            },
        }
    }

    /// Returns `(black_count, white_count)`.
    pub fn count(&self) -> (u8, u8) {
        (self.black.count_ones() as u8, self.white.count_ones() as u8)
    }

    /// Returns the number of empty squares.
    pub fn empty_count(&self) -> u8 {
        let (black_count, white_count) = self.count();
        NUM_SQUARES as u8 - black_count - white_count
    }

    /// Converts board to `[u8; 64]` where 0=empty, 1=black, 2=white.
    pub fn to_array(&self) -> [u8; NUM_SQUARES] {
        let mut board = [0u8; NUM_SQUARES];
        for (index, cell) in board.iter_mut().enumerate() {
            *cell = self.cell(Position::from_index(index)).code();
        }
        board
    }

    fn split(&self, side: Side) -> (u64, u64) {
        (self.discs(side), self.discs(side.opponent()))
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Walks from `index` in direction `(dr, dc)` and returns the run of
/// opponent discs bracketed by one of `me`, or 0 when the run is empty or
/// ends on an empty square or the edge.
fn capture_line(index: usize, dr: i32, dc: i32, me: u64, opp: u64) -> u64 {
    let (row, col) = pos_to_row_col(index);
    let mut r = row + dr;
    let mut c = col + dc;
    let mut line = 0u64;

    while in_bounds(r, c) {
        let square = bit((r as usize) * BOARD_SIZE + c as usize);
        if (opp & square) != 0 {
            line |= square;
        } else if (me & square) != 0 {
            return line;
        } else {
            return 0;
        }

        r += dr;
        c += dc;
    }

    0
}

/// Expands a square mask into positions, lowest index (row-major) first.
pub(crate) fn mask_positions(mut mask: u64) -> impl Iterator<Item = Position> {
    std::iter::from_fn(move || {
        if mask == 0 {
            return None;
        }
        let index = mask.trailing_zeros() as usize;
        mask &= mask - 1;
        Some(Position::from_index(index))
    })
}

fn bit(pos: usize) -> u64 {
    if pos < NUM_SQUARES { 1u64 << pos } else { 0 }
}

fn pos_to_row_col(pos: usize) -> (i32, i32) {
    ((pos / BOARD_SIZE) as i32, (pos % BOARD_SIZE) as i32)
}

fn in_bounds(row: i32, col: i32) -> bool {
    (0..BOARD_SIZE as i32).contains(&row) && (0..BOARD_SIZE as i32).contains(&col)
}

/// Parses an 8-line diagram (`B`, `W`, `.`) into a board.
#[cfg(test)]
pub(crate) fn board_from_diagram(rows: [&str; BOARD_SIZE]) -> Board {
    let mut cells = [[Cell::Empty; BOARD_SIZE]; BOARD_SIZE];
    for (row, line) in rows.iter().enumerate() {
        assert_eq!(line.len(), BOARD_SIZE, "row {row} must have 8 cells");
        for (col, ch) in line.chars().enumerate() {
            cells[row][col] = match ch {
                'B' => Cell::Black,
                'W' => Cell::White,
                '.' => Cell::Empty,
                other => panic!("unexpected cell {other:?}"),
            };
        }
    }
    Board::from_cells(cells)
}
