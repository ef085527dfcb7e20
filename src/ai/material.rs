use crate::board::Board;
use crate::types::Side;

/// Signed disc differential from `side`'s perspective.
pub fn evaluate(board: &Board, side: Side) -> i32 {
    let (black, white) = board.count();
    let (black, white) = (black as i32, white as i32);
    match side {
        Side::Black => black - white,
        Side::White => white - black,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_board_is_balanced() {
        let board = Board::new();

        assert_eq!(evaluate(&board, Side::Black), 0);
        assert_eq!(evaluate(&board, Side::White), 0);
    }

    #[test]
    fn score_is_mirrored_between_sides() {
        let board = Board::from_bitboards(0b111, 0b1000);

        assert_eq!(evaluate(&board, Side::Black), 2);
        assert_eq!(evaluate(&board, Side::White), -2);
    }
}
