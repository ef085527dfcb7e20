use crate::ai::material;
use crate::board::{Board, mask_positions};
use crate::game::MoveSelector;
use crate::types::{Position, Side};

/// One-ply greedy selector: maximizes the material differential of the
/// successor board. Stateless and deterministic.
#[derive(Debug, Default, Clone, Copy)]
pub struct GreedySelector;

impl MoveSelector for GreedySelector {
    fn select_move(&self, board: &Board, side: Side) -> Option<Position> {
        select_move(board, side)
    }
}

/// Picks the legal move whose successor has the highest disc differential for
/// `side`. Ties go to the earliest square in row-major order.
/// Returns `None` when `side` has no legal move.
pub fn select_move(board: &Board, side: Side) -> Option<Position> {
    let mut best: Option<(Position, i32)> = None;

    for pos in mask_positions(board.legal_moves(side)) {
        let next = board.place(side, pos, board.flips(side, pos));
        let score = material::evaluate(&next, side);
        if best.is_none_or(|(_, best_score)| score > best_score) {
            best = Some((pos, score));
        }
    }

    best.map(|(pos, _)| pos)
}
