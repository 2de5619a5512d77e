//! Pawn moves: forward pushes onto empty squares, then diagonal captures.

use crate::chess_move::Move;
use crate::color::Color;
use crate::position::Position;
use crate::square::Square;

use super::MoveList;

/// Push the moves of a pawn of color `us` on `from`. No en passant, no promotion.
pub(super) fn pawn_moves(position: &Position, from: Square, us: Color, moves: &mut MoveList) {
    let dir = us.forward();

    // --- Pushes ---
    if let Some(one) = from.offset(dir, 0).filter(|&s| position.is_empty(s)) {
        moves.push(Move::new(from, one));

        // Double push needs both squares ahead empty.
        if from.row() == us.pawn_row()
            && let Some(two) = one.offset(dir, 0).filter(|&s| position.is_empty(s))
        {
            moves.push(Move::new(from, two));
        }
    }

    // --- Captures ---
    for d_col in [-1, 1] {
        if let Some(to) = from.offset(dir, d_col)
            && position.is_enemy(to, us)
        {
            moves.push(Move::new(from, to));
        }
    }
}
