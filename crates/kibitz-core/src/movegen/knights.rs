//! Knight moves.

use crate::chess_move::Move;
use crate::color::Color;
use crate::position::Position;
use crate::square::Square;
use crate::tables::KNIGHT_DELTAS;

use super::MoveList;

/// Push the knight jumps from `from` onto empty squares and enemy pieces.
pub(super) fn knight_moves(position: &Position, from: Square, us: Color, moves: &mut MoveList) {
    for &(d_row, d_col) in &KNIGHT_DELTAS {
        if let Some(to) = from.offset(d_row, d_col)
            && position.color_on(to) != Some(us)
        {
            moves.push(Move::new(from, to));
        }
    }
}
