//! King moves. No castling.

use crate::chess_move::Move;
use crate::color::Color;
use crate::position::Position;
use crate::square::Square;
use crate::tables::KING_DELTAS;

use super::MoveList;

/// Push the king steps from `from` onto adjacent empty squares and enemy pieces.
///
/// Whether a destination is attacked is not considered here.
pub(super) fn king_moves(position: &Position, from: Square, us: Color, moves: &mut MoveList) {
    for &(d_row, d_col) in &KING_DELTAS {
        if let Some(to) = from.offset(d_row, d_col)
            && position.color_on(to) != Some(us)
        {
            moves.push(Move::new(from, to));
        }
    }
}
