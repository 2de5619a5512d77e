//! Sliding piece (bishop, rook, queen) moves by ray casting.

use crate::chess_move::Move;
use crate::color::Color;
use crate::position::Position;
use crate::square::Square;

use super::MoveList;

/// Walk each `(row, col)` direction from `from` until the edge or the first occupied square.
///
/// Empty squares are all reachable; the blocker is reachable only if it
/// belongs to the other side. Moves are pushed ray by ray, nearest first.
pub(super) fn slider_moves(
    position: &Position,
    from: Square,
    us: Color,
    directions: &[(i8, i8)],
    moves: &mut MoveList,
) {
    for &(d_row, d_col) in directions {
        let mut cursor = from.offset(d_row, d_col);
        while let Some(to) = cursor {
            match position.color_on(to) {
                None => moves.push(Move::new(from, to)),
                Some(color) => {
                    if color != us {
                        moves.push(Move::new(from, to));
                    }
                    break;
                }
            }
            cursor = to.offset(d_row, d_col);
        }
    }
}
