//! Check detection by replaying the opponent's move generation.

use crate::color::Color;
use crate::movegen::destinations;
use crate::position::Position;

/// Return `true` if `defender`'s king can be reached by any opposing piece.
///
/// A board without exactly one king of `defender`'s color is never in check.
///
/// Runs the move generator for opposing pieces until one reaches the king, so
/// a call costs O(pieces × moves per piece). The legality filter calls this
/// once per candidate move, making a selection roughly quadratic in occupancy.
pub fn is_in_check(position: &Position, defender: Color) -> bool {
    let Some(king_sq) = position.king_square(defender) else {
        return false;
    };

    position.side(defender.flip()).any(|sq| {
        position
            .piece_on(sq)
            .is_some_and(|piece| destinations(position, sq, piece).contains(king_sq))
    })
}
