//! Pseudo-legal move generation for a single piece.
//!
//! Generated moves respect board edges, blockers and captures, but not
//! whether they leave the mover's own king attacked; see
//! [`filter_legal`](crate::filter_legal) for that.

mod king;
mod knights;
mod pawns;
mod sliders;

use crate::bitboard::Bitboard;
use crate::chess_move::Move;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::position::Position;
use crate::square::Square;
use crate::tables::{ALL_DIRECTIONS, DIAGONAL, ORTHOGONAL};

use self::king::king_moves;
use self::knights::knight_moves;
use self::pawns::pawn_moves;
use self::sliders::slider_moves;

/// Most moves a single piece can have: a queen in the centre of an empty board has 27.
const CAPACITY: usize = 32;

/// Stack-allocated buffer for the moves of one piece.
#[derive(Clone, Copy)]
pub struct MoveList {
    moves: [Move; CAPACITY],
    len: u8,
}

impl MoveList {
    /// Create an empty move list.
    pub const fn new() -> MoveList {
        MoveList {
            moves: [Move::NULL; CAPACITY],
            len: 0,
        }
    }

    /// Push a move onto the list.
    #[inline]
    pub fn push(&mut self, mv: Move) {
        debug_assert!((self.len as usize) < CAPACITY);
        self.moves[self.len as usize] = mv;
        self.len += 1;
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len as usize
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    pub fn as_slice(&self) -> &[Move] {
        &self.moves[..self.len as usize]
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Move> {
        self.as_slice().iter()
    }

    /// Return the move landing on `to`, if the list has one.
    pub fn find_dest(&self, to: Square) -> Option<Move> {
        self.iter().copied().find(|mv| mv.to() == to)
    }

    /// Return the set of destination squares.
    pub fn destinations(&self) -> Bitboard {
        self.iter().map(|mv| mv.to()).collect()
    }
}

impl Default for MoveList {
    fn default() -> Self {
        Self::new()
    }
}

impl PartialEq for MoveList {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl Eq for MoveList {}

impl std::fmt::Debug for MoveList {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.as_slice()).finish()
    }
}

impl std::ops::Index<usize> for MoveList {
    type Output = Move;
    #[inline]
    fn index(&self, index: usize) -> &Move {
        &self.as_slice()[index]
    }
}

impl<'a> IntoIterator for &'a MoveList {
    type Item = &'a Move;
    type IntoIter = std::slice::Iter<'a, Move>;
    fn into_iter(self) -> Self::IntoIter {
        self.as_slice().iter()
    }
}

impl FromIterator<Move> for MoveList {
    fn from_iter<I: IntoIterator<Item = Move>>(iter: I) -> MoveList {
        let mut list = MoveList::new();
        for mv in iter {
            list.push(mv);
        }
        list
    }
}

/// Generate the moves of `piece` standing on `from`, in generation order.
///
/// Pawns push before capturing; knights and kings follow their step tables;
/// sliders walk one ray at a time, nearest square first.
fn piece_moves(position: &Position, from: Square, piece: Piece) -> MoveList {
    let us = piece.color();
    let mut moves = MoveList::new();
    match piece.kind() {
        PieceKind::Pawn => pawn_moves(position, from, us, &mut moves),
        PieceKind::Knight => knight_moves(position, from, us, &mut moves),
        PieceKind::Bishop => slider_moves(position, from, us, &DIAGONAL, &mut moves),
        PieceKind::Rook => slider_moves(position, from, us, &ORTHOGONAL, &mut moves),
        PieceKind::Queen => slider_moves(position, from, us, &ALL_DIRECTIONS, &mut moves),
        PieceKind::King => king_moves(position, from, us, &mut moves),
    }
    moves
}

/// Destinations reachable by `piece` standing on `sq`.
///
/// `piece` need not actually be on `sq`; its color decides which
/// occupied squares count as friendly blockers and which as captures.
pub fn destinations(position: &Position, sq: Square, piece: Piece) -> Bitboard {
    piece_moves(position, sq, piece).destinations()
}

/// Generate the pseudo-legal moves of the piece on `sq`.
///
/// An empty square yields an empty list. The order is stable, so the
/// first capture in the list is always the same one for a given board.
pub fn generate_moves(position: &Position, sq: Square) -> MoveList {
    match position.piece_on(sq) {
        Some(piece) => piece_moves(position, sq, piece),
        None => MoveList::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;

    fn lone(piece: Piece, sq: Square) -> Position {
        let mut position = Position::empty();
        position.put(sq, piece);
        position
    }

    #[test]
    fn empty_board_counts_from_center() {
        let cases = [
            (Piece::WHITE_ROOK, 14),
            (Piece::WHITE_BISHOP, 13),
            (Piece::WHITE_KNIGHT, 8),
            (Piece::WHITE_KING, 8),
            (Piece::WHITE_QUEEN, 27),
        ];
        for (piece, expected) in cases {
            let moves = generate_moves(&lone(piece, Square::D4), Square::D4);
            assert_eq!(moves.len(), expected, "{piece:?} on d4");
        }
    }

    #[test]
    fn empty_board_counts_from_corner() {
        assert_eq!(generate_moves(&lone(Piece::BLACK_ROOK, Square::A8), Square::A8).len(), 14);
        assert_eq!(generate_moves(&lone(Piece::BLACK_BISHOP, Square::A8), Square::A8).len(), 7);
        assert_eq!(generate_moves(&lone(Piece::BLACK_KNIGHT, Square::A8), Square::A8).len(), 2);
        assert_eq!(generate_moves(&lone(Piece::BLACK_KING, Square::A8), Square::A8).len(), 3);
        assert_eq!(generate_moves(&lone(Piece::BLACK_QUEEN, Square::A8), Square::A8).len(), 21);
    }

    #[test]
    fn never_source_or_friendly() {
        let position = Position::starting_position();
        for sq in Square::all() {
            let Some(piece) = position.piece_on(sq) else {
                continue;
            };
            for mv in &generate_moves(&position, sq) {
                assert_eq!(mv.from(), sq);
                assert_ne!(mv.to(), sq);
                assert_ne!(position.color_on(mv.to()), Some(piece.color()));
            }
        }
    }

    #[test]
    fn starting_position_twenty_moves_per_side() {
        let position = Position::starting_position();
        for color in Color::ALL {
            let total: usize = position
                .side(color)
                .map(|sq| generate_moves(&position, sq).len())
                .sum();
            assert_eq!(total, 20, "{color:?}");
        }
    }

    #[test]
    fn empty_square_yields_nothing() {
        let moves = generate_moves(&Position::starting_position(), Square::E4);
        assert!(moves.is_empty());
    }

    #[test]
    fn movelist_helpers() {
        let moves = generate_moves(&lone(Piece::WHITE_KNIGHT, Square::G1), Square::G1);
        assert_eq!(moves.len(), 3);
        assert_eq!(moves.find_dest(Square::F3), Some(Move::new(Square::G1, Square::F3)));
        assert_eq!(moves.find_dest(Square::G3), None);
        assert!(moves.destinations().contains(Square::E2));
    }

    #[test]
    fn queen_walks_rook_rays_first() {
        let position: Position = "8/8/8/8/8/8/8/Q7".parse().unwrap();
        let moves = generate_moves(&position, Square::A1);
        assert_eq!(moves[0], Move::new(Square::A1, Square::A2));
        assert_eq!(moves[7], Move::new(Square::A1, Square::B1));
        assert_eq!(moves[14], Move::new(Square::A1, Square::B2));
    }
}
