//! The board state: which piece, if any, stands on each square.

use std::fmt;

use crate::bitboard::Bitboard;
use crate::chess_move::Move;
use crate::color::Color;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::square::Square;

/// Back-rank piece order from the a-file to the h-file.
const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// Complete piece placement, one slot per square.
///
/// Occupancy is the single source of truth for piece identity: a square
/// holds at most one piece by construction. The number of kings is not
/// enforced.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    squares: [Option<Piece>; Square::COUNT],
}

impl Position {
    /// A board with no pieces on it.
    pub const fn empty() -> Position {
        Position {
            squares: [None; Square::COUNT],
        }
    }

    /// Return the standard starting layout.
    pub fn starting_position() -> Position {
        let mut position = Position::empty();
        for sq in Square::all() {
            let back = BACK_RANK[sq.col() as usize];
            position.squares[sq.index()] = match sq.row() {
                0 => Some(Piece::new(back, Color::Black)),
                1 => Some(Piece::BLACK_PAWN),
                6 => Some(Piece::WHITE_PAWN),
                7 => Some(Piece::new(back, Color::White)),
                _ => None,
            };
        }
        position
    }

    /// Return the piece on the given square, if any.
    #[inline]
    pub fn piece_on(&self, sq: Square) -> Option<Piece> {
        self.squares[sq.index()]
    }

    /// Return the color of the piece on the given square, if any.
    #[inline]
    pub fn color_on(&self, sq: Square) -> Option<Color> {
        self.piece_on(sq).map(Piece::color)
    }

    #[inline]
    pub fn is_empty(&self, sq: Square) -> bool {
        self.squares[sq.index()].is_none()
    }

    /// Return `true` if `sq` holds a piece of the side opposing `us`.
    #[inline]
    pub fn is_enemy(&self, sq: Square, us: Color) -> bool {
        self.color_on(sq).is_some_and(|c| c != us)
    }

    /// Place a piece, replacing whatever stood there.
    #[inline]
    pub fn put(&mut self, sq: Square, piece: Piece) {
        self.squares[sq.index()] = Some(piece);
    }

    /// Remove and return the piece on `sq`.
    #[inline]
    pub fn take(&mut self, sq: Square) -> Option<Piece> {
        self.squares[sq.index()].take()
    }

    /// Squares occupied by `color`, in row-major order.
    pub fn side(&self, color: Color) -> Bitboard {
        Square::all()
            .filter(|&sq| self.color_on(sq) == Some(color))
            .collect()
    }

    /// Return all occupied squares.
    pub fn occupied(&self) -> Bitboard {
        Square::all().filter(|&sq| !self.is_empty(sq)).collect()
    }

    /// Return the king square of `color` when exactly one such king exists.
    ///
    /// Boards with no king, or several, of that color yield `None`.
    pub fn king_square(&self, color: Color) -> Option<Square> {
        let king = Piece::new(PieceKind::King, color);
        let mut kings = Square::all().filter(|&sq| self.piece_on(sq) == Some(king));
        match (kings.next(), kings.next()) {
            (Some(sq), None) => Some(sq),
            _ => None,
        }
    }

    /// Play `mv` in place, returning the captured piece, if any.
    ///
    /// The destination is overwritten with the moving piece and the source
    /// is cleared. An empty source square leaves the board unchanged.
    pub fn apply_move(&mut self, mv: Move) -> Option<Piece> {
        let moving = self.take(mv.from())?;
        let captured = self.take(mv.to());
        self.put(mv.to(), moving);
        captured
    }

    /// Apply a move and return the resulting position. Copy-make: `self` is not modified.
    pub fn make_move(&self, mv: Move) -> Position {
        let mut next = *self;
        next.apply_move(mv);
        next
    }

    /// Return a pretty-printable wrapper for this position.
    pub fn pretty(&self) -> PrettyPosition<'_> {
        PrettyPosition(self)
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::starting_position()
    }
}

impl fmt::Debug for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Position(\"{}\")", self)
    }
}

/// Wrapper for pretty-printing a position as an 8x8 grid, row 0 on top.
pub struct PrettyPosition<'a>(&'a Position);

impl fmt::Display for PrettyPosition<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let position = self.0;
        for row in 0u8..8 {
            write!(f, "{}  ", 8 - row)?;
            for col in 0u8..8 {
                let c = Square::new(row, col)
                    .and_then(|sq| position.piece_on(sq))
                    .map_or('.', Piece::letter);
                if col < 7 {
                    write!(f, "{c} ")?;
                } else {
                    write!(f, "{c}")?;
                }
            }
            writeln!(f)?;
        }
        write!(f, "   a b c d e f g h")
    }
}

#[cfg(test)]
mod tests {
    use super::Position;
    use crate::chess_move::Move;
    use crate::color::Color;
    use crate::piece::Piece;
    use crate::square::Square;

    #[test]
    fn starting_layout() {
        let position = Position::starting_position();
        assert_eq!(position.piece_on(Square::A8), Some(Piece::BLACK_ROOK));
        assert_eq!(position.piece_on(Square::B8), Some(Piece::BLACK_KNIGHT));
        assert_eq!(position.piece_on(Square::D8), Some(Piece::BLACK_QUEEN));
        assert_eq!(position.piece_on(Square::E8), Some(Piece::BLACK_KING));
        assert_eq!(position.piece_on(Square::E7), Some(Piece::BLACK_PAWN));
        assert_eq!(position.piece_on(Square::E2), Some(Piece::WHITE_PAWN));
        assert_eq!(position.piece_on(Square::D1), Some(Piece::WHITE_QUEEN));
        assert_eq!(position.piece_on(Square::E1), Some(Piece::WHITE_KING));
        assert_eq!(position.piece_on(Square::E4), None);
        assert_eq!(position.occupied().count(), 32);
        assert_eq!(position.side(Color::White).count(), 16);
    }

    #[test]
    fn king_square_requires_exactly_one_king() {
        let mut position = Position::starting_position();
        assert_eq!(position.king_square(Color::White), Some(Square::E1));
        assert_eq!(position.king_square(Color::Black), Some(Square::E8));

        position.put(Square::E4, Piece::WHITE_KING);
        assert_eq!(position.king_square(Color::White), None);

        assert_eq!(Position::empty().king_square(Color::Black), None);
    }

    #[test]
    fn apply_move_captures() {
        let mut position = Position::empty();
        position.put(Square::A1, Piece::WHITE_ROOK);
        position.put(Square::A5, Piece::BLACK_KNIGHT);

        let captured = position.apply_move(Move::new(Square::A1, Square::A5));
        assert_eq!(captured, Some(Piece::BLACK_KNIGHT));
        assert_eq!(position.piece_on(Square::A5), Some(Piece::WHITE_ROOK));
        assert!(position.is_empty(Square::A1));
    }

    #[test]
    fn apply_move_from_empty_square_is_noop() {
        let mut position = Position::starting_position();
        let before = position;
        assert_eq!(position.apply_move(Move::new(Square::E4, Square::E5)), None);
        assert_eq!(position, before);
    }

    #[test]
    fn make_move_leaves_original_untouched() {
        let position = Position::starting_position();
        let next = position.make_move(Move::new(Square::E2, Square::E4));
        assert_eq!(position.piece_on(Square::E2), Some(Piece::WHITE_PAWN));
        assert_eq!(next.piece_on(Square::E4), Some(Piece::WHITE_PAWN));
        assert!(next.is_empty(Square::E2));
    }

    #[test]
    fn pretty_print() {
        let output = format!("{}", Position::starting_position().pretty());
        assert!(output.starts_with("8  r n b q k b n r"));
        assert!(output.contains("1  R N B Q K B N R"));
        assert!(output.ends_with("a b c d e f g h"));
    }
}
