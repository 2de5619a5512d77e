//! Core chess rules: board state, move generation, check detection, and legality filtering.

mod attacks;
mod bitboard;
mod chess_move;
mod color;
mod error;
mod legality;
mod movegen;
mod piece;
mod piece_kind;
mod placement;
mod position;
mod square;
mod tables;

pub use attacks::is_in_check;
pub use bitboard::Bitboard;
pub use chess_move::Move;
pub use color::Color;
pub use error::{LegalityParseError, PlacementError};
pub use legality::{
    Legality, filter_legal, filter_legal_if_in_check, filter_legal_strict, has_any_legal_move,
};
pub use movegen::{MoveList, destinations, generate_moves};
pub use piece::Piece;
pub use piece_kind::PieceKind;
pub use placement::STARTING_PLACEMENT;
pub use position::{Position, PrettyPosition};
pub use square::Square;
