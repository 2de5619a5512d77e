//! Check resolution: narrowing pseudo-legal moves to those that keep the king safe.

use std::fmt;
use std::str::FromStr;

use tracing::trace;

use crate::attacks::is_in_check;
use crate::color::Color;
use crate::error::LegalityParseError;
use crate::movegen::{MoveList, generate_moves};
use crate::position::Position;

/// Which moves are screened for leaving the mover's own king attacked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Legality {
    /// Screen only while the mover is already in check. A move that newly
    /// exposes the king is allowed when not in check.
    #[default]
    InCheckOnly,
    /// Always reject moves that leave the mover's king attacked.
    Strict,
}

impl fmt::Display for Legality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Legality::InCheckOnly => write!(f, "in-check"),
            Legality::Strict => write!(f, "strict"),
        }
    }
}

impl FromStr for Legality {
    type Err = LegalityParseError;

    fn from_str(s: &str) -> Result<Legality, LegalityParseError> {
        match s {
            "in-check" => Ok(Legality::InCheckOnly),
            "strict" => Ok(Legality::Strict),
            _ => Err(LegalityParseError {
                value: s.to_string(),
            }),
        }
    }
}

/// Keep the moves after which `side`'s king is not in check.
///
/// Each candidate is tried on a scratch copy of `position`.
pub fn filter_legal_strict(position: &Position, side: Color, moves: &MoveList) -> MoveList {
    moves
        .iter()
        .copied()
        .filter(|&mv| {
            let safe = !is_in_check(&position.make_move(mv), side);
            trace!(%mv, safe, "screened move");
            safe
        })
        .collect()
}

/// Narrow `moves` to king-saving moves when `side` is currently in check.
///
/// When `side` is not in check the moves come back unchanged, including any
/// that would expose the king.
pub fn filter_legal_if_in_check(position: &Position, side: Color, moves: &MoveList) -> MoveList {
    if is_in_check(position, side) {
        filter_legal_strict(position, side, moves)
    } else {
        *moves
    }
}

/// Apply the filter selected by `legality`.
pub fn filter_legal(
    position: &Position,
    side: Color,
    moves: &MoveList,
    legality: Legality,
) -> MoveList {
    match legality {
        Legality::InCheckOnly => filter_legal_if_in_check(position, side, moves),
        Legality::Strict => filter_legal_strict(position, side, moves),
    }
}

/// Return `true` if any piece of `side` has at least one move surviving the filter.
///
/// `false` while in check means checkmate. Any single move suffices.
pub fn has_any_legal_move(position: &Position, side: Color, legality: Legality) -> bool {
    position.side(side).any(|sq| {
        let moves = generate_moves(position, sq);
        !moves.is_empty() && !filter_legal(position, side, &moves, legality).is_empty()
    })
}
