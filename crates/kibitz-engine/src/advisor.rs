//! Hint advisor: check and mate reporting plus a suggested move.

use std::fmt;

use rand::Rng;
use rand::seq::SliceRandom;

use kibitz_core::{
    Color, Legality, Move, MoveList, Position, Square, has_any_legal_move, is_in_check,
};

/// How a suggestion was chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SuggestionKind {
    /// The first move in the list that lands on an enemy piece.
    Capture,
    /// No capture was available; picked uniformly at random.
    Random,
}

/// A move offered as a hint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Suggestion {
    pub kind: SuggestionKind,
    pub mv: Move,
}

/// Check status of the side to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Normal,
    Check,
    /// In check with no move that saves the king.
    Checkmate,
}

/// What the advisor has to say about a selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advice {
    /// The selecting side is in check and nothing on the board saves the king.
    Checkmate,
    /// The selecting side is in check; `king` stands on the attacked square.
    InCheck { king: Square },
    /// The selected piece cannot move.
    NoLegalMove,
    Suggest(Suggestion),
}

impl fmt::Display for Advice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Advice::Checkmate => write!(f, "DEFEAT"),
            Advice::InCheck { king } => write!(f, "check: king on {king} is attacked"),
            Advice::NoLegalMove => write!(f, "no legal move for this piece"),
            Advice::Suggest(Suggestion { kind: SuggestionKind::Capture, mv }) => {
                write!(f, "hint: {} (capture)", mv.to())
            }
            Advice::Suggest(Suggestion { kind: SuggestionKind::Random, mv }) => {
                write!(f, "hint: {}", mv.to())
            }
        }
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameStatus::Normal => write!(f, "normal"),
            GameStatus::Check => write!(f, "check"),
            GameStatus::Checkmate => write!(f, "checkmate"),
        }
    }
}

/// Pick a move from `moves`: the first capture if there is one, otherwise a random move.
pub fn suggest<R: Rng + ?Sized>(
    position: &Position,
    side: Color,
    moves: &MoveList,
    rng: &mut R,
) -> Option<Suggestion> {
    if let Some(&mv) = moves.iter().find(|mv| position.is_enemy(mv.to(), side)) {
        return Some(Suggestion {
            kind: SuggestionKind::Capture,
            mv,
        });
    }

    moves.as_slice().choose(rng).map(|&mv| Suggestion {
        kind: SuggestionKind::Random,
        mv,
    })
}

/// Evaluate whether `side` is in check, and if so whether it is mated.
pub fn game_status(position: &Position, side: Color, legality: Legality) -> GameStatus {
    if !is_in_check(position, side) {
        GameStatus::Normal
    } else if has_any_legal_move(position, side, legality) {
        GameStatus::Check
    } else {
        GameStatus::Checkmate
    }
}

/// Advise `side` about a selected piece whose filtered moves are `moves`.
///
/// Check takes precedence over any suggestion.
pub fn advise<R: Rng + ?Sized>(
    position: &Position,
    side: Color,
    moves: &MoveList,
    legality: Legality,
    rng: &mut R,
) -> Advice {
    if let Some(king) = position.king_square(side)
        && is_in_check(position, side)
    {
        return if has_any_legal_move(position, side, legality) {
            Advice::InCheck { king }
        } else {
            Advice::Checkmate
        };
    }

    match suggest(position, side, moves, rng) {
        Some(suggestion) => Advice::Suggest(suggestion),
        None => Advice::NoLegalMove,
    }
}
