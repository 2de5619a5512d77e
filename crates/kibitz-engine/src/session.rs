//! Click-driven turn and selection state.

use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{debug, info};

use kibitz_core::{
    Color, Legality, Move, MoveList, Piece, Position, Square, filter_legal, generate_moves,
    is_in_check,
};

use crate::advisor::{Advice, GameStatus, advise, game_status};

/// The selected square and the moves offered from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    pub square: Square,
    pub moves: MoveList,
}

/// Result of a single click.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOutcome {
    /// A piece of the side to move is now selected.
    Selected {
        square: Square,
        moves: MoveList,
        advice: Advice,
    },
    /// The side to move is in check and this piece cannot save the king.
    NoSavingMove { square: Square },
    /// The clicked piece belongs to the side not on move.
    NotYourTurn { turn: Color },
    /// The selection was cleared without moving.
    Deselected,
    /// A move was played; `status` is the check state of the side now to move.
    Moved {
        mv: Move,
        captured: Option<Piece>,
        status: GameStatus,
    },
    /// Empty square or off-board click with nothing selected.
    Ignored,
}

/// One game in progress: the board, whose turn it is, and the current selection.
///
/// The session is the only writer of its [`Position`]; rules functions
/// receive it by shared reference.
pub struct Session {
    position: Position,
    turn: Color,
    selection: Option<Selection>,
    legality: Legality,
    rng: StdRng,
}

impl Session {
    /// Start from the standard layout with White to move.
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    /// Start from the standard layout with reproducible hints.
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    /// Start from an arbitrary board with `turn` to move.
    pub fn from_position(position: Position, turn: Color) -> Self {
        let mut session = Self::new();
        session.load(position, turn);
        session
    }

    fn with_rng(rng: StdRng) -> Self {
        Self {
            position: Position::starting_position(),
            turn: Color::White,
            selection: None,
            legality: Legality::default(),
            rng,
        }
    }

    /// Replace the board and side to move, clearing any selection.
    pub fn load(&mut self, position: Position, turn: Color) {
        self.position = position;
        self.turn = turn;
        self.selection = None;
    }

    /// Return to the starting layout with White to move.
    pub fn reset(&mut self) {
        self.load(Position::starting_position(), Color::White);
    }

    /// Reseed the hint generator.
    pub fn reseed(&mut self, seed: u64) {
        self.rng = StdRng::seed_from_u64(seed);
    }

    #[inline]
    pub fn position(&self) -> &Position {
        &self.position
    }

    #[inline]
    pub fn turn(&self) -> Color {
        self.turn
    }

    #[inline]
    pub fn selection(&self) -> Option<&Selection> {
        self.selection.as_ref()
    }

    #[inline]
    pub fn legality(&self) -> Legality {
        self.legality
    }

    pub fn set_legality(&mut self, legality: Legality) {
        self.legality = legality;
    }

    /// Check status of the side to move.
    pub fn status(&self) -> GameStatus {
        game_status(&self.position, self.turn, self.legality)
    }

    /// Click on a (row, col) pair. Off-board coordinates clear the selection.
    pub fn click_coords(&mut self, row: u8, col: u8) -> ClickOutcome {
        match Square::new(row, col) {
            Some(sq) => self.click(sq),
            None => match self.selection.take() {
                Some(_) => ClickOutcome::Deselected,
                None => ClickOutcome::Ignored,
            },
        }
    }

    /// Handle a click on `sq`.
    pub fn click(&mut self, sq: Square) -> ClickOutcome {
        let outcome = match self.selection.take() {
            Some(selection) => self.click_while_selected(selection, sq),
            None => self.click_while_idle(sq),
        };
        debug!(square = %sq, ?outcome, "click");
        outcome
    }

    fn click_while_selected(&mut self, selection: Selection, sq: Square) -> ClickOutcome {
        if sq == selection.square {
            return ClickOutcome::Deselected;
        }

        let Some(mv) = selection.moves.find_dest(sq) else {
            return ClickOutcome::Deselected;
        };

        let captured = self.position.apply_move(mv);
        self.turn = self.turn.flip();
        let status = self.status();
        info!(%mv, captured = ?captured, turn = self.turn.name(), %status, "move played");

        ClickOutcome::Moved {
            mv,
            captured,
            status,
        }
    }

    fn click_while_idle(&mut self, sq: Square) -> ClickOutcome {
        let Some(piece) = self.position.piece_on(sq) else {
            return ClickOutcome::Ignored;
        };

        if piece.color() != self.turn {
            return ClickOutcome::NotYourTurn { turn: self.turn };
        }

        let candidates = generate_moves(&self.position, sq);
        let moves = filter_legal(&self.position, self.turn, &candidates, self.legality);

        if moves.is_empty() && is_in_check(&self.position, self.turn) {
            return ClickOutcome::NoSavingMove { square: sq };
        }

        let advice = advise(&self.position, self.turn, &moves, self.legality, &mut self.rng);
        self.selection = Some(Selection { square: sq, moves });

        ClickOutcome::Selected {
            square: sq,
            moves,
            advice,
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
