//! A move from one square to another.

use std::fmt;

use crate::square::Square;

/// A candidate or committed move.
///
/// Moves carry no flags: every move in this rule set is a plain relocation,
/// possibly onto an enemy piece.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    from: Square,
    to: Square,
}

impl Move {
    /// Filler for unused move-list slots (A8 to A8). Never generated.
    pub(crate) const NULL: Move = Move::new(Square::A8, Square::A8);

    #[inline]
    pub const fn new(from: Square, to: Square) -> Move {
        Move { from, to }
    }

    #[inline]
    pub const fn from(self) -> Square {
        self.from
    }

    #[inline]
    pub const fn to(self) -> Square {
        self.to
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.from, self.to)
    }
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Move({self})")
    }
}
