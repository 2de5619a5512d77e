//! Piece placement text for [`Position`]: the first field of a FEN record.
//!
//! Rows are listed from row 0 (Black's back rank) to row 7, separated by
//! `/`. Digits count consecutive empty squares.

use std::fmt;
use std::str::FromStr;

use crate::error::PlacementError;
use crate::piece::Piece;
use crate::position::Position;
use crate::square::Square;

/// Placement of the standard starting position.
pub const STARTING_PLACEMENT: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR";

impl FromStr for Position {
    type Err = PlacementError;

    fn from_str(placement: &str) -> Result<Position, PlacementError> {
        let rows: Vec<&str> = placement.trim().split('/').collect();
        if rows.len() != 8 {
            return Err(PlacementError::WrongRowCount { found: rows.len() });
        }

        let mut position = Position::empty();

        for (row, row_str) in rows.iter().enumerate() {
            let mut col: usize = 0;

            for c in row_str.chars() {
                if let Some(digit) = c.to_digit(10) {
                    if !(1..=8).contains(&digit) {
                        return Err(PlacementError::InvalidPieceChar { character: c });
                    }
                    col += digit as usize;
                } else {
                    let piece = Piece::from_letter(c)
                        .ok_or(PlacementError::InvalidPieceChar { character: c })?;
                    let sq = Square::new(row as u8, col as u8)
                        .filter(|_| col < 8)
                        .ok_or(PlacementError::BadRowLength { row, length: col + 1 })?;
                    position.put(sq, piece);
                    col += 1;
                }
            }

            if col != 8 {
                return Err(PlacementError::BadRowLength { row, length: col });
            }
        }

        Ok(position)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0u8..8 {
            let mut empty_count = 0u8;

            for col in 0u8..8 {
                match Square::new(row, col).and_then(|sq| self.piece_on(sq)) {
                    Some(piece) => {
                        if empty_count > 0 {
                            write!(f, "{empty_count}")?;
                            empty_count = 0;
                        }
                        write!(f, "{}", piece.letter())?;
                    }
                    None => empty_count += 1,
                }
            }

            if empty_count > 0 {
                write!(f, "{empty_count}")?;
            }

            if row < 7 {
                write!(f, "/")?;
            }
        }
        Ok(())
    }
}
