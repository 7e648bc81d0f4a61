//! Piece placement strings.
//!
//! Uses the first field of FEN: eight '/'-separated rows, row 0 first,
//! digits for runs of empty squares and letters for pieces (uppercase White).

use std::str::FromStr;

use super::error::PlacementError;
use super::{Board, Piece, Square, BOARD_SIZE};

/// Placement string of the standard starting position.
pub const STARTING_PLACEMENT: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR";

impl Board {
    /// Parse a board from a placement string.
    ///
    /// Returns an error if the string is malformed.
    pub fn try_from_placement(placement: &str) -> Result<Self, PlacementError> {
        let mut board = Board::empty();
        let rows: Vec<&str> = placement.trim().split('/').collect();

        if rows.len() != BOARD_SIZE {
            return Err(PlacementError::RowCount { found: rows.len() });
        }

        for (row, row_str) in rows.into_iter().enumerate() {
            let mut col = 0;
            for c in row_str.chars() {
                if let '1'..='8' = c {
                    col += c as usize - '0' as usize;
                    continue;
                }
                let piece = Piece::from_fen_char(c).ok_or(PlacementError::InvalidPiece { char: c })?;
                let square = Square::new(row, col).ok_or(PlacementError::RowLength {
                    row,
                    squares: col + 1,
                })?;
                board.set_piece(square, piece);
                col += 1;
            }
            if col != BOARD_SIZE {
                return Err(PlacementError::RowLength { row, squares: col });
            }
        }

        Ok(board)
    }

    /// Parse a board from a placement string.
    ///
    /// # Panics
    /// Panics if the string is invalid. Use `try_from_placement` for fallible parsing.
    #[must_use]
    pub fn from_placement(placement: &str) -> Self {
        Self::try_from_placement(placement).expect("Invalid placement string")
    }

    /// Convert the board to a placement string.
    #[must_use]
    pub fn to_placement(&self) -> String {
        let mut rows: Vec<String> = Vec::with_capacity(BOARD_SIZE);
        for row in 0..BOARD_SIZE {
            let mut out = String::new();
            let mut empty = 0;
            for col in 0..BOARD_SIZE {
                if let Some(piece) = self.piece_at(Square::at(row, col)) {
                    if empty > 0 {
                        out.push_str(&empty.to_string());
                        empty = 0;
                    }
                    out.push(piece.to_fen_char());
                } else {
                    empty += 1;
                }
            }
            if empty > 0 {
                out.push_str(&empty.to_string());
            }
            rows.push(out);
        }
        rows.join("/")
    }
}

impl FromStr for Board {
    type Err = PlacementError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Board::try_from_placement(s)
    }
}
