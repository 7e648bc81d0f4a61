//! Fluent builder for constructing positions.
//!
//! Allows creating positions piece by piece rather than parsing placement strings.
//!
//! # Example
//! ```
//! use hotseat_chess::board::{BoardBuilder, Color, Kind, Square};
//!
//! let board = BoardBuilder::new()
//!     .piece(Square::at(7, 4), Color::White, Kind::King)
//!     .piece(Square::at(0, 4), Color::Black, Kind::King)
//!     .piece(Square::at(6, 0), Color::White, Kind::Pawn)
//!     .build();
//! assert_eq!(board.pieces().count(), 3);
//! ```

use super::{Board, Color, Kind, Piece, Square};

/// A fluent builder for constructing `Board` positions.
#[derive(Clone, Debug)]
pub struct BoardBuilder {
    board: Board,
}

impl Default for BoardBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl BoardBuilder {
    /// Create a new empty board builder.
    #[must_use]
    pub const fn new() -> Self {
        BoardBuilder {
            board: Board::empty(),
        }
    }

    /// Create a builder starting from the standard initial position.
    #[must_use]
    pub fn starting_position() -> Self {
        BoardBuilder {
            board: Board::new(),
        }
    }

    /// Place a piece on the board, replacing any piece already there.
    #[must_use]
    pub fn piece(mut self, square: Square, color: Color, kind: Kind) -> Self {
        self.board.set_piece(square, Piece::new(color, kind));
        self
    }

    /// Remove a piece from a square.
    #[must_use]
    pub fn clear(mut self, square: Square) -> Self {
        self.board.clear_square(square);
        self
    }

    /// Empty an entire row.
    #[must_use]
    pub fn clear_row(mut self, row: usize) -> Self {
        for sq in Square::all().filter(|sq| sq.row() == row) {
            self.board.clear_square(sq);
        }
        self
    }

    /// Build the board.
    #[must_use]
    pub fn build(self) -> Board {
        self.board
    }
}
