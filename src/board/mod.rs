//! Board representation and move legality.
//!
//! The board is a plain 8x8 grid of optional pieces. Legality is decided by
//! pure predicates in `rules`; nothing here tracks turns or history.
//!
//! # Example
//! ```
//! use hotseat_chess::board::{is_valid_move, Board, Square};
//!
//! let board = Board::new();
//! let e2 = Square::at(6, 4);
//! let pawn = board.piece_at(e2).unwrap();
//! assert!(is_valid_move(pawn, e2, Square::at(4, 4), &board));
//! assert_eq!(board.legal_destinations(e2).len(), 2);
//! ```

mod builder;
mod error;
mod placement;
mod rules;
mod state;
mod types;

#[cfg(test)]
mod tests;

pub use builder::BoardBuilder;
pub use error::{MoveError, MoveParseError, PlacementError, SquareError};
pub use placement::STARTING_PLACEMENT;
pub use rules::is_valid_move;
pub use state::{initial_board, Board};
pub use types::{Color, Kind, Move, Piece, Square, BOARD_SIZE};
